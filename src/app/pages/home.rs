use dioxus::prelude::*;

use crate::app::components::{PersonalizedRecommendations, Reveal, SmartSearch};
use crate::app::pages::Route;
use crate::domain::models::UserRole;
use crate::shared::hooks::use_session;

/// Preference tags used for ranking; anonymous visitors see everything
fn preferences_for(role: Option<UserRole>) -> Vec<String> {
    match role {
        Some(UserRole::Client) => vec!["plomberie".to_string(), "ménage".to_string()],
        Some(UserRole::Professional) => vec!["tendance".to_string(), "entretien".to_string()],
        None => Vec::new(),
    }
}

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();
    let session = use_session();
    let preferences = preferences_for(session.role());

    rsx! {
        div { class: "p-home",
            section { class: "p-home__hero",
                div { class: "p-home__pattern", aria_hidden: "true" }
                Reveal {
                    h1 { class: "p-home__title", "Des artisans de confiance, près de chez vous" }
                }
                Reveal { index: 1,
                    p { class: "p-home__subtitle",
                        "Plombiers, électriciens, aides ménagères : réservez en quelques clics partout au Maroc."
                    }
                }
                Reveal { index: 2,
                    SmartSearch {
                        on_select: move |result: crate::domain::models::SearchResult| {
                            navigator.push(Route::SearchPage { q: result.title });
                        },
                        on_search: move |query: String| {
                            navigator.push(Route::SearchPage { q: query });
                        },
                    }
                }
            }

            PersonalizedRecommendations { preferences }
        }
    }
}
