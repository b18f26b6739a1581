use dioxus::prelude::*;

use crate::domain::models::SearchFilters;

const CITIES: &[&str] = &["Casablanca", "Rabat", "Marrakech", "Tanger", "Fès", "Agadir"];
const CATEGORIES: &[(&str, &str)] = &[
    ("plomberie", "Plomberie"),
    ("électricité", "Électricité"),
    ("ménage", "Ménage"),
    ("jardinage", "Jardinage"),
    ("peinture", "Peinture"),
    ("climatisation", "Climatisation"),
];
const RATINGS: &[(&str, &str)] = &[("4.5", "4.5+ ⭐"), ("4", "4+ ⭐"), ("3", "3+ ⭐")];

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Location / category / rating selectors for the smart search
#[component]
pub fn FilterPanel(filters: SearchFilters, on_change: EventHandler<SearchFilters>) -> Element {
    let location = filters.location.clone().unwrap_or_default();
    let category = filters.category.clone().unwrap_or_default();
    let rating = filters
        .min_rating
        .map(|r| r.to_string())
        .unwrap_or_default();

    let on_location = {
        let filters = filters.clone();
        move |evt: FormEvent| {
            on_change.call(SearchFilters {
                location: non_empty(evt.value()),
                ..filters.clone()
            });
        }
    };
    let on_category = {
        let filters = filters.clone();
        move |evt: FormEvent| {
            on_change.call(SearchFilters {
                category: non_empty(evt.value()),
                ..filters.clone()
            });
        }
    };
    let on_rating = {
        let filters = filters.clone();
        move |evt: FormEvent| {
            on_change.call(SearchFilters {
                min_rating: evt.value().parse::<f32>().ok(),
                ..filters.clone()
            });
        }
    };

    rsx! {
        div { class: "c-filter-panel",
            label { class: "c-filter-panel__field",
                span { "Ville" }
                select { value: "{location}", onchange: on_location,
                    option { value: "", "Toutes les villes" }
                    for city in CITIES {
                        option { key: "{city}", value: "{city}", "{city}" }
                    }
                }
            }
            label { class: "c-filter-panel__field",
                span { "Catégorie" }
                select { value: "{category}", onchange: on_category,
                    option { value: "", "Toutes les catégories" }
                    for (value, label) in CATEGORIES {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            label { class: "c-filter-panel__field",
                span { "Note minimale" }
                select { value: "{rating}", onchange: on_rating,
                    option { value: "", "Toutes les notes" }
                    for (value, label) in RATINGS {
                        option { key: "{value}", value: "{value}", "{label}" }
                    }
                }
            }
            if !filters.is_empty() {
                button {
                    class: "c-filter-panel__reset",
                    r#type: "button",
                    onclick: move |_| on_change.call(SearchFilters::default()),
                    "Réinitialiser"
                }
            }
        }
    }
}
