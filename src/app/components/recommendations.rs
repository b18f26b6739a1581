//! Personalized recommendations widget
//!
//! Skeleton while the ranked slice loads, then staggered cards.

use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, EmptyState, ErrorMessage, Icon, LoadingSkeleton, Reveal};
use crate::domain::models::{RecommendationItem, RecommendationType};
use crate::shared::hooks::{use_app_config, use_data_sources, use_recommendations, use_toasts, LoadParams};
use crate::shared::icons::IconName;

fn format_last_updated(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M:%S").to_string()
}

#[component]
pub fn PersonalizedRecommendations(
    #[props(default = "Recommandé pour vous".to_string())] title: String,
    #[props(default)] preferences: Vec<String>,
    #[props(default)] max_items: Option<usize>,
) -> Element {
    let config = use_app_config();
    let sources = use_data_sources();
    let mut toasts = use_toasts();
    let max_items = max_items.unwrap_or(config.recommendations.max_items);
    let mut state = use_recommendations(sources.recommendations.clone(), preferences.clone(), max_items);

    // Props may change after mount
    use_effect(use_reactive!(|preferences, max_items| {
        state.set_params(LoadParams::new(preferences, max_items));
    }));

    // Surface load failures once
    use_effect(move || {
        if let Some(error) = state.error.read().as_ref() {
            toasts.api_error(error);
        }
    });

    let is_loading = *state.is_loading.read();
    let items = state.items.read().clone();
    let last_updated = state.last_updated.read().as_ref().map(format_last_updated);

    rsx! {
        section { class: "c-recommendations",
            header { class: "c-recommendations__header",
                div {
                    h2 { class: "c-recommendations__title", "{title}" }
                    if let Some(time) = last_updated {
                        p { class: "c-recommendations__updated", "Mis à jour à {time}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    busy: is_loading,
                    aria_label: "Actualiser les recommandations".to_string(),
                    onclick: move |_| state.refresh(),
                    Icon { name: IconName::Refresh }
                    " Actualiser"
                }
            }

            if is_loading {
                LoadingSkeleton { count: max_items.min(3) }
            } else if let Some(error) = state.error.read().clone() {
                ErrorMessage {
                    message: error.user_message(),
                    on_retry: move |_| state.refresh(),
                }
            } else if items.is_empty() {
                EmptyState {
                    icon: "🧭".to_string(),
                    title: "Aucune recommandation".to_string(),
                    description: "Effectuez quelques recherches pour des suggestions personnalisées.".to_string(),
                }
            } else {
                div { class: "c-recommendations__grid",
                    for (index, item) in items.into_iter().enumerate() {
                        Reveal { key: "{item.id}", index,
                            RecommendationCard { item: item.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RecommendationCard(item: RecommendationItem) -> Element {
    let type_class = match item.item_type {
        RecommendationType::Service => "c-rec-card--service",
        RecommendationType::Professional => "c-rec-card--professional",
        RecommendationType::Deal => "c-rec-card--deal",
        RecommendationType::Trending => "c-rec-card--trending",
    };
    let icon = item
        .tags
        .first()
        .map(|tag| IconName::for_tag(tag))
        .unwrap_or(IconName::FALLBACK);

    rsx! {
        article { class: "c-rec-card {type_class}",
            div { class: "c-rec-card__top",
                Icon { name: icon, class: "c-rec-card__icon" }
                span { class: "c-rec-card__badge", "{item.item_type.badge()}" }
                if let Some(urgency) = item.urgency {
                    span { class: "c-rec-card__urgency c-rec-card__urgency--{urgency.rank()}",
                        "{urgency.label()}"
                    }
                }
                if let Some(discount) = item.discount {
                    span { class: "c-rec-card__discount", "-{discount}%" }
                }
            }
            h3 { class: "c-rec-card__title", "{item.title}" }
            if let Some(subtitle) = &item.subtitle {
                p { class: "c-rec-card__subtitle", "{subtitle}" }
            }
            p { class: "c-rec-card__reason",
                Icon { name: IconName::Sparkles }
                " {item.reason}"
            }
            div { class: "c-rec-card__meta",
                if let Some(rating) = item.rating {
                    span { "⭐ {rating:.1}" }
                }
                if let Some(distance) = item.distance {
                    span { Icon { name: IconName::MapPin } " {distance:.1} km" }
                }
                if let Some(availability) = &item.availability {
                    span { Icon { name: IconName::Clock } " {availability}" }
                }
            }
            if let Some(price) = item.price {
                div { class: "c-rec-card__price",
                    span { class: "c-rec-card__price-current", "{price} MAD" }
                    if let Some(original) = item.original_price {
                        span { class: "c-rec-card__price-original", "{original} MAD" }
                    }
                }
            }
        }
    }
}
