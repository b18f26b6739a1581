use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingSkeleton, RecommendationCard, SmartSearch};
use crate::app::pages::Route;
use crate::domain::models::{RecommendationItem, RecommendationType, SearchFilters, SearchResult};
use crate::domain::services::search;
use crate::shared::hooks::{use_app_config, use_data_sources};

/// Full-page variant of the search results for `q`
#[component]
pub fn SearchPage(q: String) -> Element {
    let navigator = use_navigator();
    let config = use_app_config();
    let sources = use_data_sources();

    let catalog = use_resource(move || {
        let source = sources.search.clone();
        async move { source.candidates().await }
    });

    let body = match &*catalog.read() {
        None => rsx! { LoadingSkeleton {} },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(candidates)) => {
            // Generous page size: the dropdown bound does not apply here
            let results = search(candidates, &q, &SearchFilters::default(), config.search.max_results * 4);
            if results.is_empty() {
                rsx! {
                    EmptyState {
                        icon: "🔍".to_string(),
                        title: format!("Aucun résultat pour « {} »", q),
                        description: "Vérifiez l'orthographe ou essayez un service plus général.".to_string(),
                    }
                }
            } else {
                rsx! {
                    p { class: "p-search__count", "{results.len()} résultat(s)" }
                    div { class: "c-recommendations__grid",
                        for result in results {
                            RecommendationCard { key: "{result.id}", item: as_card(result) }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "p-search",
            SmartSearch {
                on_select: move |result: SearchResult| {
                    navigator.push(Route::SearchPage { q: result.title });
                },
                on_search: move |query: String| {
                    navigator.push(Route::SearchPage { q: query });
                },
            }
            h1 { class: "p-search__title", "Résultats pour « {q} »" }
            {body}
        }
    }
}

/// Render a search hit with the recommendation card layout
fn as_card(result: SearchResult) -> RecommendationItem {
    let reason = result
        .subtitle
        .clone()
        .unwrap_or_else(|| result.result_type.display_name().to_string());
    RecommendationItem {
        id: result.id,
        item_type: RecommendationType::Service,
        title: result.title,
        subtitle: None,
        rating: result.rating,
        price: result.price,
        original_price: None,
        discount: None,
        distance: result.distance,
        availability: result.availability,
        reason,
        tags: result.tags,
        urgency: None,
        popularity: None,
        match_score: None,
    }
}
