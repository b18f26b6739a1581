//! Smart search widget
//!
//! Debounced matching, suggestion lists for an empty query, keyboard
//! navigation and an explicit "no results" state.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::{FilterPanel, Icon};
use crate::domain::models::SearchResult;
use crate::domain::services::mock_data;
use crate::shared::hooks::{use_app_config, use_data_sources, use_smart_search, SmartSearchState};
use crate::shared::icons::IconName;
use crate::shared::utils::{NavKey, PanelAction, PanelView};

#[component]
pub fn SmartSearch(
    #[props(default = "Quel service recherchez-vous ?".to_string())] placeholder: String,
    /// Overrides the persisted recent searches
    #[props(default)]
    recent_searches: Option<Vec<String>>,
    #[props(default = mock_data::popular_searches())] popular_searches: Vec<String>,
    #[props(default = true)] show_filters: bool,
    #[props(default)] on_select: Option<EventHandler<SearchResult>>,
    #[props(default)] on_search: Option<EventHandler<String>>,
) -> Element {
    let config = use_app_config();
    let sources = use_data_sources();
    let mut search = use_smart_search(sources.search.clone(), config.search.clone());
    let mut input_ref = use_signal(|| None::<Rc<MountedData>>);
    let mut show_filter_panel = use_signal(|| false);

    let recent = recent_searches
        .clone()
        .unwrap_or_else(|| search.recent.read().entries().to_vec());
    let view = search.view(&recent, &popular_searches);
    let is_open = !matches!(view, PanelView::Closed);
    let cursor = search.panel.read().cursor_index();
    let query = search.panel.read().query().to_string();
    let active_filters = search.filters.read().active_count();

    let handle_keydown = move |evt: KeyboardEvent| {
        let key = NavKey::from(&evt.key());
        match search.on_key(key) {
            PanelAction::Moved => evt.prevent_default(),
            PanelAction::Selected(result) => {
                evt.prevent_default();
                if let Some(handler) = on_select {
                    handler.call(result);
                }
            }
            PanelAction::Submit(query) => {
                evt.prevent_default();
                if let Some(handler) = on_search {
                    handler.call(query);
                }
            }
            PanelAction::Dismissed => {
                if let Some(mounted) = input_ref() {
                    spawn(async move {
                        let _ = mounted.set_focus(false).await;
                    });
                }
            }
            PanelAction::None => {}
        }
    };

    rsx! {
        div { class: "c-smart-search",
            // Backdrop catches clicks outside the widget
            if is_open {
                div {
                    class: "c-smart-search__backdrop",
                    onclick: move |_| search.close_outside(),
                }
            }

            div { class: "c-smart-search__bar",
                Icon { name: IconName::Search, class: "c-smart-search__icon" }
                input {
                    r#type: "text",
                    class: "c-smart-search__input",
                    placeholder: "{placeholder}",
                    value: "{query}",
                    role: "combobox",
                    aria_expanded: "{is_open}",
                    aria_autocomplete: "list",
                    onmounted: move |evt| input_ref.set(Some(evt.data())),
                    onfocus: move |_| search.open(),
                    oninput: move |evt| search.on_input(evt.value()),
                    onkeydown: handle_keydown,
                }
                if search.is_matching() {
                    span { class: "c-smart-search__spinner", aria_hidden: "true" }
                }
                if show_filters {
                    button {
                        class: "c-smart-search__filter-toggle",
                        r#type: "button",
                        onclick: move |_| show_filter_panel.toggle(),
                        "Filtres"
                        if active_filters > 0 {
                            span { class: "c-smart-search__filter-count", "{active_filters}" }
                        }
                    }
                }
            }

            if show_filters && show_filter_panel() {
                FilterPanel {
                    filters: search.filters.read().clone(),
                    on_change: move |filters| search.set_filters(filters),
                }
            }

            {match view {
                PanelView::Closed => rsx! {},
                PanelView::Suggestions { recent, popular } => rsx! {
                    SuggestionsPanel { recent, popular, search }
                },
                PanelView::Results(results) => rsx! {
                    ul { class: "c-smart-search__results", role: "listbox",
                        for (index, result) in results.into_iter().enumerate() {
                            ResultRow {
                                key: "{result.id}",
                                result: result.clone(),
                                active: cursor == index as isize,
                                onpick: move |_| {
                                    if let Some(picked) = search.select(index) {
                                        if let Some(handler) = on_select {
                                            handler.call(picked);
                                        }
                                    }
                                },
                            }
                        }
                    }
                },
                PanelView::Searching { query } => rsx! {
                    div { class: "c-smart-search__empty", role: "status", aria_busy: "true",
                        p { class: "c-smart-search__empty-hint", "Recherche de « {query} »…" }
                    }
                },
                PanelView::NoResults { query } => rsx! {
                    div { class: "c-smart-search__empty", role: "status",
                        p { class: "c-smart-search__empty-title", "Aucun résultat pour « {query} »" }
                        p { class: "c-smart-search__empty-hint",
                            "Essayez un autre mot-clé ou retirez des filtres."
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn SuggestionsPanel(recent: Vec<String>, popular: Vec<String>, search: SmartSearchState) -> Element {
    let mut search = search;

    rsx! {
        div { class: "c-smart-search__suggestions",
            if !recent.is_empty() {
                div { class: "c-smart-search__group",
                    div { class: "c-smart-search__group-header",
                        h4 { "Recherches récentes" }
                        button {
                            class: "c-smart-search__clear",
                            r#type: "button",
                            onclick: move |_| search.clear_recent(),
                            "Effacer"
                        }
                    }
                    for item in recent {
                        button {
                            key: "recent-{item}",
                            class: "c-chip c-chip--recent",
                            r#type: "button",
                            onclick: {
                                let item = item.clone();
                                move |_| search.use_suggestion(item.clone())
                            },
                            Icon { name: IconName::Clock }
                            "{item}"
                        }
                    }
                }
            }
            if !popular.is_empty() {
                div { class: "c-smart-search__group",
                    h4 { "Recherches populaires" }
                    for item in popular {
                        button {
                            key: "popular-{item}",
                            class: "c-chip",
                            r#type: "button",
                            onclick: {
                                let item = item.clone();
                                move |_| search.use_suggestion(item.clone())
                            },
                            Icon { name: IconName::TrendingUp }
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ResultRow(result: SearchResult, active: bool, onpick: EventHandler<()>) -> Element {
    let active_class = if active { "c-search-result--active" } else { "" };
    let icon = result
        .tags
        .first()
        .map(|tag| IconName::for_tag(tag))
        .unwrap_or(IconName::FALLBACK);

    rsx! {
        li {
            class: "c-search-result {active_class}",
            role: "option",
            aria_selected: "{active}",
            onclick: move |_| onpick.call(()),
            Icon { name: icon, class: "c-search-result__icon" }
            div { class: "c-search-result__body",
                div { class: "c-search-result__title",
                    "{result.title}"
                    span { class: "c-search-result__type", "{result.result_type.display_name()}" }
                }
                if let Some(subtitle) = &result.subtitle {
                    p { class: "c-search-result__subtitle", "{subtitle}" }
                }
            }
            div { class: "c-search-result__meta",
                if let Some(rating) = result.rating {
                    span { class: "c-search-result__rating", "⭐ {rating:.1}" }
                }
                if let Some(price) = result.price {
                    span { class: "c-search-result__price", "dès {price} MAD" }
                }
                if let Some(distance) = result.distance {
                    span { class: "c-search-result__distance", "{distance:.1} km" }
                }
                if let Some(availability) = &result.availability {
                    span { class: "c-search-result__availability", "{availability}" }
                }
            }
        }
    }
}
