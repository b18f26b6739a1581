use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::SearchSettings;
use crate::domain::models::{SearchFilters, SearchQuery, SearchResult};
use crate::domain::services::{search, SearchSource};
use crate::shared::utils::timer;
use crate::shared::utils::{Debouncer, NavKey, PanelAction, PanelView, RecentSearches, SearchPanel, Ticket};

/// Match `query` into the panel. A catalog still loading (`None`) leaves the
/// panel pending; the match is replayed once the catalog lands.
fn apply_match(
    panel: &mut SearchPanel,
    catalog: Option<&[SearchResult]>,
    query: &str,
    filters: &SearchFilters,
    limit: usize,
) -> bool {
    let Some(catalog) = catalog else {
        return false;
    };
    let results = search(catalog, query, filters, limit);
    panel.set_results(query, results)
}

/// Smart search state: panel, debounce and candidate cache
#[derive(Clone, Copy, PartialEq)]
pub struct SmartSearchState {
    pub panel: Signal<SearchPanel>,
    pub filters: Signal<SearchFilters>,
    pub recent: Signal<RecentSearches>,
    catalog: Signal<Option<Vec<SearchResult>>>,
    debouncer: Signal<Debouncer<SearchQuery>>,
    pending_task: Signal<Option<Task>>,
    max_results: usize,
}

impl SmartSearchState {
    /// Text input changed: schedule a debounced match
    pub fn on_input(&mut self, value: String) {
        self.panel.write().set_query(value.clone());
        self.cancel_pending();

        if value.trim().is_empty() {
            self.debouncer.write().cancel();
            return;
        }

        let query = SearchQuery::new(value).with_filters(self.filters.peek().clone());
        let ticket = self.debouncer.write().push(query, timer::now_ms());

        let mut state = *self;
        let task = spawn(async move {
            state.run_when_due(ticket).await;
        });
        self.pending_task.set(Some(task));
    }

    /// True while the current query waits for debounce or the catalog
    pub fn is_matching(&self) -> bool {
        self.panel.read().is_pending()
    }

    async fn run_when_due(&mut self, ticket: Ticket) {
        loop {
            let Some(deadline) = self.debouncer.peek().deadline_for(ticket) else {
                return;
            };
            let now = timer::now_ms();
            if now >= deadline {
                break;
            }
            timer::sleep_ms(deadline - now).await;
        }

        let fired = self.debouncer.write().fire(ticket, timer::now_ms());
        if let Some(query) = fired {
            let catalog = self.catalog.peek();
            apply_match(
                &mut self.panel.write(),
                catalog.as_deref(),
                &query.query,
                &query.filters,
                self.max_results,
            );
        }
    }

    /// Match the current query now, skipping the debounce
    fn match_current(&mut self) {
        let query = self.panel.peek().query().to_string();
        if query.trim().is_empty() {
            return;
        }
        let filters = self.filters.peek().clone();
        let catalog = self.catalog.peek();
        apply_match(
            &mut self.panel.write(),
            catalog.as_deref(),
            &query,
            &filters,
            self.max_results,
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending_task.take() {
            task.cancel();
        }
    }

    /// Keyboard handling; records the query in recent searches on select/submit
    pub fn on_key(&mut self, key: NavKey) -> PanelAction {
        let action = self.panel.write().handle_key(key);
        match &action {
            PanelAction::Selected(result) => {
                self.remember(&result.title);
                self.match_current();
            }
            PanelAction::Submit(query) => self.remember(query),
            _ => {}
        }
        action
    }

    /// Mouse selection of the `index`-th result
    pub fn select(&mut self, index: usize) -> Option<SearchResult> {
        let picked = self.panel.write().select(index);
        if let Some(result) = &picked {
            self.remember(&result.title);
            self.match_current();
        }
        picked
    }

    pub fn use_suggestion(&mut self, suggestion: String) {
        self.on_input(suggestion);
    }

    pub fn open(&mut self) {
        self.panel.write().open();
    }

    pub fn close_outside(&mut self) {
        self.panel.write().close_outside();
    }

    /// Filters changed: re-run the match for the current query
    pub fn set_filters(&mut self, filters: SearchFilters) {
        self.filters.set(filters);
        let query = self.panel.peek().query().to_string();
        if !query.trim().is_empty() {
            self.on_input(query);
        }
    }

    pub fn clear_recent(&mut self) {
        self.recent.write().clear();
        self.recent.peek().save();
    }

    fn remember(&mut self, query: &str) {
        self.recent.write().record(query);
        self.recent.peek().save();
    }

    pub fn view(&self, recent: &[String], popular: &[String]) -> PanelView {
        self.panel.read().view(recent, popular)
    }
}

/// Hook wiring a search source to the debounced panel
pub fn use_smart_search(source: Rc<dyn SearchSource>, settings: SearchSettings) -> SmartSearchState {
    let panel = use_signal(SearchPanel::new);
    let filters = use_signal(SearchFilters::default);
    let recent = use_signal(|| RecentSearches::load(settings.recent_capacity));
    let catalog = use_signal(|| None::<Vec<SearchResult>>);
    let debouncer = use_signal(|| Debouncer::new(settings.debounce_ms));
    let pending_task = use_signal(|| None::<Task>);

    let state = SmartSearchState {
        panel,
        filters,
        recent,
        catalog,
        debouncer,
        pending_task,
        max_results: settings.max_results,
    };

    // Load candidates once on mount; a failed load matches against nothing
    use_hook(move || {
        let mut state = state;
        spawn(async move {
            let candidates = match source.candidates().await {
                Ok(candidates) => {
                    tracing::debug!(source = source.name(), count = candidates.len(), "Search catalog loaded");
                    candidates
                }
                Err(e) => {
                    tracing::error!(source = source.name(), "Failed to load search catalog: {}", e);
                    Vec::new()
                }
            };
            state.catalog.set(Some(candidates));
            // A debounce that elapsed during the load left its query pending
            if state.debouncer.peek().is_pending() {
                return;
            }
            state.match_current();
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::mock_data;

    #[test]
    fn test_match_waits_for_catalog() {
        let mut panel = SearchPanel::new();
        panel.set_query("plomb");

        let applied = apply_match(&mut panel, None, "plomb", &SearchFilters::default(), 8);
        assert!(!applied);
        assert!(panel.is_pending());
        assert_eq!(
            panel.view(&[], &[]),
            PanelView::Searching { query: "plomb".to_string() }
        );
    }

    #[test]
    fn test_late_catalog_replays_pending_query() {
        let mut panel = SearchPanel::new();
        panel.set_query("plomb");
        apply_match(&mut panel, None, "plomb", &SearchFilters::default(), 8);

        let catalog = mock_data::search_catalog();
        assert!(apply_match(&mut panel, Some(&catalog), "plomb", &SearchFilters::default(), 8));
        match panel.view(&[], &[]) {
            PanelView::Results(results) => assert!(!results.is_empty()),
            other => panic!("expected results, got {:?}", other),
        }
    }

    #[test]
    fn test_match_for_stale_text_is_dropped() {
        let mut panel = SearchPanel::new();
        panel.set_query("plomb");
        panel.set_query("jardin");

        let catalog = mock_data::search_catalog();
        assert!(!apply_match(&mut panel, Some(&catalog), "plomb", &SearchFilters::default(), 8));
        assert!(panel.is_pending());
    }
}
