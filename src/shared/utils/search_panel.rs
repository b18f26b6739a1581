//! Smart search panel state machine
//!
//! Holds the query text, the current results, the open/closed flag and a
//! keyboard cursor. `None` is the "no selection, input has focus" position.
//! Results are always those computed for the current query text: editing the
//! query drops them until the next match lands.

use keyboard_types::Key;

use crate::domain::models::SearchResult;

/// Keys the panel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl From<&Key> for NavKey {
    fn from(key: &Key) -> Self {
        match key {
            Key::ArrowDown => NavKey::ArrowDown,
            Key::ArrowUp => NavKey::ArrowUp,
            Key::Enter => NavKey::Enter,
            Key::Escape => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// What the component should do after a key press
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    None,
    /// Cursor moved; the component should prevent the default caret move
    Moved,
    Selected(SearchResult),
    /// Plain-text search on the current query
    Submit(String),
    /// Panel closed; focus leaves the input
    Dismissed,
}

/// What the dropdown should render
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    Closed,
    Suggestions {
        recent: Vec<String>,
        popular: Vec<String>,
    },
    /// A non-blank query whose match has not completed yet
    Searching { query: String },
    Results(Vec<SearchResult>),
    NoResults { query: String },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPanel {
    query: String,
    results: Vec<SearchResult>,
    /// Query text `results` were computed for
    matched: Option<String>,
    cursor: Option<usize>,
    open: bool,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Cursor as the signed index used by the markup (-1 = none)
    pub fn cursor_index(&self) -> isize {
        self.cursor.map(|i| i as isize).unwrap_or(-1)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while a non-blank query waits for its match
    pub fn is_pending(&self) -> bool {
        !self.query.trim().is_empty() && self.matched.as_deref() != Some(self.query.as_str())
    }

    /// Text input changed; results of the previous text are discarded
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = None;
        self.open = true;
        self.results.clear();
        self.matched = None;
    }

    /// A match for `query` completed. Returns false, leaving the panel
    /// untouched, when the input has moved on since.
    pub fn set_results(&mut self, query: &str, results: Vec<SearchResult>) -> bool {
        if query != self.query {
            return false;
        }
        self.results = results;
        self.matched = Some(query.to_string());
        self.cursor = None;
        true
    }

    /// Input gained focus
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Click landed outside the widget; the query is kept
    pub fn close_outside(&mut self) {
        self.open = false;
        self.cursor = None;
    }

    fn current_results(&self) -> &[SearchResult] {
        if self.is_pending() { &[] } else { &self.results }
    }

    pub fn handle_key(&mut self, key: NavKey) -> PanelAction {
        match key {
            NavKey::ArrowDown => {
                let len = self.current_results().len();
                if len == 0 {
                    return PanelAction::None;
                }
                self.open = true;
                self.cursor = Some(match self.cursor {
                    None => 0,
                    Some(i) => (i + 1).min(len - 1),
                });
                PanelAction::Moved
            }
            NavKey::ArrowUp => {
                self.cursor = match self.cursor {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
                PanelAction::Moved
            }
            NavKey::Enter => match self.cursor {
                Some(index) if self.open => self
                    .select(index)
                    .map(PanelAction::Selected)
                    .unwrap_or(PanelAction::None),
                _ => {
                    // A blank query has nothing to search; the suggestions stay up
                    let query = self.query.trim().to_string();
                    if query.is_empty() {
                        return PanelAction::None;
                    }
                    self.open = false;
                    PanelAction::Submit(query)
                }
            },
            NavKey::Escape => {
                self.open = false;
                self.cursor = None;
                PanelAction::Dismissed
            }
            NavKey::Other => PanelAction::None,
        }
    }

    /// Pick a result (click or Enter): query becomes its title, panel closes.
    /// The new query needs its own match before results show again.
    pub fn select(&mut self, index: usize) -> Option<SearchResult> {
        let result = self.current_results().get(index)?.clone();
        self.query = result.title.clone();
        self.results.clear();
        self.matched = None;
        self.open = false;
        self.cursor = None;
        Some(result)
    }

    /// Pick a suggestion chip (recent / popular): it becomes the query
    pub fn use_suggestion(&mut self, suggestion: &str) {
        self.set_query(suggestion.to_string());
    }

    pub fn view(&self, recent: &[String], popular: &[String]) -> PanelView {
        if !self.open {
            return PanelView::Closed;
        }
        if self.query.trim().is_empty() {
            if recent.is_empty() && popular.is_empty() {
                return PanelView::Closed;
            }
            return PanelView::Suggestions {
                recent: recent.to_vec(),
                popular: popular.to_vec(),
            };
        }
        if self.is_pending() {
            return PanelView::Searching {
                query: self.query.clone(),
            };
        }
        if self.results.is_empty() {
            return PanelView::NoResults {
                query: self.query.clone(),
            };
        }
        PanelView::Results(self.results.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SearchResultType;

    fn result(id: &str, title: &str) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            result_type: SearchResultType::Service,
            title: title.to_string(),
            subtitle: None,
            rating: None,
            price: None,
            distance: None,
            availability: None,
            tags: vec![],
        }
    }

    fn panel_with_results(n: usize) -> SearchPanel {
        let mut panel = SearchPanel::new();
        panel.set_query("plo");
        panel.set_results("plo", (0..n).map(|i| result(&i.to_string(), &format!("Result {}", i))).collect());
        panel
    }

    #[test]
    fn test_arrow_up_at_start_stays_unselected() {
        let mut panel = panel_with_results(3);
        panel.handle_key(NavKey::ArrowUp);
        assert_eq!(panel.cursor(), None);
        assert_eq!(panel.cursor_index(), -1);
    }

    #[test]
    fn test_arrow_down_stops_at_last_result() {
        let mut panel = panel_with_results(2);
        panel.handle_key(NavKey::ArrowDown);
        panel.handle_key(NavKey::ArrowDown);
        panel.handle_key(NavKey::ArrowDown);
        assert_eq!(panel.cursor(), Some(1));
    }

    #[test]
    fn test_arrow_up_from_first_returns_to_input() {
        let mut panel = panel_with_results(2);
        panel.handle_key(NavKey::ArrowDown);
        panel.handle_key(NavKey::ArrowUp);
        assert_eq!(panel.cursor(), None);
    }

    #[test]
    fn test_arrow_down_with_no_results_is_noop() {
        let mut panel = panel_with_results(0);
        assert_eq!(panel.handle_key(NavKey::ArrowDown), PanelAction::None);
        assert_eq!(panel.cursor(), None);
    }

    #[test]
    fn test_enter_selects_active_result() {
        let mut panel = panel_with_results(3);
        panel.handle_key(NavKey::ArrowDown);
        panel.handle_key(NavKey::ArrowDown);

        let action = panel.handle_key(NavKey::Enter);
        assert_eq!(action, PanelAction::Selected(result("1", "Result 1")));
        assert_eq!(panel.query(), "Result 1");
        assert!(!panel.is_open());
        assert_eq!(panel.cursor(), None);
    }

    #[test]
    fn test_enter_without_cursor_submits_query() {
        let mut panel = panel_with_results(3);
        assert_eq!(panel.handle_key(NavKey::Enter), PanelAction::Submit("plo".to_string()));
    }

    #[test]
    fn test_escape_closes_and_clears_cursor() {
        let mut panel = panel_with_results(3);
        panel.handle_key(NavKey::ArrowDown);
        assert_eq!(panel.handle_key(NavKey::Escape), PanelAction::Dismissed);
        assert!(!panel.is_open());
        assert_eq!(panel.cursor(), None);
        assert_eq!(panel.query(), "plo");
    }

    #[test]
    fn test_click_outside_keeps_query() {
        let mut panel = panel_with_results(3);
        panel.close_outside();
        assert!(!panel.is_open());
        assert_eq!(panel.query(), "plo");
        assert_eq!(panel.view(&[], &[]), PanelView::Closed);
    }

    #[test]
    fn test_mouse_select_replaces_query() {
        let mut panel = panel_with_results(3);
        let picked = panel.select(2).unwrap();
        assert_eq!(picked.id, "2");
        assert_eq!(panel.query(), "Result 2");
        assert!(panel.select(10).is_none());
    }

    #[test]
    fn test_empty_query_shows_suggestions_recent_first() {
        let mut panel = SearchPanel::new();
        panel.set_query("");
        let view = panel.view(&["Plombier".to_string()], &["Ménage".to_string()]);
        assert_eq!(
            view,
            PanelView::Suggestions {
                recent: vec!["Plombier".to_string()],
                popular: vec!["Ménage".to_string()],
            }
        );
        assert_eq!(panel.view(&[], &[]), PanelView::Closed);
    }

    #[test]
    fn test_non_empty_query_without_matches_is_explicit() {
        let mut panel = SearchPanel::new();
        panel.set_query("zzz");
        panel.set_results("zzz", vec![]);
        assert_eq!(
            panel.view(&[], &[]),
            PanelView::NoResults { query: "zzz".to_string() }
        );
    }

    #[test]
    fn test_new_results_reset_cursor() {
        let mut panel = panel_with_results(3);
        panel.handle_key(NavKey::ArrowDown);
        panel.set_results("plo", vec![result("x", "X")]);
        assert_eq!(panel.cursor(), None);
    }

    #[test]
    fn test_nav_key_from_keyboard_key() {
        assert_eq!(NavKey::from(&Key::ArrowDown), NavKey::ArrowDown);
        assert_eq!(NavKey::from(&Key::Escape), NavKey::Escape);
        assert_eq!(NavKey::from(&Key::Character("a".to_string())), NavKey::Other);
    }

    #[test]
    fn test_fresh_query_is_searching_until_matched() {
        let mut panel = SearchPanel::new();
        panel.set_query("p");
        assert!(panel.is_pending());
        assert_eq!(panel.view(&[], &[]), PanelView::Searching { query: "p".to_string() });

        panel.set_results("p", vec![]);
        assert!(!panel.is_pending());
        assert_eq!(panel.view(&[], &[]), PanelView::NoResults { query: "p".to_string() });
    }

    #[test]
    fn test_editing_query_drops_previous_results() {
        let mut panel = panel_with_results(3);
        panel.set_query("jardin");

        assert!(panel.results().is_empty());
        assert_eq!(panel.handle_key(NavKey::ArrowDown), PanelAction::None);
        assert_eq!(panel.handle_key(NavKey::Enter), PanelAction::Submit("jardin".to_string()));
        assert!(panel.select(0).is_none());
    }

    #[test]
    fn test_results_for_older_query_are_ignored() {
        let mut panel = SearchPanel::new();
        panel.set_query("plo");
        panel.set_query("jardin");

        assert!(!panel.set_results("plo", vec![result("1", "Plombier")]));
        assert_eq!(panel.view(&[], &[]), PanelView::Searching { query: "jardin".to_string() });
    }

    #[test]
    fn test_selection_marks_new_query_pending() {
        let mut panel = panel_with_results(2);
        panel.select(1);
        panel.open();
        assert_eq!(panel.view(&[], &[]), PanelView::Searching { query: "Result 1".to_string() });
    }

    #[test]
    fn test_enter_on_blank_query_keeps_suggestions_open() {
        let mut panel = SearchPanel::new();
        panel.set_query("   ");
        assert_eq!(panel.handle_key(NavKey::Enter), PanelAction::None);
        assert!(panel.is_open());
    }
}
