use std::rc::Rc;

use chrono::{DateTime, Utc};
use dioxus::core::Task;
use dioxus::prelude::*;

use crate::domain::models::RecommendationItem;
use crate::domain::services::{load_recommendations, RecommendationSource};
use crate::shared::errors::ApiError;

/// Inputs of a ranking pass; a change in either triggers a reload
#[derive(Debug, Clone, PartialEq)]
pub struct LoadParams {
    pub preferences: Vec<String>,
    pub max_items: usize,
}

impl LoadParams {
    pub fn new(preferences: Vec<String>, max_items: usize) -> Self {
        Self {
            preferences,
            max_items,
        }
    }
}

/// Recommendation widget state
#[derive(Clone, Copy, PartialEq)]
pub struct RecommendationsState {
    pub items: Signal<Vec<RecommendationItem>>,
    /// True until the ranked slice is ready; items are left untouched meanwhile
    pub is_loading: Signal<bool>,
    pub last_updated: Signal<Option<DateTime<Utc>>>,
    pub error: Signal<Option<ApiError>>,
    source: Signal<Rc<dyn RecommendationSource>>,
    params: Signal<LoadParams>,
    current_task: Signal<Option<Task>>,
}

impl RecommendationsState {
    /// Recompute the ranking. With a static pool the order may not change;
    /// only `last_updated` is guaranteed to move.
    pub fn refresh(&mut self) {
        if let Some(task) = self.current_task.take() {
            task.cancel();
        }

        self.is_loading.set(true);
        self.error.set(None);

        let mut state = *self;
        let task = spawn(async move {
            let source = state.source.peek().clone();
            let params = state.params.peek().clone();

            match load_recommendations(source.as_ref(), &params.preferences, params.max_items).await {
                Ok(ranked) => {
                    state.items.set(ranked);
                    state.last_updated.set(Some(Utc::now()));
                }
                Err(e) => {
                    state.error.set(Some(e));
                }
            }
            state.is_loading.set(false);
            state.current_task.set(None);
        });
        self.current_task.set(Some(task));
    }

    /// Reload when the preferences or the item budget changed
    pub fn set_params(&mut self, params: LoadParams) {
        if *self.params.peek() != params {
            self.params.set(params);
            self.refresh();
        }
    }
}

/// Hook that loads and ranks recommendations on mount
pub fn use_recommendations(
    source: Rc<dyn RecommendationSource>,
    preferences: Vec<String>,
    max_items: usize,
) -> RecommendationsState {
    let items = use_signal(Vec::<RecommendationItem>::new);
    let is_loading = use_signal(|| true);
    let last_updated = use_signal(|| None::<DateTime<Utc>>);
    let error = use_signal(|| None::<ApiError>);
    let source = use_signal(move || source);
    let params = use_signal(move || LoadParams::new(preferences, max_items));
    let current_task = use_signal(|| None::<Task>);

    let state = RecommendationsState {
        items,
        is_loading,
        last_updated,
        error,
        source,
        params,
        current_task,
    };

    use_hook(move || {
        let mut state = state;
        state.refresh();
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::rank_recommendations;
    use crate::domain::services::mock_data;

    #[test]
    fn test_budget_change_alone_is_a_new_load() {
        let before = LoadParams::new(vec!["plomberie".to_string()], 6);
        let after = LoadParams::new(vec!["plomberie".to_string()], 2);
        assert_ne!(before, after);

        let pool = mock_data::recommendation_pool();
        let ranked = rank_recommendations(&pool, &after.preferences, after.max_items);
        assert!(ranked.len() <= 2);
    }
}
