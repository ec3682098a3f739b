use std::{future::Future, pin::Pin, rc::Rc};

use leptos::*;

use crate::{
    api::ApiError,
    config::{GLOBAL_SEARCH_MIN_LEN, SEARCH_DEBOUNCE_MS},
};

/// What an empty (blank) query means for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyQuery {
    /// Show nothing and skip the request.
    Clear,
    /// Request the unfiltered list.
    FetchAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub min_len: usize,
    pub empty_query: EmptyQuery,
    pub delay_ms: u32,
}

impl SearchPolicy {
    pub fn global() -> Self {
        Self {
            min_len: GLOBAL_SEARCH_MIN_LEN,
            empty_query: EmptyQuery::Clear,
            delay_ms: SEARCH_DEBOUNCE_MS,
        }
    }

    pub fn office() -> Self {
        Self {
            min_len: 1,
            empty_query: EmptyQuery::FetchAll,
            delay_ms: SEARCH_DEBOUNCE_MS,
        }
    }

    pub fn needs_fetch(&self, term: &str) -> bool {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return self.empty_query == EmptyQuery::FetchAll;
        }
        trimmed.chars().count() >= self.min_len
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Results were cleared locally; nothing to fetch.
    Cleared,
    /// A fetch for this generation should run once the delay elapses.
    Scheduled(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<T> {
    pub term: String,
    pub results: Vec<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
    generation: u64,
}

impl<T> Default for SearchState<T> {
    fn default() -> Self {
        Self {
            term: String::new(),
            results: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> SearchState<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.loading = false;
        self.error = None;
    }

    /// Records a keystroke. Every call supersedes whatever was in flight.
    pub fn input(&mut self, policy: &SearchPolicy, term: String) -> InputOutcome {
        self.term = term;
        self.generation += 1;
        if policy.needs_fetch(&self.term) {
            InputOutcome::Scheduled(self.generation)
        } else {
            self.clear_results();
            InputOutcome::Cleared
        }
    }

    /// Re-issues the current term immediately, e.g. after a mutation.
    pub fn reload(&mut self, policy: &SearchPolicy) -> Option<u64> {
        self.generation += 1;
        if policy.needs_fetch(&self.term) {
            Some(self.generation)
        } else {
            self.clear_results();
            None
        }
    }

    /// Returns the query to send, or `None` if `generation` is stale.
    pub fn begin_fetch(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        self.loading = true;
        Some(self.term.trim().to_string())
    }

    /// Applies a response. Stale responses are dropped and return `false`.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.results = items;
                self.error = None;
            }
            Err(err) => {
                self.results.clear();
                self.error = Some(err);
            }
        }
        true
    }
}

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;
type Fetcher<T> = Rc<dyn Fn(String) -> FetchFuture<T>>;

/// Debounced query → fetch → replace-list loop shared by the office table and
/// the global search page.
pub struct SearchController<T: 'static> {
    state: RwSignal<SearchState<T>>,
    policy: SearchPolicy,
    fetcher: StoredValue<Fetcher<T>>,
    timer: StoredValue<Option<gloo_timers::callback::Timeout>>,
}

impl<T: 'static> Clone for SearchController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SearchController<T> {}

impl<T: Clone + 'static> SearchController<T> {
    pub fn state(&self) -> RwSignal<SearchState<T>> {
        self.state
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    pub fn term(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.term.clone()))
    }

    pub fn results(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.results.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error.clone()))
    }

    pub fn on_input(&self, term: String) {
        let policy = self.policy;
        match self.state.try_update(|s| s.input(&policy, term)) {
            Some(InputOutcome::Scheduled(generation)) => self.schedule(generation),
            _ => self.cancel_pending(),
        }
    }

    pub fn clear(&self) {
        self.on_input(String::new());
    }

    pub fn reload(&self) {
        self.cancel_pending();
        let policy = self.policy;
        if let Some(Some(generation)) = self.state.try_update(|s| s.reload(&policy)) {
            self.run(generation);
        }
    }

    fn cancel_pending(&self) {
        self.timer.try_update_value(|timer| *timer = None);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule(&self, generation: u64) {
        let this = *self;
        let timeout = gloo_timers::callback::Timeout::new(self.policy.delay_ms, move || {
            this.run(generation)
        });
        // Replacing the handle drops the previous timeout, which cancels it.
        self.timer.try_update_value(|timer| *timer = Some(timeout));
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule(&self, generation: u64) {
        self.run(generation);
    }

    fn run(&self, generation: u64) {
        let Some(term) = self.state.try_update(|s| s.begin_fetch(generation)).flatten() else {
            return;
        };
        let Some(fetch) = self.fetcher.try_get_value() else {
            return;
        };
        let state = self.state;
        spawn_local(async move {
            let result = fetch(term).await;
            if let Err(err) = &result {
                log::error!("Failed to load list: {}", err);
            }
            let applied = state.try_update(|s| s.finish_fetch(generation, result));
            if applied == Some(false) {
                log::debug!("Dropped stale response for generation {}", generation);
            }
        });
    }
}

pub fn use_search_controller<T, F, Fut>(policy: SearchPolicy, fetch: F) -> SearchController<T>
where
    T: Clone + 'static,
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let fetcher: Fetcher<T> = Rc::new(move |term| Box::pin(fetch(term)));
    SearchController {
        state: create_rw_signal(SearchState::default()),
        policy,
        fetcher: store_value(fetcher),
        timer: store_value(None),
    }
}



#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn recording_controller(calls: Rc<RefCell<Vec<String>>>) -> SearchController<String> {
        use_search_controller(SearchPolicy::global(), move |term: String| {
            calls.borrow_mut().push(term.clone());
            async move { Ok::<Vec<String>, ApiError>(vec![term]) }
        })
    }

    #[wasm_bindgen_test]
    async fn new_keystroke_restarts_the_debounce_timer() {
        let runtime = create_runtime();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let controller = recording_controller(calls.clone());
        let delay = controller.policy().delay_ms;

        controller.on_input("la".into());
        TimeoutFuture::new(delay / 2).await;
        controller.on_input("lap".into());
        // Past the first timer's deadline, before the second one's.
        TimeoutFuture::new(delay * 3 / 4).await;
        assert!(calls.borrow().is_empty());

        TimeoutFuture::new(delay / 2 + 50).await;
        assert_eq!(*calls.borrow(), vec!["lap".to_string()]);
        assert_eq!(controller.results().get_untracked(), vec!["lap".to_string()]);
        assert!(!controller.loading().get_untracked());
        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn short_query_cancels_the_pending_timer() {
        let runtime = create_runtime();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let controller = recording_controller(calls.clone());
        let delay = controller.policy().delay_ms;

        controller.on_input("lap".into());
        controller.on_input("l".into());
        TimeoutFuture::new(delay * 2).await;

        assert!(calls.borrow().is_empty());
        assert!(controller.results().get_untracked().is_empty());
        runtime.dispose();
    }
}
