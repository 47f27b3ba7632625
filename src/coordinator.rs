//! Debounced pagination, search and filter coordination for one list view.
//!
//! A [`QueryCoordinator`] owns the state behind a paginated, searchable,
//! filterable table. Pagination setters take effect at once; search text and
//! filter edits are echoed back immediately but only reach the fetcher after
//! they stop changing for the configured delay. When a settled search term or
//! filter set differs from the previous one the page goes back to one.

use serde_json::Value;
use tokio::time::Instant;

use crate::debounce::Debounced;
use crate::domain::query::{FilterMap, LIMIT_KEY, QueryParams, as_count, derive_query_params};
use crate::domain::types::{PageNumber, PageSize};
use crate::dto::api::ListMeta;
use crate::fetch::{FetchState, ListFetcher};
use crate::models::config::CoordinatorConfig;
use crate::pagination::Paginated;

/// Construction-time inputs supplied by the embedding view.
#[derive(Clone, Debug, Default)]
pub struct CoordinatorOptions {
    /// Parameters the view pins; they override filter state on every request.
    pub static_options: FilterMap,
    /// Filter set restored by [`QueryCoordinator::reset_filters`].
    pub initial_filters: FilterMap,
}

impl CoordinatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn static_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.static_options.insert(key.into(), value.into());
        self
    }

    pub fn static_options(mut self, options: FilterMap) -> Self {
        self.static_options = options;
        self
    }

    pub fn initial_filters(mut self, filters: FilterMap) -> Self {
        self.initial_filters = filters;
        self
    }
}

/// Owned snapshot of what a list view renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ListOutput<T> {
    pub items: Vec<T>,
    pub meta: Option<ListMeta>,
    pub current_page: usize,
    pub is_loading: bool,
    pub is_pending: bool,
    pub is_error: bool,
}

impl<T> ListOutput<T> {
    /// Wraps the items with a page window for the table footer.
    pub fn paginated(self) -> Paginated<T> {
        let total_pages = self.meta.as_ref().map(ListMeta::total_pages).unwrap_or(0);
        let page = self
            .meta
            .as_ref()
            .and_then(|meta| meta.page)
            .unwrap_or(self.current_page);
        Paginated::new(self.items, page, total_pages)
    }
}

pub struct QueryCoordinator<F: ListFetcher> {
    fetcher: F,
    static_options: FilterMap,
    initial_filters: FilterMap,
    current_page: PageNumber,
    page_size: PageSize,
    search_term: String,
    filter_params: FilterMap,
    debounced_search: Debounced<String>,
    debounced_filters: Debounced<FilterMap>,
    params: QueryParams,
    state: FetchState<F::Item>,
    in_transition: bool,
}

impl<F: ListFetcher> QueryCoordinator<F> {
    /// Creates a coordinator with the default configuration and issues the
    /// first fetch.
    pub fn new(fetcher: F, options: CoordinatorOptions) -> Self {
        Self::with_config(fetcher, options, &CoordinatorConfig::default())
    }

    pub fn with_config(
        fetcher: F,
        options: CoordinatorOptions,
        config: &CoordinatorConfig,
    ) -> Self {
        let CoordinatorOptions {
            static_options,
            initial_filters,
        } = options;

        let page_size = static_options
            .get(LIMIT_KEY)
            .and_then(as_count)
            .map(PageSize::new)
            .unwrap_or_else(|| PageSize::from(config.default_page_size));
        let delay = config.debounce_delay();

        let params = derive_query_params(
            PageNumber::MIN,
            page_size,
            "",
            &initial_filters,
            &static_options,
        );
        log::debug!("Initial list fetch with {params:?}");
        let state = fetcher.fetch(&params);

        Self {
            fetcher,
            current_page: PageNumber::MIN,
            page_size,
            search_term: String::new(),
            filter_params: initial_filters.clone(),
            debounced_search: Debounced::new(String::new(), delay),
            debounced_filters: Debounced::new(initial_filters.clone(), delay),
            static_options,
            initial_filters,
            params,
            state,
            in_transition: false,
        }
    }

    /// Raw search text, updated without delay.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Echoes `text` at once and schedules it for the fetcher. Re-sending
    /// the current text leaves the running timer alone.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_term {
            return;
        }
        self.search_term = text;
        self.debounced_search.set(self.search_term.clone(), Instant::now());
    }

    /// Raw filter state, updated without delay.
    pub fn filter_params(&self) -> &FilterMap {
        &self.filter_params
    }

    pub fn set_filter_params(&mut self, filters: FilterMap) {
        self.filter_params = filters;
        self.debounced_filters.set(self.filter_params.clone(), Instant::now());
    }

    /// Derives the next filter state from the current one.
    pub fn update_filter_params<U>(&mut self, update: U)
    where
        U: FnOnce(&FilterMap) -> FilterMap,
    {
        let next = update(&self.filter_params);
        self.set_filter_params(next);
    }

    /// Patches a single filter field; `Value::Null` marks it unset.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let (key, value) = (key.into(), value.into());
        self.update_filter_params(|prev| {
            let mut next = prev.clone();
            next.insert(key, value);
            next
        });
    }

    pub fn current_page(&self) -> usize {
        self.current_page.get()
    }

    /// Jumps to page `page`, clamped to at least one.
    pub fn set_current_page(&mut self, page: i64) {
        self.current_page = PageNumber::new(page);
        self.recompute();
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Changes the page size, clamped to at least one. The current page is
    /// kept even if it now points past the end.
    pub fn set_page_size(&mut self, size: i64) {
        self.page_size = PageSize::new(size);
        self.recompute();
    }

    /// Clears search text, restores the initial filters and returns to page
    /// one as a single update. Pending debounced edits are discarded.
    pub fn reset_filters(&mut self) {
        self.search_term.clear();
        self.filter_params = self.initial_filters.clone();
        self.debounced_search.flush(String::new());
        self.debounced_filters.flush(self.initial_filters.clone());
        self.current_page = PageNumber::MIN;
        self.in_transition = true;
        log::debug!("Filters reset");
        self.recompute();
    }

    /// Earliest instant at which a pending search or filter edit settles.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (
            self.debounced_search.deadline(),
            self.debounced_filters.deadline(),
        ) {
            (Some(search), Some(filters)) => Some(search.min(filters)),
            (search, filters) => search.or(filters),
        }
    }

    /// Applies every debounced edit due by now. Returns whether the settled
    /// search term or filter set changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Applies every debounced edit due by `now`.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let search_changed = self.debounced_search.poll(now).is_some();
        let filters_changed = self.debounced_filters.poll(now).is_some();
        let changed = search_changed || filters_changed;

        if changed {
            log::debug!(
                "Settled search/filter change (search: {search_changed}, filters: {filters_changed}), resetting page"
            );
            self.current_page = PageNumber::MIN;
            self.in_transition = true;
        }

        self.recompute();
        changed
    }

    /// Waits for the next pending edit to settle and applies it. Returns
    /// `false` straight away when nothing is pending.
    pub async fn settle(&mut self) -> bool {
        let Some(deadline) = self.next_deadline() else {
            return false;
        };
        tokio::time::sleep_until(deadline).await;
        self.tick_at(deadline.max(Instant::now()))
    }

    /// Polls the fetcher again for the current parameters.
    pub fn refresh(&mut self) {
        self.state = self.fetcher.fetch(&self.params);
        self.finish_transition();
    }

    /// Parameters of the most recent fetch.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Whether a search or filter edit is still waiting out its delay.
    pub fn has_unsettled_input(&self) -> bool {
        self.debounced_search.is_pending() || self.debounced_filters.is_pending()
    }

    pub fn items(&self) -> &[F::Item] {
        self.state.items()
    }

    pub fn meta(&self) -> Option<&ListMeta> {
        self.state.meta()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    /// True from a page or filter reset until its fetch stops loading.
    pub fn is_pending(&self) -> bool {
        self.in_transition
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn output(&self) -> ListOutput<F::Item>
    where
        F::Item: Clone,
    {
        ListOutput {
            items: self.items().to_vec(),
            meta: self.meta().cloned(),
            current_page: self.current_page(),
            is_loading: self.is_loading(),
            is_pending: self.is_pending(),
            is_error: self.is_error(),
        }
    }

    fn recompute(&mut self) {
        let params = derive_query_params(
            self.current_page,
            self.page_size,
            self.debounced_search.get(),
            self.debounced_filters.get(),
            &self.static_options,
        );

        if params != self.params {
            log::debug!("List params changed, fetching {params:?}");
            self.state = self.fetcher.fetch(&params);
            self.params = params;
        }
        self.finish_transition();
    }

    fn finish_transition(&mut self) {
        if self.in_transition && !self.state.is_loading {
            self.in_transition = false;
        }
    }
}

impl<F: ListFetcher> Drop for QueryCoordinator<F> {
    fn drop(&mut self) {
        let search = self.debounced_search.cancel();
        let filters = self.debounced_filters.cancel();
        if search || filters {
            log::trace!("Dropping coordinator with unsettled input");
        }
    }
}
