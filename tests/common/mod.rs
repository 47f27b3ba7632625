use std::cell::{Cell, RefCell};

use smart_fetch::{ApiListResponse, FetchState, ListFetcher, ListMeta, QueryParams};

pub const TOTAL_USERS: usize = 45;

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: usize,
    pub name: String,
    pub role: String,
}

/// Fake users endpoint that records every parameter set it is asked for.
#[derive(Default)]
pub struct RecordingFetcher {
    calls: RefCell<Vec<QueryParams>>,
    loading: Cell<bool>,
    failing: Cell<bool>,
}

impl RecordingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<QueryParams> {
        self.calls.borrow().clone()
    }

    pub fn last_call(&self) -> Option<QueryParams> {
        self.calls.borrow().last().cloned()
    }

    pub fn calls_with_search(&self, term: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|params| params.search_term == term)
            .count()
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl ListFetcher for RecordingFetcher {
    type Item = User;

    fn fetch(&self, params: &QueryParams) -> FetchState<User> {
        self.calls.borrow_mut().push(params.clone());

        if self.failing.get() {
            return FetchState::failed();
        }
        if self.loading.get() {
            return FetchState::loading();
        }

        let limit = params.limit.get();
        let first = (params.page.get() - 1) * limit;
        let role = params.filter_str("role").unwrap_or("student").to_string();
        let users = (first..(first + limit).min(TOTAL_USERS))
            .map(|id| User {
                id,
                name: format!("User #{id}"),
                role: role.clone(),
            })
            .collect();

        FetchState::ready(ApiListResponse::new(
            users,
            ListMeta {
                page: Some(params.page.get()),
                limit: Some(limit),
                total: Some(TOTAL_USERS),
                total_page: Some(TOTAL_USERS.div_ceil(limit)),
                ..ListMeta::default()
            },
        ))
    }
}
