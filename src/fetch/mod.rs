//! The seam between the coordinator and whatever data layer serves a list
//! endpoint.

use std::marker::PhantomData;

use crate::domain::query::QueryParams;
use crate::dto::api::{ApiListResponse, ListMeta};

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Snapshot of a fetch for one set of parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<ApiListResponse<T>>,
    pub is_loading: bool,
    pub is_error: bool,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: false,
        }
    }
}

impl<T> FetchState<T> {
    /// Request issued, nothing received yet.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn ready(data: ApiListResponse<T>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn failed() -> Self {
        Self {
            is_error: true,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[T] {
        self.data.as_ref().map(|data| data.items()).unwrap_or_default()
    }

    pub fn meta(&self) -> Option<&ListMeta> {
        self.data.as_ref().and_then(|data| data.meta.as_ref())
    }
}

/// Data source for one list endpoint.
///
/// Implementations own caching, request de-duplication, retries and
/// cancellation. The coordinator calls [`ListFetcher::fetch`] whenever the
/// derived parameters change and reports whatever state comes back.
pub trait ListFetcher {
    type Item;

    fn fetch(&self, params: &QueryParams) -> FetchState<Self::Item>;
}

impl<L> ListFetcher for &L
where
    L: ListFetcher + ?Sized,
{
    type Item = L::Item;

    fn fetch(&self, params: &QueryParams) -> FetchState<Self::Item> {
        (**self).fetch(params)
    }
}

/// Adapts a closure into a [`ListFetcher`].
pub struct FnFetcher<F, T> {
    f: F,
    _item: PhantomData<fn() -> T>,
}

impl<F, T> ListFetcher for FnFetcher<F, T>
where
    F: Fn(&QueryParams) -> FetchState<T>,
{
    type Item = T;

    fn fetch(&self, params: &QueryParams) -> FetchState<T> {
        (self.f)(params)
    }
}

pub fn fetch_fn<F, T>(f: F) -> FnFetcher<F, T>
where
    F: Fn(&QueryParams) -> FetchState<T>,
{
    FnFetcher {
        f,
        _item: PhantomData,
    }
}
