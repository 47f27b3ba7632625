//! Debounced pagination, search and filter coordination for paginated REST
//! list endpoints.
//!
//! Management screens (courses, users, tickets) share one list contract:
//! `page`, `limit` and `searchTerm` plus arbitrary filter fields in, a
//! `{data, meta}` envelope out. [`QueryCoordinator`] owns the state behind such
//! a screen and hands stable parameters to an injected [`ListFetcher`].

pub mod coordinator;
pub mod debounce;
pub mod domain;
pub mod dto;
pub mod errors;
pub mod fetch;
pub mod models;
pub mod pagination;

pub use coordinator::{CoordinatorOptions, ListOutput, QueryCoordinator};
pub use domain::query::{FilterMap, QueryParams, derive_query_params, filters_from};
pub use domain::types::{PageNumber, PageSize};
pub use dto::api::{ApiListResponse, ListMeta};
pub use errors::{SmartFetchError, SmartFetchResult};
pub use fetch::{FetchState, ListFetcher, fetch_fn};
pub use models::config::CoordinatorConfig;
