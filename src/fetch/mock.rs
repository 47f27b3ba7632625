//! Mock fetcher for isolating the coordinator in tests.

use mockall::mock;
use serde_json::Value;

use crate::domain::query::QueryParams;
use crate::fetch::{FetchState, ListFetcher};

mock! {
    pub Fetcher {}

    impl ListFetcher for Fetcher {
        type Item = Value;

        fn fetch(&self, params: &QueryParams) -> FetchState<Value>;
    }
}
