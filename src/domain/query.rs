//! Query parameters sent to list endpoints and the pure function deriving them
//! from coordinator state.
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::types::{PageNumber, PageSize};
use crate::errors::{SmartFetchError, SmartFetchResult};

/// Arbitrary filter fields keyed by their wire name. A `null` value marks the
/// field as unset.
pub type FilterMap = Map<String, Value>;

pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SEARCH_TERM_KEY: &str = "searchTerm";

/// Normalized parameters handed to a [`crate::fetch::ListFetcher`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryParams {
    pub page: PageNumber,
    pub limit: PageSize,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    /// Filter fields with `null` entries already removed.
    #[serde(flatten)]
    pub filters: FilterMap,
}

impl QueryParams {
    pub fn new(page: PageNumber, limit: PageSize, search_term: impl Into<String>) -> Self {
        Self {
            page,
            limit,
            search_term: search_term.into(),
            filters: FilterMap::new(),
        }
    }

    /// Looks up a filter field by wire name.
    pub fn filter(&self, key: &str) -> Option<&Value> {
        self.filters.get(key)
    }

    /// Looks up a string filter field by wire name.
    pub fn filter_str(&self, key: &str) -> Option<&str> {
        self.filters.get(key).and_then(Value::as_str)
    }

    /// Renders the parameters as an `application/x-www-form-urlencoded` query
    /// string. Array filters become repeated keys; nested objects are rejected.
    pub fn to_query_string(&self) -> SmartFetchResult<String> {
        let mut pairs: Vec<(String, String)> = vec![
            (PAGE_KEY.to_string(), self.page.to_string()),
            (LIMIT_KEY.to_string(), self.limit.to_string()),
            (SEARCH_TERM_KEY.to_string(), self.search_term.clone()),
        ];

        for (key, value) in &self.filters {
            match value {
                Value::Array(values) => {
                    for item in values {
                        pairs.push((key.clone(), scalar_to_string(key, item)?));
                    }
                }
                other => pairs.push((key.clone(), scalar_to_string(key, other)?)),
            }
        }

        serde_html_form::to_string(&pairs).map_err(|e| SmartFetchError::Encode(e.to_string()))
    }

    fn apply(&mut self, key: &str, value: &Value) {
        match key {
            PAGE_KEY => match as_count(value) {
                Some(page) => self.page = PageNumber::new(page),
                None if value.is_null() => {}
                None => log::warn!("Ignoring non-numeric `{PAGE_KEY}` parameter: {value}"),
            },
            LIMIT_KEY => match as_count(value) {
                Some(limit) => self.limit = PageSize::new(limit),
                None if value.is_null() => {}
                None => log::warn!("Ignoring non-numeric `{LIMIT_KEY}` parameter: {value}"),
            },
            SEARCH_TERM_KEY => match value {
                Value::String(term) => self.search_term = term.clone(),
                Value::Null => {}
                other => self.search_term = other.to_string(),
            },
            _ if value.is_null() => {
                self.filters.remove(key);
            }
            _ => {
                self.filters.insert(key.to_string(), value.clone());
            }
        }
    }
}

/// Reads a page or limit value sent as a number or a numeric string.
pub(crate) fn as_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_to_string(key: &str, value: &Value) -> SmartFetchResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(SmartFetchError::Encode(format!(
            "filter `{key}` must be a scalar or a list of scalars"
        ))),
    }
}

/// Builds the effective parameters for one request.
///
/// Merge order is pagination and search first, then `filters`, then
/// `static_options`, so static options win on every key collision, including
/// `page`, `limit` and `searchTerm`.
pub fn derive_query_params(
    page: PageNumber,
    limit: PageSize,
    search_term: &str,
    filters: &FilterMap,
    static_options: &FilterMap,
) -> QueryParams {
    let mut params = QueryParams::new(page, limit, search_term);
    for (key, value) in filters.iter().chain(static_options.iter()) {
        params.apply(key, value);
    }
    params
}

/// Converts any serializable struct or map into a [`FilterMap`].
///
/// `None`/unit serialize to an empty map; anything that is not a JSON object
/// is rejected.
pub fn filters_from<S: Serialize + ?Sized>(value: &S) -> SmartFetchResult<FilterMap> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(FilterMap::new()),
        other => Err(SmartFetchError::InvalidFilters(format!(
            "expected an object, got `{other}`"
        ))),
    }
}
