//! Response shape shared by the REST list endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pagination metadata attached to a list response.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    pub page: Option<usize>,
    pub limit: Option<usize>,
    /// Total number of items matching the query.
    pub total: Option<usize>,
    #[serde(alias = "totalPages")]
    pub total_page: Option<usize>,
    /// Endpoint-specific keys kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListMeta {
    /// Number of pages, falling back to `total / limit` when the endpoint
    /// omits `totalPage`.
    pub fn total_pages(&self) -> usize {
        match (self.total_page, self.total, self.limit) {
            (Some(pages), _, _) => pages,
            (None, Some(total), Some(limit)) if limit > 0 => total.div_ceil(limit),
            _ => 0,
        }
    }
}

/// Envelope returned by list endpoints: `{ "data": [...], "meta": {...} }`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiListResponse<T> {
    #[serde(default)]
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

impl<T> Default for ApiListResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            meta: None,
        }
    }
}

impl<T> ApiListResponse<T> {
    pub fn new(data: Vec<T>, meta: ListMeta) -> Self {
        Self {
            data: Some(data),
            meta: Some(meta),
        }
    }

    /// Items in server order; empty when the endpoint sent no `data`.
    pub fn items(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Course {
        #[serde(rename = "_id")]
        id: String,
        #[serde(rename = "className")]
        class_name: String,
    }

    #[test]
    fn parses_course_list_payload() {
        let body = r#"{
            "data": [
                {"_id": "c1", "className": "Algebra"},
                {"_id": "c2", "className": "Biology"}
            ],
            "meta": {"page": 1, "limit": 10, "total": 2, "totalPage": 1, "sortBy": "createdAt"}
        }"#;
        let response: ApiListResponse<Course> = serde_json::from_str(body).expect("valid payload");
        assert_eq!(response.items().len(), 2);
        assert_eq!(response.items()[0].id, "c1");
        assert_eq!(response.items()[1].class_name, "Biology");
        let meta = response.meta.expect("meta present");
        assert_eq!(meta.total_pages(), 1);
        assert_eq!(meta.extra.get("sortBy"), Some(&Value::from("createdAt")));
    }

    #[test]
    fn accepts_total_pages_alias_and_missing_data() {
        let body = r#"{"meta": {"total": 41, "limit": 20, "totalPages": 3}}"#;
        let response: ApiListResponse<Course> = serde_json::from_str(body).expect("valid payload");
        assert!(response.items().is_empty());
        assert_eq!(response.meta.map(|m| m.total_pages()), Some(3));
    }

    #[test]
    fn derives_total_pages_from_total() {
        let meta = ListMeta {
            total: Some(41),
            limit: Some(20),
            ..ListMeta::default()
        };
        assert_eq!(meta.total_pages(), 3);
        assert_eq!(ListMeta::default().total_pages(), 0);
    }
}
