//! Pagination types

use serde::{Deserialize, Serialize};

/// One page of a paginated listing
///
/// The backend flattens pagination metadata next to the records, so this
/// deserializes directly from list endpoint payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,

    /// 1-based page number
    pub page: u32,

    /// Page size requested
    pub limit: u32,

    /// Total number of pages
    pub total_pages: u32,

    /// Total number of records across all pages
    pub total_records: u64,
}

impl<T> Page<T> {
    /// Whether a later page exists.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_page_of_strings() {
        let json = r#"{
            "records": ["a", "b"],
            "page": 1,
            "limit": 2,
            "totalPages": 3,
            "totalRecords": 6
        }"#;

        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert_eq!(page.records, vec!["a", "b"]);
        assert!(page.has_more());
    }

    #[test]
    fn last_page_has_no_more() {
        let json = r#"{"records": [], "page": 3, "limit": 2, "totalPages": 3, "totalRecords": 6}"#;
        let page: Page<String> = serde_json::from_str(json).unwrap();
        assert!(!page.has_more());
    }
}
