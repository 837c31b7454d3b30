use serde::{Deserialize, Serialize};

/// Standard response envelope of the admin REST API.
///
/// Every endpoint wraps its payload: `{code, success, message, data}`.
/// `success == false` with an HTTP 2xx status is a business-rule failure and
/// must be surfaced to the caller exactly like a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub code: i32,
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Paged collection returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub size: usize,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            total: 0,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Common query parameters of list endpoints. Filters are passed through to
/// the server verbatim; `None` fields are omitted from the query string.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

impl ListQuery {
    pub fn page(page: usize, size: usize) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }
}

/// Number of pages needed for `total` items at `size` per page.
/// A zero total yields zero pages (no page links are rendered).
pub fn page_count(total: usize, size: usize) -> usize {
    if total == 0 || size == 0 {
        0
    } else {
        total.div_ceil(size)
    }
}

/// Clamp a 1-indexed page number into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(23, 10), 3);
        assert_eq!(page_count(30, 10), 3);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(3, 3), 3);
        assert_eq!(clamp_page(99, 3), 3);
        // empty collections still clamp to page 1
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_list_query_omits_empty_filters() {
        let q = ListQuery::page(2, 10);
        let json = serde_json::to_value(&q).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.get("page").unwrap(), 2);
        assert!(!obj.contains_key("keyword"));
        assert!(!obj.contains_key("storeId"));
    }
}
