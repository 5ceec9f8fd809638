//! Generic pagination wrapper shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of a listing, generic over the item type.
///
/// Pure data carrier: no network or parsing logic lives here. The API
/// guarantees `objects.len() <= per_page` per page.
#[derive(Serialize, Deserialize, Debug)]
pub struct PagedResponse<T> {
    /// 1-based page number.
    #[serde(default)]
    pub page: i64,
    /// Total number of pages.
    #[serde(default)]
    pub pages: i64,
    /// Page size.
    #[serde(default)]
    pub per_page: i64,
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub first_url: Option<String>,
    #[serde(default)]
    pub last_url: Option<String>,
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub prev_url: Option<String>,
    /// Items for this page, in server order.
    #[serde(default)]
    pub objects: Vec<T>,
}

impl<T> PagedResponse<T> {
    /// Assembles a page, deriving `pages` as `ceil(total / per_page)`.
    ///
    /// When `per_page` is zero the page count is not computable and stays 0.
    pub fn paginate(page: i64, per_page: i64, total: i64, objects: Vec<T>) -> Self {
        let pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            page,
            pages,
            per_page,
            total,
            first_url: None,
            last_url: None,
            next_url: None,
            prev_url: None,
            objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_ceil_of_total_over_per_page() {
        let page: PagedResponse<i64> = PagedResponse::paginate(1, 10, 101, vec![]);
        assert_eq!(page.pages, 11);

        let exact: PagedResponse<i64> = PagedResponse::paginate(1, 10, 100, vec![]);
        assert_eq!(exact.pages, 10);

        let empty: PagedResponse<i64> = PagedResponse::paginate(1, 10, 0, vec![]);
        assert_eq!(empty.pages, 0);
    }

    #[test]
    fn zero_per_page_does_not_divide() {
        let page: PagedResponse<i64> = PagedResponse::paginate(1, 0, 42, vec![]);
        assert_eq!(page.pages, 0);
    }

    #[test]
    fn items_are_kept_in_order() {
        let page = PagedResponse::paginate(2, 3, 9, vec!["a", "b", "c"]);
        assert_eq!(page.objects, vec!["a", "b", "c"]);
        assert!(page.objects.len() as i64 <= page.per_page);
    }

    #[test]
    fn deserializes_with_missing_counters() {
        let page: PagedResponse<String> = serde_json::from_str(r#"{"objects": []}"#).unwrap();
        assert_eq!(page.page, 0);
        assert!(page.objects.is_empty());
    }
}
