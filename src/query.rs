//! Query builders for list endpoints.

use url::Url;

/// Pagination parameters shared by every list endpoint. Unset fields use the
/// API defaults.
#[derive(Clone, Copy, Default)]
pub struct PageQuery {
    /// Page number (1-indexed).
    pub page: Option<i64>,
    /// Results per page.
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Appends the pagination parameters to the URL.
    pub(crate) fn append_to(&self, url: &mut Url) {
        if let Some(page) = self.page {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        if let Some(per_page) = self.per_page {
            url.query_pairs_mut()
                .append_pair("per_page", &per_page.to_string());
        }
    }
}

/// Filters for the segment listing endpoint.
#[derive(Clone, Default)]
pub struct SegmentQuery {
    pub common: PageQuery,
    /// Filter by segment type (e.g. `"MARKER"`, `"GENERIC"`).
    pub segment_type: Option<String>,
    /// Only segments starting at or after this time, in milliseconds.
    pub time_start_gte: Option<i64>,
    /// Only segments ending at or before this time, in milliseconds.
    pub time_end_lte: Option<i64>,
}

impl SegmentQuery {
    pub fn with_page(mut self, page: i64) -> Self {
        self.common.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.common.per_page = Some(per_page);
        self
    }

    pub fn with_segment_type(mut self, segment_type: &str) -> Self {
        self.segment_type = Some(segment_type.to_string());
        self
    }

    pub fn with_time_start_gte(mut self, milliseconds: i64) -> Self {
        self.time_start_gte = Some(milliseconds);
        self
    }

    pub fn with_time_end_lte(mut self, milliseconds: i64) -> Self {
        self.time_end_lte = Some(milliseconds);
        self
    }

    pub(crate) fn append_to(&self, url: &mut Url) {
        self.common.append_to(url);
        if let Some(segment_type) = &self.segment_type {
            url.query_pairs_mut()
                .append_pair("segment_type", segment_type);
        }
        if let Some(gte) = self.time_start_gte {
            url.query_pairs_mut()
                .append_pair("time_start_milliseconds__gte", &gte.to_string());
        }
        if let Some(lte) = self.time_end_lte {
            url.query_pairs_mut()
                .append_pair("time_end_milliseconds__lte", &lte.to_string());
        }
    }
}
