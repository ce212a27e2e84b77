//! Outer pagination.

use serde::{Deserialize, Serialize};

use super::{QueryError, SortDirection};
use crate::rows::Row;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Column used by the outer sort when the caller does not pick one.
pub const DEFAULT_SORT_FIELD: &str = "company_code";

/// Outer sort and page selection, independent of the query text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// One-based page number.
    pub page: usize,

    /// Page size.
    pub limit: usize,

    /// Column to sort by. Empty disables the outer sort.
    pub sort_field: String,

    /// Sort direction.
    pub sort_direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            sort_field: DEFAULT_SORT_FIELD.to_string(),
            sort_direction: SortDirection::Asc,
        }
    }
}

impl PageRequest {
    /// Check page bounds.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidParameter`] when `page` is zero or `limit`
    /// is outside `1..=1000`.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page == 0 {
            return Err(QueryError::InvalidParameter(
                "page must be at least 1".to_string(),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.limit) {
            return Err(QueryError::InvalidParameter(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        Ok(())
    }
}

/// Page bookkeeping returned alongside the records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Requested page.
    pub current_page: usize,

    /// Number of pages for the full result.
    pub total_pages: usize,

    /// Rows before pagination.
    pub total_records: usize,

    /// Requested page size.
    pub records_per_page: usize,

    /// Whether a later page exists.
    pub has_next_page: bool,

    /// Whether an earlier page exists.
    pub has_previous_page: bool,
}

/// Cut one page out of `rows`. Pages past the end are empty.
#[must_use]
pub fn paginate(rows: Vec<Row>, request: &PageRequest) -> (Vec<Row>, Pagination) {
    let total_records = rows.len();
    let limit = request.limit.max(1);
    let total_pages = total_records.div_ceil(limit);
    let offset = request.page.saturating_sub(1).saturating_mul(limit);

    let records = rows.into_iter().skip(offset).take(limit).collect();

    let pagination = Pagination {
        current_page: request.page,
        total_pages,
        total_records,
        records_per_page: request.limit,
        has_next_page: request.page < total_pages,
        has_previous_page: request.page > 1,
    };

    (records, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(count: i64) -> Vec<Row> {
        (0..count).map(|n| Row::new().with("n", n)).collect()
    }

    fn request(page: usize, limit: usize) -> PageRequest {
        PageRequest {
            page,
            limit,
            ..PageRequest::default()
        }
    }

    #[test]
    fn second_page_of_one_returns_second_row() {
        let (records, pagination) = paginate(rows(3), &request(2, 1));

        assert_eq!(records, vec![Row::new().with("n", 1)]);
        assert_eq!(
            pagination,
            Pagination {
                current_page: 2,
                total_pages: 3,
                total_records: 3,
                records_per_page: 1,
                has_next_page: true,
                has_previous_page: true,
            }
        );
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let (records, pagination) = paginate(rows(3), &request(5, 2));

        assert!(records.is_empty());
        assert_eq!(pagination.total_pages, 2);
        assert!(!pagination.has_next_page);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let (records, pagination) = paginate(Vec::new(), &PageRequest::default());

        assert!(records.is_empty());
        assert_eq!(pagination.total_pages, 0);
        assert!(!pagination.has_next_page);
        assert!(!pagination.has_previous_page);
    }

    #[test]
    fn bounds_are_validated() {
        assert!(request(1, 50).validate().is_ok());
        assert!(matches!(
            request(0, 50).validate(),
            Err(QueryError::InvalidParameter(_))
        ));
        assert!(matches!(
            request(1, 0).validate(),
            Err(QueryError::InvalidParameter(_))
        ));
        assert!(matches!(
            request(1, 1001).validate(),
            Err(QueryError::InvalidParameter(_))
        ));
    }
}
