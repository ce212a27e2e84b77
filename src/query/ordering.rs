//! Row sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::parser::OrderTerm;
use crate::rows::{Row, cmp_cells};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,

    /// Largest first.
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Stable multi-key sort for `ORDER BY`.
pub fn sort_by_terms(rows: &mut [Row], terms: &[OrderTerm]) {
    if terms.is_empty() {
        return;
    }

    rows.sort_by(|a, b| {
        terms
            .iter()
            .map(|term| {
                term.direction
                    .apply(cmp_cells(a.get(&term.field), b.get(&term.field)))
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Stable single-key sort for the outer pass. An empty field leaves rows as they are.
pub fn sort_by_field(rows: &mut [Row], field: &str, direction: SortDirection) {
    if rows.is_empty() || field.is_empty() {
        return;
    }

    rows.sort_by(|a, b| direction.apply(cmp_cells(a.get(field), b.get(field))));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row::new().with("code", "B").with("country", "US"),
            Row::new().with("code", "A").with("country", "DE"),
            Row::new().with("code", "C").with("country", "US"),
        ]
    }

    fn codes(rows: &[Row]) -> Vec<String> {
        rows.iter()
            .filter_map(|row| row.get("code").map(|value| value.to_text().into_owned()))
            .collect()
    }

    #[test]
    fn multi_key_sort_respects_direction_per_term() {
        let mut rows = rows();

        sort_by_terms(
            &mut rows,
            &[
                OrderTerm {
                    field: "country".to_string(),
                    direction: SortDirection::Desc,
                },
                OrderTerm {
                    field: "code".to_string(),
                    direction: SortDirection::Asc,
                },
            ],
        );

        assert_eq!(codes(&rows), vec!["B", "C", "A"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut rows = rows();

        sort_by_field(&mut rows, "country", SortDirection::Asc);

        assert_eq!(codes(&rows), vec!["A", "B", "C"]);
    }

    #[test]
    fn missing_sort_field_keeps_rows_together() {
        let mut rows = rows();

        sort_by_field(&mut rows, "unknown", SortDirection::Desc);

        assert_eq!(codes(&rows), vec!["B", "A", "C"]);
    }

    #[test]
    fn sort_direction_deserializes_lowercase() -> testresult::TestResult {
        let direction: SortDirection = serde_json::from_str("\"desc\"")?;

        assert_eq!(direction, SortDirection::Desc);

        Ok(())
    }
}
