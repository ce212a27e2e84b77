//! Column metadata derived from a sample row.

use serde::Serialize;

use crate::rows::{Row, Value};

/// Display type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Integer values.
    Number,

    /// Boolean values.
    Boolean,

    /// Text that starts with a `YYYY-MM-DD` date.
    Date,

    /// Anything else, including nulls.
    String,
}

impl ColumnType {
    /// Classify a sample value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Integer(_) => ColumnType::Number,
            Value::Boolean(_) => ColumnType::Boolean,
            Value::Text(text) if starts_with_date(text) => ColumnType::Date,
            Value::Text(_) | Value::Null => ColumnType::String,
        }
    }
}

/// Metadata for one column of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    /// Column name.
    pub field: String,

    /// Human readable header.
    pub header: String,

    /// Display type.
    #[serde(rename = "type")]
    pub column_type: ColumnType,

    /// Always `true`.
    pub sortable: bool,

    /// Always `true`.
    pub filterable: bool,
}

/// Columns of `sample`, in row order. No sample means no columns.
#[must_use]
pub fn describe(sample: Option<&Row>) -> Vec<ColumnInfo> {
    sample
        .map(|row| {
            row.iter()
                .map(|(field, value)| ColumnInfo {
                    field: field.to_string(),
                    header: header(field),
                    column_type: ColumnType::of(value),
                    sortable: true,
                    filterable: true,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `company_code` becomes `Company Code`.
#[must_use]
pub fn header(field: &str) -> String {
    let mut header = String::with_capacity(field.len());
    let mut in_word = false;

    for ch in field.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        let word_char = ch.is_alphanumeric();

        if word_char && !in_word {
            header.extend(ch.to_uppercase());
        } else {
            header.push(ch);
        }

        in_word = word_char;
    }

    header
}

fn starts_with_date(text: &str) -> bool {
    let Some(prefix) = text.as_bytes().get(..10) else {
        return false;
    };

    prefix.iter().enumerate().all(|(index, byte)| match index {
        4 | 7 => *byte == b'-',
        _ => byte.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_capitalise_each_word() {
        assert_eq!(header("company_code"), "Company Code");
        assert_eq!(header("address_line1"), "Address Line1");
        assert_eq!(header("id"), "Id");
    }

    #[test]
    fn types_follow_sample_values() {
        assert_eq!(ColumnType::of(&Value::Integer(1)), ColumnType::Number);
        assert_eq!(ColumnType::of(&Value::Boolean(true)), ColumnType::Boolean);
        assert_eq!(
            ColumnType::of(&Value::from("2024-01-15T10:00:00Z")),
            ColumnType::Date
        );
        assert_eq!(ColumnType::of(&Value::from("2024-1-15")), ColumnType::String);
        assert_eq!(ColumnType::of(&Value::Null), ColumnType::String);
    }

    #[test]
    fn describe_uses_row_order() {
        let row = Row::new().with("city", "Berlin").with("house_number", 5);

        let columns = describe(Some(&row));

        assert_eq!(
            columns,
            vec![
                ColumnInfo {
                    field: "city".to_string(),
                    header: "City".to_string(),
                    column_type: ColumnType::String,
                    sortable: true,
                    filterable: true,
                },
                ColumnInfo {
                    field: "house_number".to_string(),
                    header: "House Number".to_string(),
                    column_type: ColumnType::Number,
                    sortable: true,
                    filterable: true,
                },
            ]
        );
        assert!(describe(None).is_empty());
    }
}
