//! Rows
//!
//! The untyped, column-ordered view of a record that the query engine works on.

use std::{borrow::Cow, cmp::Ordering};

use serde::{Serialize, Serializer, ser::SerializeMap};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Absent optional value.
    Null,

    /// Boolean flag.
    Boolean(bool),

    /// Whole number.
    Integer(i64),

    /// Free text, including RFC 3339 timestamps.
    Text(String),
}

impl Value {
    /// Text form used by equality and `LIKE` matching. Null renders as `null`.
    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Boolean(true) => Cow::Borrowed("true"),
            Value::Boolean(false) => Cow::Borrowed("false"),
            Value::Integer(value) => Cow::Owned(value.to_string()),
            Value::Text(value) => Cow::Borrowed(value),
        }
    }

    /// Compare against a literal taken verbatim from a query.
    ///
    /// No schema-driven coercion happens: text compares lexicographically,
    /// numbers compare numerically only when the literal parses as a number,
    /// and null never orders. `None` means the comparison is false for every
    /// relational operator.
    ///
    /// Null is not coerced to zero, so `region >= '0'` excludes rows without a
    /// region.
    #[must_use]
    pub fn loose_cmp(&self, literal: &str) -> Option<Ordering> {
        match self {
            Value::Null => None,
            Value::Text(value) => Some(value.as_str().cmp(literal)),
            Value::Integer(value) => {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "comparison mirrors floating point number semantics"
                )]
                let value = *value as f64;

                literal
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(|number| value.partial_cmp(&number))
            }
            Value::Boolean(value) => literal
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|number| f64::from(u8::from(*value)).partial_cmp(&number)),
        }
    }

    /// Total ordering used by sorting. Nulls first, then booleans, numbers and text.
    #[must_use]
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Integer(_) => 2,
            Value::Text(_) => 3,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Boolean(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// Sort comparison where a missing column behaves like null.
pub(crate) fn cmp_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.sort_cmp(b),
        (Some(a), None) => a.sort_cmp(&Value::Null),
        (None, Some(b)) => Value::Null.sort_cmp(b),
        (None, None) => Ordering::Equal,
    }
}

/// An ordered set of named cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a cell.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.cells.push((name.into(), value.into()));
    }

    /// Look up a cell by exact column name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.cells
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Keep only the requested columns, in request order. Unknown names are dropped.
    #[must_use]
    pub fn project(&self, fields: &[String]) -> Row {
        let cells = fields
            .iter()
            .filter_map(|field| {
                self.cells
                    .iter()
                    .find(|(column, _)| column == field)
                    .cloned()
            })
            .collect();

        Row { cells }
    }

    /// Iterate over `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(name, _)| name.as_str())
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;

        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }

        map.end()
    }
}
