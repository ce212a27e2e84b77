//! `WHERE` evaluation.

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use super::{
    QueryError,
    parser::{Condition, Operator},
};
use crate::rows::Row;

const LIKE_SIZE_LIMIT: usize = 1 << 20;

#[derive(Debug)]
enum Test {
    Eq(String),
    NotEq(String),
    Relational(Operator, String),
    Like(Regex),
}

#[derive(Debug)]
struct CompiledCondition {
    field: String,
    test: Test,
}

/// A conjunction of conditions, ready to run against rows.
#[derive(Debug, Default)]
pub struct Predicate {
    conditions: Vec<CompiledCondition>,
}

impl Predicate {
    /// Prepare conditions for evaluation, compiling `LIKE` patterns.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Execution`] when a `LIKE` pattern is not a valid
    /// regular expression after `%` expansion.
    pub fn compile(conditions: &[Condition]) -> Result<Self, QueryError> {
        let conditions = conditions
            .iter()
            .map(|condition| {
                let test = match condition.operator {
                    Operator::Eq => Test::Eq(condition.value.to_lowercase()),
                    Operator::NotEq => Test::NotEq(condition.value.to_lowercase()),
                    Operator::Like => Test::Like(like_pattern(&condition.value)?),
                    operator @ (Operator::Lt | Operator::Gt | Operator::LtEq | Operator::GtEq) => {
                        Test::Relational(operator, condition.value.clone())
                    }
                };

                Ok(CompiledCondition {
                    field: condition.field.clone(),
                    test,
                })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        Ok(Self { conditions })
    }

    /// Whether the row passes every condition.
    #[must_use]
    pub fn matches(&self, row: &Row) -> bool {
        self.conditions.iter().all(|condition| {
            let Some(value) = row.get(&condition.field) else {
                return false;
            };

            match &condition.test {
                Test::Eq(literal) => value.to_text().to_lowercase() == *literal,
                Test::NotEq(literal) => value.to_text().to_lowercase() != *literal,
                Test::Like(pattern) => pattern.is_match(&value.to_text()),
                Test::Relational(operator, literal) => {
                    let ordering = value.loose_cmp(literal);

                    match operator {
                        Operator::Lt => ordering == Some(Ordering::Less),
                        Operator::Gt => ordering == Some(Ordering::Greater),
                        Operator::LtEq => {
                            matches!(ordering, Some(Ordering::Less | Ordering::Equal))
                        }
                        Operator::GtEq => {
                            matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                        }
                        Operator::Eq | Operator::NotEq | Operator::Like => false,
                    }
                }
            }
        })
    }
}

fn like_pattern(value: &str) -> Result<Regex, QueryError> {
    RegexBuilder::new(&value.replace('%', ".*"))
        .case_insensitive(true)
        .size_limit(LIKE_SIZE_LIMIT)
        .build()
        .map_err(|error| QueryError::Execution(format!("invalid LIKE pattern '{value}': {error}")))
}
