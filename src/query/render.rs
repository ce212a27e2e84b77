//! Terminal rendering of query results.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use super::{ColumnType, QueryResult};

/// Errors while writing a rendered result.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to the output failed.
    #[error("failed to write query output")]
    Io(#[from] io::Error),
}

/// Write the page as a table followed by a one-line page summary.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_to(mut out: impl io::Write, result: &QueryResult) -> Result<(), RenderError> {
    if result.columns.is_empty() {
        writeln!(out, "No records found.")?;

        return write_summary(&mut out, result);
    }

    let mut builder = Builder::default();

    builder.push_record(result.columns.iter().map(|column| column.header.clone()));

    for row in &result.records {
        builder.push_record(result.columns.iter().map(|column| {
            row.get(&column.field)
                .map(|value| value.to_text().into_owned())
                .unwrap_or_default()
        }));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    for (index, column) in result.columns.iter().enumerate() {
        if column.column_type == ColumnType::Number {
            table.modify(Columns::new(index..=index), Alignment::right());
        }
    }

    writeln!(out, "{table}")?;

    write_summary(&mut out, result)
}

fn write_summary(out: &mut impl io::Write, result: &QueryResult) -> Result<(), RenderError> {
    let pagination = &result.pagination;

    writeln!(
        out,
        "Page {} of {} ({} records)",
        pagination.current_page,
        pagination.total_pages.max(1),
        pagination.total_records
    )?;

    Ok(())
}
