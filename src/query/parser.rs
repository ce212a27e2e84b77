//! Clause extraction for `SELECT` statements.
//!
//! The scanner splits the query into words outside quoted literals and uses
//! their byte offsets to cut the text into clause bodies.

use smallvec::SmallVec;

use super::{QueryError, SortDirection};

/// Columns requested by the statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// `*`
    All,

    /// Explicit column names, in request order.
    Fields(Vec<String>),
}

/// Comparison operator of a `WHERE` condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Eq,

    /// `!=` or `<>`
    NotEq,

    /// `<`
    Lt,

    /// `>`
    Gt,

    /// `<=`
    LtEq,

    /// `>=`
    GtEq,

    /// `LIKE`
    Like,
}

/// A single `<field> <op> <value>` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Column name.
    pub field: String,

    /// Operator.
    pub operator: Operator,

    /// Literal with surrounding quotes removed.
    pub value: String,
}

/// One `ORDER BY` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerm {
    /// Column name.
    pub field: String,

    /// Direction, ascending unless `DESC` follows the field.
    pub direction: SortDirection,
}

/// A parsed `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    /// Requested columns.
    pub projection: Projection,

    /// Conjunction of conditions. Empty means every row passes.
    pub conditions: Vec<Condition>,

    /// Sort keys, most significant first.
    pub order: Vec<OrderTerm>,

    /// Row cap applied after filtering and ordering.
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Word<'q> {
    text: &'q str,
    start: usize,
    end: usize,
}

impl Word<'_> {
    fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    Where,
    OrderBy,
    Limit,
}

#[derive(Debug, Clone, Copy)]
struct Marker {
    clause: Clause,
    start: usize,
    body_start: usize,
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Words outside quoted literals, with byte offsets into `text`.
fn scan_words(text: &str) -> Vec<Word<'_>> {
    let mut words = Vec::new();
    let mut quote: Option<char> = None;
    let mut start: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        if let Some(open) = quote {
            if ch == open {
                quote = None;
            }

            continue;
        }

        if is_word_char(ch) {
            start.get_or_insert(index);

            continue;
        }

        if let Some(begin) = start.take() {
            push_word(text, begin, index, &mut words);
        }

        if is_quote(ch) {
            quote = Some(ch);
        }
    }

    if let Some(begin) = start {
        push_word(text, begin, text.len(), &mut words);
    }

    words
}

fn push_word<'q>(text: &'q str, start: usize, end: usize, words: &mut Vec<Word<'q>>) {
    if let Some(word) = text.get(start..end) {
        words.push(Word {
            text: word,
            start,
            end,
        });
    }
}

fn slice(text: &str, start: usize, end: usize) -> &str {
    text.get(start..end).unwrap_or_default()
}

/// Parse a trimmed query string.
///
/// # Errors
///
/// Returns [`QueryError::Unsupported`] when the statement is not a `SELECT`
/// and [`QueryError::Syntax`] when it lacks `FROM` or has a malformed `LIMIT`.
pub fn parse(query: &str) -> Result<SelectStatement, QueryError> {
    let words = scan_words(query);

    let Some(select) = words.first().filter(|word| word.start == 0 && word.is("select")) else {
        return Err(QueryError::Unsupported);
    };

    let Some((from_index, from)) = words
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, word)| word.is("from"))
    else {
        return Err(QueryError::Syntax(
            "Use: SELECT fields FROM companies".to_string(),
        ));
    };

    let projection = parse_projection(slice(query, select.end, from.start))?;

    let tail = words.get(from_index + 1..).unwrap_or_default();
    let markers = find_markers(tail);

    let mut statement = SelectStatement {
        projection,
        conditions: Vec::new(),
        order: Vec::new(),
        limit: None,
    };

    for marker in &markers {
        let body_end = markers
            .iter()
            .map(|other| other.start)
            .filter(|start| *start > marker.body_start)
            .min()
            .unwrap_or(query.len());

        let body_words: SmallVec<[Word<'_>; 16]> = tail
            .iter()
            .copied()
            .filter(|word| word.start >= marker.body_start && word.end <= body_end)
            .collect();

        match marker.clause {
            Clause::Where => {
                statement.conditions =
                    parse_conditions(query, marker.body_start, body_end, &body_words);
            }
            Clause::OrderBy => {
                statement.order = parse_order(slice(query, marker.body_start, body_end));
            }
            Clause::Limit => {
                statement.limit = Some(parse_limit(slice(query, marker.body_start, body_end))?);
            }
        }
    }

    Ok(statement)
}

fn parse_projection(fields: &str) -> Result<Projection, QueryError> {
    let fields = fields.trim();

    if fields.is_empty() {
        return Err(QueryError::Syntax(
            "Use: SELECT fields FROM companies".to_string(),
        ));
    }

    if fields == "*" {
        return Ok(Projection::All);
    }

    Ok(Projection::Fields(
        fields
            .split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect(),
    ))
}

/// First occurrence of each clause keyword after `FROM`.
fn find_markers(words: &[Word<'_>]) -> SmallVec<[Marker; 3]> {
    let mut markers: SmallVec<[Marker; 3]> = SmallVec::new();

    for (index, word) in words.iter().enumerate() {
        if word.is("where") && !has_clause(&markers, Clause::Where) {
            markers.push(Marker {
                clause: Clause::Where,
                start: word.start,
                body_start: word.end,
            });
        } else if word.is("order")
            && let Some(by) = words.get(index + 1).filter(|next| next.is("by"))
            && !has_clause(&markers, Clause::OrderBy)
        {
            markers.push(Marker {
                clause: Clause::OrderBy,
                start: word.start,
                body_start: by.end,
            });
        } else if word.is("limit") && !has_clause(&markers, Clause::Limit) {
            markers.push(Marker {
                clause: Clause::Limit,
                start: word.start,
                body_start: word.end,
            });
        }
    }

    markers
}

fn has_clause(markers: &[Marker], clause: Clause) -> bool {
    markers.iter().any(|marker| marker.clause == clause)
}

/// Split the `WHERE` body on `AND` and keep the conditions that parse.
fn parse_conditions(
    query: &str,
    body_start: usize,
    body_end: usize,
    body_words: &[Word<'_>],
) -> Vec<Condition> {
    let mut conditions = Vec::new();
    let mut segment_start = body_start;

    for word in body_words.iter().filter(|word| word.is("and")) {
        conditions.extend(parse_condition(slice(query, segment_start, word.start)));
        segment_start = word.end;
    }

    conditions.extend(parse_condition(slice(query, segment_start, body_end)));

    conditions
}

/// `<identifier> <operator> <value>`, or `None` when the text has another shape.
fn parse_condition(text: &str) -> Option<Condition> {
    let text = text.trim();

    let field_end = text
        .char_indices()
        .find(|(_, ch)| !is_word_char(*ch))
        .map_or(text.len(), |(index, _)| index);

    let field = text.get(..field_end).filter(|field| !field.is_empty())?;
    let rest = text.get(field_end..)?.trim_start();

    let (operator, rest) = split_operator(rest)?;
    let rest = rest.trim();

    if rest.is_empty() {
        return None;
    }

    Some(Condition {
        field: field.to_string(),
        operator,
        value: strip_quotes(rest).to_string(),
    })
}

fn split_operator(text: &str) -> Option<(Operator, &str)> {
    const SYMBOLS: [(&str, Operator); 7] = [
        ("<=", Operator::LtEq),
        (">=", Operator::GtEq),
        ("<>", Operator::NotEq),
        ("!=", Operator::NotEq),
        ("=", Operator::Eq),
        ("<", Operator::Lt),
        (">", Operator::Gt),
    ];

    for (symbol, operator) in SYMBOLS {
        if let Some(rest) = text.strip_prefix(symbol) {
            return Some((operator, rest));
        }
    }

    let keyword = text.get(..4)?;
    let rest = text.get(4..)?;

    if keyword.eq_ignore_ascii_case("like") && !rest.starts_with(is_word_char) {
        return Some((Operator::Like, rest));
    }

    None
}

/// Remove one leading and one trailing quote character.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix(is_quote).unwrap_or(value);

    value.strip_suffix(is_quote).unwrap_or(value)
}

fn parse_order(body: &str) -> Vec<OrderTerm> {
    body.split(',')
        .filter_map(|term| {
            let words = scan_words(term);
            let field = words.first()?;

            let direction = match words.get(1) {
                Some(word) if word.is("desc") => SortDirection::Desc,
                _ => SortDirection::Asc,
            };

            Some(OrderTerm {
                field: field.text.to_string(),
                direction,
            })
        })
        .collect()
}

/// Reads the leading digits of a `LIMIT` body. Trailing text is ignored and
/// values too large for `usize` saturate.
fn parse_limit(body: &str) -> Result<usize, QueryError> {
    let body = body.trim_start();
    let digits = body
        .find(|c: char| !c.is_ascii_digit())
        .map_or(body, |end| slice(body, 0, end));

    if digits.is_empty() {
        return Err(QueryError::Syntax(
            "LIMIT expects a non-negative whole number".to_string(),
        ));
    }

    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}
