//! WHERE-clause fragments
//!
//! Equality terms and AND/OR concatenation. Absent or empty clauses are
//! skipped; a single remaining clause is returned as-is, more than one is
//! parenthesized and joined with the operator.

use std::fmt;

/// Boolean operator used to join clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoolOp::And => "AND",
            BoolOp::Or => "OR",
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds `table.column = 'value'` with the value quoted as a SQL literal
pub fn equality_clause(table: &str, column: &str, value: &str) -> String {
    let mut clause = String::with_capacity(table.len() + column.len() + value.len() + 8);
    clause.push_str(table);
    clause.push('.');
    clause.push_str(column);
    clause.push_str(" = ");
    push_escaped_literal(&mut clause, value);
    clause
}

/// Appends `value` as a single-quoted literal, doubling embedded quotes
fn push_escaped_literal(out: &mut String, value: &str) {
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
}

/// Joins the present clauses with AND
pub fn concatenate_with_and<'a, I>(clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    concatenate(BoolOp::And, clauses)
}

/// Joins the present clauses with OR
pub fn concatenate_with_or<'a, I>(clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    concatenate(BoolOp::Or, clauses)
}

/// Joins the present, non-empty clauses with `op`
pub fn concatenate<'a, I>(op: BoolOp, clauses: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let present: Vec<&str> = clauses
        .into_iter()
        .flatten()
        .filter(|clause| !clause.is_empty())
        .collect();

    match present.as_slice() {
        [] => None,
        [only] => Some((*only).to_string()),
        many => {
            let separator = format!(" {} ", op.as_str());
            Some(
                many.iter()
                    .map(|clause| format!("({})", clause))
                    .collect::<Vec<_>>()
                    .join(&separator),
            )
        }
    }
}
