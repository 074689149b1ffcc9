//! Filter value type

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable WHERE-clause fragment over the voicemail table.
///
/// `None` means no constraint: the filter matches every voicemail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoicemailFilter {
    where_clause: Option<String>,
}

impl VoicemailFilter {
    /// The filter that matches everything
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Wraps raw clause text verbatim. Empty or absent text is unconstrained.
    ///
    /// The text is not validated; it must use the content store's column
    /// names and valid SQL.
    pub fn from_where_clause<S: Into<String>>(clause: Option<S>) -> Self {
        let where_clause = clause.map(Into::into).filter(|c| !c.is_empty());
        Self { where_clause }
    }

    /// Returns the clause, or `None` when unconstrained
    pub fn where_clause(&self) -> Option<&str> {
        self.where_clause.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.where_clause.is_none()
    }
}

impl fmt::Display for VoicemailFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.where_clause.as_deref().unwrap_or(""))
    }
}
