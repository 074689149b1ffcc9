//! Filter factory configuration
//!
//! Defaults target the voicemail content store: clauses are qualified with
//! the `voicemails` table and only ERROR and above is logged, so building
//! filters writes nothing unless the caller lowers the threshold.

use crate::observability::Severity;
use crate::schema::VOICEMAILS_TABLE;

/// Configuration for [`FilterFactory`](crate::filter::FilterFactory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Table name used to qualify every column in equality clauses.
    pub table: String,
    /// Lowest severity the factory writes to the log.
    pub min_log_severity: Severity,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            table: VOICEMAILS_TABLE.to_string(),
            min_log_severity: Severity::Error,
        }
    }
}

impl FilterConfig {
    /// Use a different table qualifier, e.g. a view or alias.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_min_log_severity(mut self, severity: Severity) -> Self {
        self.min_log_severity = severity;
        self
    }

    /// Whether events at `severity` are written
    pub fn logs(&self, severity: Severity) -> bool {
        severity >= self.min_log_severity
    }
}
