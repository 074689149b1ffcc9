//! Voicemail filters
//!
//! A [`VoicemailFilter`] wraps an optional WHERE-clause fragment that the
//! content store applies verbatim. Filters are built from partial
//! [`Voicemail`](crate::voicemail::Voicemail) records, from raw text, or by
//! combining other filters.
//!
//! # Joining rules
//!
//! - Absent and empty clauses are skipped
//! - Zero remaining clauses yields the unconstrained filter
//! - One remaining clause is returned unchanged
//! - Otherwise `(a) AND (b) ...` or `(a) OR (b) ...`

mod clause;
mod errors;
mod factory;
mod voicemail_filter;

pub use clause::{concatenate, concatenate_with_and, concatenate_with_or, equality_clause, BoolOp};
pub use errors::{FilterError, FilterErrorCode, FilterResult, Severity};
pub use factory::{
    from_all_of, from_any_of, from_mailbox, from_matching_fields, from_read_status,
    from_where_clause, inbox_messages, trashed_messages, FilterFactory,
};
pub use voicemail_filter::VoicemailFilter;
