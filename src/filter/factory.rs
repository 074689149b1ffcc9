//! Filter factory
//!
//! Builds [`VoicemailFilter`]s from field matches, raw clause text, or other
//! filters. Field matches produce one equality term per present field,
//! joined with AND.

use std::sync::OnceLock;

use crate::config::FilterConfig;
use crate::observability::{log_event_with_fields, Event};
use crate::schema::VoicemailField;
use crate::voicemail::{Mailbox, Voicemail};

use super::clause::{concatenate, equality_clause, BoolOp};
use super::errors::{FilterError, FilterResult};
use super::voicemail_filter::VoicemailFilter;

/// Creates filters against a configured voicemail table
#[derive(Debug, Clone, Default)]
pub struct FilterFactory {
    config: FilterConfig,
}

impl FilterFactory {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Wraps raw clause text; see [`VoicemailFilter::from_where_clause`]
    pub fn from_where_clause(&self, clause: Option<&str>) -> VoicemailFilter {
        VoicemailFilter::from_where_clause(clause)
    }

    /// Matches every field set on `record`.
    ///
    /// Fails with `InvalidArgument` when no record is given. A record with
    /// no fields set yields the unconstrained filter.
    pub fn from_matching_fields(
        &self,
        record: Option<&Voicemail>,
    ) -> FilterResult<VoicemailFilter> {
        let record = match record {
            Some(record) => record,
            None => {
                self.emit(Event::FilterRejected, &[("reason", "missing record")]);
                return Err(FilterError::invalid_argument(
                    "cannot create filter from a missing record",
                ));
            }
        };
        Ok(self.matching_fields(record))
    }

    /// Matches voicemails in `mailbox`
    pub fn from_mailbox(&self, mailbox: Mailbox) -> VoicemailFilter {
        self.matching_fields(&Voicemail::builder().with_mailbox(mailbox).build())
    }

    /// Matches voicemails with the given read status
    pub fn from_read_status(&self, is_read: bool) -> VoicemailFilter {
        self.matching_fields(&Voicemail::builder().with_read(is_read).build())
    }

    /// Combines filters with AND. Unconstrained inputs are skipped.
    pub fn from_all_of<'a, I>(&self, filters: I) -> VoicemailFilter
    where
        I: IntoIterator<Item = &'a VoicemailFilter>,
    {
        self.combine(BoolOp::And, filters)
    }

    /// Combines filters with OR.
    ///
    /// Unconstrained inputs are skipped rather than making the whole filter
    /// unconstrained, so `any_of(x, everything)` is `x`.
    pub fn from_any_of<'a, I>(&self, filters: I) -> VoicemailFilter
    where
        I: IntoIterator<Item = &'a VoicemailFilter>,
    {
        self.combine(BoolOp::Or, filters)
    }

    fn combine<'a, I>(&self, op: BoolOp, filters: I) -> VoicemailFilter
    where
        I: IntoIterator<Item = &'a VoicemailFilter>,
    {
        let mut inputs = 0usize;
        let clause = concatenate(
            op,
            filters.into_iter().map(|filter| {
                inputs += 1;
                filter.where_clause()
            }),
        );

        self.emit(
            Event::FilterCombined,
            &[
                ("clause", clause.as_deref().unwrap_or("")),
                ("inputs", &inputs.to_string()),
                ("op", op.as_str()),
            ],
        );
        VoicemailFilter::from_where_clause(clause)
    }

    fn matching_fields(&self, record: &Voicemail) -> VoicemailFilter {
        let terms: Vec<String> = VoicemailField::ALL
            .iter()
            .filter_map(|field| {
                Self::field_value(record, *field)
                    .map(|value| equality_clause(&self.config.table, field.column(), &value))
            })
            .collect();

        let clause = concatenate(BoolOp::And, terms.iter().map(|term| Some(term.as_str())));

        self.emit(
            Event::FilterBuilt,
            &[
                ("clause", clause.as_deref().unwrap_or("")),
                ("fields", &terms.len().to_string()),
            ],
        );
        VoicemailFilter::from_where_clause(clause)
    }

    /// Writes `event` if the configured threshold allows it
    fn emit(&self, event: Event, fields: &[(&str, &str)]) {
        if self.config.logs(event.severity()) {
            log_event_with_fields(event, fields);
        }
    }

    /// Renders a present field as the literal stored in its column
    fn field_value(record: &Voicemail, field: VoicemailField) -> Option<String> {
        match field {
            VoicemailField::ReadStatus => {
                record.is_read().map(|read| String::from(if read { "1" } else { "0" }))
            }
            VoicemailField::Mailbox => record.mailbox().map(|m| m.value().to_string()),
            VoicemailField::Number => record.number().map(str::to_string),
            VoicemailField::Source => record.source().map(str::to_string),
            VoicemailField::ProviderData => record.provider_data().map(str::to_string),
            VoicemailField::Duration => record.duration_secs().map(|d| d.to_string()),
            VoicemailField::Timestamp => record.timestamp_millis().map(|t| t.to_string()),
        }
    }
}

fn default_factory() -> &'static FilterFactory {
    static FACTORY: OnceLock<FilterFactory> = OnceLock::new();
    FACTORY.get_or_init(FilterFactory::default)
}

/// Wraps raw clause text against the default table
pub fn from_where_clause(clause: Option<&str>) -> VoicemailFilter {
    default_factory().from_where_clause(clause)
}

/// Matches every field set on `record`
pub fn from_matching_fields(record: Option<&Voicemail>) -> FilterResult<VoicemailFilter> {
    default_factory().from_matching_fields(record)
}

pub fn from_mailbox(mailbox: Mailbox) -> VoicemailFilter {
    default_factory().from_mailbox(mailbox)
}

pub fn from_read_status(is_read: bool) -> VoicemailFilter {
    default_factory().from_read_status(is_read)
}

pub fn from_all_of<'a, I>(filters: I) -> VoicemailFilter
where
    I: IntoIterator<Item = &'a VoicemailFilter>,
{
    default_factory().from_all_of(filters)
}

pub fn from_any_of<'a, I>(filters: I) -> VoicemailFilter
where
    I: IntoIterator<Item = &'a VoicemailFilter>,
{
    default_factory().from_any_of(filters)
}

/// Voicemails in the inbox, including ones restored from trash
pub fn inbox_messages() -> &'static VoicemailFilter {
    static INBOX: OnceLock<VoicemailFilter> = OnceLock::new();
    INBOX.get_or_init(|| {
        from_any_of([&from_mailbox(Mailbox::Inbox), &from_mailbox(Mailbox::Undeleted)])
    })
}

/// Voicemails in the trash
pub fn trashed_messages() -> &'static VoicemailFilter {
    static TRASHED: OnceLock<VoicemailFilter> = OnceLock::new();
    TRASHED.get_or_init(|| from_mailbox(Mailbox::Deleted))
}
