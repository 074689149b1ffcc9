//! Voicemail record with optional fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Mailbox;

/// A voicemail record, or a partial one used as a field match.
///
/// Every field is optional. Records are immutable; use
/// [`Voicemail::builder`] to construct one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voicemail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    is_read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mailbox: Option<Mailbox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_secs: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp_millis: Option<i64>,
}

impl Voicemail {
    /// Returns a builder with no fields set
    pub fn builder() -> VoicemailBuilder {
        VoicemailBuilder::default()
    }

    /// Returns a record with no fields set
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has_read(&self) -> bool {
        self.is_read.is_some()
    }

    pub fn is_read(&self) -> Option<bool> {
        self.is_read
    }

    pub fn has_mailbox(&self) -> bool {
        self.mailbox.is_some()
    }

    pub fn mailbox(&self) -> Option<Mailbox> {
        self.mailbox
    }

    pub fn has_number(&self) -> bool {
        self.number.is_some()
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Package name of the application that delivered the voicemail
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn has_provider_data(&self) -> bool {
        self.provider_data.is_some()
    }

    pub fn provider_data(&self) -> Option<&str> {
        self.provider_data.as_deref()
    }

    pub fn has_duration(&self) -> bool {
        self.duration_secs.is_some()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> Option<i64> {
        self.duration_secs
    }

    pub fn has_timestamp(&self) -> bool {
        self.timestamp_millis.is_some()
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp_millis
    }
}

/// Builder for [`Voicemail`]
#[derive(Debug, Clone, Default)]
pub struct VoicemailBuilder {
    record: Voicemail,
}

impl VoicemailBuilder {
    pub fn with_read(mut self, is_read: bool) -> Self {
        self.record.is_read = Some(is_read);
        self
    }

    pub fn with_mailbox(mut self, mailbox: Mailbox) -> Self {
        self.record.mailbox = Some(mailbox);
        self
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.record.number = Some(number.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.record.source = Some(source.into());
        self
    }

    pub fn with_provider_data(mut self, data: impl Into<String>) -> Self {
        self.record.provider_data = Some(data.into());
        self
    }

    pub fn with_duration_secs(mut self, secs: i64) -> Self {
        self.record.duration_secs = Some(secs);
        self
    }

    pub fn with_timestamp_millis(mut self, millis: i64) -> Self {
        self.record.timestamp_millis = Some(millis);
        self
    }

    pub fn with_timestamp(self, at: DateTime<Utc>) -> Self {
        self.with_timestamp_millis(at.timestamp_millis())
    }

    pub fn build(self) -> Voicemail {
        self.record
    }
}
