//! Voicemail table schema
//!
//! Table and column names owned by the voicemail content store.
//! Filters are rendered against these names verbatim.

/// Name of the voicemail table.
pub const VOICEMAILS_TABLE: &str = "voicemails";

/// Column names of the voicemail table.
pub mod columns {
    /// Read flag, stored as 0/1
    pub const READ_STATUS: &str = "read_status";
    /// Mailbox state code
    pub const STATE: &str = "state";
    /// Caller phone number
    pub const NUMBER: &str = "number";
    /// Package name of the voicemail source
    pub const PROVIDER: &str = "provider";
    /// Opaque data owned by the source
    pub const PROVIDER_DATA: &str = "provider_data";
    /// Duration in seconds
    pub const DURATION: &str = "duration";
    /// Timestamp in milliseconds since epoch
    pub const DATE: &str = "date";
}

/// Filterable fields of a voicemail record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoicemailField {
    ReadStatus,
    Mailbox,
    Number,
    Source,
    ProviderData,
    Duration,
    Timestamp,
}

impl VoicemailField {
    /// All fields, in the order clauses are emitted
    pub const ALL: [VoicemailField; 7] = [
        VoicemailField::ReadStatus,
        VoicemailField::Mailbox,
        VoicemailField::Number,
        VoicemailField::Source,
        VoicemailField::ProviderData,
        VoicemailField::Duration,
        VoicemailField::Timestamp,
    ];

    /// Returns the column this field is stored in
    pub fn column(&self) -> &'static str {
        match self {
            VoicemailField::ReadStatus => columns::READ_STATUS,
            VoicemailField::Mailbox => columns::STATE,
            VoicemailField::Number => columns::NUMBER,
            VoicemailField::Source => columns::PROVIDER,
            VoicemailField::ProviderData => columns::PROVIDER_DATA,
            VoicemailField::Duration => columns::DURATION,
            VoicemailField::Timestamp => columns::DATE,
        }
    }
}
