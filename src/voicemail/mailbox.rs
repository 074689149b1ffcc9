//! Mailbox states

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle bucket of a voicemail, stored as an integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mailbox {
    /// New messages not yet acted upon
    Inbox,
    /// Messages moved to trash
    Deleted,
    /// Messages restored from trash
    Undeleted,
}

impl Mailbox {
    /// Returns the code stored in the state column
    pub fn value(&self) -> i32 {
        match self {
            Mailbox::Inbox => 0,
            Mailbox::Deleted => 1,
            Mailbox::Undeleted => 2,
        }
    }

    /// Maps a stored state code back to a mailbox
    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Mailbox::Inbox),
            1 => Some(Mailbox::Deleted),
            2 => Some(Mailbox::Undeleted),
            _ => None,
        }
    }

    /// Returns the name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Mailbox::Inbox => "INBOX",
            Mailbox::Deleted => "DELETED",
            Mailbox::Undeleted => "UNDELETED",
        }
    }
}

impl fmt::Display for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
