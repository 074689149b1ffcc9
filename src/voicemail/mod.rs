//! Voicemail records
//!
//! A [`Voicemail`] carries an optional value per filterable field. Filters
//! only look at fields that are present; absent fields contribute nothing.

mod mailbox;
mod record;

pub use mailbox::Mailbox;
pub use record::{Voicemail, VoicemailBuilder};
