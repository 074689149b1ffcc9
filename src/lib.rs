//! vmfilter - WHERE-clause filters for the voicemail content store
//!
//! Builds equality predicates over the fixed voicemail schema and combines
//! them with AND/OR. Query execution is left to the store.
//!
//! ```
//! use vmfilter::filter::{from_all_of, from_read_status, trashed_messages};
//!
//! let unread_trash = from_all_of([trashed_messages(), &from_read_status(false)]);
//! assert_eq!(
//!     unread_trash.where_clause(),
//!     Some("(voicemails.state = '1') AND (voicemails.read_status = '0')")
//! );
//! ```

pub mod config;
pub mod filter;
pub mod observability;
pub mod schema;
pub mod voicemail;

pub use config::FilterConfig;
pub use filter::{FilterError, FilterFactory, FilterResult, VoicemailFilter};
pub use voicemail::{Mailbox, Voicemail};
