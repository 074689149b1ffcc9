//! SQLite Execution Tests
//!
//! Generated clauses are run against an in-memory `voicemails` table to
//! check they are valid SQL and select the expected rows.

use rusqlite::{params, Connection};
use vmfilter::filter::{
    from_all_of, from_any_of, from_matching_fields, from_read_status, inbox_messages,
    trashed_messages, VoicemailFilter,
};
use vmfilter::{Mailbox, Voicemail};

// =============================================================================
// Helper Functions
// =============================================================================

const CREATE_VOICEMAILS: &str = r#"
CREATE TABLE voicemails (
    id INTEGER PRIMARY KEY,
    number TEXT,
    date INTEGER,
    duration INTEGER,
    provider TEXT,
    provider_data TEXT,
    read_status INTEGER DEFAULT 0,
    state INTEGER DEFAULT 0
)
"#;

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute(CREATE_VOICEMAILS, []).unwrap();

    let rows: [(i64, &str, i64, i64, &str, &str, i32, i32); 5] = [
        (1, "+1555000", 1_000, 30, "com.carrier", "a", 0, 0),
        (2, "+1555000", 2_000, 45, "com.carrier", "b", 1, 1),
        (3, "O'Brien", 3_000, 30, "com.other", "c", 1, 2),
        (4, "+1555999", 4_000, 10, "com.carrier", "d", 0, 1),
        (5, "+1555999", 5_000, 60, "com.other", "e", 1, 0),
    ];
    for (id, number, date, duration, provider, data, read, state) in rows {
        conn.execute(
            "INSERT INTO voicemails (id, number, date, duration, provider, provider_data, read_status, state)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![id, number, date, duration, provider, data, read, state],
        )
        .unwrap();
    }
    conn
}

fn select_ids(conn: &Connection, filter: &VoicemailFilter) -> Vec<i64> {
    let sql = match filter.where_clause() {
        Some(clause) => format!("SELECT id FROM voicemails WHERE {} ORDER BY id", clause),
        None => "SELECT id FROM voicemails ORDER BY id".to_string(),
    };
    let mut stmt = conn.prepare(&sql).unwrap();
    let ids = stmt
        .query_map([], |row| row.get::<_, i64>(0))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    ids
}

// =============================================================================
// Execution Tests
// =============================================================================

#[test]
fn test_inbox_selects_inbox_and_undeleted() {
    let conn = setup_db();
    assert_eq!(select_ids(&conn, inbox_messages()), vec![1, 3, 5]);
}

#[test]
fn test_trash_selects_deleted() {
    let conn = setup_db();
    assert_eq!(select_ids(&conn, trashed_messages()), vec![2, 4]);
}

#[test]
fn test_read_status() {
    let conn = setup_db();
    assert_eq!(select_ids(&conn, &from_read_status(true)), vec![2, 3, 5]);
    assert_eq!(select_ids(&conn, &from_read_status(false)), vec![1, 4]);
}

#[test]
fn test_unconstrained_selects_all() {
    let conn = setup_db();
    let filter = from_matching_fields(Some(&Voicemail::empty())).unwrap();
    assert_eq!(select_ids(&conn, &filter), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_field_match_with_quote() {
    let conn = setup_db();
    let record = Voicemail::builder().with_number("O'Brien").build();
    let filter = from_matching_fields(Some(&record)).unwrap();
    assert_eq!(select_ids(&conn, &filter), vec![3]);
}

#[test]
fn test_multi_field_match() {
    let conn = setup_db();
    let record = Voicemail::builder()
        .with_source("com.carrier")
        .with_duration_secs(30)
        .build();
    let filter = from_matching_fields(Some(&record)).unwrap();
    assert_eq!(select_ids(&conn, &filter), vec![1]);
}

#[test]
fn test_timestamp_and_provider_data() {
    let conn = setup_db();
    let record = Voicemail::builder()
        .with_timestamp_millis(4_000)
        .with_provider_data("d")
        .build();
    let filter = from_matching_fields(Some(&record)).unwrap();
    assert_eq!(select_ids(&conn, &filter), vec![4]);
}

#[test]
fn test_nested_combination() {
    let conn = setup_db();
    let by_number = from_matching_fields(Some(
        &Voicemail::builder().with_number("+1555999").build(),
    ))
    .unwrap();

    let unread_inbox = from_all_of([inbox_messages(), &from_read_status(false)]);
    let filter = from_any_of([&unread_inbox, &by_number]);

    assert_eq!(select_ids(&conn, &filter), vec![1, 4, 5]);
}

#[test]
fn test_mailbox_field_from_record() {
    let conn = setup_db();
    let record = Voicemail::builder()
        .with_mailbox(Mailbox::Deleted)
        .with_read(true)
        .build();
    let filter = from_matching_fields(Some(&record)).unwrap();
    assert_eq!(select_ids(&conn, &filter), vec![2]);
}
