/// All database primary keys are SQLite `INTEGER PRIMARY KEY` rowids.
pub type DbId = i64;

/// Timestamps as written by SQLite `CURRENT_TIMESTAMP` (UTC, no offset).
pub type Timestamp = chrono::NaiveDateTime;
