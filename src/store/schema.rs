//! Database schema definitions

/// SQL to create the jobs table
pub const CREATE_JOBS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company TEXT NOT NULL,
    position TEXT NOT NULL,
    jobDate TEXT NOT NULL,
    status TEXT NOT NULL,
    notes TEXT,
    salary INTEGER,
    location TEXT
)
"#;

/// SQL to create the meta table (store-level flags such as seeding)
pub const CREATE_META_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
"#;

/// Drops every table; SQLite discards the table's AUTOINCREMENT counter with it
pub const DROP_ALL: &str = r#"
DROP TABLE IF EXISTS jobs;
DROP TABLE IF EXISTS meta;
"#;

/// Column list shared by every SELECT so row indexes stay in step
pub const JOB_COLUMNS: &str = "id, company, position, jobDate, status, notes, salary, location";

/// Meta key recording that sample rows were inserted
pub const SAMPLES_SEEDED_KEY: &str = "samples_seeded";

/// All schema creation statements
pub fn all_schema_statements() -> [&'static str; 2] {
    [CREATE_JOBS_TABLE, CREATE_META_TABLE]
}
