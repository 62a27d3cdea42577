//! JobStore: the SQLite-backed repository for job applications.
//!
//! One connection, one `jobs` table. Every mutation is a single statement
//! and durable when it returns.

use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::schema::{self, JOB_COLUMNS, SAMPLES_SEEDED_KEY};
use super::snapshot::{self, ExportOptions, ShareSink, Snapshot};
use crate::domain::date;
use crate::domain::{JobApplication, JobDraft, JobStatus, Salary};
use crate::error::{JobtrackError, Result};

/// Default store file name
pub const DEFAULT_DB_FILE: &str = "jobTracker.db";

/// JobStore owns the connection to the store file.
pub struct JobStore {
    conn: Connection,

    /// None for in-memory stores
    path: Option<PathBuf>,

    /// Whether `open` had to create the file
    created: bool,
}

impl std::fmt::Debug for JobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobStore")
            .field("path", &self.path)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

impl JobStore {
    /// Open or create the store file and make sure the schema exists.
    ///
    /// Opening an already initialized file only opens a handle.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                JobtrackError::StoreUnavailable(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let created = !path.exists();
        let conn = Connection::open(path)
            .map_err(|e| JobtrackError::StoreUnavailable(format!("cannot open {}: {}", path.display(), e)))?;

        let store = Self {
            conn,
            path: Some(path.to_path_buf()),
            created,
        };
        store
            .initialize()
            .map_err(|e| JobtrackError::StoreUnavailable(format!("cannot open {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), created, "Opened job store");
        Ok(store)
    }

    /// Open an in-memory store (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| JobtrackError::StoreUnavailable(e.to_string()))?;
        let store = Self {
            conn,
            path: None,
            created: true,
        };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        let mode: String = self
            .conn
            .query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        tracing::debug!(journal_mode = %mode, "Journal mode set");
        self.initialize_schema()
    }

    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Path of the store file, if it has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True when this handle created the store file.
    pub fn was_created(&self) -> bool {
        self.created
    }

    // ========== Record Operations ==========

    /// Validate and insert a new application, returning its id.
    pub fn create(&self, draft: &JobDraft) -> Result<i64> {
        let job = draft.validate()?;
        self.conn.execute(
            r#"
            INSERT INTO jobs (company, position, jobDate, status, notes, salary, location)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                job.company,
                job.position,
                date::to_storage(job.job_date),
                job.status.as_str(),
                job.notes,
                job.salary.map(|s| s.amount()),
                job.location,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::info!(id, company = %job.company, "Job added");
        Ok(id)
    }

    /// All applications in id order; empty when the store is empty.
    ///
    /// Rows whose values cannot be read as an application (a status outside
    /// the known set, a malformed date) are logged and left out.
    pub fn get_all(&self) -> Result<Vec<JobApplication>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM jobs ORDER BY id", JOB_COLUMNS))?;
        let rows = stmt.query_map([], row_to_job)?;

        let mut jobs = Vec::new();
        for row in rows {
            match row {
                Ok(job) => jobs.push(job),
                Err(e @ (rusqlite::Error::FromSqlConversionFailure(..) | rusqlite::Error::InvalidColumnType(..))) => {
                    tracing::warn!(error = %e, "Skipping unreadable job row");
                }
                Err(e) => return Err(e.into()),
            }
        }

        if jobs.is_empty() {
            tracing::debug!("No jobs found in the store");
        }
        Ok(jobs)
    }

    /// Look up one application; a missing id is `Ok(None)`.
    pub fn get_by_id(&self, id: i64) -> Result<Option<JobApplication>> {
        let job = self
            .conn
            .query_row(
                &format!("SELECT {} FROM jobs WHERE id = ?1", JOB_COLUMNS),
                [id],
                row_to_job,
            )
            .optional()?;

        if job.is_none() {
            tracing::debug!(id, "No job found");
        }
        Ok(job)
    }

    /// Replace every mutable field of an existing application.
    pub fn update(&self, id: i64, draft: &JobDraft) -> Result<()> {
        let job = draft.validate()?;
        let changed = self.conn.execute(
            r#"
            UPDATE jobs
            SET company = ?1, position = ?2, jobDate = ?3, status = ?4, notes = ?5, salary = ?6, location = ?7
            WHERE id = ?8
            "#,
            params![
                job.company,
                job.position,
                date::to_storage(job.job_date),
                job.status.as_str(),
                job.notes,
                job.salary.map(|s| s.amount()),
                job.location,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(JobtrackError::NotFound(id));
        }
        tracing::info!(id, "Job updated");
        Ok(())
    }

    /// Remove an application. Returns whether a row was deleted; a missing id
    /// is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute("DELETE FROM jobs WHERE id = ?1", [id])? > 0;
        if deleted {
            tracing::info!(id, "Job deleted");
        } else {
            tracing::debug!(id, "Delete of missing job ignored");
        }
        Ok(deleted)
    }

    /// Count all applications
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    // ========== Seeding ==========

    /// Insert the demo applications, at most once per store lifetime.
    ///
    /// Seeds only when the store is empty and has never been seeded. Returns
    /// whether rows were inserted.
    pub fn seed_samples(&mut self) -> Result<bool> {
        if self.meta_get(SAMPLES_SEEDED_KEY)?.is_some() {
            tracing::debug!("Samples already seeded");
            return Ok(false);
        }
        if self.count()? > 0 {
            tracing::debug!("Store has data, not seeding samples");
            return Ok(false);
        }

        let drafts = sample_drafts();
        let tx = self.conn.transaction()?;
        for draft in &drafts {
            let job = draft.validate()?;
            tx.execute(
                r#"
                INSERT INTO jobs (company, position, jobDate, status, notes, salary, location)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    job.company,
                    job.position,
                    date::to_storage(job.job_date),
                    job.status.as_str(),
                    job.notes,
                    job.salary.map(|s| s.amount()),
                    job.location,
                ],
            )?;
        }
        tx.execute(
            "INSERT OR REPLACE INTO meta (key, value) VALUES (?1, ?2)",
            params![SAMPLES_SEEDED_KEY, "1"],
        )?;
        tx.commit()?;

        tracing::info!(count = drafts.len(), "Seeded sample jobs");
        Ok(true)
    }

    fn meta_get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM meta WHERE key = ?1", [key], |row| row.get(0))
            .optional()
            .map_err(Into::into)
    }

    // ========== Snapshot / Reset ==========

    /// Fold the write-ahead log into the main file so a file copy holds every
    /// committed row.
    ///
    /// Fails with `Export` when another connection keeps the log from being
    /// fully checkpointed.
    pub fn checkpoint(&self) -> Result<()> {
        let (busy, log_frames, checkpointed): (i64, i64, i64) = self
            .conn
            .query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(|e| JobtrackError::Export(format!("checkpoint failed: {}", e)))?;

        if busy != 0 {
            return Err(JobtrackError::Export(format!(
                "checkpoint blocked by another connection ({} of {} log frames copied)",
                checkpointed, log_frames
            )));
        }
        tracing::debug!(log_frames, checkpointed, "WAL checkpointed");
        Ok(())
    }

    /// Copy the store file to the export location and hand it to `sink`.
    pub fn export_snapshot(&self, options: &ExportOptions, sink: &dyn ShareSink) -> Result<Snapshot> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| JobtrackError::Export("in-memory store has no file to export".to_string()))?;
        self.checkpoint()?;
        snapshot::export_file(path, options, sink)
    }

    /// Destroy all data and return a handle over a fresh, empty schema.
    ///
    /// The connection is closed before the file is removed.
    pub fn reset(self) -> Result<Self> {
        let Some(path) = self.path.clone() else {
            self.conn.execute_batch(schema::DROP_ALL)?;
            self.initialize_schema()?;
            tracing::info!("In-memory store reset");
            return Ok(self);
        };

        self.conn.close().map_err(|(_, e)| {
            JobtrackError::StoreUnavailable(format!("cannot close {}: {}", path.display(), e))
        })?;
        remove_store_files(&path)?;

        tracing::info!(path = %path.display(), "Store deleted, re-initializing");
        Self::open(&path)
    }
}

/// The three demo applications.
pub fn sample_drafts() -> Vec<JobDraft> {
    vec![
        JobDraft::new("Company A", "Software Engineer", "2024-09-21", "Applied")
            .with_notes("Interview on Monday")
            .with_salary("100000")
            .with_location("New York"),
        JobDraft::new("Company B", "Designer", "2024-09-18", "Interview")
            .with_notes("Interview completed, waiting for response")
            .with_salary("70000")
            .with_location("Los Angeles"),
        JobDraft::new("Company C", "Manager", "2024-09-15", "Offered")
            .with_notes("Offer accepted, start next month")
            .with_salary("120000")
            .with_location("Chicago"),
    ]
}

fn row_to_job(row: &Row) -> rusqlite::Result<JobApplication> {
    let date_str: String = row.get(3)?;
    let job_date = date::normalize_job_date(&date_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
    })?;

    let status_str: String = row.get(4)?;
    let status: JobStatus = status_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
    })?;

    Ok(JobApplication {
        id: row.get(0)?,
        company: row.get(1)?,
        position: row.get(2)?,
        job_date,
        status,
        notes: row.get(5)?,
        salary: salary_column(row, 6)?,
        location: row.get(7)?,
    })
}

/// Salaries are integers; text left by older writers (`"$100,000"`) is
/// sanitized the same way input is.
fn salary_column(row: &Row, idx: usize) -> rusqlite::Result<Option<Salary>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(amount) => Ok(Some(Salary::new(amount))),
        ValueRef::Text(text) => Salary::parse_input(&String::from_utf8_lossy(text))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        other => Err(rusqlite::Error::InvalidColumnType(idx, "salary".to_string(), other.data_type())),
    }
}

fn sidecar_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn remove_store_files(path: &Path) -> Result<()> {
    for file in [path.to_path_buf(), sidecar_path(path, "-wal"), sidecar_path(path, "-shm")] {
        match fs::remove_file(&file) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(JobtrackError::StoreUnavailable(format!(
                    "cannot delete {}: {}",
                    file.display(),
                    e
                )));
            }
        }
    }
    Ok(())
}
