//! Storage layer for jobtrack.
//!
//! A single SQLite file holds the `jobs` table (plus a small `meta` table for
//! store-level flags). The store is opened once and passed to whoever needs it.
//!
//! # Example
//!
//! ```no_run
//! use jobtrack::domain::JobDraft;
//! use jobtrack::store::JobStore;
//! use std::path::Path;
//!
//! let store = JobStore::open(Path::new("/tmp/jobTracker.db"))?;
//! let id = store.create(&JobDraft::new("Company A", "Engineer", "2024-09-21", "Applied"))?;
//! let job = store.get_by_id(id)?;
//! # Ok::<(), jobtrack::JobtrackError>(())
//! ```

mod job_store;
pub mod schema;
pub mod snapshot;

pub use job_store::{DEFAULT_DB_FILE, JobStore, sample_drafts};
pub use snapshot::{CopyToShare, ExportOptions, RevealShare, ShareRequest, ShareSink, Snapshot};
