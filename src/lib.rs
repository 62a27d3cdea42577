//! jobtrack - a local tracker for job applications
//!
//! Applications live in one SQLite table. The store handles validation,
//! normalization and snapshot export; the query layer searches and filters
//! lists already fetched from it.

pub mod domain;
pub mod error;
pub mod query;
pub mod store;

pub use domain::{JobApplication, JobDraft, JobStatus, Locale, Salary};
pub use error::{JobtrackError, Result};
pub use store::JobStore;
