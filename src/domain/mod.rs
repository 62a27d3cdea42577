//! Domain types for jobtrack
//!
//! - JobApplication: a persisted application, and JobDraft, its raw input form
//! - JobStatus: closed status set with one shared label/colour table
//! - Salary: whole currency units, formatted only for display
//! - date: `YYYY-MM-DD` normalization and locale display

pub mod application;
pub mod date;
pub mod locale;
pub mod salary;
pub mod status;

pub use application::{JobApplication, JobDraft, ValidJob};
pub use locale::Locale;
pub use salary::Salary;
pub use status::{JobStatus, STATUS_STYLES, StatusStyle};
