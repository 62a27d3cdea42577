//! In-memory query layer.
//!
//! Works on the list a caller already fetched from the store; never touches
//! the store itself.

pub mod calendar;
pub mod filters;

pub use calendar::{CalendarMark, calendar_marks, jobs_on_date};
pub use filters::{filter_by_date_range, filter_by_status, search, upcoming_interviews};
