//! Search and filters over a fetched list of applications.
//!
//! Every function is pure, takes the caller's slice and keeps input order
//! unless stated otherwise.

use chrono::NaiveDate;

use crate::domain::{JobApplication, JobStatus};

/// Case-insensitive substring match on company, position and status.
///
/// The term is matched as typed, surrounding whitespace included. An empty
/// term returns the input unchanged.
pub fn search(records: &[JobApplication], term: &str) -> Vec<JobApplication> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|job| {
            job.company.to_lowercase().contains(&needle)
                || job.position.to_lowercase().contains(&needle)
                || job.status.as_str().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Inclusive date-range filter on `job_date`.
///
/// Either bound may be omitted. An inverted range (`start > end`) matches
/// nothing.
pub fn filter_by_date_range(
    records: &[JobApplication],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<JobApplication> {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Vec::new();
        }
    }

    records
        .iter()
        .filter(|job| start.is_none_or(|s| job.job_date >= s) && end.is_none_or(|e| job.job_date <= e))
        .cloned()
        .collect()
}

pub fn filter_by_status(records: &[JobApplication], status: JobStatus) -> Vec<JobApplication> {
    records.iter().filter(|job| job.status == status).cloned().collect()
}

/// Interview records within the range, soonest first.
pub fn upcoming_interviews(
    records: &[JobApplication],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<JobApplication> {
    let interviews = filter_by_status(records, JobStatus::Interview);
    let mut upcoming = filter_by_date_range(&interviews, start, end);
    upcoming.sort_by_key(|job| (job.job_date, job.id));
    upcoming
}
