//! Calendar view helpers: which days carry applications, and what is on a day.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::{JobApplication, JobStatus};

/// Marker for one calendar day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CalendarMark {
    /// Status of the first record on that day; decides the dot colour
    pub status: JobStatus,
    pub count: usize,
}

impl CalendarMark {
    pub fn color(&self) -> &'static str {
        self.status.color()
    }
}

/// One mark per date that has at least one record, in date order.
pub fn calendar_marks(records: &[JobApplication]) -> BTreeMap<NaiveDate, CalendarMark> {
    let mut marks: BTreeMap<NaiveDate, CalendarMark> = BTreeMap::new();
    for job in records {
        marks
            .entry(job.job_date)
            .and_modify(|mark| mark.count += 1)
            .or_insert(CalendarMark {
                status: job.status,
                count: 1,
            });
    }
    marks
}

pub fn jobs_on_date(records: &[JobApplication], date: NaiveDate) -> Vec<JobApplication> {
    records.iter().filter(|job| job.job_date == date).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JobDraft;

    fn job(id: i64, date: &str, status: &str) -> JobApplication {
        JobDraft::new(format!("Company {}", id), "Engineer", date, status)
            .validate()
            .unwrap()
            .into_application(id)
    }

    #[test]
    fn test_marks_use_first_record_color() {
        let records = vec![
            job(1, "2024-09-18", "Interview"),
            job(2, "2024-09-18", "Rejected"),
            job(3, "2024-09-15", "Offered"),
        ];

        let marks = calendar_marks(&records);
        let keys: Vec<String> = marks.keys().map(|d| d.to_string()).collect();
        assert_eq!(keys, vec!["2024-09-15", "2024-09-18"]);

        let sept_18 = marks[&NaiveDate::from_ymd_opt(2024, 9, 18).unwrap()];
        assert_eq!(sept_18.status, JobStatus::Interview);
        assert_eq!(sept_18.count, 2);
        assert_eq!(sept_18.color(), "#FF9800");
    }

    #[test]
    fn test_marks_empty() {
        assert!(calendar_marks(&[]).is_empty());
    }

    #[test]
    fn test_jobs_on_date() {
        let records = vec![
            job(1, "2024-09-18", "Interview"),
            job(2, "2024-09-19", "Applied"),
            job(3, "2024-09-18", "Rejected"),
        ];
        let day = jobs_on_date(&records, NaiveDate::from_ymd_opt(2024, 9, 18).unwrap());
        let ids: Vec<i64> = day.iter().map(|j| j.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
