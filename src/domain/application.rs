//! Job application record and its unvalidated input form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date::{self, DateError};
use super::{JobStatus, Salary};
use crate::error::{JobtrackError, Result};

/// A tracked job application, as persisted in the `jobs` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobApplication {
    /// Assigned by the store on creation
    pub id: i64,

    pub company: String,

    pub position: String,

    /// Application or event date (interview day for `Interview` records)
    pub job_date: NaiveDate,

    pub status: JobStatus,

    pub notes: Option<String>,

    pub salary: Option<Salary>,

    pub location: Option<String>,
}

impl JobApplication {
    /// Turn the record back into editable input, e.g. to apply a partial edit.
    pub fn to_draft(&self) -> JobDraft {
        JobDraft {
            company: self.company.clone(),
            position: self.position.clone(),
            job_date: date::to_storage(self.job_date),
            status: self.status.as_str().to_string(),
            notes: self.notes.clone(),
            salary: self.salary.map(|s| s.amount().to_string()),
            location: self.location.clone(),
        }
    }
}

/// Raw input for create and update, shaped the way a form supplies it.
///
/// Required fields are plain strings where empty means missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobDraft {
    pub company: String,
    pub position: String,
    pub job_date: String,
    pub status: String,
    pub notes: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
}

impl JobDraft {
    pub fn new(
        company: impl Into<String>,
        position: impl Into<String>,
        job_date: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            job_date: job_date.into(),
            status: status.into(),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Check required fields and normalize everything for storage.
    pub fn validate(&self) -> Result<ValidJob> {
        let company = required("company", &self.company)?;
        let position = required("position", &self.position)?;

        let job_date = date::normalize_job_date(&self.job_date).map_err(|e| match e {
            DateError::Empty => JobtrackError::validation("jobDate", "is required"),
            other => JobtrackError::validation("jobDate", other.to_string()),
        })?;

        let status_input = required("status", &self.status)?;
        let status = status_input
            .parse::<JobStatus>()
            .map_err(|e| JobtrackError::validation("status", e.to_string()))?;

        let salary = match self.salary.as_deref() {
            Some(raw) => Salary::parse_input(raw).map_err(|e| JobtrackError::validation("salary", e.to_string()))?,
            None => None,
        };

        Ok(ValidJob {
            company,
            position,
            job_date,
            status,
            notes: optional(self.notes.as_deref()),
            salary,
            location: optional(self.location.as_deref()),
        })
    }
}

/// Normalized fields ready to be written; everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidJob {
    pub company: String,
    pub position: String,
    pub job_date: NaiveDate,
    pub status: JobStatus,
    pub notes: Option<String>,
    pub salary: Option<Salary>,
    pub location: Option<String>,
}

impl ValidJob {
    pub fn into_application(self, id: i64) -> JobApplication {
        JobApplication {
            id,
            company: self.company,
            position: self.position,
            job_date: self.job_date,
            status: self.status,
            notes: self.notes,
            salary: self.salary,
            location: self.location,
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(JobtrackError::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> JobDraft {
        JobDraft::new("Company A", "Software Engineer", "2024-09-21", "Applied")
    }

    #[test]
    fn test_validate_minimal() {
        let valid = draft().validate().unwrap();
        assert_eq!(valid.company, "Company A");
        assert_eq!(valid.job_date, NaiveDate::from_ymd_opt(2024, 9, 21).unwrap());
        assert_eq!(valid.status, JobStatus::Applied);
        assert!(valid.notes.is_none());
        assert!(valid.salary.is_none());
    }

    #[test]
    fn test_validate_missing_required() {
        for (field, d) in [
            ("company", JobDraft { company: "  ".into(), ..draft() }),
            ("position", JobDraft { position: String::new(), ..draft() }),
            ("jobDate", JobDraft { job_date: String::new(), ..draft() }),
            ("status", JobDraft { status: String::new(), ..draft() }),
        ] {
            match d.validate() {
                Err(JobtrackError::Validation { field: f, .. }) => assert_eq!(f, field),
                other => panic!("expected validation error for {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_validate_unknown_status() {
        let d = JobDraft { status: "Ghosted".into(), ..draft() };
        assert!(matches!(d.validate(), Err(JobtrackError::Validation { field: "status", .. })));
    }

    #[test]
    fn test_validate_normalizes_optionals() {
        let valid = draft()
            .with_notes("  ")
            .with_salary("$100,000")
            .with_location(" New York ")
            .validate()
            .unwrap();
        assert!(valid.notes.is_none());
        assert_eq!(valid.salary, Some(Salary::new(100_000)));
        assert_eq!(valid.location.as_deref(), Some("New York"));
    }

    #[test]
    fn test_draft_roundtrip_through_application() {
        let original = draft().with_salary("70000").with_notes("Call back Friday");
        let app = original.validate().unwrap().into_application(7);
        let again = app.to_draft().validate().unwrap().into_application(7);
        assert_eq!(app, again);
    }
}
