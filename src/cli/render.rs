//! Terminal rendering of applications. Formatting happens only here; records
//! carry raw dates and amounts.

use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use jobtrack::domain::date::format_display;
use jobtrack::domain::{JobApplication, JobStatus, Locale};
use jobtrack::query::CalendarMark;

pub fn status_badge(status: JobStatus, locale: Locale) -> ColoredString {
    let (r, g, b) = status.rgb();
    status.label(locale).truecolor(r, g, b).bold()
}

/// One-line summary used by list views
pub fn job_line(job: &JobApplication, locale: Locale) -> String {
    let mut line = format!(
        "{:>4}  {}  {} @ {}  [{}]",
        format!("#{}", job.id).dimmed(),
        format_display(job.job_date, locale),
        job.position.bold(),
        job.company,
        status_badge(job.status, locale)
    );
    if let Some(salary) = job.salary {
        line.push_str(&format!("  {}", salary.format(locale).green()));
    }
    if let Some(location) = &job.location {
        line.push_str(&format!("  {}", location.cyan()));
    }
    line
}

pub fn job_detail(job: &JobApplication, locale: Locale) -> String {
    let mut out = vec![
        format!("{} {}", "ID:".bold(), job.id),
        format!("{} {}", "Company:".bold(), job.company),
        format!("{} {}", "Position:".bold(), job.position),
        format!("{} {}", "Date:".bold(), format_display(job.job_date, locale)),
        format!("{} {}", "Status:".bold(), status_badge(job.status, locale)),
    ];
    if let Some(salary) = job.salary {
        out.push(format!("{} {}", "Salary:".bold(), salary.format(locale)));
    }
    if let Some(location) = &job.location {
        out.push(format!("{} {}", "Location:".bold(), location));
    }
    if let Some(notes) = &job.notes {
        out.push(format!("{} {}", "Notes:".bold(), notes));
    }
    out.join("\n")
}

pub fn calendar_line(date: NaiveDate, mark: &CalendarMark, locale: Locale) -> String {
    let (r, g, b) = mark.status.rgb();
    format!(
        "{} {}  {} ({})",
        "●".truecolor(r, g, b),
        date,
        format_display(date, locale),
        mark.count
    )
}

/// Status legend, in pipeline order
pub fn legend(locale: Locale) -> String {
    let mut statuses = JobStatus::ALL.to_vec();
    statuses.sort_by_key(|s| s.sort_order());
    statuses
        .into_iter()
        .map(|status| {
            let (r, g, b) = status.rgb();
            format!("{} {}  {}", "●".truecolor(r, g, b), status_badge(status, locale), status.color())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack::JobDraft;

    fn job() -> JobApplication {
        JobDraft::new("Company B", "Designer", "2024-09-18", "Interview")
            .with_salary("70000")
            .with_location("Los Angeles")
            .validate()
            .unwrap()
            .into_application(2)
    }

    #[test]
    fn test_job_line_contains_fields() {
        let line = job_line(&job(), Locale::En);
        assert!(line.contains("#2"));
        assert!(line.contains("September 18, 2024"));
        assert!(line.contains("Designer"));
        assert!(line.contains("Company B"));
        assert!(line.contains("Interview"));
        assert!(line.contains("70,000 THB"));
        assert!(line.contains("Los Angeles"));
    }

    #[test]
    fn test_job_detail_thai() {
        let detail = job_detail(&job(), Locale::Th);
        assert!(detail.contains("18 กันยายน 2567"));
        assert!(detail.contains("สัมภาษณ์"));
        assert!(detail.contains("70,000 บาท"));
        assert!(!detail.contains("Notes:"));
    }

    #[test]
    fn test_legend_lists_every_status() {
        let legend = legend(Locale::En);
        assert_eq!(legend.lines().count(), 4);
        for status in JobStatus::ALL {
            assert!(legend.contains(status.color()));
        }
    }
}
