use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use jobtrack::domain::date::normalize_job_date;
use jobtrack::store::{CopyToShare, RevealShare, ShareSink};
use jobtrack::{JobDraft, JobStatus, JobStore, JobtrackError, query};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, JobFields};
use cli::render;
use config::Config;

fn setup_logging(level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jobtrack")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("jobtrack.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.unwrap_or("info")))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn open_store(config: &Config) -> Result<JobStore> {
    let path = config.db_path();
    let mut store = JobStore::open(&path).with_context(|| format!("Failed to open store at {}", path.display()))?;

    if config.storage.seed_on_create && store.was_created() {
        store.seed_samples().context("Failed to seed sample jobs")?;
    }
    Ok(store)
}

fn run_application(cli: &Cli, config: &Config, store: JobStore) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{} {}", "Store:".yellow(), config.db_path().display());
    }

    match &cli.command {
        Commands::Add { fields } => handle_add_command(&store, fields),
        Commands::List { search, status, json } => {
            handle_list_command(&store, search.as_deref(), status.as_deref(), *json, config)
        }
        Commands::Show { id, json } => handle_show_command(&store, *id, *json, config),
        Commands::Edit { id, fields } => handle_edit_command(&store, *id, fields),
        Commands::Delete { id } => handle_delete_command(&store, *id),
        Commands::Calendar { date } => handle_calendar_command(&store, date.as_deref(), config),
        Commands::Interviews { from, to } => handle_interviews_command(&store, from.as_deref(), to.as_deref(), config),
        Commands::Export => handle_export_command(&store, config),
        Commands::Reset { yes } => handle_reset_command(store, *yes),
        Commands::Seed => handle_seed_command(store),
        Commands::Statuses => {
            println!("{}", render::legend(config.display.locale));
            Ok(())
        }
    }
}

fn draft_from_fields(fields: &JobFields) -> JobDraft {
    JobDraft {
        company: fields.company.clone().unwrap_or_default(),
        position: fields.position.clone().unwrap_or_default(),
        job_date: fields.date.clone().unwrap_or_default(),
        status: fields.status.clone().unwrap_or_default(),
        notes: fields.notes.clone(),
        salary: fields.salary.clone(),
        location: fields.location.clone(),
    }
}

/// Overlay the given fields on an existing draft; an empty value clears an
/// optional field.
fn merge_fields(base: JobDraft, fields: &JobFields) -> JobDraft {
    JobDraft {
        company: fields.company.clone().unwrap_or(base.company),
        position: fields.position.clone().unwrap_or(base.position),
        job_date: fields.date.clone().unwrap_or(base.job_date),
        status: fields.status.clone().unwrap_or(base.status),
        notes: fields.notes.clone().or(base.notes),
        salary: fields.salary.clone().or(base.salary),
        location: fields.location.clone().or(base.location),
    }
}

fn parse_day(input: Option<&str>, what: &str) -> Result<Option<NaiveDate>> {
    input
        .map(|s| normalize_job_date(s).with_context(|| format!("Invalid {} date", what)))
        .transpose()
}

fn handle_add_command(store: &JobStore, fields: &JobFields) -> Result<()> {
    let id = store.create(&draft_from_fields(fields))?;
    info!("Added job {}", id);
    println!("{} job #{}", "Added".green(), id);
    Ok(())
}

fn handle_list_command(
    store: &JobStore,
    search: Option<&str>,
    status: Option<&str>,
    json: bool,
    config: &Config,
) -> Result<()> {
    info!("Listing jobs - search: {:?}, status: {:?}", search, status);
    let mut jobs = store.get_all()?;

    if let Some(s) = status {
        let status: JobStatus = s.parse()?;
        jobs = query::filter_by_status(&jobs, status);
    }
    if let Some(term) = search {
        jobs = query::search(&jobs, term);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&jobs)?);
        return Ok(());
    }

    if jobs.is_empty() {
        println!("{}", "No job applications found".yellow());
        return Ok(());
    }
    for job in &jobs {
        println!("{}", render::job_line(job, config.display.locale));
    }
    Ok(())
}

fn handle_show_command(store: &JobStore, id: i64, json: bool, config: &Config) -> Result<()> {
    info!("Showing job {}", id);
    let Some(job) = store.get_by_id(id)? else {
        return Err(JobtrackError::NotFound(id).into());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&job)?);
    } else {
        println!("{}", render::job_detail(&job, config.display.locale));
    }
    Ok(())
}

fn handle_edit_command(store: &JobStore, id: i64, fields: &JobFields) -> Result<()> {
    info!("Editing job {}", id);
    let Some(current) = store.get_by_id(id)? else {
        return Err(JobtrackError::NotFound(id).into());
    };

    store.update(id, &merge_fields(current.to_draft(), fields))?;
    println!("{} job #{}", "Updated".green(), id);
    Ok(())
}

fn handle_delete_command(store: &JobStore, id: i64) -> Result<()> {
    info!("Deleting job {}", id);
    if store.delete(id)? {
        println!("{} job #{}", "Deleted".red(), id);
    } else {
        println!("{} #{}", "Nothing to delete for".yellow(), id);
    }
    Ok(())
}

fn handle_calendar_command(store: &JobStore, date: Option<&str>, config: &Config) -> Result<()> {
    let locale = config.display.locale;
    let jobs = store.get_all()?;

    match parse_day(date, "calendar")? {
        Some(day) => {
            let on_day = query::jobs_on_date(&jobs, day);
            if on_day.is_empty() {
                println!("{}", "No applications on this day".yellow());
            }
            for job in &on_day {
                println!("{}", render::job_line(job, locale));
            }
        }
        None => {
            for (day, mark) in query::calendar_marks(&jobs) {
                println!("{}", render::calendar_line(day, &mark, locale));
            }
            println!();
            println!("{}", render::legend(locale));
        }
    }
    Ok(())
}

fn handle_interviews_command(store: &JobStore, from: Option<&str>, to: Option<&str>, config: &Config) -> Result<()> {
    let start = parse_day(from, "--from")?;
    let end = parse_day(to, "--to")?;
    info!("Listing interviews from {:?} to {:?}", start, end);

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            println!("{}", "--from is after --to; no interviews can match".yellow());
        }
    }

    let jobs = store.get_all()?;
    let upcoming = query::upcoming_interviews(&jobs, start, end);
    if upcoming.is_empty() {
        println!("{}", "No interviews in range".yellow());
    }
    for job in &upcoming {
        println!("{}", render::job_line(job, config.display.locale));
    }
    Ok(())
}

fn handle_export_command(store: &JobStore, config: &Config) -> Result<()> {
    let sink: Box<dyn ShareSink> = match &config.export.share_dir {
        Some(dir) => Box::new(CopyToShare::new(dir)),
        None => Box::new(RevealShare),
    };

    let snapshot = store
        .export_snapshot(&config.export_options(), sink.as_ref())
        .context("Failed to export database")?;

    println!("{} {}", "Exported:".green(), snapshot.path.display());
    println!("  {} bytes, sha256 {}", snapshot.bytes, snapshot.sha256);
    if let Some(dir) = &config.export.share_dir {
        println!("  {} {}", "Shared to:".green(), dir.display());
    }
    Ok(())
}

fn handle_reset_command(store: JobStore, yes: bool) -> Result<()> {
    if !yes {
        println!("{}", "Reset deletes every application. Re-run with --yes to confirm.".red());
        return Ok(());
    }

    info!("Resetting store");
    let store = store.reset().context("Failed to reset store")?;
    println!("{} ({} applications)", "Store reset".green(), store.count()?);
    Ok(())
}

fn handle_seed_command(mut store: JobStore) -> Result<()> {
    if store.seed_samples()? {
        println!("{} {} sample applications", "Seeded".green(), store.count()?);
    } else {
        println!("{}", "Store already seeded or not empty; nothing inserted".yellow());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    if !config.display.color {
        colored::control::set_override(false);
    }

    let store = open_store(&config)?;

    // Run the main application logic
    run_application(&cli, &config, store).context("Application failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_fields_leaves_missing_empty() {
        let fields = JobFields {
            company: Some("Company A".to_string()),
            ..JobFields::default()
        };
        let draft = draft_from_fields(&fields);
        assert_eq!(draft.company, "Company A");
        assert!(draft.position.is_empty());
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_merge_keeps_unspecified_fields() {
        let base = JobDraft::new("Company A", "Engineer", "2024-09-21", "Applied").with_notes("keep me");
        let fields = JobFields {
            status: Some("Interview".to_string()),
            ..JobFields::default()
        };

        let merged = merge_fields(base, &fields);
        assert_eq!(merged.status, "Interview");
        assert_eq!(merged.company, "Company A");
        assert_eq!(merged.notes.as_deref(), Some("keep me"));
    }

    #[test]
    fn test_merge_empty_clears_optional() {
        let base = JobDraft::new("Company A", "Engineer", "2024-09-21", "Applied").with_notes("old");
        let fields = JobFields {
            notes: Some(String::new()),
            ..JobFields::default()
        };

        let valid = merge_fields(base, &fields).validate().unwrap();
        assert!(valid.notes.is_none());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day(None, "--from").unwrap(), None);
        assert_eq!(
            parse_day(Some("2024-09-01"), "--from").unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );
        assert!(parse_day(Some("soon"), "--from").is_err());
    }
}
