//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add/edit/delete/show: manage single applications
//! - list: list and search applications
//! - calendar/interviews: date-oriented views
//! - export/reset/seed: store maintenance

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// jobtrack - keep track of job applications
#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Fields of an application as given on the command line
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFields {
    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Position applied for
    #[arg(short, long)]
    pub position: Option<String>,

    /// Application or interview date (YYYY-MM-DD or a timestamp)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Applied, Interview, Offered or Rejected
    #[arg(short, long)]
    pub status: Option<String>,

    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Salary; anything but digits is ignored
    #[arg(long)]
    pub salary: Option<String>,

    /// Location
    #[arg(short, long)]
    pub location: Option<String>,
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new application
    Add {
        #[command(flatten)]
        fields: JobFields,
    },

    /// List applications
    List {
        /// Only applications whose company, position or status contains this
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one application
    Show {
        /// Application ID
        id: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Change fields of an application; omitted fields are kept
    Edit {
        /// Application ID
        id: i64,

        #[command(flatten)]
        fields: JobFields,
    },

    /// Delete an application
    Delete {
        /// Application ID
        id: i64,
    },

    /// Show marked days, or the applications on one day
    Calendar {
        /// Day to show (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List interviews in a date range
    Interviews {
        /// First day, inclusive
        #[arg(long)]
        from: Option<String>,

        /// Last day, inclusive
        #[arg(long)]
        to: Option<String>,
    },

    /// Export a copy of the database
    Export,

    /// Delete all applications
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Insert demo applications into an empty store
    Seed,

    /// Print the status legend
    Statuses,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_requires_command() {
        assert!(Cli::try_parse_from(["jobtrack"]).is_err());
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["jobtrack", "list", "-v", "-c", "/path/to/jobtrack.yml"]).unwrap();
        assert!(cli.is_verbose());
        assert_eq!(cli.config.as_ref(), Some(&PathBuf::from("/path/to/jobtrack.yml")));
    }

    #[test]
    fn test_add_command() {
        let cli = Cli::try_parse_from([
            "jobtrack",
            "add",
            "--company",
            "Company A",
            "-p",
            "Software Engineer",
            "-d",
            "2024-09-21",
            "-s",
            "Applied",
            "--salary",
            "$100,000",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { fields } => {
                assert_eq!(fields.company.as_deref(), Some("Company A"));
                assert_eq!(fields.position.as_deref(), Some("Software Engineer"));
                assert_eq!(fields.date.as_deref(), Some("2024-09-21"));
                assert_eq!(fields.status.as_deref(), Some("Applied"));
                assert_eq!(fields.salary.as_deref(), Some("$100,000"));
                assert!(fields.notes.is_none());
            }
            _ => panic!("Expected add command"),
        }
    }

    #[test]
    fn test_list_with_filters() {
        let cli = Cli::try_parse_from(["jobtrack", "list", "-q", "design", "-s", "interview", "--json"]).unwrap();
        match cli.command {
            Commands::List { search, status, json } => {
                assert_eq!(search, Some("design".to_string()));
                assert_eq!(status, Some("interview".to_string()));
                assert!(json);
            }
            _ => panic!("Expected list command"),
        }
    }

    #[test]
    fn test_edit_command() {
        let cli = Cli::try_parse_from(["jobtrack", "edit", "7", "-s", "Offered"]).unwrap();
        match cli.command {
            Commands::Edit { id, fields } => {
                assert_eq!(id, 7);
                assert_eq!(fields.status.as_deref(), Some("Offered"));
                assert!(fields.company.is_none());
            }
            _ => panic!("Expected edit command"),
        }
    }

    #[test]
    fn test_delete_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["jobtrack", "delete", "abc"]).is_err());
    }

    #[test]
    fn test_interviews_range() {
        let cli = Cli::try_parse_from(["jobtrack", "interviews", "--from", "2024-09-01", "--to", "2024-09-30"]).unwrap();
        match cli.command {
            Commands::Interviews { from, to } => {
                assert_eq!(from.as_deref(), Some("2024-09-01"));
                assert_eq!(to.as_deref(), Some("2024-09-30"));
            }
            _ => panic!("Expected interviews command"),
        }
    }

    #[test]
    fn test_reset_defaults_to_unconfirmed() {
        let cli = Cli::try_parse_from(["jobtrack", "reset"]).unwrap();
        assert!(matches!(cli.command, Commands::Reset { yes: false }));
    }

    #[test]
    fn test_help_works() {
        // Verify help doesn't panic
        Cli::command().debug_assert();
    }

    #[test]
    fn test_version_flag() {
        let result = Cli::try_parse_from(["jobtrack", "--version"]);
        // Version flag causes early exit with error (expected)
        assert!(result.is_err());
    }
}
