//! UserSearch CLI — run the user search forms from the terminal.
//!
//! Each subcommand is one form. Results print as a table (or JSON with `--json`);
//! warnings and errors go to stderr with a non-zero exit.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use usersearch_core::table::format_table;
use usersearch_core::{
    load_config, FormOutcome, Navigator, ResultSet, SearchCriteria, SearchPanel, SessionState,
};

/// UserSearch CLI — find users by id, industry, skills, or cohort year.
#[derive(Parser)]
#[command(name = "us", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output rows as JSON instead of a text table
    #[arg(long, global = true)]
    json: bool,

    /// User API base address (overrides config and USERSEARCH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory to look for .usersearch.toml in (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a user by UserID
    Id {
        user_id: i64,
    },
    /// Find users in an industry
    Industry {
        industry: String,
    },
    /// Find users by soft and technical skills
    Skills {
        /// Soft skills to match
        #[arg(long)]
        soft: String,

        /// Technical skills to match
        #[arg(long)]
        tech: String,
    },
    /// Find students by cohort year
    Year {
        year: String,
    },
    /// Open a user's profile
    View {
        user_id: i64,
    },
}

impl Commands {
    fn criteria(&self) -> SearchCriteria {
        match self {
            Commands::Id { user_id } => SearchCriteria::ById { user_id: *user_id },
            Commands::Industry { industry } => SearchCriteria::ByIndustry { industry: industry.clone() },
            Commands::Skills { soft, tech } => SearchCriteria::BySkills {
                soft_skills: soft.clone(),
                tech_skills: tech.clone(),
            },
            Commands::Year { year } => SearchCriteria::ByYear { year: year.clone() },
            Commands::View { user_id } => SearchCriteria::ViewProfile { user_id: *user_id },
        }
    }
}

/// The terminal has one "page" besides search: the profile printout.
#[derive(Default)]
struct TerminalNavigator {
    target: Option<String>,
}

impl Navigator for TerminalNavigator {
    fn switch_page(&mut self, page: &str) {
        self.target = Some(page.to_string());
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("usersearch=error".parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let root = match cli.root.clone().map(Ok).unwrap_or_else(std::env::current_dir) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Could not determine current directory: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut config = load_config(&root);
    if let Some(url) = cli.api_url.clone() {
        config.api_url = url;
    }
    let panel = SearchPanel::from_config(&config);

    let criteria = cli.command.criteria();
    if let Ok(usersearch_core::Submission::Lookup(lookup)) = criteria.validate() {
        if let Some(note) = lookup.progress_note() {
            eprintln!("{note}");
        }
    }

    let mut session = SessionState::new();
    let mut nav = TerminalNavigator::default();
    let outcome = panel.submit(&criteria, &mut session, &mut nav);

    report(&outcome, nav.target.as_deref(), cli.json)
}

/// Print an outcome and map it to an exit code. `page` is where the view
/// form navigated, if it did.
fn report(outcome: &FormOutcome, page: Option<&str>, json: bool) -> ExitCode {
    match outcome {
        FormOutcome::Found { message, results } => {
            if let Err(code) = print_rows(results, json) {
                return code;
            }
            eprintln!("\n{message} ({} rows)", results.len());
            ExitCode::SUCCESS
        }
        FormOutcome::Opened { user_id, profile } => {
            // Profile page: the rows from the existence check, no second request.
            eprintln!("Opening {} for UserID {user_id}", page.unwrap_or("profile"));
            if let Err(code) = print_rows(profile, json) {
                return code;
            }
            ExitCode::SUCCESS
        }
        FormOutcome::Invalid(msg) | FormOutcome::Empty(msg) | FormOutcome::Failed(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn print_rows(results: &ResultSet, json: bool) -> Result<(), ExitCode> {
    if json {
        let s = serde_json::to_string_pretty(&results.to_json()).map_err(|e| {
            eprintln!("Could not encode results: {e}");
            ExitCode::FAILURE
        })?;
        println!("{s}");
    } else {
        print!("{}", format_table(results));
    }
    Ok(())
}
