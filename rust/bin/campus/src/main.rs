//! `campus` — command-line client for the university academic API.
//!
//! Each command opens one session (store + handlers), emits the
//! request, and prints the slice it updated.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use campus_flux::StalePolicy;
use tracing::debug;

use commands::Output;
use config::{ClientConfig, Overrides};

/// Campus CLI tool.
#[derive(Parser, Debug)]
#[command(name = "campus", about = "Campus academic client")]
struct Cli {
    /// Path to client config file (default: ~/.campus/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: Output,

    /// Server URL (overrides the config file).
    #[arg(long, global = true)]
    server: Option<String>,

    /// Bearer token (overrides the config file).
    #[arg(long, global = true)]
    token: Option<String>,

    /// Message locale: fr or en.
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Late responses: keep-all or drop-stale.
    #[arg(long = "stale-policy", global = true)]
    stale_policy: Option<StalePolicy>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Courses, enrollment and progress.
    Courses {
        #[command(subcommand)]
        action: CoursesCmd,
    },

    /// Assignments, submissions and grades.
    Assignments {
        #[command(subcommand)]
        action: AssignmentsCmd,
    },

    /// Quizzes and attempts.
    Quiz {
        #[command(subcommand)]
        action: QuizCmd,
    },

    /// Local preferences.
    Prefs {
        #[command(subcommand)]
        action: PrefsCmd,
    },

    /// Show or change the client config.
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum CoursesCmd {
    /// List all courses.
    List,
    /// Show one course.
    Get { id: String },
    /// Enroll in a course.
    Enroll { id: String },
    /// Report progress on a course.
    Progress {
        id: String,
        /// Completion percentage.
        #[arg(long)]
        percent: Option<f64>,
        /// Completed module ids (repeatable).
        #[arg(long = "module")]
        modules: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
enum AssignmentsCmd {
    /// List assignments.
    List {
        /// Only this course.
        #[arg(long)]
        course: Option<String>,
    },
    /// Show one assignment.
    Get { id: String },
    /// Upload files as a submission.
    Submit {
        id: String,
        /// Files to upload.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Grade a submission.
    Grade {
        submission: String,
        #[arg(long)]
        grade: f64,
        #[arg(long, default_value = "")]
        feedback: String,
    },
}

#[derive(Subcommand, Debug)]
enum QuizCmd {
    /// List quizzes.
    List {
        /// Only this course.
        #[arg(long)]
        course: Option<String>,
    },
    /// Show one quiz and its questions.
    Get { id: String },
    /// Create a quiz from JSON.
    Create {
        /// JSON body.
        #[arg(long = "json")]
        json_body: Option<String>,
        /// Read JSON from file.
        #[arg(short = 'f', long = "file")]
        file: Option<String>,
    },
    /// Take a quiz interactively.
    Take { id: String },
    /// Show quiz statistics.
    Stats { id: String },
}

#[derive(Subcommand, Debug)]
enum PrefsCmd {
    /// Show or set dark mode: on, off or toggle.
    DarkMode { value: Option<String> },
    /// Toggle the review flag on a question (1-based).
    Flag { quiz: String, number: usize },
    /// List flagged questions.
    Flags { quiz: Option<String> },
    /// Clear all flags of a quiz.
    ClearFlags { quiz: String },
}

#[derive(Subcommand, Debug)]
enum ConfigCmd {
    /// Print the effective config file values.
    Show,
    /// Update config file values.
    Set {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        locale: Option<String>,
        #[arg(long = "stale-policy")]
        stale_policy: Option<StalePolicy>,
        #[arg(long = "prefs-path")]
        prefs_path: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `-o json` stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(ClientConfig::default_path);
    let mut config = ClientConfig::load(&config_path)?;
    config.apply(Overrides {
        server: cli.server,
        token: cli.token,
        locale: cli.locale,
        stale_policy: cli.stale_policy,
    });
    debug!(path = %config_path.display(), "config loaded");
    let output = cli.output;

    match cli.command {
        Commands::Courses { action } => {
            let session = commands::open_session(&config)?;
            match action {
                CoursesCmd::List => commands::courses::list(&session, output).await?,
                CoursesCmd::Get { id } => commands::courses::get(&session, &id, output).await?,
                CoursesCmd::Enroll { id } => commands::courses::enroll(&session, &id).await?,
                CoursesCmd::Progress { id, percent, modules } => {
                    commands::courses::progress(&session, &id, percent, modules, output).await?
                }
            }
        }

        Commands::Assignments { action } => {
            let session = commands::open_session(&config)?;
            match action {
                AssignmentsCmd::List { course } => {
                    commands::assignments::list(&session, course, output).await?
                }
                AssignmentsCmd::Get { id } => {
                    commands::assignments::get(&session, &id, output).await?
                }
                AssignmentsCmd::Submit { id, files, comment } => {
                    commands::assignments::submit(&session, &id, files, comment, output).await?
                }
                AssignmentsCmd::Grade {
                    submission,
                    grade,
                    feedback,
                } => {
                    commands::assignments::grade(&session, &submission, grade, feedback, output)
                        .await?
                }
            }
        }

        Commands::Quiz { action } => {
            let session = commands::open_session(&config)?;
            match action {
                QuizCmd::List { course } => commands::quiz::list(&session, course, output).await?,
                QuizCmd::Get { id } => commands::quiz::get(&session, &id, output).await?,
                QuizCmd::Create { json_body, file } => {
                    let body = if let Some(path) = file {
                        std::fs::read_to_string(&path)?
                    } else if let Some(json) = json_body {
                        json
                    } else {
                        anyhow::bail!("Provide --json or -f <file>.");
                    };
                    commands::quiz::create(&session, &body, output).await?
                }
                QuizCmd::Take { id } => commands::quiz::take(&session, &id, output).await?,
                QuizCmd::Stats { id } => commands::quiz::statistics(&session, &id, output).await?,
            }
        }

        Commands::Prefs { action } => {
            let prefs = commands::open_prefs(&config)?;
            match action {
                PrefsCmd::DarkMode { value } => {
                    commands::prefs::dark_mode(&prefs, value.as_deref())?
                }
                PrefsCmd::Flag { quiz, number } => commands::prefs::flag(&prefs, &quiz, number)?,
                PrefsCmd::Flags { quiz } => {
                    commands::prefs::flags(&prefs, quiz.as_deref(), output)?
                }
                PrefsCmd::ClearFlags { quiz } => commands::prefs::clear_flags(&prefs, &quiz)?,
            }
        }

        Commands::Config { action } => match action {
            ConfigCmd::Show => commands::settings::show(&config_path)?,
            ConfigCmd::Set {
                server,
                token,
                locale,
                stale_policy,
                prefs_path,
            } => commands::settings::set(
                &config_path,
                server,
                token,
                locale,
                stale_policy,
                prefs_path,
            )?,
        },

        Commands::Version => {
            println!("campus cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "campus",
            "quiz",
            "list",
            "--course",
            "CS101",
            "-o",
            "json",
            "--stale-policy",
            "drop-stale",
        ])
        .unwrap();
        assert_eq!(cli.output, Output::Json);
        assert_eq!(cli.stale_policy, Some(StalePolicy::DropStale));
        assert!(matches!(
            cli.command,
            Commands::Quiz { action: QuizCmd::List { course: Some(ref c) } } if c == "CS101"
        ));
    }

    #[test]
    fn bad_output_is_rejected() {
        assert!(Cli::try_parse_from(["campus", "-o", "yaml", "version"]).is_err());
    }
}
