//! Activity Board CLI
//!
//! Terminal front end for the activities API:
//! - List activities with their rosters
//! - Sign up for an activity
//! - Unregister a participant
//! - Generate a config file

use activity_board::board::{ActivityBoard, BoardSurface, SignupForm};
use activity_board::config::{generate_default_config, Config, LoggingConfig};
use activity_board::message::{Message, MessageKind};
use activity_board::render::{BoardView, ROSTER_HEADER};
use activity_board::HttpActivitiesApi;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse activities and manage sign-ups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: platform config dir, then ./activity-board.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all activities
    List,

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
    },

    /// Unregister a participant
    Remove {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Prints the board to the terminal
struct TerminalSurface {
    format: OutputFormat,
    assume_yes: bool,
}

impl BoardSurface for TerminalSurface {
    fn render(&self, view: &BoardView) {
        match self.format {
            OutputFormat::Json => match serde_json::to_string_pretty(view) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!(error = %e, "failed to encode board"),
            },
            OutputFormat::Table => print_board(view),
        }
    }

    fn show_load_error(&self, text: &str) {
        eprintln!("{}", text);
    }

    fn show_message(&self, message: Message) {
        match message.kind {
            MessageKind::Error => eprintln!("✕ {}", message.text),
            MessageKind::Success => println!("✓ {}", message.text),
            MessageKind::Info => println!("ℹ {}", message.text),
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{} [y/N] ", prompt);
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn reset_form(&self) {}
}

fn print_board(view: &BoardView) {
    if view.cards.is_empty() {
        println!("No activities available.");
        return;
    }

    for card in &view.cards {
        println!("{}", card.title);
        println!("  {}", card.description);
        println!("  {}", card.meta);
        println!("  {}:", ROSTER_HEADER);
        match card.placeholder() {
            Some(text) => println!("    {}", text),
            None => {
                for row in &card.participants {
                    println!("    ({}) {}", row.avatar, row.email);
                }
            }
        }
        println!();
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("activity_board={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, skipped) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, Vec::new()),
        None => Config::load_default_with_errors(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    // Logging is configured from the file, so skipped files are reported now
    for e in &skipped {
        tracing::warn!("{}", e);
    }
    tracing::debug!(base_url = %config.api.base_url, "activity-board v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::Config { output } = &cli.command {
        let template = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &template)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    let api = HttpActivitiesApi::new(&config.api)?;
    let surface = TerminalSurface {
        format: cli.format,
        assume_yes: matches!(cli.command, Commands::Remove { yes: true, .. }),
    };
    let board = ActivityBoard::new(api, surface, config.board);

    let result = match cli.command {
        Commands::List => board.load_activities().await,
        Commands::Signup { activity, email } => {
            board.submit_signup(&SignupForm::new(activity, email)).await
        }
        // Nothing is cached yet, so a successful removal re-fetches and prints the board.
        Commands::Remove { activity, email, .. } => {
            board.remove_participant(&activity, &email).await
        }
        Commands::Config { .. } => return Ok(()),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        std::process::exit(1);
    }

    Ok(())
}
