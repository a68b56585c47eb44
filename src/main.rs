use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "docnav")]
#[command(
    version,
    about = "Typed, validated sidebar navigation for documentation sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize docnav in the current directory
    Init {
        #[arg(long, short, help = "Overwrite existing configuration")]
        force: bool,
    },

    /// Load and shape-check a sidebars file
    Validate {
        #[arg(help = "Sidebars file (defaults to the configured one)")]
        path: Option<PathBuf>,
    },

    /// Print the loaded sidebar tree
    Show {
        #[arg(help = "Sidebars file (defaults to the configured one)")]
        path: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Init { force } => {
            docnav::cli::commands::init::run(force)?;
        }
        Commands::Validate { path } => {
            docnav::cli::commands::validate::run(path)?;
        }
        Commands::Show { path, format } => {
            docnav::cli::commands::show::run(path, &format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                docnav::cli::commands::config::show(global, &format)?;
            }
            ConfigAction::Path => {
                docnav::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    docnav::cli::commands::config::init_global(force)?;
                } else {
                    docnav::cli::commands::init::run(force)?;
                }
            }
        },
    }

    Ok(())
}
