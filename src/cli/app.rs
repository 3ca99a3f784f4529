//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use cotrail::output::OutputMode;

/// cotrail - Change-Id and AI co-developer trailers for commit messages
#[derive(Parser, Debug)]
#[command(
    name = "cotrail",
    version,
    about = "Change-Id and AI co-developer trailers for commit messages",
    long_about = "A git commit-msg hook.\n\n\
                  Adds a Gerrit-style Change-Id trailer to every commit and a\n\
                  Co-developed-by trailer when an AI coding agent made the commit."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite a commit message file (used by the commit-msg hook)
    Exec {
        /// Path to commit message file
        commit_msg_file: String,

        /// Print the result instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the AI agent detected from the environment
    Detect,

    /// Install the commit-msg hook in the current repository
    Install {
        /// Reinstall even if already present
        #[arg(short, long)]
        force: bool,
    },

    /// Remove the commit-msg hook from the current repository
    Uninstall,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Exec {
            commit_msg_file,
            dry_run,
        }) => commands::exec(&commit_msg_file, dry_run, output_mode),
        Some(Command::Detect) => commands::detect(output_mode),
        Some(Command::Install { force }) => commands::install(force, output_mode),
        Some(Command::Uninstall) => commands::uninstall(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("cotrail v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("cotrail v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'cotrail --help' for usage");
                println!("Run 'cotrail install' to get started");
            }
            Ok(())
        },
    }
}
