pub mod commands;
pub mod output;

use crate::errors::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use commands::config::ConfigAction;
use commands::stack::StackAction;

#[derive(Parser)]
#[command(name = "lstack")]
#[command(about = "LoRA Stack - ordered LoRA entry editor publishing a canonical JSON field")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize workspace for LoRA stack editing
    Init {
        /// Graph host base URL used for catalog lookups
        #[arg(long)]
        catalog_url: Option<String>,

        /// Force initialization even if already initialized
        #[arg(long)]
        force: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Stack editing
    Stack {
        #[command(subcommand)]
        action: StackAction,
    },

    /// List selectable LoRA names from the host catalog
    Catalog,

    /// Show workspace status
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Set up logging based on verbosity
        self.setup_logging();

        match self.command {
            Commands::Init { catalog_url, force } => commands::init::run(catalog_url, force).await,
            Commands::Config { action } => commands::config::run(action).await,
            Commands::Stack { action } => commands::stack::run(action).await,
            Commands::Catalog => commands::catalog::run().await,
            Commands::Status => commands::status::run().await,
            Commands::Completions { shell } => commands::completions::generate_completions(shell),
        }
    }

    fn setup_logging(&self) {
        let level = if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .without_time();

        if self.no_color {
            subscriber.with_ansi(false).init();
        } else {
            subscriber.init();
        }
    }
}
