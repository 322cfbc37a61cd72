//! movdocs CLI - interactive animation playgrounds and component registry.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "movdocs")]
#[command(about = "Interactive animation playgrounds and component registry")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to movdocs.toml config file
    #[arg(short, long, default_value = "movdocs.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize playgrounds in current project
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// List available playgrounds
    List,

    /// Print the usage snippet of a playground
    Code {
        /// Playground slug
        slug: String,

        /// Set a control value directly
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Feed raw widget input to a control
        #[arg(short, long = "input", value_name = "NAME=RAW")]
        input: Vec<String>,
    },

    /// Print the source files of a registry component
    Resolve {
        /// Component name
        component: String,
    },

    /// Start the playground server
    Serve {
        /// Port to listen on (defaults to config or 7777)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::List => {
            let config = config::load_config(&cli.config)?;
            commands::list::run(&config)?;
        }
        Commands::Code { slug, set, input } => {
            let config = config::load_config(&cli.config)?;
            commands::code::run(&config, &slug, &set, &input)?;
        }
        Commands::Resolve { component } => {
            let config = config::load_config(&cli.config)?;
            commands::resolve::run(&config, &component).await?;
        }
        Commands::Serve { port, no_open } => {
            let config = config::load_config(&cli.config)?;
            commands::serve::run(config, port, !no_open).await?;
        }
    }

    Ok(())
}
