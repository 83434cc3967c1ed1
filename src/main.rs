mod commands;
mod config;
mod error;
mod groups;
mod link;
mod normalize;
mod resolve;
mod scan;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use config::PoolLayout;

#[derive(Parser)]
#[command(name = "pivot")]
#[command(author, version, about = "Portable app version switcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// App root containing Versions/ and Persists/ (defaults to the
    /// executable's directory, or $PIVOT_ROOT)
    #[arg(long, global = true)]
    root: Option<std::path::PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List app groups with their versions and active links
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List version folders that have no link yet
    Unlinked,

    /// Link a version folder as the active version of its app
    Link {
        /// Version folder name inside Versions/
        folder: String,

        /// Link name to use instead of the inferred app name
        #[arg(long)]
        name: Option<String>,

        /// Replace an existing link, directory, or file at the destination
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate for
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let pools = match &cli.root {
        Some(root) => PoolLayout::new(root),
        None => PoolLayout::detect(),
    };

    match cli.command {
        Some(Commands::List { json }) => {
            commands::list(&pools, json)?;
        }
        Some(Commands::Unlinked) => {
            commands::unlinked(&pools)?;
        }
        Some(Commands::Link {
            folder,
            name,
            force,
        }) => {
            commands::link(&pools, &folder, name.as_deref(), force)?;
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pivot", &mut std::io::stdout());
        }
        None => {
            commands::list(&pools, false)?;
        }
    }

    Ok(())
}
