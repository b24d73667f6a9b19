mod commands;
mod logging;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use modelfetch_core::config::{default_endpoint, default_root, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modelfetch")]
#[command(author, version, about = "Pick and download SDXL model files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Local models folder (must already exist)
    #[arg(long, global = true, default_value_os_t = default_root())]
    root: PathBuf,

    /// HuggingFace access token (falls back to the cached login)
    #[arg(long, global = true, env = "HF_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// HuggingFace endpoint
    #[arg(long, global = true, env = "HF_ENDPOINT", default_value_t = default_endpoint())]
    endpoint: String,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Choose models interactively and download them
    Select,

    /// Print the model catalog
    #[command(alias = "ls")]
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logging::init();

    let cli = Cli::parse();
    let config = Config::new(cli.root, cli.token, cli.endpoint);

    match cli.command {
        Some(Commands::List) => {
            commands::list::execute();
        }
        Some(Commands::Select) | None => {
            let config = config.with_cached_token();
            commands::select::execute(&config).await?;
        }
    }

    Ok(())
}
