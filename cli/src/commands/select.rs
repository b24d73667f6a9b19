use anyhow::Result;
use modelfetch_core::downloaders::HuggingFaceDownloader;
use modelfetch_core::{fetch_all, Config, CATALOG};

use crate::tui::{self, Outcome};

pub async fn execute(config: &Config) -> Result<()> {
    let root = config.ensure_root()?;
    println!("Directory exists: {}", root.display());

    let selected = match tui::select(CATALOG)? {
        Outcome::Confirmed(selected) => selected,
        Outcome::TooSmall => {
            tracing::warn!("terminal too small, selection aborted");
            println!("The terminal window is too small to show the model list. Nothing was downloaded.");
            return Ok(());
        }
        Outcome::Interrupted => {
            anyhow::bail!("Selection interrupted, nothing was downloaded");
        }
    };

    if selected.is_empty() {
        println!("No models selected.");
        return Ok(());
    }

    tracing::info!(count = selected.len(), root = %root.display(), "starting downloads");

    let downloader = HuggingFaceDownloader::new(config)?;
    let written = fetch_all(&downloader, config, &selected).await?;

    println!("\n{} model file(s) downloaded.", written.len());
    Ok(())
}
