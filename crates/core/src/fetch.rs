use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::Descriptor;
use crate::config::Config;
use crate::downloaders::Downloader;
use crate::location::RemoteFile;

/// Download every selected descriptor in order, one at a time.
///
/// The first failure is returned and nothing after it is attempted.
pub async fn fetch_all(
    downloader: &dyn Downloader,
    config: &Config,
    selected: &[Descriptor],
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(selected.len());

    for (i, descriptor) in selected.iter().enumerate() {
        let remote = RemoteFile::from_descriptor(descriptor)?;

        let dest_dir = config.destination_dir(descriptor.destination);
        tokio::fs::create_dir_all(&dest_dir)
            .await
            .with_context(|| format!("Failed to create {}", dest_dir.display()))?;

        println!(
            "[{}/{}] Downloading {} from {}...",
            i + 1,
            selected.len(),
            descriptor.name,
            remote.repo_id
        );
        tracing::info!(file = descriptor.name, repo = %remote.repo_id, path = %remote.path, "fetching");

        let path = downloader
            .download(&remote, &dest_dir)
            .await
            .with_context(|| format!("Download of {} failed", descriptor.name))?;

        println!("Downloaded {} to {}", descriptor.name, path.display());
        written.push(path);
    }

    Ok(written)
}
