use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use super::Downloader;
use crate::config::Config;
use crate::location::RemoteFile;

pub struct HuggingFaceDownloader {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HuggingFaceDownloader {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("modelfetch/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.hf_token.clone(),
        })
    }

    fn progress_bar(total_size: u64, file_name: &str) -> Result<ProgressBar> {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                .progress_chars("#>-"),
        );
        pb.set_message(file_name.to_string());
        Ok(pb)
    }
}

#[async_trait]
impl Downloader for HuggingFaceDownloader {
    async fn download(&self, remote: &RemoteFile, dest_dir: &Path) -> Result<PathBuf> {
        let url = remote.url(&self.endpoint);
        let file_name = remote.file_name();

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to start download of {}", remote))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to download {}: {}", file_name, response.status());
        }

        let total_size = response.content_length().unwrap_or(0);
        let pb = Self::progress_bar(total_size, file_name)?;

        fs::create_dir_all(dest_dir).await?;
        let dest_path = dest_dir.join(file_name);
        let part_path = dest_dir.join(format!("{}.part", file_name));

        let downloaded = match write_body(response, &part_path, &pb).await {
            Ok(bytes) => bytes,
            Err(e) => {
                pb.abandon();
                if let Err(rm) = fs::remove_file(&part_path).await {
                    tracing::debug!(file = %part_path.display(), "could not remove partial file: {}", rm);
                }
                return Err(e);
            }
        };

        fs::rename(&part_path, &dest_path).await?;
        pb.finish_with_message(format!("Downloaded {}", file_name));

        tracing::debug!(file = %dest_path.display(), bytes = downloaded, "download complete");
        Ok(dest_path)
    }
}

/// Stream the response body into `part_path`, returning the byte count.
async fn write_body(response: reqwest::Response, part_path: &Path, pb: &ProgressBar) -> Result<u64> {
    let mut file = File::create(part_path)
        .await
        .with_context(|| format!("Failed to create {}", part_path.display()))?;
    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Error downloading chunk")?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }
    file.flush().await?;

    Ok(downloaded)
}
