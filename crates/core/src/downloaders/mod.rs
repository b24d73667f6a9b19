pub mod huggingface;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::location::RemoteFile;

#[async_trait]
pub trait Downloader: Send + Sync {
    /// Fetch one file into `dest_dir`, returning the written path.
    async fn download(&self, remote: &RemoteFile, dest_dir: &Path) -> Result<PathBuf>;
}

pub use huggingface::HuggingFaceDownloader;
