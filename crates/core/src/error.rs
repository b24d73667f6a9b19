use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "directory '{}' does not exist. Run modelfetch from the ComfyUI base folder or pass --root",
        .0.display()
    )]
    MissingRoot(PathBuf),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("location '{0}' is too short to name a repository")]
    TooShort(String),
    #[error("location '{0}' has an empty owner or repository segment")]
    MissingRepo(String),
    #[error("no file name given for location '{0}'")]
    EmptyFileName(String),
}
