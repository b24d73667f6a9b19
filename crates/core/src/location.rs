use std::fmt;

use crate::catalog::Descriptor;
use crate::error::LocationError;

const DEFAULT_REVISION: &str = "main";

/// A single file on the hub, resolved from a catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// `owner/repo`
    pub repo_id: String,
    pub revision: String,
    /// Path of the file inside the repository.
    pub path: String,
}

impl RemoteFile {
    /// Resolve `location` + `file_name` into a repository file.
    ///
    /// Locations look like
    /// `https://huggingface.co/<owner>/<repo>/resolve/<revision>/<folder>/`;
    /// the `resolve/<revision>` pair and the trailing folder are optional.
    pub fn parse(location: &str, file_name: &str) -> Result<Self, LocationError> {
        let segments: Vec<&str> = location.split('/').collect();
        if segments.len() < 5 {
            return Err(LocationError::TooShort(location.to_string()));
        }

        let (owner, repo) = (segments[3], segments[4]);
        if owner.is_empty() || repo.is_empty() {
            return Err(LocationError::MissingRepo(location.to_string()));
        }

        let rest = &segments[5..];
        let (revision, folder) = match rest {
            ["resolve", revision, folder @ ..] if !revision.is_empty() => (*revision, folder),
            ["resolve", ..] => (DEFAULT_REVISION, &rest[rest.len().min(2)..]),
            _ => (DEFAULT_REVISION, rest),
        };

        let mut path: Vec<&str> = folder.iter().copied().filter(|s| !s.is_empty()).collect();
        if file_name.is_empty() {
            return Err(LocationError::EmptyFileName(location.to_string()));
        }
        path.push(file_name);

        Ok(Self {
            repo_id: format!("{}/{}", owner, repo),
            revision: revision.to_string(),
            path: path.join("/"),
        })
    }

    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Self, LocationError> {
        Self::parse(descriptor.location, descriptor.name)
    }

    /// Download URL of this file against a hub endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/resolve/{}/{}",
            endpoint.trim_end_matches('/'),
            self.repo_id,
            self.revision,
            self.path
        )
    }

    /// Final path component, used as the on-disk file name.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for RemoteFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.repo_id, self.revision, self.path)
    }
}
