use crate::github::dto::repo_record::RepoRecord;
use itertools::Itertools;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("Failed to serialize repositories")]
    Serialize {
        #[source]
        cause: serde_json::Error,
    },
}

/// Repository records ordered by star count, highest first.
/// Records with equal stars stay in the order they were fetched.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<RepoRecord>,
}

impl Catalog {
    pub fn new(records: Vec<RepoRecord>) -> Self {
        let records = records
            .into_iter()
            .sorted_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count))
            .collect();

        Catalog { records }
    }

    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn total_stars(&self) -> u64 {
        self.records.iter().map(|r| r.stargazers_count).sum()
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self.records()).map_err(|cause| Error::Serialize { cause })
    }

    /// Replaces whatever is at `path`, creating missing parent directories.
    pub async fn write(&self, path: &Path) -> Result<(), Error> {
        let json = self.to_json()?;

        if let Some(dir) = path.parent() {
            log::debug!("ensuring {} exists", dir.display());
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|cause| Error::CreateDir {
                    path: dir.to_path_buf(),
                    cause,
                })?;
        }

        tokio::fs::write(path, json)
            .await
            .map_err(|cause| Error::Write {
                path: path.to_path_buf(),
                cause,
            })
    }
}
