//! Working directory layout: where local files are scanned and artifacts live.

use std::path::{Path, PathBuf};

use crate::config::ArtifactNames;
use crate::error::StageError;

/// Resolved artifact paths inside one working directory.
#[derive(Debug, Clone)]
pub struct Workspace {
    dir: PathBuf,
    names: ArtifactNames,
}

impl Workspace {
    pub fn new(dir: impl Into<PathBuf>, names: &ArtifactNames) -> Self {
        Self {
            dir: dir.into(),
            names: names.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn inventory(&self) -> PathBuf {
        self.dir.join(&self.names.inventory)
    }

    pub fn aligned(&self) -> PathBuf {
        self.dir.join(&self.names.aligned)
    }

    pub fn mapping(&self) -> PathBuf {
        self.dir.join(&self.names.mapping)
    }

    pub fn errors_json(&self) -> PathBuf {
        self.dir.join(&self.names.errors_json)
    }

    pub fn errors_csv(&self) -> PathBuf {
        self.dir.join(&self.names.errors_csv)
    }

    /// Resolves a caller-supplied path relative to the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }
}

/// Returns `path` if it exists, or a `MissingPrerequisite` naming what to run first.
pub fn require(
    path: PathBuf,
    artifact: &'static str,
    hint: &'static str,
) -> Result<PathBuf, StageError> {
    if path.exists() {
        Ok(path)
    } else {
        Err(StageError::MissingPrerequisite {
            artifact,
            path,
            hint,
        })
    }
}
