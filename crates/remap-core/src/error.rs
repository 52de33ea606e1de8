//! Errors a stage reports before doing any work.

use std::path::PathBuf;

/// A stage stopped early; nothing was written.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// An input the stage depends on does not exist yet.
    #[error("missing {artifact} ({}); {hint}", .path.display())]
    MissingPrerequisite {
        artifact: &'static str,
        path: PathBuf,
        hint: &'static str,
    },
}
