use std::{
  fs,
  path::{Path, PathBuf},
};

#[cfg(test)]
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
  #[error("failed to create artifact directory {path}: {source}")]
  CreateDir { path: PathBuf, source: std::io::Error },
  #[error("failed to write artifact {path}: {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

/// Destination for generated builder files. One call covers the whole
/// lifecycle of a single artifact, so a failure never leaves an open handle
/// behind.
pub trait ArtifactSink {
  fn write(&mut self, rel_path: &Path, contents: &str) -> Result<(), ArtifactError>;
}

/// Writes artifacts under a root directory, creating module subdirectories
/// on demand.
pub struct FsArtifactSink {
  root: PathBuf,
}

impl FsArtifactSink {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl ArtifactSink for FsArtifactSink {
  fn write(&mut self, rel_path: &Path, contents: &str) -> Result<(), ArtifactError> {
    let path = self.root.join(rel_path);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).map_err(|source| ArtifactError::CreateDir {
        path: parent.to_path_buf(),
        source,
      })?;
    }
    fs::write(&path, contents).map_err(|source| ArtifactError::Write { path, source })
  }
}

/// Collects artifacts in memory, in write order. Test builds only; the CLI
/// always writes through the filesystem sink.
#[cfg(test)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryArtifactSink {
  artifacts: IndexMap<PathBuf, String>,
}

#[cfg(test)]
impl MemoryArtifactSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, rel_path: impl AsRef<Path>) -> Option<&str> {
    self.artifacts.get(rel_path.as_ref()).map(String::as_str)
  }

  pub fn paths(&self) -> impl Iterator<Item = &Path> {
    self.artifacts.keys().map(PathBuf::as_path)
  }

  pub fn len(&self) -> usize {
    self.artifacts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.artifacts.is_empty()
  }
}

#[cfg(test)]
impl ArtifactSink for MemoryArtifactSink {
  fn write(&mut self, rel_path: &Path, contents: &str) -> Result<(), ArtifactError> {
    self.artifacts.insert(rel_path.to_path_buf(), contents.to_string());
    Ok(())
  }
}
