use std::path::{Path, PathBuf};

use crate::{
  artifact::{ArtifactError, ArtifactSink, MemoryArtifactSink},
  model::{SourceModel, loader},
};

pub(super) fn parse_model(origin: &str, source: &str) -> SourceModel {
  let file = syn::parse_file(source).expect("failed to parse test source");
  let classes = loader::load_source(Path::new(origin), &file).expect("failed to load test source");
  let mut model = SourceModel::default();
  model.extend(classes);
  model
}

/// Sink that rejects writes to one path and accepts the rest.
pub(super) struct FailingSink {
  pub(super) inner: MemoryArtifactSink,
  pub(super) fail_on: PathBuf,
}

impl ArtifactSink for FailingSink {
  fn write(&mut self, rel_path: &Path, contents: &str) -> Result<(), ArtifactError> {
    if rel_path == self.fail_on {
      return Err(ArtifactError::Write {
        path: rel_path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "write rejected"),
      });
    }
    self.inner.write(rel_path, contents)
  }
}
