use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{
  artifact::ArtifactSink,
  generator::{
    descriptor::FieldDescriptor,
    diagnostics::Diagnostic,
    emitter::{self, SourceEmitter, Visibility},
    metrics::GenerationStats,
    scanner,
  },
  model::SourceModel,
};

/// Record of one artifact accepted by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
  pub name: String,
  pub rel_path: PathBuf,
}

/// Result of one generation pass. Diagnostics live inside the statistics,
/// bucketed by kind as they were recorded.
#[derive(Debug, Clone, Default)]
pub struct PassOutcome {
  pub stats: GenerationStats,
  pub artifacts: Vec<ArtifactRecord>,
}

pub struct Orchestrator {
  model: SourceModel,
  emitter: SourceEmitter,
}

impl Orchestrator {
  /// Creates a new orchestrator over a loaded declaration model.
  ///
  /// The actual generation is performed when calling `run()`.
  pub fn new(model: SourceModel, visibility: Visibility) -> Self {
    Self {
      model,
      emitter: SourceEmitter::new(visibility),
    }
  }

  /// Runs one generation pass over the model.
  ///
  /// The pass is strictly sequential:
  /// 1. Scans the model for marked fields
  /// 2. Derives one field descriptor per marked field
  /// 3. Groups descriptors by owning class, in first-occurrence order
  /// 4. Renders and writes one builder file per group, in group order
  ///
  /// Unresolved setters become field-level diagnostics during rendering; a
  /// group whose artifact cannot be rendered or written becomes one
  /// class-level diagnostic. Either way the pass continues with the next
  /// group and always returns an outcome. Re-running over an unchanged
  /// model yields byte-identical artifacts.
  pub fn run(&self, sink: &mut dyn ArtifactSink) -> PassOutcome {
    let mut stats = GenerationStats::default();
    let mut artifacts = Vec::new();

    let marked = scanner::scan(&self.model);
    stats.record_scan(marked.len());

    let descriptors: Vec<FieldDescriptor> = marked.iter().map(FieldDescriptor::from_marked_field).collect();

    let mut groups: IndexMap<String, Vec<FieldDescriptor>> = IndexMap::new();
    for descriptor in descriptors {
      groups
        .entry(descriptor.owning_class.qualified_name.clone())
        .or_default()
        .push(descriptor);
    }

    for group in groups.values() {
      let Some(first) = group.first() else {
        continue;
      };
      let owner = &first.owning_class;

      let (valid, diagnostics) = emitter::classify(group);
      stats.record_diagnostics(diagnostics);

      let written = self
        .emitter
        .render(owner, &valid)
        .and_then(|emitted| match sink.write(&emitted.rel_path, &emitted.code) {
          Ok(()) => Ok(emitted),
          Err(error) => Err(error.into()),
        });

      match written {
        Ok(emitted) => {
          stats.record_builder(valid.len());
          artifacts.push(ArtifactRecord {
            name: emitted.name,
            rel_path: emitted.rel_path,
          });
        }
        Err(error) => {
          stats.record_diagnostic(Diagnostic::artifact_write_failed(&owner.qualified_name, error));
        }
      }
    }

    PassOutcome { stats, artifacts }
  }
}
