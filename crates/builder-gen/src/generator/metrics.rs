use crate::generator::diagnostics::Diagnostic;

/// Aggregated counters for a single generation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub fields_scanned: usize,
  pub builders_generated: usize,
  pub setters_generated: usize,
  pub unresolved_fields: usize,
  pub artifacts_failed: usize,
  pub diagnostics: Vec<Diagnostic>,
}

impl GenerationStats {
  pub fn record_scan(&mut self, marked_fields: usize) {
    self.fields_scanned += marked_fields;
  }

  pub fn record_builder(&mut self, setters: usize) {
    self.builders_generated += 1;
    self.setters_generated += setters;
  }

  pub fn record_diagnostic(&mut self, diagnostic: Diagnostic) {
    match &diagnostic {
      Diagnostic::UnresolvedSetter { .. } => self.unresolved_fields += 1,
      Diagnostic::ArtifactWriteFailed { .. } => self.artifacts_failed += 1,
    }
    self.diagnostics.push(diagnostic);
  }

  pub fn record_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
    for diagnostic in diagnostics {
      self.record_diagnostic(diagnostic);
    }
  }

  pub fn has_errors(&self) -> bool {
    !self.diagnostics.is_empty()
  }
}
