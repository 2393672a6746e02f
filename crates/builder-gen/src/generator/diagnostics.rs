use strum::Display;

use crate::generator::descriptor::FieldDescriptor;

/// Severity of a reported diagnostic. The pass only ever reports errors;
/// informational output goes through the logger instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
  #[strum(to_string = "error")]
  Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Diagnostic {
  #[strum(
    to_string = "{origin}: field `{field}` of `{class}`: builder property must be applied to a field with a setter method that takes a single argument."
  )]
  UnresolvedSetter { origin: String, class: String, field: String },
  #[strum(to_string = "`{class}`: failed to write builder artifact: {error}")]
  ArtifactWriteFailed { class: String, error: String },
}

impl Diagnostic {
  /// Field-attributed diagnostic for a descriptor whose setter resolution
  /// came up empty.
  pub fn unresolved_setter(descriptor: &FieldDescriptor) -> Self {
    Self::UnresolvedSetter {
      origin: descriptor.owning_class.origin.display().to_string(),
      class: descriptor.owning_class.qualified_name.clone(),
      field: descriptor.field_name.to_string(),
    }
  }

  /// Class-level diagnostic for a builder whose artifact could not be
  /// rendered or written.
  pub fn artifact_write_failed(qualified_class: &str, error: impl std::fmt::Display) -> Self {
    Self::ArtifactWriteFailed {
      class: qualified_class.to_string(),
      error: error.to_string(),
    }
  }

  pub const fn severity(&self) -> Severity {
    Severity::Error
  }
}
