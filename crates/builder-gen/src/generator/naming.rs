use std::path::PathBuf;

use inflections::Inflect;

use crate::model::Marker;

/// Name of the accumulator setter a descriptor targets: a trimmed non-empty
/// override verbatim, otherwise `set_` plus the field name. The `r#` prefix
/// of a raw identifier never participates in concatenation.
pub(crate) fn target_setter_name(field_name: &str, marker: &Marker) -> String {
  let explicit = marker.setter_name.trim();
  if !explicit.is_empty() {
    return explicit.to_string();
  }
  format!("set_{}", field_name.trim_start_matches("r#"))
}

/// Name of the chained method on the emitted builder. Always derived from
/// the field name, regardless of any override on the marker.
pub(crate) fn builder_method_name(field_name: &str) -> String {
  format!("set_{}", field_name.trim_start_matches("r#"))
}

pub(crate) fn builder_type_name(simple_name: &str) -> String {
  format!("{simple_name}Builder")
}

pub(crate) fn artifact_file_name(builder_type: &str) -> String {
  format!("{}.rs", builder_type.to_snake_case())
}

/// Relative artifact path under the output root: one directory per module
/// path segment, then the snake_case file name. An unnamespaced owner lands
/// directly at the root.
pub(crate) fn artifact_rel_path(module_path: &[String], builder_type: &str) -> PathBuf {
  let mut path: PathBuf = module_path.iter().collect();
  path.push(artifact_file_name(builder_type));
  path
}
