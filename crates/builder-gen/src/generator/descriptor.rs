use std::path::PathBuf;

use crate::{
  generator::{
    naming,
    scanner::MarkedField,
    tokens::{FieldNameToken, MethodNameToken, TypeToken},
  },
  model::ClassDecl,
};

/// Owning-class slice carried by every descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct OwningClass {
  pub qualified_name: String,
  pub simple_name: TypeToken,
  #[builder(default)]
  pub module_path: Vec<String>,
  #[builder(default)]
  pub origin: PathBuf,
}

impl OwningClass {
  fn from_class(class: &ClassDecl) -> Self {
    Self {
      qualified_name: class.qualified_name(),
      simple_name: class.simple_name.clone(),
      module_path: class.module_path.clone(),
      origin: class.origin.clone(),
    }
  }
}

/// Everything emission needs to know about one marked field. An absent
/// `resolved_setter` is valid data; it becomes a diagnostic at emission,
/// never a failure here.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct FieldDescriptor {
  pub field_name: FieldNameToken,
  pub declared_type_name: String,
  pub setter_name: String,
  #[builder(default)]
  pub owning_class: OwningClass,
  pub resolved_setter: Option<MethodNameToken>,
}

impl FieldDescriptor {
  /// Derives the descriptor for one marked field and resolves its target
  /// setter over the owner's directly declared methods.
  pub fn from_marked_field(marked: &MarkedField<'_>) -> Self {
    let setter_name = naming::target_setter_name(marked.field.name.as_str(), marked.marker);
    let resolved_setter = resolve_setter(marked.owner, &setter_name, &marked.field.type_text);
    Self {
      field_name: marked.field.name.clone(),
      declared_type_name: marked.field.type_text.clone(),
      setter_name,
      owning_class: OwningClass::from_class(marked.owner),
      resolved_setter,
    }
  }

  pub fn is_resolved(&self) -> bool {
    self.resolved_setter.is_some()
  }
}

/// First declared method whose name matches the setter name
/// case-insensitively and whose single non-receiver parameter has exactly
/// the field's declared type text. Later overloads never shadow an earlier
/// match.
fn resolve_setter(owner: &ClassDecl, setter_name: &str, declared_type: &str) -> Option<MethodNameToken> {
  owner
    .methods
    .iter()
    .find(|method| {
      method.name.as_str().eq_ignore_ascii_case(setter_name)
        && method.param_types.len() == 1
        && method.param_types[0] == declared_type
    })
    .map(|method| method.name.clone())
}
