use std::path::PathBuf;

use crate::generator::tokens::{FieldNameToken, MethodNameToken, TypeToken};

pub mod loader;
pub mod type_text;

/// Payload of one `builder_property` marker. The override string is kept
/// raw; trimming and fallback happen during descriptor derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marker {
  pub setter_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct FieldDecl {
  pub name: FieldNameToken,
  pub type_text: String,
  pub marker: Option<Marker>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct MethodDecl {
  pub name: MethodNameToken,
  #[builder(default)]
  pub param_types: Vec<String>,
  pub marker: Option<Marker>,
}

/// One data class declaration with its directly declared members.
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct ClassDecl {
  pub simple_name: TypeToken,
  #[builder(default)]
  pub module_path: Vec<String>,
  #[builder(default)]
  pub origin: PathBuf,
  pub marker: Option<Marker>,
  #[builder(default)]
  pub fields: Vec<FieldDecl>,
  #[builder(default)]
  pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
  /// Module path and simple name joined with `::`.
  pub fn qualified_name(&self) -> String {
    if self.module_path.is_empty() {
      self.simple_name.to_string()
    } else {
      format!("{}::{}", self.module_path.join("::"), self.simple_name)
    }
  }
}

/// One declaration in the model, tagged by kind. Field and method elements
/// carry their enclosing class.
#[derive(Debug, Clone, Copy)]
pub enum Element<'a> {
  Class(&'a ClassDecl),
  Field {
    owner: &'a ClassDecl,
    field: &'a FieldDecl,
  },
  Method {
    owner: &'a ClassDecl,
    method: &'a MethodDecl,
  },
}

impl<'a> Element<'a> {
  pub fn marker(&self) -> Option<&'a Marker> {
    match self {
      Element::Class(class) => class.marker.as_ref(),
      Element::Field { field, .. } => field.marker.as_ref(),
      Element::Method { method, .. } => method.marker.as_ref(),
    }
  }
}

/// Declaration model for one generation pass, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceModel {
  pub classes: Vec<ClassDecl>,
}

impl SourceModel {
  pub fn extend(&mut self, classes: Vec<ClassDecl>) {
    self.classes.extend(classes);
  }

  /// Every declaration in insertion order: each class, then its fields,
  /// then its methods.
  pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
    self.classes.iter().flat_map(|class| {
      std::iter::once(Element::Class(class))
        .chain(class.fields.iter().map(move |field| Element::Field { owner: class, field }))
        .chain(class.methods.iter().map(move |method| Element::Method { owner: class, method }))
    })
  }
}
