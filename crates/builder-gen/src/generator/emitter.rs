use std::path::PathBuf;

use anyhow::{Result, bail};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::generator::{
  descriptor::{FieldDescriptor, OwningClass},
  diagnostics::Diagnostic,
  naming,
  tokens::{MethodNameToken, TypeToken},
};

/// Visibility applied to the emitted builder type and its methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(value: &str) -> Option<Self> {
    match value {
      "public" => Some(Self::Public),
      "crate" => Some(Self::Crate),
      "file" => Some(Self::File),
      _ => None,
    }
  }
}

impl ToTokens for Visibility {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    match self {
      Visibility::Public => tokens.extend(quote! { pub }),
      Visibility::Crate => tokens.extend(quote! { pub(crate) }),
      Visibility::File => {}
    }
  }
}

/// One rendered builder file, ready for the artifact sink.
#[derive(Debug, Clone)]
pub struct EmittedBuilder {
  /// Qualified name of the builder type, for reporting.
  pub name: String,
  pub rel_path: PathBuf,
  pub code: String,
}

/// Splits a group into the descriptors that can become setter methods and
/// the diagnostics for those that cannot. Classification runs to completion
/// before any rendering, so one bad field never suppresses its siblings.
pub fn classify<'a>(group: &'a [FieldDescriptor]) -> (Vec<&'a FieldDescriptor>, Vec<Diagnostic>) {
  let mut valid = Vec::new();
  let mut diagnostics = Vec::new();
  for descriptor in group {
    if descriptor.is_resolved() {
      valid.push(descriptor);
    } else {
      diagnostics.push(Diagnostic::unresolved_setter(descriptor));
    }
  }
  (valid, diagnostics)
}

pub struct SourceEmitter {
  visibility: Visibility,
}

impl SourceEmitter {
  pub fn new(visibility: Visibility) -> Self {
    Self { visibility }
  }

  /// Renders the builder file for one owning class. Setter methods appear
  /// in descriptor order; a group with no valid descriptors still yields a
  /// builder with only construction and `build`.
  pub fn render(&self, owner: &OwningClass, valid: &[&FieldDescriptor]) -> Result<EmittedBuilder> {
    let builder_name = naming::builder_type_name(owner.simple_name.as_str());
    let builder_token = TypeToken::from(builder_name.as_str());
    let target_token = &owner.simple_name;
    let vis = self.visibility;

    let setters = valid
      .iter()
      .map(|descriptor| self.render_setter(descriptor))
      .collect::<Result<Vec<TokenStream>>>()?;

    let tokens = quote! {
      use super::#target_token;

      #vis struct #builder_token {
        target: #target_token,
      }

      impl #builder_token {
        #vis fn new() -> Self {
          Self { target: #target_token::default() }
        }

        #(#setters)*

        #vis fn build(self) -> #target_token {
          self.target
        }
      }

      impl Default for #builder_token {
        fn default() -> Self {
          Self::new()
        }
      }
    };

    let syntax_tree: syn::File = syn::parse2(tokens)?;
    let body = prettyplease::unparse(&syntax_tree);
    let code = format!(
      "//! AUTO-GENERATED CODE - DO NOT EDIT!\n//!\n//! Builder for `{target}`\n//! Source: {source}\n//! Generated by `builder-gen`\n\n{body}",
      target = owner.qualified_name,
      source = owner.origin.display(),
    );

    Ok(EmittedBuilder {
      name: qualified_builder_name(owner, &builder_name),
      rel_path: naming::artifact_rel_path(&owner.module_path, &builder_name),
      code,
    })
  }

  fn render_setter(&self, descriptor: &FieldDescriptor) -> Result<TokenStream> {
    let Some(target_setter) = &descriptor.resolved_setter else {
      bail!("descriptor for `{}` has no resolved setter", descriptor.field_name);
    };
    let vis = self.visibility;
    let method = MethodNameToken::from(naming::builder_method_name(descriptor.field_name.as_str()));
    let value_type: syn::Type = syn::parse_str(&descriptor.declared_type_name)?;

    Ok(quote! {
      #vis fn #method(mut self, value: #value_type) -> Self {
        self.target.#target_setter(value);
        self
      }
    })
  }
}

fn qualified_builder_name(owner: &OwningClass, builder_name: &str) -> String {
  if owner.module_path.is_empty() {
    builder_name.to_string()
  } else {
    format!("{}::{}", owner.module_path.join("::"), builder_name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn owner(simple_name: &str, module_path: &[&str]) -> OwningClass {
    let module_path: Vec<String> = module_path.iter().map(ToString::to_string).collect();
    let qualified_name = if module_path.is_empty() {
      simple_name.to_string()
    } else {
      format!("{}::{simple_name}", module_path.join("::"))
    };
    OwningClass::builder()
      .qualified_name(qualified_name)
      .simple_name(simple_name.into())
      .module_path(module_path)
      .origin("src/models.rs".into())
      .build()
  }

  fn resolved(owner: &OwningClass, field: &str, type_text: &str, setter: &str) -> FieldDescriptor {
    FieldDescriptor::builder()
      .field_name(field.into())
      .declared_type_name(type_text.to_string())
      .setter_name(setter.to_string())
      .owning_class(owner.clone())
      .resolved_setter(setter.into())
      .build()
  }

  fn unresolved(owner: &OwningClass, field: &str, type_text: &str, setter: &str) -> FieldDescriptor {
    FieldDescriptor::builder()
      .field_name(field.into())
      .declared_type_name(type_text.to_string())
      .setter_name(setter.to_string())
      .owning_class(owner.clone())
      .build()
  }

  #[test]
  fn test_classify_splits_resolved_from_unresolved() {
    let owner = owner("Person", &[]);
    let group = vec![
      resolved(&owner, "name", "String", "set_name"),
      unresolved(&owner, "age", "u32", "set_age"),
    ];
    let (valid, diagnostics) = classify(&group);
    assert_eq!(valid.len(), 1);
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].to_string().contains("field `age` of `Person`"));
  }

  #[test]
  fn test_render_full_builder() {
    let owner = owner("Person", &[]);
    let group = vec![resolved(&owner, "name", "String", "set_name")];
    let (valid, _) = classify(&group);
    let emitted = SourceEmitter::new(Visibility::Public)
      .render(&owner, &valid)
      .expect("render succeeds");

    assert_eq!(emitted.name, "PersonBuilder");
    assert_eq!(emitted.rel_path, PathBuf::from("person_builder.rs"));
    assert!(emitted.code.starts_with("//! AUTO-GENERATED CODE - DO NOT EDIT!"));
    assert!(emitted.code.contains("//! Builder for `Person`"));
    assert!(emitted.code.contains("//! Source: src/models.rs"));
    assert!(emitted.code.contains("use super::Person;"));
    assert!(emitted.code.contains("pub struct PersonBuilder"));
    assert!(emitted.code.contains("target: Person"));
    assert!(emitted.code.contains("target: Person::default()"));
    assert!(emitted.code.contains("pub fn set_name(mut self, value: String) -> Self"));
    assert!(emitted.code.contains("self.target.set_name(value);"));
    assert!(emitted.code.contains("pub fn build(self) -> Person"));
    assert!(emitted.code.contains("impl Default for PersonBuilder"));
  }

  #[test]
  fn test_render_invokes_resolved_identifier() {
    let owner = owner("Person", &[]);
    let descriptor = FieldDescriptor::builder()
      .field_name("name".into())
      .declared_type_name("String".to_string())
      .setter_name("set_name".to_string())
      .owning_class(owner.clone())
      .resolved_setter("SET_NAME".into())
      .build();
    let emitted = SourceEmitter::new(Visibility::Public)
      .render(&owner, &[&descriptor])
      .expect("render succeeds");

    assert!(emitted.code.contains("pub fn set_name(mut self, value: String) -> Self"));
    assert!(emitted.code.contains("self.target.SET_NAME(value);"));
  }

  #[test]
  fn test_render_namespaced_owner_nests_artifact() {
    let owner = owner("Tiger", &["zoo"]);
    let emitted = SourceEmitter::new(Visibility::Public)
      .render(&owner, &[])
      .expect("render succeeds");

    assert_eq!(emitted.name, "zoo::TigerBuilder");
    assert_eq!(emitted.rel_path, PathBuf::from("zoo/tiger_builder.rs"));
    assert!(emitted.code.contains("//! Builder for `zoo::Tiger`"));
    assert!(emitted.code.contains("use super::Tiger;"));
  }

  #[test]
  fn test_render_without_valid_descriptors_keeps_build() {
    let owner = owner("Person", &[]);
    let emitted = SourceEmitter::new(Visibility::Public)
      .render(&owner, &[])
      .expect("render succeeds");

    assert!(emitted.code.contains("pub fn new() -> Self"));
    assert!(emitted.code.contains("pub fn build(self) -> Person"));
    assert!(!emitted.code.contains("fn set_"));
  }

  #[test]
  fn test_render_crate_visibility() {
    let owner = owner("Person", &[]);
    let group = vec![resolved(&owner, "name", "String", "set_name")];
    let (valid, _) = classify(&group);
    let emitted = SourceEmitter::new(Visibility::Crate)
      .render(&owner, &valid)
      .expect("render succeeds");

    assert!(emitted.code.contains("pub(crate) struct PersonBuilder"));
    assert!(emitted.code.contains("pub(crate) fn set_name"));
  }

  #[test]
  fn test_render_rejects_unparsable_type_text() {
    let owner = owner("Person", &[]);
    let group = vec![resolved(&owner, "name", "not a type!!", "set_name")];
    let (valid, _) = classify(&group);
    assert!(SourceEmitter::new(Visibility::Public).render(&owner, &valid).is_err());
  }
}
