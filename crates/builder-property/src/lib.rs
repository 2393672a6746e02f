//! # builder-property
//!
//! Marker derive for fields that should receive a generated fluent builder.
//!
//! Deriving [`BuilderProperty`] emits no code. It registers the inert
//! `#[builder_property]` field attribute and validates how it is used, so
//! misuse fails at compile time instead of silently producing nothing. The
//! builder implementations themselves are written by the `builder-gen` tool,
//! which scans source files for marked fields.
//!
//! ## Example
//!
//! ```rust
//! use builder_property::BuilderProperty;
//!
//! #[derive(BuilderProperty, Default)]
//! pub struct Person {
//!   #[builder_property]
//!   name: String,
//! }
//!
//! impl Person {
//!   pub fn set_name(&mut self, value: String) {
//!     self.name = value;
//!   }
//! }
//! ```
//!
//! The setter invoked by the generated builder can be overridden per field
//! with `#[builder_property(setter_name = "rename")]`.

use proc_macro::TokenStream;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Meta, parse_macro_input};

const MARKER: &str = "builder_property";

/// Marks fields of a data class as builder properties.
///
/// The derive accepts structs with named fields. Each field may carry
/// `#[builder_property]`, optionally with a `setter_name` override:
///
/// ```rust
/// use builder_property::BuilderProperty;
///
/// #[derive(BuilderProperty, Default)]
/// pub struct Document {
///   #[builder_property(setter_name = "rename")]
///   title: String,
/// }
///
/// impl Document {
///   pub fn rename(&mut self, value: String) {
///     self.title = value;
///   }
/// }
/// ```
#[proc_macro_derive(BuilderProperty, attributes(builder_property))]
pub fn derive_builder_property(input: TokenStream) -> TokenStream {
  let input = parse_macro_input!(input as DeriveInput);

  match validate(&input) {
    Ok(()) => TokenStream::new(),
    Err(error) => error.to_compile_error().into(),
  }
}

fn validate(input: &DeriveInput) -> syn::Result<()> {
  let fields = match &input.data {
    Data::Struct(data) => match &data.fields {
      Fields::Named(named) => &named.named,
      _ => {
        return Err(syn::Error::new_spanned(
          input,
          "BuilderProperty can only be derived for structs with named fields",
        ));
      }
    },
    _ => {
      return Err(syn::Error::new_spanned(input, "BuilderProperty can only be derived for structs"));
    }
  };

  for field in fields {
    for attr in &field.attrs {
      if attr.path().is_ident(MARKER) {
        validate_marker(attr)?;
      }
    }
  }
  Ok(())
}

fn validate_marker(attr: &Attribute) -> syn::Result<()> {
  match &attr.meta {
    Meta::Path(_) => Ok(()),
    Meta::List(_) => attr.parse_nested_meta(|meta| {
      if meta.path.is_ident("setter_name") {
        let _: LitStr = meta.value()?.parse()?;
        Ok(())
      } else {
        Err(meta.error("unsupported builder_property argument, expected `setter_name`"))
      }
    }),
    Meta::NameValue(_) => Err(syn::Error::new_spanned(
      attr,
      "expected `#[builder_property]` or `#[builder_property(setter_name = \"...\")]`",
    )),
  }
}
