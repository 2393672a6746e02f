use std::fmt::{Display, Formatter};

use proc_macro2::{Span, TokenStream};
use quote::ToTokens;
use string_cache::DefaultAtom;
use syn::Ident;

fn ident_from(name: &str) -> Ident {
  // Raw identifiers parse with the `r#` prefix attached to the name.
  match name.strip_prefix("r#") {
    Some(stripped) => Ident::new_raw(stripped, Span::call_site()),
    None => Ident::new(name, Span::call_site()),
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeToken(pub DefaultAtom);

impl TypeToken {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeToken {
  fn from(s: &str) -> Self {
    TypeToken(DefaultAtom::from(s))
  }
}

impl From<String> for TypeToken {
  fn from(s: String) -> Self {
    TypeToken(DefaultAtom::from(s))
  }
}

impl PartialEq<&str> for TypeToken {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl Display for TypeToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for TypeToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident_from(&self.0).to_tokens(tokens);
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldNameToken(pub DefaultAtom);

impl FieldNameToken {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for FieldNameToken {
  fn from(s: &str) -> Self {
    FieldNameToken(DefaultAtom::from(s))
  }
}

impl From<String> for FieldNameToken {
  fn from(s: String) -> Self {
    FieldNameToken(DefaultAtom::from(s))
  }
}

impl PartialEq<&str> for FieldNameToken {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl Display for FieldNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for FieldNameToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident_from(&self.0).to_tokens(tokens);
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodNameToken(pub DefaultAtom);

impl MethodNameToken {
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for MethodNameToken {
  fn from(s: &str) -> Self {
    MethodNameToken(DefaultAtom::from(s))
  }
}

impl From<String> for MethodNameToken {
  fn from(s: String) -> Self {
    MethodNameToken(DefaultAtom::from(s))
  }
}

impl PartialEq<&str> for MethodNameToken {
  fn eq(&self, other: &&str) -> bool {
    self.as_str() == *other
  }
}

impl Display for MethodNameToken {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for MethodNameToken {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident_from(&self.0).to_tokens(tokens);
  }
}
