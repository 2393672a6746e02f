use quote::ToTokens;

/// Renders a parsed type to its canonical one-line textual form. Setter
/// resolution compares these strings for exact equality, so every type in
/// the model must pass through here.
pub fn render_type_text(ty: &syn::Type) -> String {
  normalize_type_text(&ty.to_token_stream().to_string())
}

/// Collapses token-stream spacing: a space survives only between two
/// identifier characters, so `Vec < String >` and `Vec<String>` render
/// the same.
pub fn normalize_type_text(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  let mut chars = raw.chars().peekable();
  while let Some(c) = chars.next() {
    if c != ' ' {
      out.push(c);
      continue;
    }
    let prev = out.chars().next_back();
    let next = chars.peek().copied();
    if let (Some(p), Some(n)) = (prev, next)
      && is_ident_char(p)
      && is_ident_char(n)
    {
      out.push(' ');
    }
  }
  out
}

fn is_ident_char(c: char) -> bool {
  c.is_alphanumeric() || c == '_'
}
