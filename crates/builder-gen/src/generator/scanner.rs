use crate::model::{ClassDecl, Element, FieldDecl, Marker, SourceModel};

/// One marked field together with its enclosing class.
#[derive(Debug, Clone, Copy)]
pub struct MarkedField<'a> {
  pub owner: &'a ClassDecl,
  pub field: &'a FieldDecl,
  pub marker: &'a Marker,
}

/// Selects every field declaration carrying the marker, in model order.
/// Markers on any other element kind are excluded, not diagnosed.
pub fn scan(model: &SourceModel) -> Vec<MarkedField<'_>> {
  model
    .elements()
    .filter_map(|element| match element {
      Element::Field { owner, field } => field.marker.as_ref().map(|marker| MarkedField { owner, field, marker }),
      _ => None,
    })
    .collect()
}
