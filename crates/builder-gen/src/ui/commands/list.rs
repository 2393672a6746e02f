use std::path::PathBuf;

use anyhow::Context;
use comfy_table::{Attribute, Cell, ContentArrangement, Row, Table};
use crossterm::style::Stylize;

use super::generate::collect_source_files;
use crate::{
  generator::{descriptor::FieldDescriptor, scanner},
  model::{SourceModel, loader},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::SourceLoader,
};

/// Prints every builder property found under the input paths, one row per
/// marked field, with its resolution status.
pub async fn list_properties(inputs: &[PathBuf], colors: &Colors) -> anyhow::Result<()> {
  let mut model = SourceModel::default();
  for input in inputs {
    for file_path in collect_source_files(input)? {
      let file = SourceLoader::open(&file_path)
        .await?
        .parse()
        .with_context(|| format!("failed to parse {}", file_path.display()))?;
      let classes = loader::load_source(&file_path, &file).with_context(|| format!("failed to load {}", file_path.display()))?;
      model.extend(classes);
    }
  }

  let marked = scanner::scan(&model);
  let mut descriptors: Vec<FieldDescriptor> = marked.iter().map(FieldDescriptor::from_marked_field).collect();
  if descriptors.is_empty() {
    println!("{}", "No builder properties found.".with(colors.info()));
    return Ok(());
  }
  descriptors.sort_by(|a, b| a.owning_class.qualified_name.cmp(&b.owning_class.qualified_name));

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("CLASS").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("FIELD").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("TYPE").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("SETTER").fg(IntoComfyColor::into(colors.label())));
  row.add_cell(Cell::new("STATUS").fg(IntoComfyColor::into(colors.label())));
  table.set_header(row);

  for descriptor in &descriptors {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(descriptor.owning_class.qualified_name.as_str())
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(descriptor.field_name.as_str()).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(Cell::new(descriptor.declared_type_name.as_str()).fg(IntoComfyColor::into(colors.value())));
    row.add_cell(Cell::new(descriptor.setter_name.as_str()).fg(IntoComfyColor::into(colors.value())));
    if descriptor.is_resolved() {
      row.add_cell(Cell::new("ok").fg(IntoComfyColor::into(colors.success())));
    } else {
      row.add_cell(Cell::new("missing setter").fg(IntoComfyColor::into(colors.accent())));
    }
    table.add_row(row);
  }

  println!("{table}");

  Ok(())
}
