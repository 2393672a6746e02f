use std::path::{Path, PathBuf};

use super::support::{FailingSink, parse_model};
use crate::{
  artifact::MemoryArtifactSink,
  generator::{emitter::Visibility, orchestrator::Orchestrator},
};

#[test]
fn test_generates_one_builder_per_owning_class() {
  let source = include_str!("../../../fixtures/demo_models.rs");
  let model = parse_model("fixtures/demo_models.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  assert_eq!(outcome.stats.fields_scanned, 3);
  assert_eq!(outcome.stats.builders_generated, 2);
  assert_eq!(outcome.stats.setters_generated, 3);
  assert!(!outcome.stats.has_errors());
  assert_eq!(sink.len(), 2);

  let person = sink.get("person_builder.rs").expect("person builder written");
  assert!(person.contains("//! AUTO-GENERATED CODE - DO NOT EDIT!"));
  assert!(person.contains("//! Builder for `Person`"));
  assert!(person.contains("//! Source: fixtures/demo_models.rs"));
  assert!(person.contains("use super::Person;"));
  assert!(person.contains("pub struct PersonBuilder"));
  assert!(person.contains("Person::default()"));
  assert!(person.contains("pub fn set_name(mut self, value: String) -> Self"));
  assert!(person.contains("self.target.set_name(value);"));
  assert!(person.contains("pub fn build(self) -> Person"));
  assert!(!person.contains("can_fly"));

  let animal = sink.get("animal_builder.rs").expect("animal builder written");
  assert!(animal.contains("pub struct AnimalBuilder"));
  assert!(animal.contains("pub fn set_name(mut self, value: String) -> Self"));
  assert!(animal.contains("pub fn set_can_fly(mut self, value: bool) -> Self"));
  assert!(animal.contains("self.target.set_can_fly(value);"));
}

#[test]
fn test_artifact_order_follows_first_occurrence() {
  let source = include_str!("../../../fixtures/demo_models.rs");
  let model = parse_model("fixtures/demo_models.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  let names: Vec<&str> = outcome.artifacts.iter().map(|record| record.name.as_str()).collect();
  assert_eq!(names, vec!["PersonBuilder", "AnimalBuilder"]);
  let paths: Vec<&Path> = sink.paths().collect();
  assert_eq!(paths, vec![Path::new("person_builder.rs"), Path::new("animal_builder.rs")]);
}

#[test]
fn test_unresolved_setter_reports_and_emission_continues() {
  let source = include_str!("../../../fixtures/unresolved.rs");
  let model = parse_model("fixtures/unresolved.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  assert_eq!(outcome.stats.unresolved_fields, 1);
  assert_eq!(outcome.stats.diagnostics.len(), 1);
  let message = outcome.stats.diagnostics[0].to_string();
  assert!(message.contains("field `can_fly` of `Animal`"));
  assert!(
    message.contains("builder property must be applied to a field with a setter method that takes a single argument.")
  );

  let animal = sink.get("animal_builder.rs").expect("builder still written");
  assert!(animal.contains("pub fn set_name(mut self, value: String) -> Self"));
  assert!(!animal.contains("set_can_fly"));
  assert_eq!(outcome.stats.setters_generated, 1);
}

#[test]
fn test_exact_type_mismatch_is_unresolved() {
  let source = include_str!("../../../fixtures/mismatched.rs");
  let model = parse_model("fixtures/mismatched.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  assert_eq!(outcome.stats.unresolved_fields, 1);
  let record = sink.get("record_builder.rs").expect("builder still written");
  assert!(!record.contains("set_name(mut self"));
  assert!(record.contains("pub fn build(self) -> Record"));
}

#[test]
fn test_override_changes_invoked_setter_only() {
  let source = include_str!("../../../fixtures/overrides.rs");
  let model = parse_model("fixtures/overrides.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  assert!(!outcome.stats.has_errors());
  let document = sink.get("document_builder.rs").expect("builder written");
  assert!(document.contains("pub fn set_title(mut self, value: String) -> Self"));
  assert!(document.contains("self.target.rename(value);"));
  assert!(document.contains("pub fn set_body(mut self, value: String) -> Self"));
  assert!(document.contains("self.target.set_body(value);"));
}

#[test]
fn test_namespaced_owner_writes_nested_artifact() {
  let source = include_str!("../../../fixtures/namespaced.rs");
  let model = parse_model("fixtures/namespaced.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = MemoryArtifactSink::new();

  let outcome = orchestrator.run(&mut sink);

  assert_eq!(outcome.stats.builders_generated, 2);
  let tiger = sink.get("zoo/tiger_builder.rs").expect("nested builder written");
  assert!(tiger.contains("//! Builder for `zoo::Tiger`"));
  assert!(tiger.contains("use super::Tiger;"));

  let keeper = sink.get("keeper_builder.rs").expect("root builder written");
  assert!(keeper.contains("//! Builder for `Keeper`"));
}

#[test]
fn test_write_failure_is_isolated_per_class() {
  let source = include_str!("../../../fixtures/demo_models.rs");
  let model = parse_model("fixtures/demo_models.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::default());
  let mut sink = FailingSink {
    inner: MemoryArtifactSink::new(),
    fail_on: PathBuf::from("person_builder.rs"),
  };

  let outcome = orchestrator.run(&mut sink);

  assert_eq!(outcome.stats.artifacts_failed, 1);
  assert_eq!(outcome.stats.builders_generated, 1);
  assert_eq!(outcome.artifacts.len(), 1);
  assert_eq!(outcome.artifacts[0].name, "AnimalBuilder");
  assert!(sink.inner.get("animal_builder.rs").is_some());
  assert!(sink.inner.get("person_builder.rs").is_none());

  let message = outcome.stats.diagnostics[0].to_string();
  assert!(message.contains("`Person`"));
  assert!(message.contains("failed to write builder artifact"));
}

#[test]
fn test_pass_is_idempotent() {
  let source = include_str!("../../../fixtures/demo_models.rs");

  let first_model = parse_model("fixtures/demo_models.rs", source);
  let mut first_sink = MemoryArtifactSink::new();
  Orchestrator::new(first_model, Visibility::default()).run(&mut first_sink);

  let second_model = parse_model("fixtures/demo_models.rs", source);
  let mut second_sink = MemoryArtifactSink::new();
  Orchestrator::new(second_model, Visibility::default()).run(&mut second_sink);

  assert_eq!(first_sink, second_sink);
}

#[test]
fn test_crate_visibility_applies_to_emitted_items() {
  let source = include_str!("../../../fixtures/demo_models.rs");
  let model = parse_model("fixtures/demo_models.rs", source);
  let orchestrator = Orchestrator::new(model, Visibility::Crate);
  let mut sink = MemoryArtifactSink::new();

  orchestrator.run(&mut sink);

  let person = sink.get("person_builder.rs").expect("builder written");
  assert!(person.contains("pub(crate) struct PersonBuilder"));
  assert!(person.contains("pub(crate) fn build(self) -> Person"));
}
