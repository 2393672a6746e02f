//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Person`
//! Source: crates/builder-gen-demo/src/models/mod.rs
//! Generated by `builder-gen`

use super::Person;
pub struct PersonBuilder {
    target: Person,
}
impl PersonBuilder {
    pub fn new() -> Self {
        Self { target: Person::default() }
    }
    pub fn set_name(mut self, value: String) -> Self {
        self.target.set_name(value);
        self
    }
    pub fn build(self) -> Person {
        self.target
    }
}
impl Default for PersonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
