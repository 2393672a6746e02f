//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `Animal`
//! Source: crates/builder-gen-demo/src/models/mod.rs
//! Generated by `builder-gen`

use super::Animal;
pub struct AnimalBuilder {
    target: Animal,
}
impl AnimalBuilder {
    pub fn new() -> Self {
        Self { target: Animal::default() }
    }
    pub fn set_name(mut self, value: String) -> Self {
        self.target.set_name(value);
        self
    }
    pub fn set_can_fly(mut self, value: bool) -> Self {
        self.target.set_can_fly(value);
        self
    }
    pub fn build(self) -> Animal {
        self.target
    }
}
impl Default for AnimalBuilder {
    fn default() -> Self {
        Self::new()
    }
}
