//! Data classes for the demo.
//!
//! The `*_builder` modules are generated. Regenerate them after editing the
//! marked fields:
//!
//! ```text
//! builder-gen generate -i crates/builder-gen-demo/src/models/mod.rs -o crates/builder-gen-demo/src/models
//! ```

use builder_property::BuilderProperty;

mod animal_builder;
mod person_builder;

pub use animal_builder::AnimalBuilder;
pub use person_builder::PersonBuilder;

#[derive(BuilderProperty, Clone, Debug, Default, PartialEq)]
pub struct Person {
  #[builder_property]
  name: String,
}

impl Person {
  pub fn new(name: String) -> Self {
    Self { name }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn set_name(&mut self, value: String) {
    self.name = value;
  }
}

#[derive(BuilderProperty, Clone, Debug, Default, PartialEq)]
pub struct Animal {
  #[builder_property]
  name: String,

  #[builder_property]
  can_fly: bool,
}

impl Animal {
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn can_fly(&self) -> bool {
    self.can_fly
  }

  pub fn set_name(&mut self, value: String) {
    self.name = value;
  }

  pub fn set_can_fly(&mut self, value: bool) {
    self.can_fly = value;
  }
}
