use builder_property::BuilderProperty;

#[derive(BuilderProperty, Clone, Debug, Default, PartialEq)]
pub struct Person {
  #[builder_property]
  name: String,
}

impl Person {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
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
