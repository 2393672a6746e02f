pub struct Animal {
  #[builder_property]
  name: String,
  #[builder_property]
  can_fly: bool,
}

impl Animal {
  pub fn set_name(&mut self, value: String) {
    self.name = value;
  }
}
