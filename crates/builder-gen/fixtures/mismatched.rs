pub struct Record {
  #[builder_property]
  name: String,
}

impl Record {
  pub fn set_name(&mut self, value: i64) {
    self.name = value.to_string();
  }
}
