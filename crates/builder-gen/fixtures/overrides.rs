pub struct Document {
  #[builder_property(setter_name = "rename")]
  title: String,
  #[builder_property]
  body: String,
}

impl Document {
  pub fn rename(&mut self, value: String) {
    self.title = value;
  }

  pub fn set_body(&mut self, value: String) {
    self.body = value;
  }
}
