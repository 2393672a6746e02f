pub mod zoo {
  pub struct Tiger {
    #[builder_property]
    pub name: String,
  }

  impl Tiger {
    pub fn set_name(&mut self, value: String) {
      self.name = value;
    }
  }
}

pub struct Keeper {
  #[builder_property]
  pub name: String,
}

impl Keeper {
  pub fn set_name(&mut self, value: String) {
    self.name = value;
  }
}
