use builder_gen_demo::models::{Person, PersonBuilder};

fn main() {
  let person = Person::new("Hello".to_string());

  let person2 = PersonBuilder::new().set_name("Hello".to_string()).build();

  let person3 = PersonBuilder::new().set_name("Hi!".to_string()).build();

  println!("{}", person == person2);
  println!("{}", person2 == person3);
}
