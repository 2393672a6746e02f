use builder_gen_demo::models::{Animal, AnimalBuilder, Person, PersonBuilder};

#[test]
fn test_person_builder_matches_constructor() {
  let direct = Person::new("Hello".to_string());
  let built = PersonBuilder::new().set_name("Hello".to_string()).build();

  assert_eq!(direct, built);
}

#[test]
fn test_person_builder_distinguishes_values() {
  let hello = PersonBuilder::new().set_name("Hello".to_string()).build();
  let hi = PersonBuilder::new().set_name("Hi!".to_string()).build();

  assert_ne!(hello, hi);
}

#[test]
fn test_animal_builder_sets_all_marked_fields() {
  let animal = AnimalBuilder::new().set_name("Owl".to_string()).set_can_fly(true).build();

  assert_eq!(animal.name(), "Owl");
  assert!(animal.can_fly());
}

#[test]
fn test_default_builder_yields_default_target() {
  let animal = AnimalBuilder::default().build();

  assert_eq!(animal, Animal::default());
}

#[test]
fn test_setter_order_does_not_matter() {
  let first = AnimalBuilder::new().set_can_fly(false).set_name("Tortoise".to_string()).build();
  let second = AnimalBuilder::new().set_name("Tortoise".to_string()).set_can_fly(false).build();

  assert_eq!(first, second);
}
