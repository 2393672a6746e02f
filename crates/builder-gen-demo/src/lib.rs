//! Demo data classes wired to builders generated by `builder-gen`.

pub mod models;
