pub mod source;

pub(crate) use source::SourceLoader;
