pub(crate) mod descriptor;
pub(crate) mod diagnostics;
pub(crate) mod emitter;
pub(crate) mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub(crate) mod scanner;
pub(crate) mod tokens;

#[cfg(test)]
mod tests;
