use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;

use crate::{
  artifact::FsArtifactSink,
  generator::{
    emitter::Visibility,
    metrics::GenerationStats,
    orchestrator::{ArtifactRecord, Orchestrator, PassOutcome},
  },
  model::{SourceModel, loader},
  ui::Colors,
  utils::SourceLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: Vec<PathBuf>,
  pub output: PathBuf,
  pub visibility: Visibility,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_args(input: Vec<PathBuf>, output: PathBuf, visibility: &str, verbose: bool, quiet: bool) -> anyhow::Result<Self> {
    let Some(visibility) = Visibility::parse(visibility) else {
      anyhow::bail!("Invalid visibility '{visibility}': expected public, crate, or file");
    };

    Ok(Self {
      input,
      output,
      visibility,
      verbose,
      quiet,
    })
  }

  async fn load_model(&self, logger: &GenerateLogger<'_>) -> anyhow::Result<SourceModel> {
    let mut model = SourceModel::default();
    for input in &self.input {
      for file_path in collect_source_files(input)? {
        let file = SourceLoader::open(&file_path)
          .await?
          .parse()
          .with_context(|| format!("failed to parse {}", file_path.display()))?;
        let classes = loader::load_source(&file_path, &file)
          .with_context(|| format!("failed to load {}", file_path.display()))?;
        logger.log_parsed(&file_path, classes.len());
        model.extend(classes);
      }
    }
    Ok(model)
  }
}

/// Source files reachable from one input path: the file itself, or every
/// `.rs` file under a directory. Directory entries are visited in sorted
/// order so repeated runs see the model in the same order.
pub(super) fn collect_source_files(path: &Path) -> anyhow::Result<Vec<PathBuf>> {
  if path.is_file() {
    return Ok(vec![path.to_path_buf()]);
  }

  let entries = std::fs::read_dir(path).with_context(|| format!("failed to read input directory {}", path.display()))?;
  let mut paths: Vec<PathBuf> = entries
    .collect::<Result<Vec<_>, _>>()?
    .into_iter()
    .map(|entry| entry.path())
    .collect();
  paths.sort();

  let mut files = Vec::new();
  for entry in paths {
    if entry.is_dir() {
      files.extend(collect_source_files(&entry)?);
    } else if entry.extension().and_then(OsStr::to_str) == Some("rs") {
      files.push(entry);
    }
  }
  Ok(files)
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    let inputs = self.config.input.iter().map(|path| path.display().to_string()).join(", ");
    self.info(&format!("Loading sources from: {inputs}").with(self.colors.primary()).to_string());
  }

  fn log_parsed(&self, path: &Path, structs: usize) {
    if self.config.verbose {
      self.info(
        &format!("Parsed {} ({structs} structs)", path.display())
          .with(self.colors.info())
          .to_string(),
      );
    }
  }

  fn log_generating(&self) {
    self.info(&"Generating builder sources...".with(self.colors.primary()).to_string());
  }

  fn log_writing(&self) {
    self.info(
      &format!("Writing to: {}", self.config.output.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Fields scanned:", stats.fields_scanned.to_string());
    self.stat("Builders generated:", stats.builders_generated.to_string());
    self.stat("", format!("{} setters", stats.setters_generated));
    if stats.unresolved_fields > 0 {
      self.stat("Unresolved fields:", stats.unresolved_fields.to_string());
    }
    if stats.artifacts_failed > 0 {
      self.stat("Failed artifacts:", stats.artifacts_failed.to_string());
    }
  }

  fn print_artifacts(&self, artifacts: &[ArtifactRecord]) {
    if !self.config.verbose || artifacts.is_empty() {
      return;
    }

    self.stat("Builders:", artifacts.iter().map(|record| record.name.as_str()).join(", "));
  }

  fn print_diagnostics(&self, stats: &GenerationStats) {
    if stats.diagnostics.is_empty() {
      return;
    }

    if !self.config.quiet {
      println!();
    }
    for diagnostic in &stats.diagnostics {
      eprintln!(
        "{} {}",
        format!("{}:", diagnostic.severity()).with(self.colors.accent()),
        format!("{diagnostic}").with(self.colors.primary())
      );
    }
  }

  fn log_success(&self, outcome: &PassOutcome) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {} builder file(s)", outcome.stats.builders_generated).with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let model = config.load_model(&logger).await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(model, config.visibility);

  tokio::fs::create_dir_all(&config.output).await?;
  logger.log_writing();
  let mut sink = FsArtifactSink::new(&config.output);
  let outcome = orchestrator.run(&mut sink);

  logger.print_statistics(&outcome.stats);
  logger.print_artifacts(&outcome.artifacts);
  logger.print_diagnostics(&outcome.stats);

  if outcome.stats.has_errors() {
    anyhow::bail!("generation reported {} error(s)", outcome.stats.diagnostics.len());
  }

  logger.log_success(&outcome);
  Ok(())
}
