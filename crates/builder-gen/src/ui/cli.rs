use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "builder-gen")]
#[command(author, version, about = "Builder source generator for marked Rust data classes")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from the loaded source model
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate builder source files for marked fields
  Generate {
    /// Source files or directories to scan for builder properties
    #[arg(short, long, value_name = "PATH", required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Directory where the generated builder files will be written
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Visibility level for generated builders
    #[arg(long, value_name = "VISIBILITY", default_value = "public")]
    visibility: String,

    /// Enable verbose output with detailed progress information
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Suppress non-essential output (errors only)
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
  },
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every builder property found in the sources
  Properties {
    /// Source files or directories to scan for builder properties
    #[arg(short, long, value_name = "PATH", required = true, num_args = 1..)]
    input: Vec<PathBuf>,
  },
}
