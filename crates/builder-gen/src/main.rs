#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod artifact;
mod generator;
mod model;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Commands::List { list_command } => match list_command {
      ListCommands::Properties { input } => ui::commands::list_properties(&input, &colors).await?,
    },
    Commands::Generate {
      input,
      output,
      visibility,
      verbose,
      quiet,
    } => {
      let config = ui::commands::GenerateConfig::from_args(input, output, &visibility, verbose, quiet)?;
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
