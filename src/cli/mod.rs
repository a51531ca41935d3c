// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, built on clap.
// All report logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `generate`    — assemble the LaTeX report(s) for a date
//   2. `init-config` — write a default JSON config to edit
//
// The date token can come from a flag, the config file, or
// an interactive prompt when neither supplies one.

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, GenerateArgs, InitConfigArgs};

use crate::application::{assemble_use_case::AssembleUseCase, report_config::ReportConfig};
use crate::infra::config_store;

#[derive(Parser, Debug)]
#[command(
    name = "es-texgen",
    version,
    about = "Assemble LaTeX documents from pre-rendered event study charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Route the subcommand; this layer never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Generate(args)   => run_generate(args),
            Commands::InitConfig(args) => run_init_config(args),
        }
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let mut config = args.resolve_config()?;

    if config.date.is_empty() {
        config.date = prompt_date()?;
    }

    let written = AssembleUseCase::new(config).execute()?;
    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let config = ReportConfig::for_layout(args.layout.into());
    config_store::save(&args.out, &config)?;
    println!("Wrote {} config to {}", config.layout, args.out.display());
    Ok(())
}

/// Ask for the date token on the terminal. Used verbatim.
fn prompt_date() -> Result<String> {
    let date: String = dialoguer::Input::new()
        .with_prompt("What is the date used to name the folder?")
        .interact_text()?;
    Ok(date)
}
