use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studyflow::cli::args::{Cli, Commands};
use studyflow::cli::commands;
use studyflow::error::StudyFlowError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StudyFlowError> {
    let cli = Cli::parse();
    let format = cli.output;

    let output = match cli.command {
        Commands::Add(args) => commands::add(args, format)?,
        Commands::List => commands::list(format)?,
        Commands::Show { id } => commands::show(&id, format)?,
        Commands::Delete { id } => commands::delete(&id, format)?,
        Commands::Start { id } => commands::start(&id, format)?,
        Commands::Stats { period } => commands::stats(period, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
