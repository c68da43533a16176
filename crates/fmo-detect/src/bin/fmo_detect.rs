//! Small utility around the algorithm registry: list the available
//! detection algorithms and dump the default configuration as a starting
//! point for threshold tuning.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fmo-detect", about = "Fast-moving-object detector toolbox", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered detection algorithms.
    List,
    /// Print the default configuration as JSON.
    DumpConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for name in fmo_detect::list_factories() {
                println!("{name}");
            }
        }
        Command::DumpConfig => {
            let config = fmo_detect::Config::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
