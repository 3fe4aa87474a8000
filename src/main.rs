use anyhow::Result;
use clap::{Parser, Subcommand};
use tcas_prep::prepare;

#[derive(Parser)]
#[command(name = "tcas-prep")]
#[command(about = "Filter, clean and geo-enrich scraped mytcas admission records")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the preparation pipeline: filter, normalize, adjust fees, enrich, write CSV
    Prepare(prepare::PrepareArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Prepare(args) => prepare::run(args),
    }
}
