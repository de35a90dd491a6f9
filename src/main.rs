use anyhow::Result;
use clap::Parser;
use resto::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
