use anyhow::Result;
use clap::Parser;
use pathfix::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
