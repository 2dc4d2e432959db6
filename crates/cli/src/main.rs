use anyhow::Result;
use clap::Parser;
use env_logger::init;
use fontheader_cli::cli::Cli;

fn main() -> Result<()> {
    init();
    Cli::parse().command.run()
}
