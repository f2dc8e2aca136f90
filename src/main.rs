use clap::Parser;
use listcopy::config::Cli;
use listcopy::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    listcopy::commands::run(config)?;

    Ok(())
}
