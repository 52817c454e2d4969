mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = config::Cli::parse();
    let config = config::AppConfig::from_cli(cli)?;
    platform::logging::initialize(&config.log_destination, config.log_level);
    platform::run_app(config)
}
