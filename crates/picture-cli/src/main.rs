use clap::Parser;

use picture_cli::{logging, runner, Cli, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::from_cli(&cli);
    logging::init_logging(&config.logging);

    let request = cli.command.into_request()?;
    runner::run(&request, &config.output.save_options())
}
