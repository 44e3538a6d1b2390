//! Application entry point.

use std::process::ExitCode;

use clap::Parser;
use log::info;

use bounce_scene::{game, CliArgs, Config, Error, StartupError};

fn load_config(args: &CliArgs) -> Result<Config, StartupError> {
    let mut config = match &args.config {
        Some(path) => Config::load_or_create(path)?,
        None => Config::default(),
    };
    config.apply_cli_overrides(args);
    Ok(config)
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // The logger is not up yet; `report` still writes to stderr.
            let error = Error::from(e);
            error.report(&mut std::io::stderr());
            return ExitCode::from(error.exit_code());
        }
    };

    // RUST_LOG wins over the configured level.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    info!("Logger initialized");

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Colour seed {}", seed);

    match game::app::run(args.stage, &config, seed) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report(&mut std::io::stderr());
            ExitCode::from(e.exit_code())
        }
    }
}
