use std::process::ExitCode;

use clap::Parser;

mod audible;
mod cli;
mod config;
mod error;
mod library;
mod naming;
mod ops;
mod report;
mod runtime;
mod staging;
mod tags;

#[cfg(test)]
mod testing;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match runtime::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
