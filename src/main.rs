use clap::Parser;
use std::process::ExitCode;

mod args;
mod config;
mod file_serving;
mod logging;
mod server;

use args::Args;
use config::ServerConfig;
use server::start_server;

fn main() -> ExitCode {
    logging::setup_logging();

    let args = Args::parse();
    let config = match ServerConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Error reading working directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match start_server(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
