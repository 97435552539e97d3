//! Skinup - Command-line tool for upgrading and repairing skin PNGs

use std::process::ExitCode;

use skinup::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    cli::run()
}
