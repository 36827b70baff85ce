// src/main.rs
use std::process::ExitCode;

use ls_long::{app, cli, config::Config, logging};

fn main() -> ExitCode {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(code) => return ExitCode::from(code),
    };

    if let Err(err) = logging::init() {
        eprintln!("[warn] {err:#}");
    }

    let config = Config::from(args);
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
