//! mini-llm binary entry point

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mini_llm_cli::{is_missing_argument, run, usage, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let stdout = io::stdout();

    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_missing_argument(&err) => {
            let program = std::env::args().next().unwrap_or_else(|| "mini-llm".to_string());
            eprintln!("{}", usage(&program));
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{:?}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
