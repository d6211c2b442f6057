mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::cli::CliArgs;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() -> ExitCode {
    setup_logging();
    let args = CliArgs::parse();
    debug!("running {:?}", args.command);
    match cli::execute(&args, &mut io::stdin().lock()) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
