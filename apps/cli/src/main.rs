use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod report;

fn main() -> ExitCode {
    let cli = cli::parse();

    match commands::dispatch(cli.command, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
