use std::process::ExitCode;
use timeshare::commands::Cli;
use timeshare::libs::logger;
use timeshare::msg_error;

fn main() -> ExitCode {
    logger::init();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
