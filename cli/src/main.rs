mod commands;
mod exit;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, diff, exclusions};
use exit::Failure;
use terminal::{logging, print};
use tracing::error;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    if commands.list_exclusions {
        exclusions::exclusions(&commands.exclude);
        return ExitCode::SUCCESS;
    }

    let cfg = commands.to_config();
    print::banner(cfg.quiet);

    match diff::diff(&cfg) {
        Ok(()) => {
            print::end_of_program();
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err:#}");
            Failure::classify(&err).into()
        }
    }
}
