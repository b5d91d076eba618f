pub mod evaluate;
pub mod rubric;

use crate::cli::args::{Cli, Command};
use crate::exit_codes;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Evaluate(args) => evaluate::run(args),
        Command::Rubric(args) => rubric::run(args),
        Command::Version => {
            println!("repscore {}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::SUCCESS)
        }
    }
}
