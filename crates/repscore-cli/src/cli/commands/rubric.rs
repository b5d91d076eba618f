use repscore_core::{load_rubric, Rubric};

use crate::cli::args::RubricArgs;
use crate::exit_codes;

pub fn run(args: RubricArgs) -> anyhow::Result<i32> {
    let rubric = match &args.file {
        Some(path) => match load_rubric(path) {
            Ok(rubric) => rubric,
            Err(e) => {
                eprintln!("{e}");
                return Ok(exit_codes::CONFIG_ERROR);
            }
        },
        None => Rubric::default(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rubric)?);
    } else {
        print!("{}", serde_yaml::to_string(&rubric)?);
    }
    Ok(exit_codes::SUCCESS)
}
