//! Determinant calculator (default binary).
//!
//! Reads a square integer matrix, either interactively or from a JSON file,
//! echoes it and prints its determinant.

use std::io;

use anyhow::Result;

use cofactor::cli::{parse_args, run, USAGE};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let stdin = io::stdin();
    run(&config, stdin.lock(), io::stdout())?;
    Ok(())
}
