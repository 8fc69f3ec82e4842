//! Command line arguments and the end-to-end run.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::core::engine::parse_max_order_value;
use crate::core::BigInt;
use crate::core::{Engine, EngineConfig};
use crate::input::{parse_matrix_json, Prompter};
use crate::types::Matrix;

pub const USAGE: &str = "usage: cofactor [--file <matrix.json>] [--max-order <n>]";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliConfig {
    /// Read the matrix from this JSON file instead of prompting.
    pub file: Option<PathBuf>,
    /// Ceiling override; `Some(None)` disables it.
    pub max_order: Option<Option<usize>>,
    pub help: bool,
}

impl CliConfig {
    /// Engine configuration: environment first, flags on top.
    pub fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::from_env();
        match self.max_order {
            Some(max) => config.with_max_order(max),
            None => config,
        }
    }
}

pub fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--file" | "-f" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --file"))?;
                config.file = Some(PathBuf::from(v));
            }
            "--max-order" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-order"))?;
                let max = parse_max_order_value(v)
                    .ok_or_else(|| anyhow!("invalid --max-order value: {}", v))?;
                config.max_order = Some(max);
            }
            "--help" | "-h" => config.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }
    Ok(config)
}

/// Load the matrix, print it back, evaluate and print the determinant.
pub fn run<R: BufRead, W: Write>(config: &CliConfig, input: R, mut output: W) -> Result<BigInt> {
    let engine_config = config.engine_config();
    let matrix = match &config.file {
        Some(path) => load_file(path)?,
        None => {
            let mut prompter =
                Prompter::new(input, &mut output).with_max_order(engine_config.max_order);
            prompter.read_matrix().context("reading matrix from console")?
        }
    };

    writeln!(output, "\nMatrix:")?;
    writeln!(output, "{}", matrix)?;

    let engine = Engine::new(engine_config);
    info!("evaluating {}x{} matrix", matrix.rows(), matrix.cols());
    let det = engine
        .determinant(&matrix)
        .context("computing determinant")?;

    writeln!(output, "\nDeterminant: {}", det)?;
    Ok(det)
}

fn load_file(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_matrix_json(&text).with_context(|| format!("parsing {}", path.display()))
}
