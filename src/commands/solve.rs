//! `wayfind solve` - solve a text maze from a file or stdin

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use wayfind_core::error::Result;
use wayfind_core::format::OutputFormat;
use wayfind_core::maze;

pub(super) fn run(cli: &Cli, file: Option<&Path>, start: Instant) -> Result<()> {
    let maze_text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let solution = maze::solve_detailed(&maze_text);
    tracing::debug!(
        elapsed = ?start.elapsed(),
        solved = solution.path.is_some(),
        "solve"
    );

    match cli.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "solved": solution.path.is_some(),
                "maze": solution.text,
                "path": solution.path,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            if solution.text.ends_with('\n') {
                print!("{}", solution.text);
            } else {
                println!("{}", solution.text);
            }
        }
    }

    Ok(())
}
