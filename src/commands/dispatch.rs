//! Command dispatch logic for wayfind

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{path, solve};
use wayfind_core::error::{Result, WayfindError};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => Err(WayfindError::UsageError(
            "missing command (try --help)".to_string(),
        )),

        Some(Commands::Solve { file }) => solve::run(cli, file.as_deref(), start),

        Some(Commands::Path {
            edge,
            directed,
            from,
            to,
        }) => path::run(cli, edge, *directed, from, to, start),
    }
}
