//! Dependency check: every required utility must answer `--version`.

use std::io;

use log::debug;

use crate::error::{Error, Result};
use crate::exec::Runner;

pub fn check_command(runner: &dyn Runner, program: &str) -> Result<()> {
    match runner.capture(program, &["--version"]) {
        Ok(outcome) if outcome.success() => {
            debug!("{} found: {}", program, outcome.stdout.lines().next().unwrap_or(""));
            Ok(())
        }
        Ok(outcome) => Err(Error::DependencyError {
            program: program.to_owned(),
            reason: outcome.failure_reason(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::MissingDependency(program.to_owned()))
        }
        Err(e) => Err(Error::DependencyError {
            program: program.to_owned(),
            reason: e.to_string(),
        }),
    }
}

/// Stops at the first missing or broken utility.
pub fn check_dependencies(runner: &dyn Runner, programs: &[&str]) -> Result<()> {
    programs
        .iter()
        .try_for_each(|program| check_command(runner, program))
}
