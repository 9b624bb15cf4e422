//! Session backends.
//!
//! Each display session family has its own utilities for listing outputs,
//! listing input devices and rotating a display. The rest of the program
//! only talks to [`SessionBackend`].

use std::io;

use crate::error::{Error, ResolutionError, Result};
use crate::exec::Runner;
use crate::orientation::Orientation;
use crate::session::SessionKind;

pub mod gnome;
pub mod xorg;

pub trait SessionBackend {
    /// Utilities that must be installed for this backend to work.
    fn required_tools(&self) -> &'static [&'static str];

    /// Name of the display output currently driving a monitor.
    fn resolve_active_output(&self, runner: &dyn Runner) -> Result<String>;

    /// Name of the touchscreen input device.
    fn resolve_touchscreen(&self, runner: &dyn Runner) -> Result<String>;

    /// Rotate `output` to `orientation`.
    fn apply_rotation(
        &self,
        runner: &dyn Runner,
        output: &str,
        orientation: Orientation,
    ) -> Result<()>;
}

pub fn for_session(kind: SessionKind) -> Box<dyn SessionBackend> {
    match kind {
        SessionKind::X11 => Box::new(xorg::XorgBackend),
        SessionKind::Wayland => Box::new(gnome::GnomeBackend),
    }
}

/// Run a listing command and hand back its stdout.
fn query(runner: &dyn Runner, program: &str, args: &[&str]) -> Result<String> {
    let outcome = runner.capture(program, args).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::MissingDependency(program.to_owned()),
        _ => Error::from(ResolutionError::CommandFailed {
            program: program.to_owned(),
            reason: e.to_string(),
        }),
    })?;
    if !outcome.success() {
        return Err(ResolutionError::CommandFailed {
            program: program.to_owned(),
            reason: outcome.failure_reason(),
        }
        .into());
    }
    Ok(outcome.stdout)
}

/// Run a rotation command; a failure means nothing was changed yet.
fn rotate(runner: &dyn Runner, output: &str, program: &str, args: &[&str]) -> Result<()> {
    let reason = match runner.run(program, args, None) {
        Ok(outcome) if outcome.success() => return Ok(()),
        Ok(outcome) => outcome.failure_reason(),
        Err(e) => format!("{}: {}", program, e),
    };
    Err(Error::RotationFailed {
        output: output.to_owned(),
        reason,
    })
}
