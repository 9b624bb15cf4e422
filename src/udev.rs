//! udev calibration rule.
//!
//! libinput reads `LIBINPUT_CALIBRATION_MATRIX` from the device's udev
//! environment when the device is attached, so the rule only takes effect
//! after the device is re-added (in practice, after a reboot).

use std::io;
use std::path::Path;

use log::info;

use crate::error::{Error, Result};
use crate::exec::Runner;

pub const RULES_PATH: &str = "/etc/udev/rules.d/99-touchscreen-orientation.rules";

/// Rule line binding `matrix` to the input device called `device`.
pub fn calibration_rule(device: &str, matrix: &str) -> Result<String> {
    if device.contains('"') || device.contains('\n') || device.contains('\r') {
        return Err(Error::UnsafeDeviceName(device.to_owned()));
    }
    Ok(format!(
        r#"ATTRS{{name}}=="{}", ENV{{LIBINPUT_CALIBRATION_MATRIX}}="{}""#,
        device, matrix
    ))
}

/// Overwrite `path` with `rule` through `<elevate> tee <path>`.
pub fn write_rule(runner: &dyn Runner, elevate: &str, path: &Path, rule: &str) -> Result<()> {
    let path_arg = path.to_string_lossy();
    match runner.run(elevate, &["tee", &*path_arg], Some(rule)) {
        Ok(outcome) if outcome.success() => {
            info!("wrote calibration rule to {}", path.display());
            Ok(())
        }
        Ok(outcome) => Err(Error::CommandFailed {
            program: format!("{} tee", elevate),
            reason: outcome.failure_reason(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(Error::MissingDependency(elevate.to_owned()))
        }
        Err(e) => Err(e.into()),
    }
}
