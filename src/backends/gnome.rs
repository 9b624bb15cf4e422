use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::error::{ResolutionError, Result};
use crate::exec::Runner;
use crate::orientation::Orientation;

use super::{query, rotate, SessionBackend};

/// Wayland sessions under GNOME: `gnome-randr` for outputs and rotation,
/// `libinput` for devices.
pub struct GnomeBackend;

lazy_static! {
    static ref ASSOCIATED_MONITOR: Regex =
        Regex::new(r"associated physical monitors:\r?\n\t(\S+)").unwrap();
    static ref LIBINPUT_TOUCHSCREEN: Regex =
        Regex::new(r"(?im)^Device:[ \t]*(.*touchscreen.*)$").unwrap();
}

/// First physical monitor listed under a logical monitor by `gnome-randr`.
pub fn parse_active_output(gnome_randr: &str) -> Option<String> {
    ASSOCIATED_MONITOR
        .captures(gnome_randr)
        .map(|cap| cap[1].to_owned())
}

/// Full name of the first touchscreen in `libinput list-devices`.
pub fn parse_touchscreen(libinput: &str) -> Option<String> {
    LIBINPUT_TOUCHSCREEN
        .captures(libinput)
        .map(|cap| cap[1].trim().to_owned())
        .filter(|name| !name.is_empty())
}

impl SessionBackend for GnomeBackend {
    fn required_tools(&self) -> &'static [&'static str] {
        &["gnome-randr", "libinput"]
    }

    fn resolve_active_output(&self, runner: &dyn Runner) -> Result<String> {
        let raw = query(runner, "gnome-randr", &[])?;
        let output = parse_active_output(&raw).ok_or(ResolutionError::NoActiveOutput)?;
        info!("active output: {}", output);
        Ok(output)
    }

    fn resolve_touchscreen(&self, runner: &dyn Runner) -> Result<String> {
        let raw = query(runner, "libinput", &["list-devices"])?;
        let device = parse_touchscreen(&raw).ok_or(ResolutionError::NoTouchscreenFound)?;
        info!("touchscreen: {}", device);
        Ok(device)
    }

    fn apply_rotation(
        &self,
        runner: &dyn Runner,
        output: &str,
        orientation: Orientation,
    ) -> Result<()> {
        rotate(
            runner,
            output,
            "gnome-randr",
            &[
                "modify",
                output,
                "--rotate",
                orientation.keyword(),
                "--persistent",
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::exec::fake::FakeRunner;

    const GNOME_RANDR: &str = "\
supports-mirroring: true
layout-mode: logical
supports-changing-layout-mode: false
global-scale-required: false

logical monitor 0:
x: 0, y: 0, scale: 1, rotation: normal, primary: yes
associated physical monitors:
\tDSI-1 BOE 0x0a1c 0x00000000

DSI-1 BOE 0x0a1c 0x00000000
              1200x1920@60.000 [id: '1200x1920@60.000'] [preferred scale = 1 (1, 2)] *+
";

    const LIBINPUT: &str = "\
Device:           Power Button
Kernel:           /dev/input/event2
Capabilities:     keyboard

Device:           Goodix Capacitive TouchScreen
Kernel:           /dev/input/event5
Capabilities:     touch
";

    #[test]
    fn associated_physical_monitor() {
        assert_eq!(parse_active_output(GNOME_RANDR), Some("DSI-1".to_owned()));
        assert_eq!(
            parse_active_output("associated physical monitors:\n\tDSI-1"),
            Some("DSI-1".to_owned())
        );
    }

    #[test]
    fn no_associated_monitor() {
        assert_eq!(parse_active_output("logical monitor 0:\n"), None);
        // The token has to sit on the tab indented line right below.
        assert_eq!(
            parse_active_output("associated physical monitors:\nDSI-1"),
            None
        );
    }

    #[test]
    fn touchscreen_device_line() {
        assert_eq!(
            parse_touchscreen(LIBINPUT),
            Some("Goodix Capacitive TouchScreen".to_owned())
        );
        assert_eq!(
            parse_touchscreen("Device: Touchscreen Foo  \n"),
            Some("Touchscreen Foo".to_owned())
        );
    }

    #[test]
    fn touchscreen_names_with_colons_are_kept_whole() {
        assert_eq!(
            parse_touchscreen("Device:           ELAN2514:00 04F3:2817 Touchscreen\n"),
            Some("ELAN2514:00 04F3:2817 Touchscreen".to_owned())
        );
    }

    #[test]
    fn no_touchscreen_device() {
        assert_eq!(parse_touchscreen("Device:           Power Button\n"), None);
    }

    #[test]
    fn resolve_through_runner() -> Result<()> {
        let runner = FakeRunner::new()
            .with_stdout("gnome-randr", GNOME_RANDR)
            .with_stdout("libinput list-devices", LIBINPUT);
        assert_eq!(GnomeBackend.resolve_active_output(&runner)?, "DSI-1");
        assert_eq!(
            GnomeBackend.resolve_touchscreen(&runner)?,
            "Goodix Capacitive TouchScreen"
        );
        Ok(())
    }

    #[test]
    fn resolve_without_touchscreen() {
        let runner = FakeRunner::new().with_stdout("libinput list-devices", "");
        assert!(matches!(
            GnomeBackend.resolve_touchscreen(&runner),
            Err(Error::Resolution(ResolutionError::NoTouchscreenFound))
        ));
    }

    #[test]
    fn rotation_is_persistent() -> Result<()> {
        let runner = FakeRunner::new();
        GnomeBackend.apply_rotation(&runner, "DSI-1", Orientation::Inverted)?;
        assert_eq!(
            runner.command_lines(),
            vec!["gnome-randr modify DSI-1 --rotate inverted --persistent"]
        );
        Ok(())
    }
}
