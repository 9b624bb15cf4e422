use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::error::{ResolutionError, Result};
use crate::exec::Runner;
use crate::orientation::Orientation;

use super::{query, rotate, SessionBackend};

/// X11 sessions: `xrandr` for outputs and rotation, `xinput` for devices.
pub struct XorgBackend;

lazy_static! {
    // eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 294mm x 165mm
    static ref XRANDR_CONNECTED: Regex = Regex::new(r"(?m)^(\S+)\s+connected\b").unwrap();
    // ⎜   ↳ ELAN Touchscreen                        	id=10	[slave  pointer  (2)]
    static ref XINPUT_TOUCHSCREEN: Regex =
        Regex::new(r"↳\s*(.*Touchscreen.*?)\s*id=\d+").unwrap();
}

/// First output reported as `connected` by `xrandr`.
pub fn parse_active_output(xrandr: &str) -> Option<String> {
    XRANDR_CONNECTED
        .captures(xrandr)
        .map(|cap| cap[1].to_owned())
}

/// Name of the first touchscreen in `xinput --list`.
pub fn parse_touchscreen(xinput: &str) -> Option<String> {
    XINPUT_TOUCHSCREEN
        .captures(xinput)
        .map(|cap| cap[1].trim().to_owned())
        .filter(|name| !name.is_empty())
}

impl SessionBackend for XorgBackend {
    fn required_tools(&self) -> &'static [&'static str] {
        &["xrandr", "xinput"]
    }

    fn resolve_active_output(&self, runner: &dyn Runner) -> Result<String> {
        let raw = query(runner, "xrandr", &[])?;
        let output = parse_active_output(&raw).ok_or(ResolutionError::NoActiveOutput)?;
        info!("active output: {}", output);
        Ok(output)
    }

    fn resolve_touchscreen(&self, runner: &dyn Runner) -> Result<String> {
        let raw = query(runner, "xinput", &["--list"])?;
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
            "xrandr",
            &["--output", output, "--rotate", orientation.keyword()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::exec::fake::FakeRunner;

    const XRANDR: &str = "\
Screen 0: minimum 320 x 200, current 1920 x 1080, maximum 16384 x 16384
HDMI-2 disconnected (normal left inverted right x axis y axis)
eDP-1 connected primary 1920x1080+0+0 (normal left inverted right x axis y axis) 294mm x 165mm
   1920x1080     60.02*+  59.93
DP-1 connected 2560x1440+1920+0 (normal left inverted right x axis y axis) 597mm x 336mm
";

    const XINPUT: &str = "\
⎡ Virtual core pointer                    \tid=2\t[master pointer  (3)]
⎜   ↳ Virtual core XTEST pointer              \tid=4\t[slave  pointer  (2)]
⎜   ↳ ELAN Touchscreen                        \tid=10\t[slave  pointer  (2)]
⎜   ↳ SynPS/2 Synaptics TouchPad              \tid=12\t[slave  pointer  (2)]
⎣ Virtual core keyboard                   \tid=3\t[master keyboard (2)]
    ↳ AT Translated Set 2 keyboard            \tid=11\t[slave  keyboard (3)]
";

    #[test]
    fn first_connected_output() {
        assert_eq!(parse_active_output(XRANDR), Some("eDP-1".to_owned()));
        assert_eq!(
            parse_active_output("eDP-1 connected 1920x1080+0+0"),
            Some("eDP-1".to_owned())
        );
    }

    #[test]
    fn disconnected_outputs_are_ignored() {
        assert_eq!(
            parse_active_output("HDMI-1 disconnected (normal left inverted right)\n"),
            None
        );
        assert_eq!(parse_active_output(""), None);
    }

    #[test]
    fn touchscreen_between_marker_and_id() {
        assert_eq!(parse_touchscreen(XINPUT), Some("ELAN Touchscreen".to_owned()));
        assert_eq!(
            parse_touchscreen("⎜   ↳ Wacom HID 5256 Touchscreen Finger  \tid=15\t[slave  pointer  (2)]"),
            Some("Wacom HID 5256 Touchscreen Finger".to_owned())
        );
    }

    #[test]
    fn no_touchscreen() {
        let without = XINPUT.replace("ELAN Touchscreen", "ELAN Pen");
        assert_eq!(parse_touchscreen(&without), None);
    }

    #[test]
    fn resolve_through_runner() -> Result<()> {
        let runner = FakeRunner::new()
            .with_stdout("xrandr", XRANDR)
            .with_stdout("xinput --list", XINPUT);
        assert_eq!(XorgBackend.resolve_active_output(&runner)?, "eDP-1");
        assert_eq!(XorgBackend.resolve_touchscreen(&runner)?, "ELAN Touchscreen");
        Ok(())
    }

    #[test]
    fn resolve_without_matches() {
        let runner = FakeRunner::new().with_stdout("xrandr", "Screen 0: minimum 8 x 8\n");
        assert!(matches!(
            XorgBackend.resolve_active_output(&runner),
            Err(Error::Resolution(ResolutionError::NoActiveOutput))
        ));
        assert!(matches!(
            XorgBackend.resolve_touchscreen(&runner),
            Err(Error::Resolution(ResolutionError::NoTouchscreenFound))
        ));
    }

    #[test]
    fn rotate_command() -> Result<()> {
        let runner = FakeRunner::new();
        XorgBackend.apply_rotation(&runner, "HDMI-1", Orientation::Right)?;
        assert_eq!(
            runner.command_lines(),
            vec!["xrandr --output HDMI-1 --rotate right"]
        );
        Ok(())
    }
}
