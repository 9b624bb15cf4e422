//! The orientation pipeline: check, resolve, select, rotate, persist, reboot.

use std::path::PathBuf;

use log::info;
use serde::Serialize;

use crate::backends::SessionBackend;
use crate::deps;
use crate::error::{Error, Result};
use crate::exec::Runner;
use crate::orientation::Orientation;
use crate::session::SessionKind;
use crate::udev;
use crate::ui::{Presenter, NEXT_BOOT_NOTICE, REBOOT_QUESTION};

pub struct Settings {
    pub rules_path: PathBuf,
    pub elevate: String,
    /// Skips the prompt when set.
    pub orientation: Option<Orientation>,
    pub output: Option<String>,
    pub touchscreen: Option<String>,
    pub offer_reboot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rules_path: PathBuf::from(udev::RULES_PATH),
            elevate: "sudo".to_owned(),
            orientation: None,
            output: None,
            touchscreen: None,
            offer_reboot: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub session: SessionKind,
    pub output: String,
    pub touchscreen: String,
}

pub struct App<'a> {
    pub session: SessionKind,
    pub backend: &'a dyn SessionBackend,
    pub runner: &'a dyn Runner,
    pub settings: Settings,
}

impl<'a> App<'a> {
    /// Check dependencies, then find the output and touchscreen to work on.
    pub fn detect(&self, ui: &dyn Presenter) -> Result<Detection> {
        let tools = self
            .backend
            .required_tools()
            .iter()
            .chain(ui.required_tools().iter())
            .copied()
            .collect::<Vec<_>>();
        deps::check_dependencies(self.runner, &tools)?;

        let output = match &self.settings.output {
            Some(output) => output.clone(),
            None => self.backend.resolve_active_output(self.runner)?,
        };
        let touchscreen = match &self.settings.touchscreen {
            Some(touchscreen) => touchscreen.clone(),
            None => self.backend.resolve_touchscreen(self.runner)?,
        };

        Ok(Detection {
            session: self.session,
            output,
            touchscreen,
        })
    }

    pub fn run(&self, ui: &mut dyn Presenter) -> Result<()> {
        let detection = self.detect(&*ui)?;

        let orientation = match self.settings.orientation {
            Some(orientation) => orientation,
            None => Orientation::parse_choice(&ui.prompt_orientation()?)?,
        };
        // Validate before touching the display.
        let rule = udev::calibration_rule(&detection.touchscreen, orientation.calibration_matrix())?;

        self.backend
            .apply_rotation(self.runner, &detection.output, orientation)?;
        info!("rotated {} to {}", detection.output, orientation);

        udev::write_rule(
            self.runner,
            &self.settings.elevate,
            &self.settings.rules_path,
            &rule,
        )
        .map_err(|e| Error::PartiallyApplied {
            output: detection.output.clone(),
            rotation: orientation.keyword().to_owned(),
            path: self.settings.rules_path.clone(),
            reason: e.to_string(),
        })?;

        ui.report_info(&format!(
            "Rotated {} to {} and calibrated \"{}\".",
            detection.output,
            orientation.label(),
            detection.touchscreen
        ));

        if self.settings.offer_reboot && ui.confirm(REBOOT_QUESTION)? {
            self.reboot()
        } else {
            ui.report_info(NEXT_BOOT_NOTICE);
            Ok(())
        }
    }

    fn reboot(&self) -> Result<()> {
        info!("rebooting");
        let outcome = self.runner.run(&self.settings.elevate, &["reboot"], None)?;
        if outcome.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                program: format!("{} reboot", self.settings.elevate),
                reason: outcome.failure_reason(),
            })
        }
    }
}
