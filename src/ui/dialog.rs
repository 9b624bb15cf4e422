use log::warn;

use crate::error::{Error, Result};
use crate::exec::Runner;
use crate::orientation::Orientation;

use super::{Presenter, ORIENTATION_TITLE};

const TITLE: &str = "Touchscreen orientation";

/// Modal `zenity` dialogs.
pub struct DialogPresenter<'a> {
    runner: &'a dyn Runner,
}

impl<'a> DialogPresenter<'a> {
    pub fn new(runner: &'a dyn Runner) -> Self {
        DialogPresenter { runner }
    }

    /// Message boxes fall back to stderr so nothing is lost without zenity.
    fn message(&self, kind: &str, message: &str) {
        let shown = self
            .runner
            .capture(
                "zenity",
                &[kind, "--no-markup", "--title", TITLE, "--text", message],
            )
            .map(|outcome| outcome.success())
            .unwrap_or(false);
        if !shown {
            warn!("zenity {} dialog failed", kind);
            eprintln!("{}", message);
        }
    }
}

impl<'a> Presenter for DialogPresenter<'a> {
    fn report_error(&mut self, message: &str) {
        self.message("--error", message);
    }

    fn report_info(&mut self, message: &str) {
        self.message("--info", message);
    }

    fn prompt_orientation(&mut self) -> Result<String> {
        let choices: Vec<String> = Orientation::ALL
            .iter()
            .map(|o| o.choice().to_string())
            .collect();
        let mut args = vec![
            "--list",
            "--title",
            TITLE,
            "--text",
            ORIENTATION_TITLE,
            "--column",
            "Choice",
            "--column",
            "Orientation",
        ];
        for (choice, orientation) in choices.iter().zip(Orientation::ALL.iter()) {
            args.push(choice.as_str());
            args.push(orientation.label());
        }

        let outcome = self.runner.capture("zenity", &args)?;
        match outcome.code {
            Some(0) => Ok(outcome.stdout.trim().to_owned()),
            Some(1) => Err(Error::Cancelled),
            _ => Err(Error::CommandFailed {
                program: "zenity".to_owned(),
                reason: outcome.failure_reason(),
            }),
        }
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let outcome = self.runner.capture(
            "zenity",
            &["--question", "--no-markup", "--title", TITLE, "--text", question],
        )?;
        match outcome.code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(Error::CommandFailed {
                program: "zenity".to_owned(),
                reason: outcome.failure_reason(),
            }),
        }
    }

    fn required_tools(&self) -> &'static [&'static str] {
        &["zenity"]
    }
}
