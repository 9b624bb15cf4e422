//! Presentation.
//!
//! The pipeline only needs four interactions, so terminal and dialog modes
//! are thin adapters over the same [`Presenter`] trait.

use crate::error::Result;

pub mod dialog;
pub mod terminal;

pub use dialog::DialogPresenter;
pub use terminal::TerminalPresenter;

pub const ORIENTATION_TITLE: &str = "Select screen orientation:";
pub const REBOOT_QUESTION: &str = "Reboot now?";
pub const NEXT_BOOT_NOTICE: &str = "Reboot cancelled. Changes will apply on next reboot.";

pub trait Presenter {
    fn report_error(&mut self, message: &str);

    fn report_info(&mut self, message: &str);

    /// Show the four orientations and return the raw answer.
    fn prompt_orientation(&mut self) -> Result<String>;

    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Utilities the presenter itself shells out to.
    fn required_tools(&self) -> &'static [&'static str] {
        &[]
    }
}

#[cfg(test)]
pub mod scripted {
    use super::Presenter;
    use crate::error::Result;

    /// Replays fixed answers and records what it was asked to show.
    pub struct ScriptedPresenter {
        pub choice: String,
        pub reboot: bool,
        pub errors: Vec<String>,
        pub infos: Vec<String>,
        pub questions: Vec<String>,
        pub prompted: bool,
    }

    impl ScriptedPresenter {
        pub fn new(choice: &str, reboot: bool) -> Self {
            ScriptedPresenter {
                choice: choice.to_owned(),
                reboot,
                errors: vec![],
                infos: vec![],
                questions: vec![],
                prompted: false,
            }
        }
    }

    impl Presenter for ScriptedPresenter {
        fn report_error(&mut self, message: &str) {
            self.errors.push(message.to_owned());
        }

        fn report_info(&mut self, message: &str) {
            self.infos.push(message.to_owned());
        }

        fn prompt_orientation(&mut self) -> Result<String> {
            self.prompted = true;
            Ok(self.choice.clone())
        }

        fn confirm(&mut self, question: &str) -> Result<bool> {
            self.questions.push(question.to_owned());
            Ok(self.reboot)
        }
    }
}
