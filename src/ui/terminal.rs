use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::orientation::Orientation;

use super::{Presenter, ORIENTATION_TITLE};

/// Plain stdin/stdout prompts.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl TerminalPresenter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        TerminalPresenter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPresenter { input, output }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn report_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_info(&mut self, message: &str) {
        // Nowhere better to go if stdout is gone.
        let _ = writeln!(self.output, "{}", message);
    }

    fn prompt_orientation(&mut self) -> Result<String> {
        writeln!(self.output, "{}", ORIENTATION_TITLE)?;
        for orientation in Orientation::ALL.iter() {
            writeln!(self.output, "{}) {}", orientation.choice(), orientation.label())?;
        }
        self.ask("Enter your choice (1-4): ")
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n): ", question))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}
