//! External command execution.
//!
//! Everything this tool does to the system goes through a [`Runner`], so the
//! whole pipeline can be driven against canned utility output in tests.

use std::io::{self, Write};
use std::process::{Command, Output, Stdio};

use log::debug;

/// Exit code and captured streams of a finished command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Short human readable reason for a failed command.
    pub fn failure_reason(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_owned(),
        };
        match self.stderr.trim() {
            "" => status,
            stderr => format!("{}: {}", status, stderr),
        }
    }
}

impl From<Output> for Outcome {
    fn from(output: Output) -> Self {
        Outcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

pub trait Runner {
    /// Run a query command to completion and capture its output.
    fn capture(&self, program: &str, args: &[&str]) -> io::Result<Outcome>;

    /// Run a command for its side effect, optionally feeding `input` on stdin.
    /// Stdout is discarded; stderr stays attached to the terminal.
    fn run(&self, program: &str, args: &[&str], input: Option<&str>) -> io::Result<Outcome>;
}

pub struct SystemRunner;

impl Runner for SystemRunner {
    fn capture(&self, program: &str, args: &[&str]) -> io::Result<Outcome> {
        debug!("capturing: {} {}", program, args.join(" "));
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map(Outcome::from)
    }

    fn run(&self, program: &str, args: &[&str], input: Option<&str>) -> io::Result<Outcome> {
        debug!("running: {} {}", program, args.join(" "));
        let mut child = Command::new(program)
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::inherit()
            })
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()?;

        if let Some(input) = input {
            // Dropping stdin closes the pipe so the child sees EOF.
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "stdin not captured"))?;
            stdin.write_all(input.as_bytes())?;
        }

        let status = child.wait()?;
        Ok(Outcome {
            code: status.code(),
            ..Outcome::default()
        })
    }
}

/// Performs queries for real but only prints side-effecting commands.
pub struct DryRunRunner<R: Runner> {
    inner: R,
}

impl<R: Runner> DryRunRunner<R> {
    pub fn new(inner: R) -> Self {
        DryRunRunner { inner }
    }
}

impl<R: Runner> Runner for DryRunRunner<R> {
    fn capture(&self, program: &str, args: &[&str]) -> io::Result<Outcome> {
        self.inner.capture(program, args)
    }

    fn run(&self, program: &str, args: &[&str], input: Option<&str>) -> io::Result<Outcome> {
        println!("would run: {} {}", program, args.join(" "));
        if let Some(input) = input {
            println!("  with input: {}", input);
        }
        Ok(Outcome {
            code: Some(0),
            ..Outcome::default()
        })
    }
}
