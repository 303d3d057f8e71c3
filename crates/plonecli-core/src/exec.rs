//! External command assembly and blocking execution
//!
//! Every operation in this CLI boils down to one or more external tool
//! invocations. Commands are assembled as plain data (`CommandSpec`) so the
//! dispatcher can be tested without spawning anything, then executed with
//! inherited stdio so the child owns the terminal (serve/debug stay
//! interruptible with CTRL+C).

use camino::{Utf8Path, Utf8PathBuf};
use std::process::Command;
use tracing::debug;

use crate::error::Result;

/// Exit code reported when a child is terminated by a signal
const SIGNAL_EXIT_CODE: i32 = 130;

/// A fully-assembled external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path
    pub program: String,
    /// Argument vector, in order
    pub args: Vec<String>,
    /// Working directory for the child, if not the current one
    pub cwd: Option<Utf8PathBuf>,
    /// Extra environment variables for this spawn only
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    /// Start a spec for `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the child's working directory
    pub fn cwd(mut self, dir: impl AsRef<Utf8Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Add an environment variable for this spawn
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// The invocation as a single shell-style line, for `RUN:` echoes
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Run one external command to completion and return its exit code
///
/// Stdio is inherited; the call blocks until the child exits. A non-zero
/// exit is not an error at this layer — the caller mirrors the code.
pub fn run(spec: &CommandSpec) -> Result<i32> {
    debug!("spawning: {}", spec.command_line());

    let mut command = Command::new(&spec.program);
    command.args(&spec.args);
    if let Some(cwd) = &spec.cwd {
        command.current_dir(cwd);
    }
    for (key, value) in &spec.env {
        command.env(key, value);
    }

    let status = command.status()?;
    Ok(status.code().unwrap_or(SIGNAL_EXIT_CODE))
}

/// Run a sequence of commands, aborting at the first non-zero exit
///
/// Returns the failing step's exit code, or 0 when every step succeeded.
pub fn run_all(specs: &[CommandSpec]) -> Result<i32> {
    for spec in specs {
        let code = run(spec)?;
        if code != 0 {
            debug!("aborting sequence: '{}' exited with {}", spec.command_line(), code);
            return Ok(code);
        }
    }
    Ok(0)
}
