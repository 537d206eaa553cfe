//! Utilities for [`std::process::Command`].

use std::{
    ffi::OsStr,
    path::Path,
    process::{self, Stdio},
};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Output {
    pub status: process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl From<process::Output> for Output {
    fn from(value: process::Output) -> Self {
        Self {
            status: value.status,
            stdout: String::from_utf8_lossy(&value.stdout).to_string(),
            stderr: String::from_utf8_lossy(&value.stderr).to_string(),
        }
    }
}

pub struct Runner;

impl Runner {
    /// Runs `program` with `args` and blocks until it exits.
    ///
    /// Stderr is always captured. Stdout is captured only if `capture_stdout` is set, otherwise
    /// it is discarded and [`Output::stdout`] is empty.
    ///
    /// A non-zero exit status is returned as [`Error::Tool`] with the captured stderr, a failure
    /// to launch the process as [`Error::Execution`].
    pub fn run<I, S>(program: &Path, args: I, capture_stdout: bool) -> Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let stdout = if capture_stdout { Stdio::piped() } else { Stdio::null() };

        let mut cmd = process::Command::new(program);
        cmd.args(args).stdin(Stdio::null()).stderr(Stdio::piped()).stdout(stdout);

        tracing::debug!(?cmd, "running command");

        let output: Output = cmd.spawn()?.wait_with_output()?.into();

        if !output.status.success() {
            tracing::debug!(?output.stderr, ?output.status, ?cmd, "command returned non-zero status");
            return Err(Error::Tool(output.stderr));
        }

        Ok(output)
    }
}
