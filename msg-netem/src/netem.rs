use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    command::{Output, Runner},
    lookup::lookup,
    qdisc::{Operation, QdiscCommand},
    Result,
};

/// Name of the traffic control executable looked up by default.
pub const DEFAULT_PROGRAM: &str = "tc";

/// Configuration for a [`Netem`] controller.
#[derive(Debug, Clone)]
pub struct NetemConfig {
    /// The network interface rules are applied to.
    interface: String,
    /// Name or path of the traffic control executable.
    program: String,
    /// Directories searched for `program`. Falls back to `PATH` if unset.
    search_path: Option<OsString>,
}

impl NetemConfig {
    /// Creates a configuration targeting `interface`, using `tc` from `PATH`.
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            program: DEFAULT_PROGRAM.to_string(),
            search_path: None,
        }
    }

    /// Set the name or path of the traffic control executable.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the directories searched for the executable, in `PATH` format.
    pub fn search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }
}

/// Controls a `netem` delay qdisc at the root of a single network interface.
///
/// Every operation runs `tc` once and blocks until it exits. The rule itself lives in the
/// kernel: this handle holds no state besides the interface name and the resolved executable,
/// and whether a rule exists is only observable through [`Netem::show`].
#[derive(Debug, Clone)]
pub struct Netem {
    interface: String,
    path: PathBuf,
}

impl Netem {
    /// Resolves the traffic control executable and binds the controller to the configured
    /// interface. Fails with [`Error::ExecutableNotFound`](crate::Error::ExecutableNotFound) if
    /// the executable is not on the search path.
    pub fn new(config: NetemConfig) -> Result<Self> {
        let path = lookup(&config.program, config.search_path.as_deref())?;

        tracing::debug!(interface = %config.interface, ?path, "created netem controller");

        Ok(Self { interface: config.interface, path })
    }

    /// Shorthand for [`Netem::new`] with the default configuration for `interface`.
    pub fn from_interface(interface: impl Into<String>) -> Result<Self> {
        Self::new(NetemConfig::new(interface))
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// The resolved path of the traffic control executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attaches a netem qdisc delaying all outgoing packets by `delay`.
    ///
    /// `tc` refuses to add a second root qdisc; its diagnostic is returned as
    /// [`Error::Tool`](crate::Error::Tool).
    pub fn add_delay(&self, delay: Duration) -> Result<()> {
        self.run_delay(Operation::Add, delay)
    }

    /// Changes the delay of the existing netem qdisc to `delay`.
    pub fn change_delay(&self, delay: Duration) -> Result<()> {
        self.run_delay(Operation::Change, delay)
    }

    /// Removes the netem qdisc. Which rule matches is decided by `tc`.
    pub fn delete_delay(&self, delay: Duration) -> Result<()> {
        self.run_delay(Operation::Delete, delay)
    }

    /// Returns the qdiscs attached to the interface, one entry per line printed by `tc`.
    ///
    /// Lines are returned as printed. Output ending in a newline yields a trailing empty entry.
    pub fn show(&self) -> Result<Vec<String>> {
        let output = self.run(QdiscCommand::show(&self.interface), true)?;

        Ok(output.stdout.split('\n').map(String::from).collect())
    }

    fn run_delay(&self, operation: Operation, delay: Duration) -> Result<()> {
        self.run(QdiscCommand::delay(operation, &self.interface, delay), false).map(|_| ())
    }

    fn run(&self, cmd: QdiscCommand, capture_stdout: bool) -> Result<Output> {
        let _span =
            tracing::debug_span!("netem", interface = %self.interface, op = %cmd.operation())
                .entered();
        tracing::debug!(%cmd, "running tc");

        Runner::run(&self.path, cmd.args(), capture_stdout)
    }
}
