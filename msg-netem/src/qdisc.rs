//! Argument lists for `tc qdisc` invocations.

use std::{fmt, time::Duration};

use crate::delay;

/// The `tc` object every command operates on.
pub const QDISC: &str = "qdisc";

/// The queueing discipline used to emulate delay.
pub const NETEM: &str = "netem";

/// A `tc qdisc` operation verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Change,
    Delete,
    Show,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Delete => "delete",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The ordered arguments of a single `tc qdisc` invocation, without the program itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QdiscCommand {
    operation: Operation,
    args: Vec<String>,
}

impl QdiscCommand {
    /// Builds `qdisc <op> dev <interface> root netem delay <N>ms`.
    pub fn delay(operation: Operation, interface: &str, delay: Duration) -> Self {
        let mut cmd = Self::base(operation, interface);
        cmd.args.extend(
            ["root", NETEM, "delay"].into_iter().map(String::from).chain([delay::format(delay)]),
        );

        cmd
    }

    /// Builds `qdisc show dev <interface>`.
    pub fn show(interface: &str) -> Self {
        Self::base(Operation::Show, interface)
    }

    fn base(operation: Operation, interface: &str) -> Self {
        let args = vec![
            QDISC.to_string(),
            operation.as_str().to_string(),
            "dev".to_string(),
            interface.to_string(),
        ];

        Self { operation, args }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for QdiscCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args.join(" "))
    }
}
