use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The traffic control executable could not be located on the search path.
    #[error("executable `{program}` not found in search path")]
    ExecutableNotFound { program: String },
    /// The tool ran and exited with a non-zero status. Holds its stderr, unmodified.
    #[error("{0}")]
    Tool(String),
    /// The process could not be launched or waited on.
    #[error("failed to execute command: {0}")]
    Execution(#[from] io::Error),
}

impl Error {
    /// Returns the diagnostic printed by the tool, if the tool itself reported the failure.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Tool(stderr) => Some(stderr),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
