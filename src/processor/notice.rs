// User-visible messages produced while processing a line

use std::fmt;

use crate::error::CalcError;
use crate::operation::Operation;

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message printed before the stack line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Token matched no command and no literal; the line carries on
    Unsupported { token: String, position: usize },

    /// Not enough entries on the stack for the operator; the line stops
    InsufficientParameters { command: String, position: usize },

    /// The operator ran and failed; the stack was rolled back and the line stops
    ExecutionFailed {
        command: String,
        position: usize,
        cause: CalcError,
    },

    /// Listing of every command word, in response to `?`
    Help,
}

impl Notice {
    pub fn execution_failed(command: &str, position: usize, cause: CalcError) -> Self {
        Notice::ExecutionFailed {
            command: command.to_string(),
            position,
            cause,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Notice::Help => Severity::Info,
            Notice::Unsupported { .. } => Severity::Warning,
            Notice::InsufficientParameters { .. } | Notice::ExecutionFailed { .. } => {
                Severity::Error
            }
        }
    }

    /// Whether this notice ended processing of its line
    pub fn stops_line(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Unsupported { token, position } => {
                write!(
                    f,
                    "operator {} (position: {}): unsupported operation",
                    token, position
                )
            }
            Notice::InsufficientParameters { command, position } => {
                write!(
                    f,
                    "operator {} (position: {}): insufficient parameters",
                    command, position
                )
            }
            Notice::ExecutionFailed {
                command,
                position,
                cause,
            } => {
                write!(
                    f,
                    "operator {} (position: {}): operation execution failed due to: [{}]",
                    command, position, cause
                )
            }
            Notice::Help => {
                let commands: Vec<_> = Operation::commands().collect();
                write!(f, "available operations: {}", commands.join(" "))
            }
        }
    }
}
