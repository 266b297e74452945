//! Error types for the calculator
//!
//! This module defines [`CalcError`], which represents every failure that can
//! occur while parsing a number, evaluating an operation, or manipulating the
//! record stack.
//!
//! All of these errors are recoverable at line granularity: the line processor
//! reports them, rolls the stack back where needed, and the session carries on
//! with the next input line.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CalcError>;

/// Errors raised by numbers, operations and the record stack
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Text could not be read as a decimal literal
    #[error("Unable to convert [{text}] into a number.")]
    InvalidNumber { text: String },

    /// Divisor was zero
    #[error("/ by zero")]
    DivisionByZero,

    /// Square root of a negative value
    #[error("Illegal sqrt(x) for x < 0: x = {value}")]
    NegativeSquareRoot { value: String },

    /// An operation was handed the wrong number of arguments
    #[error("{operation} operation requires {expected} arguments. Received: {received}")]
    ArityMismatch {
        operation: &'static str,
        expected: usize,
        received: usize,
    },

    /// Pop attempted on an empty stack
    #[error("stack is empty")]
    StackUnderflow,

    /// Fewer records on the stack than requested
    #[error("Not enough item in stack. Current stack size is {available}")]
    InsufficientOperands { required: usize, available: usize },
}
