//! Operation catalogue
//!
//! This module defines [`Operation`], the fixed set of things a token can ask
//! the calculator to do, and the two functions that give them meaning:
//! - [`Operation::resolve`]: token → operation (never fails)
//! - [`Operation::evaluate`]: operation + consumed arguments → result
//!
//! # Argument order
//!
//! Arguments arrive in the order they were popped, so `arguments[0]` is the
//! top of the stack and `arguments[1]` the entry beneath it. Binary
//! operations read as `second <op> top`:
//!
//! ```text
//! stack: 5 2   →   -   →   5 - 2 = 3
//! ```
//!
//! # Stack management operations
//!
//! `Undo`, `Clear`, `Help`, `Quit` and `Unsupported` act on the session
//! directly and are never evaluated. Calling [`Operation::evaluate`] on one of
//! them is a dispatch bug and panics.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::error::{CalcError, Result};
use crate::number::Decimal;

/// Every operation the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
    Undo,
    Clear,
    /// Move a numeric literal onto the stack
    Push,
    Help,
    Quit,
    /// Sentinel for tokens that match nothing
    Unsupported,
}

/// Command table, built once from [`Operation::ALL`] minus the operations
/// that have no command word
static COMMANDS: LazyLock<FxHashMap<&'static str, Operation>> = LazyLock::new(|| {
    Operation::ALL
        .into_iter()
        .filter(|op| !matches!(op, Operation::Push | Operation::Unsupported))
        .map(|op| (op.command(), op))
        .collect()
});

/// Shape of a numeric literal token
static LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+$").expect("literal pattern is valid")
});

impl Operation {
    /// Catalogue order, which is also the order `?` lists commands in
    pub const ALL: [Operation; 11] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::SquareRoot,
        Operation::Undo,
        Operation::Clear,
        Operation::Push,
        Operation::Help,
        Operation::Quit,
        Operation::Unsupported,
    ];

    /// Command word typed by the user; empty for `Push` and `Unsupported`
    pub fn command(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::SquareRoot => "sqrt",
            Operation::Undo => "undo",
            Operation::Clear => "clear",
            Operation::Help => "?",
            Operation::Quit => "quit",
            Operation::Push | Operation::Unsupported => "",
        }
    }

    /// Human-readable name used in internal error text
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Plus",
            Operation::Subtract => "Minus",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::SquareRoot => "Sqrt",
            Operation::Undo => "Undo",
            Operation::Clear => "Clear",
            Operation::Push => "Push",
            Operation::Help => "Help",
            Operation::Quit => "Quit",
            Operation::Unsupported => "UnsupportedOperation",
        }
    }

    /// Number of stack entries the operation consumes
    pub fn arity(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => 2,
            Operation::SquareRoot | Operation::Push => 1,
            Operation::Undo
            | Operation::Clear
            | Operation::Help
            | Operation::Quit
            | Operation::Unsupported => 0,
        }
    }

    /// Whether undoing a record of this operation puts its arguments back.
    ///
    /// Undoing a `Push` just drops the literal, so it restores nothing.
    pub fn restores_arguments_on_undo(self) -> bool {
        self.is_arithmetic()
    }

    /// Operations that consume stack entries and compute a new value
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operation::Add
                | Operation::Subtract
                | Operation::Multiply
                | Operation::Divide
                | Operation::SquareRoot
        )
    }

    /// Commands listed by `?`, in catalogue order
    pub fn commands() -> impl Iterator<Item = &'static str> {
        Self::ALL
            .into_iter()
            .map(Operation::command)
            .filter(|command| !command.is_empty())
    }

    /// Look a token up: command words first (case-insensitive), then the
    /// numeric literal shape, else [`Operation::Unsupported`]
    pub fn resolve(token: &str) -> Operation {
        if let Some(op) = COMMANDS.get(token.to_lowercase().as_str()) {
            *op
        } else if LITERAL.is_match(token) {
            Operation::Push
        } else {
            Operation::Unsupported
        }
    }

    /// Apply the operation to arguments given in pop order (top of stack first)
    pub fn evaluate(self, arguments: &[Decimal]) -> Result<Decimal> {
        if self != Operation::Push && !self.is_arithmetic() {
            panic!(
                "Should not try to evaluate {} operation. This is most likely a programming error.",
                self.name()
            );
        }

        if arguments.len() != self.arity() {
            return Err(CalcError::ArityMismatch {
                operation: self.name(),
                expected: self.arity(),
                received: arguments.len(),
            });
        }

        match (self, arguments) {
            (Operation::Add, [top, second]) => Ok(second + top),
            (Operation::Subtract, [top, second]) => Ok(second - top),
            (Operation::Multiply, [top, second]) => Ok(second * top),
            (Operation::Divide, [top, second]) => second.checked_div(top),
            (Operation::SquareRoot, [value]) => value.sqrt(),
            (Operation::Push, [value]) => Ok(value.clone()),
            _ => unreachable!("arity was checked above"),
        }
    }
}
