//! Line processor
//!
//! [`Calculator`] owns the record stack and applies one input line at a time,
//! token by token, left to right.
//!
//! # Failure semantics
//!
//! | Token outcome | Stack | Rest of line |
//! |---|---|---|
//! | unsupported token | unchanged | processed |
//! | `?` | unchanged | processed |
//! | too few operands | unchanged | skipped |
//! | evaluation failure (`/ by zero`, ...) | rolled back | skipped |
//! | `undo` on empty stack | unchanged | skipped |
//! | `quit` | unchanged | skipped, session ends |
//!
//! Whatever state the stack reaches before a failure carries over to the next
//! line.

pub mod notice;

use tracing::{debug, debug_span};

use crate::engine::record::ExecutionRecord;
use crate::engine::stack::RecordStack;
use crate::number::Decimal;
use crate::operation::Operation;
use crate::token::{tokenize, Token};
use notice::Notice;

/// What the session should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineOutcome {
    #[default]
    Continue,
    Quit,
}

/// Everything a processed line produced besides the stack itself
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineReport {
    pub notices: Vec<Notice>,
    pub outcome: LineOutcome,
}

/// Result of applying a single token that did not stop the line
enum Flow {
    Next,
    Notify(Notice),
    Quit,
}

/// Single-session RPN calculator
#[derive(Debug, Default)]
pub struct Calculator {
    stack: RecordStack,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            stack: RecordStack::new(),
        }
    }

    pub fn stack(&self) -> &RecordStack {
        &self.stack
    }

    /// The `stack: ...` line for the current state
    pub fn render(&self) -> String {
        self.stack.render()
    }

    /// Apply every token of `line` until one of them stops the line
    pub fn process_line(&mut self, line: &str) -> LineReport {
        let _span = debug_span!("line", line).entered();
        let mut report = LineReport::default();

        for token in tokenize(line) {
            let operation = Operation::resolve(token.text);
            debug!(
                token = token.text,
                position = token.position,
                operation = ?operation,
                "resolved token"
            );

            match self.apply(operation, &token) {
                Ok(Flow::Next) => {}
                Ok(Flow::Notify(notice)) => report.notices.push(notice),
                Ok(Flow::Quit) => {
                    report.outcome = LineOutcome::Quit;
                    break;
                }
                Err(notice) => {
                    debug!(%notice, "line stopped");
                    report.notices.push(notice);
                    break;
                }
            }
        }

        report
    }

    fn apply(&mut self, operation: Operation, token: &Token<'_>) -> Result<Flow, Notice> {
        match operation {
            Operation::Push => {
                let value = Decimal::parse(token.text)
                    .map_err(|cause| Notice::execution_failed(token.text, token.position, cause))?;
                self.stack.push(ExecutionRecord::push(value));
                Ok(Flow::Next)
            }
            Operation::Clear => {
                debug!(dropped = self.stack.len(), "clear stack");
                self.stack.clear();
                Ok(Flow::Next)
            }
            Operation::Undo => {
                let undone = self.stack.undo().map_err(|cause| {
                    Notice::execution_failed(operation.command(), token.position, cause)
                })?;
                debug!(operation = ?undone, "undo record");
                Ok(Flow::Next)
            }
            Operation::Unsupported => Ok(Flow::Notify(Notice::Unsupported {
                token: token.text.to_string(),
                position: token.position,
            })),
            Operation::Help => Ok(Flow::Notify(Notice::Help)),
            Operation::Quit => Ok(Flow::Quit),
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::SquareRoot => self.execute(operation, token),
        }
    }

    /// Pop the operands, evaluate, and either push the new record or put the
    /// operands back exactly as they were
    fn execute(&mut self, operation: Operation, token: &Token<'_>) -> Result<Flow, Notice> {
        let insufficient = || Notice::InsufficientParameters {
            command: operation.command().to_string(),
            position: token.position,
        };

        if self.stack.len() < operation.arity() {
            return Err(insufficient());
        }

        let arguments: Vec<Decimal> = self
            .stack
            .pop_many(operation.arity())
            .map_err(|_| insufficient())?
            .into_iter()
            .map(|record| record.result().clone())
            .collect();

        match ExecutionRecord::execute(operation, arguments.clone()) {
            Ok(record) => {
                self.stack.push(record);
                Ok(Flow::Next)
            }
            Err(cause) => {
                debug!(%cause, operation = ?operation, "roll back failed operation");
                self.stack.restore(arguments);
                Err(Notice::execution_failed(
                    operation.command(),
                    token.position,
                    cause,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    fn run(lines: &[&str]) -> (Calculator, Vec<LineReport>) {
        let mut calculator = Calculator::new();
        let reports = lines
            .iter()
            .map(|line| calculator.process_line(line))
            .collect();
        (calculator, reports)
    }

    #[test]
    fn test_push_and_add() {
        let (calculator, reports) = run(&["5 2 +"]);
        assert_eq!(calculator.render(), "stack: 7");
        assert!(reports[0].notices.is_empty());
        assert_eq!(reports[0].outcome, LineOutcome::Continue);
    }

    #[test]
    fn test_failure_rolls_back_and_stops_line() {
        let (calculator, reports) = run(&["1 2 3 0 / + * * 6 5"]);
        assert_eq!(calculator.render(), "stack: 1 2 3 0");
        assert_eq!(
            reports[0].notices,
            vec![Notice::execution_failed("/", 9, CalcError::DivisionByZero)]
        );
    }

    #[test]
    fn test_rolled_back_operands_can_be_used_again() {
        let (calculator, _) = run(&["1 2 3 0 / + * * 6 5", "+ 5"]);
        assert_eq!(calculator.render(), "stack: 1 2 3 5");
    }

    #[test]
    fn test_insufficient_operands_stop_line() {
        let (calculator, reports) = run(&["1 2 3 * 5 + * * 6 5"]);
        assert_eq!(calculator.render(), "stack: 11");
        assert_eq!(
            reports[0].notices,
            vec![Notice::InsufficientParameters {
                command: "*".to_string(),
                position: 15
            }]
        );
    }

    #[test]
    fn test_unsupported_does_not_stop_line() {
        let (calculator, reports) = run(&["1 ( 2 foo +"]);
        assert_eq!(calculator.render(), "stack: 3");
        assert_eq!(reports[0].notices.len(), 2);
        assert!(reports[0].notices.iter().all(|n| !n.stops_line()));
    }

    #[test]
    fn test_undo_empty_stack_stops_line() {
        let (calculator, reports) = run(&["undo 5"]);
        assert_eq!(calculator.render(), "stack: ");
        assert_eq!(
            reports[0].notices[0].to_string(),
            "operator undo (position: 1): operation execution failed due to: [stack is empty]"
        );
    }

    #[test]
    fn test_negative_sqrt_rolls_back() {
        let (calculator, reports) = run(&["3 -4 sqrt 1"]);
        assert_eq!(calculator.render(), "stack: 3 -4");
        assert_eq!(
            reports[0].notices[0].to_string(),
            "operator sqrt (position: 6): operation execution failed due to: [Illegal sqrt(x) for x < 0: x = -4]"
        );
    }

    #[test]
    fn test_undo_after_rollback_removes_restored_literal() {
        let (calculator, _) = run(&["4 0 /", "undo"]);
        assert_eq!(calculator.render(), "stack: 4");
    }

    #[test]
    fn test_help_keeps_going() {
        let (calculator, reports) = run(&["1 ? 2"]);
        assert_eq!(calculator.render(), "stack: 1 2");
        assert_eq!(reports[0].notices, vec![Notice::Help]);
    }

    #[test]
    fn test_quit_stops_line() {
        let (calculator, reports) = run(&["1 quit 2"]);
        assert_eq!(calculator.render(), "stack: 1");
        assert_eq!(reports[0].outcome, LineOutcome::Quit);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let (calculator, _) = run(&["16 SQRT 2 Sqrt", "UNDO"]);
        assert_eq!(calculator.render(), "stack: 4 2");
    }
}
