//! Record stack
//!
//! [`RecordStack`] holds the calculator's [`ExecutionRecord`]s, last in first
//! out. Besides plain push/pop it provides:
//! - [`RecordStack::pop_many`]: all-or-nothing removal of several records
//! - [`RecordStack::restore`]: the rollback primitive shared by undo and
//!   failed-operation recovery
//! - [`RecordStack::render`]: the `stack: ...` line printed after every input line

use std::fmt;

use tracing::trace;

use super::record::ExecutionRecord;
use crate::error::{CalcError, Result};
use crate::number::Decimal;
use crate::operation::Operation;

/// Label that starts every rendered stack line
pub const STACK_LABEL: &str = "stack: ";

/// LIFO sequence of execution records
#[derive(Debug, Clone)]
pub struct RecordStack {
    records: Vec<ExecutionRecord>, // Bottom first
}

impl RecordStack {
    pub fn new() -> Self {
        RecordStack {
            records: Vec::new(),
        }
    }

    /// Push a record on top
    pub fn push(&mut self, record: ExecutionRecord) {
        trace!(operation = ?record.operation(), result = %record.result(), "push record");
        self.records.push(record);
    }

    /// Remove and return the top record
    pub fn pop(&mut self) -> Result<ExecutionRecord> {
        self.records.pop().ok_or(CalcError::StackUnderflow)
    }

    /// Remove `count` records, most recently pushed first.
    ///
    /// Sizes are checked before anything is removed, so a failure leaves the
    /// stack untouched. An empty stack always fails, even for a count of zero.
    pub fn pop_many(&mut self, count: usize) -> Result<Vec<ExecutionRecord>> {
        if self.records.is_empty() {
            return Err(CalcError::StackUnderflow);
        }
        if count == 0 {
            return Ok(Vec::new());
        }
        if self.records.len() < count {
            return Err(CalcError::InsufficientOperands {
                required: count,
                available: self.records.len(),
            });
        }

        let split = self.records.len() - count;
        let mut popped = self.records.split_off(split);
        popped.reverse();
        Ok(popped)
    }

    /// Put previously consumed arguments back as literal records.
    ///
    /// `arguments` are in pop order (top first), so they are pushed last to
    /// first, which recreates the stack as it was before they were popped.
    pub fn restore(&mut self, arguments: Vec<Decimal>) {
        trace!(count = arguments.len(), "restore arguments");
        for value in arguments.into_iter().rev() {
            self.push(ExecutionRecord::push(value));
        }
    }

    /// Reverse the most recent record and return the operation it held
    pub fn undo(&mut self) -> Result<Operation> {
        let record = self.pop()?;
        let operation = record.operation();
        if operation.restores_arguments_on_undo() {
            self.restore(record.into_arguments());
        }
        Ok(operation)
    }

    /// Drop every record. Not reversible.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records bottom to top
    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    /// Current values bottom to top
    pub fn values(&self) -> impl Iterator<Item = &Decimal> {
        self.records.iter().map(ExecutionRecord::result)
    }

    /// `stack: ` followed by the display form of each value, bottom to top
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for RecordStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(STACK_LABEL)?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
