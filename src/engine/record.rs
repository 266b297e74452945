// Execution records

use crate::error::Result;
use crate::number::Decimal;
use crate::operation::Operation;

/// One completed application of an operation.
///
/// A record can only be built from a successful evaluation, so its result is
/// always `operation` applied to `arguments`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRecord {
    operation: Operation,
    arguments: Vec<Decimal>, // Pop order: top of stack first
    result: Decimal,
}

impl ExecutionRecord {
    /// Evaluate `operation` on `arguments`; no record exists if that fails
    pub fn execute(operation: Operation, arguments: Vec<Decimal>) -> Result<Self> {
        let result = operation.evaluate(&arguments)?;
        Ok(ExecutionRecord {
            operation,
            arguments,
            result,
        })
    }

    /// Record for a literal moved onto the stack
    pub fn push(value: Decimal) -> Self {
        ExecutionRecord {
            operation: Operation::Push,
            arguments: vec![value.clone()],
            result: value,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn arguments(&self) -> &[Decimal] {
        &self.arguments
    }

    pub fn result(&self) -> &Decimal {
        &self.result
    }

    /// Consume the record, keeping only the arguments it was built from
    pub fn into_arguments(self) -> Vec<Decimal> {
        self.arguments
    }
}
