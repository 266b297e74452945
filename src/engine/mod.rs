//! Stack engine
//!
//! This module provides the calculator's state:
//! - [`record`]: [`record::ExecutionRecord`], one completed application of an
//!   operation together with the arguments it consumed
//! - [`stack`]: [`stack::RecordStack`], the LIFO sequence of records
//!
//! # Rollback
//!
//! Records keep their arguments so that any of them can be reversed. Undo and
//! failed-operation recovery share one primitive, [`stack::RecordStack::restore`]:
//!
//! ```text
//! stack: 5 2        (Push 5, Push 2)
//! +                 pop 2, pop 5 → record(Add, [2, 5], 7)
//! stack: 7
//! undo              pop record, push 5, push 2 (reverse of pop order)
//! stack: 5 2
//! ```
//!
//! After an undo or a failed evaluation the rendered stack is identical to
//! what it was before the operation was attempted.

pub mod record;
pub mod stack;
