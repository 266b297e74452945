//! # Introduction
//!
//! rpncalc is an interactive Reverse Polish Notation calculator. It reads
//! whitespace-separated tokens from standard input one line at a time, keeps a
//! stack of exact decimal results, and prints the stack after every line.
//!
//! ## Execution pipeline
//!
//! ```text
//! Line → Tokens → Operations → Record stack → "stack: ..." line
//! ```
//!
//! 1. [`token`]: splits a line and records each token's position.
//! 2. [`operation`]: resolves tokens to [`operation::Operation`]s and
//!    evaluates arithmetic.
//! 3. [`engine`]: the [`engine::stack::RecordStack`] of
//!    [`engine::record::ExecutionRecord`]s, with undo and rollback.
//! 4. [`processor`]: [`processor::Calculator`] applies a whole line with
//!    short-circuit failure semantics.
//! 5. [`session`]: the read-process-print loop, banner and quit handling.
//!
//! ## Numbers
//!
//! [`number::Decimal`] is arbitrary precision with at most 16 fractional
//! digits (round-half-to-even) and displays at most 10 (floored), never in
//! scientific notation.
//!
//! ## Supported commands
//!
//! `+ - * / sqrt undo clear ? quit`, plus any decimal literal.

pub mod config;
pub mod engine;
pub mod error;
pub mod number;
pub mod operation;
pub mod processor;
pub mod session;
pub mod theme;
pub mod token;
