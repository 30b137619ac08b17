//! Infrastructure Layer - Input Acquisition
//!
//! Turns external text into domain values. Everything that can fail on
//! malformed input lives here, so the domain layer only ever sees
//! well-formed snapshots.
//!
//! # Responsibilities
//! - Tokenizing the whitespace-delimited system description
//! - Keyword and count validation with field-specific diagnostics

pub mod input;

pub use input::{parse_input, ParseError, ParsedInput, MAX_PROCESSES};
