//! Textual System Description Parser
//!
//! # Format
//!
//! Whitespace-delimited tokens in fixed order:
//!
//! ```text
//! R <numResources>
//! P <numProcesses>
//! Available <numResources integers>
//! Max <numProcesses rows of numResources integers>
//! Allocation <numProcesses rows of numResources integers>
//! [Pk <numResources integers>]
//! ```
//!
//! `R` and `P` also accept lowercase. The trailing request line is optional;
//! anything after its amounts is ignored. `numProcesses` may not exceed
//! [`MAX_PROCESSES`].

use crate::domain::{Matrix, ProcessId, ResourceRequest, StateError, SystemSnapshot, Units};
use std::str::SplitWhitespace;
use tracing::debug;

/// Largest accepted `numProcesses`
///
/// With `R 0` a process row consumes no tokens, so the declared count is the
/// only bound on the matrices built from it.
pub const MAX_PROCESSES: usize = 1 << 16;

/// Result of parsing a system description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The described state
    pub snapshot: SystemSnapshot,

    /// Optional request line
    pub request: Option<ResourceRequest>,
}

/// Fatal input-format violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Stream ended while a required token was expected
    #[error("Unexpected EOF reading {reading}")]
    UnexpectedEof {
        /// Field being read
        reading: &'static str,
    },

    /// A section keyword was not where it should be
    #[error("Expected '{expected}' but found '{found}'")]
    UnexpectedKeyword {
        /// Keyword required at this position
        expected: &'static str,
        /// Token actually present
        found: String,
    },

    /// Token is not a non-negative integer
    #[error("Invalid number '{token}' reading {reading}")]
    InvalidNumber {
        /// Field being read
        reading: &'static str,
        /// Offending token
        token: String,
    },

    /// Request line does not start with `P<k>`
    #[error("Invalid process '{token}' in request, expected P<index>")]
    InvalidProcess {
        /// Offending token
        token: String,
    },

    /// Declared process count is above [`MAX_PROCESSES`]
    #[error("numProcesses {declared} exceeds the limit of {limit}")]
    TooManyProcesses {
        /// Count read from the input
        declared: usize,
        /// Accepted maximum
        limit: usize,
    },

    /// Parsed rows do not form a consistent state
    #[error(transparent)]
    State(#[from] StateError),
}

/// Parse a complete system description
///
/// # Errors
/// Any [`ParseError`]; parsing stops at the first violation.
pub fn parse_input(text: &str) -> Result<ParsedInput, ParseError> {
    let mut tokens = Tokens::new(text);

    tokens.keyword("R", &["R", "r"])?;
    let num_resources = tokens.count("numResources")?;

    tokens.keyword("P", &["P", "p"])?;
    let num_processes = tokens.count("numProcesses")?;
    if num_processes > MAX_PROCESSES {
        return Err(ParseError::TooManyProcesses {
            declared: num_processes,
            limit: MAX_PROCESSES,
        });
    }

    tokens.keyword("Available", &["Available"])?;
    let available = tokens.row(num_resources, "Available")?;

    tokens.keyword("Max", &["Max"])?;
    let max = tokens.matrix(num_processes, num_resources, "Max")?;

    tokens.keyword("Allocation", &["Allocation"])?;
    let allocation = tokens.matrix(num_processes, num_resources, "Allocation")?;

    let snapshot = SystemSnapshot::new(available, max, allocation)?;

    let request = match tokens.inner.next() {
        None => None,
        Some(label) => {
            let process = parse_process_label(label).ok_or_else(|| ParseError::InvalidProcess {
                token: label.to_string(),
            })?;
            let amounts = tokens.row(num_resources, "request")?;
            Some(ResourceRequest {
                label: label.to_string(),
                process,
                amounts,
            })
        }
    };

    let ignored = tokens.inner.count();
    if ignored > 0 {
        debug!(ignored, "ignoring trailing tokens after request");
    }

    debug!(num_processes, num_resources, has_request = request.is_some(), "input parsed");

    Ok(ParsedInput { snapshot, request })
}

/// Resolve `P<k>` / `p<k>` to a process index
fn parse_process_label(label: &str) -> Option<ProcessId> {
    let index = label.strip_prefix(['P', 'p'])?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    index.parse().ok().map(ProcessId)
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn expect_token(&mut self, reading: &'static str) -> Result<&'a str, ParseError> {
        self.inner.next().ok_or(ParseError::UnexpectedEof { reading })
    }

    fn keyword(&mut self, expected: &'static str, accepted: &[&str]) -> Result<(), ParseError> {
        let token = self.expect_token(expected)?;
        if !accepted.contains(&token) {
            return Err(ParseError::UnexpectedKeyword {
                expected,
                found: token.to_string(),
            });
        }
        Ok(())
    }

    fn count(&mut self, reading: &'static str) -> Result<usize, ParseError> {
        let token = self.expect_token(reading)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            reading,
            token: token.to_string(),
        })
    }

    fn units(&mut self, reading: &'static str) -> Result<Units, ParseError> {
        let token = self.expect_token(reading)?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            reading,
            token: token.to_string(),
        })
    }

    // Rows grow by push, so a row never outruns the tokens backing it.
    fn row(&mut self, len: usize, reading: &'static str) -> Result<Vec<Units>, ParseError> {
        let mut row = Vec::new();
        for _ in 0..len {
            row.push(self.units(reading)?);
        }
        Ok(row)
    }

    // `rows` is bounded by MAX_PROCESSES; empty rows consume no tokens.
    fn matrix(&mut self, rows: usize, cols: usize, reading: &'static str) -> Result<Matrix, ParseError> {
        let mut matrix = Vec::with_capacity(rows);
        for _ in 0..rows {
            matrix.push(self.row(cols, reading)?);
        }
        Ok(matrix)
    }
}
