//! Request Evaluation
//!
//! Decides, for one snapshot and at most one request:
//!
//! ```text
//! current state unsafe?          -> UnsafeCurrentState
//! request exceeds need/available -> Rejected
//! otherwise                      -> Simulated (grant applied to a copy,
//!                                   safety re-checked on the copy)
//! ```
//!
//! The evaluation is a plain value; rendering it is a separate step via
//! [`Display`](fmt::Display) or `serde`.

use crate::domain::{ProcessId, RequestError, ResourceRequest, ResourceState, StateError, SystemSnapshot};
use crate::infrastructure::ParsedInput;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// Header printed above the post-grant Need matrix
pub const NEW_NEED_HEADER: &str = "New Need";

/// Outcome of evaluating a single request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The state before the request is already unsafe; the request is not examined
    UnsafeCurrentState,

    /// The request exceeds the process's need or the free instances
    Rejected {
        /// Process label as written in the input
        label: String,
        /// First violated bound
        reason: RequestError,
    },

    /// The request was applied to a copy of the state
    Simulated {
        /// Process label as written in the input
        label: String,
        /// State after the grant
        state_after: ResourceState,
        /// Completion order after the grant, `None` if unsafe
        safe_sequence_after: Option<Vec<ProcessId>>,
    },
}

impl Verdict {
    /// Whether the request can be granted while staying safe
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Simulated { safe_sequence_after: Some(_), .. })
    }
}

/// Full result of one evaluation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// State derived from the input, before any request
    pub state_before: ResourceState,

    /// Completion order of the initial state, `None` if unsafe
    pub safe_sequence: Option<Vec<ProcessId>>,

    /// Request outcome, `None` when the input had no request
    pub verdict: Option<Verdict>,
}

impl Evaluation {
    /// Whether the initial state is safe
    pub fn is_safe(&self) -> bool {
        self.safe_sequence.is_some()
    }

    /// Rendered output, one entry per line
    pub fn lines(&self) -> Vec<String> {
        self.to_string().lines().map(str::to_owned).collect()
    }
}

/// Evaluate parsed input
///
/// # Errors
/// - `StateError` if the snapshot cannot be turned into a state
pub fn evaluate(input: &ParsedInput) -> Result<Evaluation, StateError> {
    evaluate_snapshot(&input.snapshot, input.request.as_ref())
}

/// Evaluate a snapshot and an optional request
///
/// # Errors
/// - `StateError` if the snapshot cannot be turned into a state
pub fn evaluate_snapshot(
    snapshot: &SystemSnapshot,
    request: Option<&ResourceRequest>,
) -> Result<Evaluation, StateError> {
    let state_before = snapshot.to_state()?;
    let safe_sequence = state_before.safe_sequence();

    match &safe_sequence {
        Some(sequence) => debug!(?sequence, "initial state is safe"),
        None => debug!("initial state is unsafe"),
    }

    let verdict = request.map(|request| judge_request(&state_before, request));

    Ok(Evaluation {
        state_before,
        safe_sequence,
        verdict,
    })
}

/// Decide one request against `state` without modifying it
pub fn judge_request(state: &ResourceState, request: &ResourceRequest) -> Verdict {
    let label = request.label.clone();

    if !state.is_safe() {
        info!(%label, "current state unsafe, request not examined");
        return Verdict::UnsafeCurrentState;
    }

    match state.granted(request.process, &request.amounts) {
        Err(reason) => {
            info!(%label, %reason, "request rejected");
            Verdict::Rejected { label, reason }
        }
        Ok(state_after) => {
            let safe_sequence_after = state_after.safe_sequence();
            info!(%label, safe = safe_sequence_after.is_some(), "request simulated");
            Verdict::Simulated {
                label,
                state_after,
                safe_sequence_after,
            }
        }
    }
}

fn write_safe_before(f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
    writeln!(f, "Before granting the request of {}, the system is in safe state.", label)
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsafeCurrentState => writeln!(f, "The current system is in unsafe state."),
            Self::Rejected { label, .. } => {
                write_safe_before(f, label)?;
                writeln!(f, "{}'s request cannot be granted (exceeds need or available).", label)
            }
            Self::Simulated { label, state_after, safe_sequence_after } => {
                write_safe_before(f, label)?;
                writeln!(f, "Simulating granting {}'s request.", label)?;
                write!(f, "{}", state_after.need_report(NEW_NEED_HEADER))?;
                if safe_sequence_after.is_some() {
                    writeln!(f, "{}'s request can be granted. The system will be in safe state.", label)
                } else {
                    writeln!(f, "{}'s request cannot be granted. The system will be in unsafe state.", label)
                }
            }
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Some(verdict) => write!(f, "{}", verdict),
            None => Ok(()),
        }
    }
}
