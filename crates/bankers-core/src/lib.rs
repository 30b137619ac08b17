//! Banker's Algorithm Safety Evaluator
//!
//! # Overview
//!
//! `bankers-core` decides whether a fixed set of processes sharing counted
//! resource types can all run to completion (a *safe* state), and whether
//! granting one additional request keeps the system safe.
//!
//! # Layered Architecture
//!
//! - **Domain**: `ResourceState`, the safety check and request logic
//! - **Infrastructure**: parsing the textual system description
//! - **Adapters**: the evaluation flow and its rendered report
//!
//! # Invariants
//!
//! - **Need Derivation**: Need is `max - allocation`, clamped at zero
//! - **Conservation**: Granting a request keeps `allocation + available` per resource
//! - **Order Independence**: The safety verdict does not depend on scan order
//! - **No Corruption**: Rejected requests and speculative grants never mutate the input state
//!
//! # Usage
//!
//! ```rust
//! use bankers_core::{evaluate, parse_input};
//!
//! let input = parse_input(
//!     "R 1 P 2 Available 1 Max 2 2 Allocation 1 0 P0 1",
//! ).unwrap();
//! let evaluation = evaluate(&input).unwrap();
//!
//! assert!(evaluation.is_safe());
//! assert!(evaluation.verdict.unwrap().is_granted());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod domain;
pub mod infrastructure;
pub mod adapters;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Re-export Primary Types
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

// Domain types
pub use domain::{
    Matrix,
    ProcessId,
    RequestError,
    ResourceId,
    ResourceRequest,
    ResourceState,
    StateError,
    SystemSnapshot,
    Units,
};

// Input
pub use infrastructure::{parse_input, ParseError, ParsedInput, MAX_PROCESSES};

// Evaluation
pub use adapters::{evaluate, evaluate_snapshot, judge_request, Evaluation, Verdict};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
