//! Resource Accounting & Deadlock Avoidance
//!
//! # Architecture
//!
//! [`ResourceState`] holds the Banker's-algorithm matrices for a fixed set
//! of processes and resource types:
//!
//! ```text
//! available[j]      free instances of resource j
//! max[i][j]         most of resource j process i will ever hold
//! allocation[i][j]  instances of resource j held by process i
//! need[i][j]        max[i][j] - allocation[i][j], clamped at 0
//! ```
//!
//! The implementation is split by concern:
//!
//! - `state`   - construction, row setters, Need derivation
//! - `safety`  - the fixed-point safety check
//! - `request` - request validation, in-place and copy-on-grant application
//! - `report`  - lazy textual rendering
//!
//! ## Transitions
//!
//! ```text
//! compute_need    Max, Allocation            -> Need
//! apply_request   Allocation, Available, Need -> Allocation', Available', Need'
//! granted         &self                      -> new ResourceState
//! ```

pub mod types;
pub mod state;
pub mod safety;
pub mod request;
pub mod report;

#[cfg(kani)]
mod proof;

// Re-exports
pub use types::*;
pub use state::ResourceState;
pub use report::{NeedReport, StateReport};
