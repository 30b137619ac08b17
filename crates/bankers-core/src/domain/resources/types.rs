//! Core Types for Resource Accounting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Count of resource instances
pub type Units = u32;

/// Row-major process x resource matrix
pub type Matrix = Vec<Vec<Units>>;

/// Process identifier (row index into Max / Allocation / Need)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Create a new process identifier
    #[inline(always)]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying usize value
    #[inline(always)]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Resource type identifier (column index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub usize);

impl ResourceId {
    /// Create a new resource identifier
    #[inline(always)]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the underlying usize value
    #[inline(always)]
    pub const fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// A hypothetical additional allocation for one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Process token exactly as it appeared in the input (`P1`, `p1`, ...)
    pub label: String,

    /// Requesting process
    pub process: ProcessId,

    /// Requested instances per resource type
    pub amounts: Vec<Units>,
}

impl ResourceRequest {
    /// Build a request whose label is the canonical `P<k>` form
    pub fn new(process: ProcessId, amounts: Vec<Units>) -> Self {
        Self {
            label: process.to_string(),
            process,
            amounts,
        }
    }
}

/// Errors raised while populating or scanning a [`ResourceState`](super::ResourceState)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Process index outside `0..num_processes`
    #[error("process {process} out of range (system has {num_processes} processes)")]
    ProcessOutOfRange {
        /// Offending process
        process: ProcessId,
        /// Number of processes in the state
        num_processes: usize,
    },

    /// Row or vector length does not match the number of resource types
    #[error("{what} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        /// Which row was being set
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Scan order is not a permutation of all processes
    #[error("scan order must visit each of the {num_processes} processes exactly once")]
    InvalidScanOrder {
        /// Number of processes in the state
        num_processes: usize,
    },
}

/// Why a request cannot be granted
///
/// These are normal decision outcomes rather than failures of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestError {
    /// Requesting process does not exist
    #[error("process {process} out of range (system has {num_processes} processes)")]
    ProcessOutOfRange {
        /// Requesting process
        process: ProcessId,
        /// Number of processes in the state
        num_processes: usize,
    },

    /// Request vector length differs from the number of resource types
    #[error("request has {actual} amounts, expected {expected}")]
    DimensionMismatch {
        /// Number of resource types
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Request exceeds the remaining need of the process
    #[error("request of {requested} x {resource} exceeds need of {need}")]
    ExceedsNeed {
        /// Resource type
        resource: ResourceId,
        /// Requested instances
        requested: Units,
        /// Remaining need
        need: Units,
    },

    /// Request exceeds the currently free instances
    #[error("request of {requested} x {resource} exceeds available {available}")]
    ExceedsAvailable {
        /// Resource type
        resource: ResourceId,
        /// Requested instances
        requested: Units,
        /// Free instances
        available: Units,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_display() {
        assert_eq!(ProcessId::new(3).to_string(), "P3");
        assert_eq!(ResourceId::new(0).to_string(), "R0");
        assert_eq!(ProcessId(7).as_usize(), 7);
    }

    #[test]
    fn test_request_default_label() {
        let req = ResourceRequest::new(ProcessId(1), vec![1, 0, 2]);
        assert_eq!(req.label, "P1");
    }

    #[test]
    fn test_error_messages() {
        let err = RequestError::ExceedsAvailable {
            resource: ResourceId(2),
            requested: 3,
            available: 0,
        };
        assert_eq!(err.to_string(), "request of 3 x R2 exceeds available 0");

        let err = StateError::DimensionMismatch {
            what: "Max row",
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Max row has 2 entries, expected 3");
    }
}
