//! SystemSnapshot - Immutable State Description
//!
//! The hand-off value between input parsing and evaluation. A snapshot is
//! dimension-checked once at construction and never changes afterwards.

use super::resources::{Matrix, ProcessId, ResourceState, StateError, Units};
use serde::{Deserialize, Serialize};

/// Parsed Available vector plus Max and Allocation matrices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    available: Vec<Units>,
    max: Matrix,
    allocation: Matrix,
}

impl SystemSnapshot {
    /// Create a snapshot, checking that all rows share one shape
    ///
    /// # Errors
    /// - `DimensionMismatch`: row counts of Max and Allocation differ, or a
    ///   row length differs from `available.len()`
    pub fn new(available: Vec<Units>, max: Matrix, allocation: Matrix) -> Result<Self, StateError> {
        if max.len() != allocation.len() {
            return Err(StateError::DimensionMismatch {
                what: "Allocation",
                expected: max.len(),
                actual: allocation.len(),
            });
        }

        let num_resources = available.len();
        for (what, matrix) in [("Max row", &max), ("Allocation row", &allocation)] {
            if let Some(row) = matrix.iter().find(|row| row.len() != num_resources) {
                return Err(StateError::DimensionMismatch {
                    what,
                    expected: num_resources,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { available, max, allocation })
    }

    /// Number of processes
    pub fn num_processes(&self) -> usize {
        self.max.len()
    }

    /// Number of resource types
    pub fn num_resources(&self) -> usize {
        self.available.len()
    }

    /// Available vector
    pub fn available(&self) -> &[Units] {
        &self.available
    }

    /// Max matrix
    pub fn max(&self) -> &Matrix {
        &self.max
    }

    /// Allocation matrix
    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    /// Build the state and derive its Need matrix
    pub fn to_state(&self) -> Result<ResourceState, StateError> {
        let mut state = ResourceState::new(self.num_processes(), self.num_resources());
        state.set_available(&self.available)?;
        for (i, (max_row, alloc_row)) in self.max.iter().zip(&self.allocation).enumerate() {
            state.set_max_row(ProcessId(i), max_row)?;
            state.set_allocation_row(ProcessId(i), alloc_row)?;
        }
        state.compute_need();
        Ok(state)
    }
}
