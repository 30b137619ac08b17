//! ResourceState - Matrices and Row Setters

use super::types::{Matrix, ProcessId, ResourceId, StateError, Units};
use serde::Serialize;
use tracing::warn;

/// Allocation state of a fixed set of processes over counted resource types
///
/// # Invariants
///
/// - `max`, `allocation` and `need` are `num_processes x num_resources`
/// - `available` has `num_resources` entries
/// - `need[i][j] == max[i][j].saturating_sub(allocation[i][j])` once
///   [`compute_need`](Self::compute_need) has run, and is kept in step by
///   [`apply_request`](Self::apply_request)
/// - `max` never changes after the initial load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceState {
    pub(super) num_processes: usize,
    pub(super) num_resources: usize,
    pub(super) available: Vec<Units>,
    pub(super) max: Matrix,
    pub(super) allocation: Matrix,
    pub(super) need: Matrix,
}

impl ResourceState {
    /// Create a zero-filled state
    pub fn new(num_processes: usize, num_resources: usize) -> Self {
        Self {
            num_processes,
            num_resources,
            available: vec![0; num_resources],
            max: vec![vec![0; num_resources]; num_processes],
            allocation: vec![vec![0; num_resources]; num_processes],
            need: vec![vec![0; num_resources]; num_processes],
        }
    }

    /// Number of processes (rows)
    #[inline]
    pub fn num_processes(&self) -> usize {
        self.num_processes
    }

    /// Number of resource types (columns)
    #[inline]
    pub fn num_resources(&self) -> usize {
        self.num_resources
    }

    /// Currently free instances per resource type
    #[inline]
    pub fn available(&self) -> &[Units] {
        &self.available
    }

    /// Maximum demand matrix
    #[inline]
    pub fn max(&self) -> &Matrix {
        &self.max
    }

    /// Current allocation matrix
    #[inline]
    pub fn allocation(&self) -> &Matrix {
        &self.allocation
    }

    /// Remaining need matrix
    #[inline]
    pub fn need(&self) -> &Matrix {
        &self.need
    }

    /// Total instances of each resource type (allocated + available)
    pub fn total_instances(&self) -> Vec<u64> {
        (0..self.num_resources)
            .map(|j| {
                let held: u64 = self.allocation.iter().map(|row| u64::from(row[j])).sum();
                held + u64::from(self.available[j])
            })
            .collect()
    }

    /// Replace the Available vector
    ///
    /// # Errors
    /// - `DimensionMismatch`: `row.len() != num_resources`
    pub fn set_available(&mut self, row: &[Units]) -> Result<(), StateError> {
        self.check_row("Available", row)?;
        self.available.copy_from_slice(row);
        Ok(())
    }

    /// Replace one row of the Max matrix
    ///
    /// # Errors
    /// - `ProcessOutOfRange`: no such process
    /// - `DimensionMismatch`: `row.len() != num_resources`
    pub fn set_max_row(&mut self, process: ProcessId, row: &[Units]) -> Result<(), StateError> {
        self.check_process(process)?;
        self.check_row("Max row", row)?;
        self.max[process.as_usize()].copy_from_slice(row);
        Ok(())
    }

    /// Replace one row of the Allocation matrix
    ///
    /// # Errors
    /// - `ProcessOutOfRange`: no such process
    /// - `DimensionMismatch`: `row.len() != num_resources`
    pub fn set_allocation_row(
        &mut self,
        process: ProcessId,
        row: &[Units],
    ) -> Result<(), StateError> {
        self.check_process(process)?;
        self.check_row("Allocation row", row)?;
        self.allocation[process.as_usize()].copy_from_slice(row);
        Ok(())
    }

    /// Derive Need from Max and Allocation
    ///
    /// Cells where the allocation exceeds the declared maximum are clamped
    /// to zero and reported. Returns the number of clamped cells.
    pub fn compute_need(&mut self) -> usize {
        let mut clamped = 0;

        for (i, (max_row, alloc_row)) in self.max.iter().zip(&self.allocation).enumerate() {
            for (j, (&max, &held)) in max_row.iter().zip(alloc_row).enumerate() {
                if held > max {
                    warn!(
                        process = %ProcessId(i),
                        resource = %ResourceId(j),
                        held,
                        max,
                        "allocation exceeds declared maximum, need clamped to 0"
                    );
                    clamped += 1;
                }
                self.need[i][j] = max.saturating_sub(held);
            }
        }

        clamped
    }

    fn check_process(&self, process: ProcessId) -> Result<(), StateError> {
        if process.as_usize() >= self.num_processes {
            return Err(StateError::ProcessOutOfRange {
                process,
                num_processes: self.num_processes,
            });
        }
        Ok(())
    }

    fn check_row(&self, what: &'static str, row: &[Units]) -> Result<(), StateError> {
        if row.len() != self.num_resources {
            return Err(StateError::DimensionMismatch {
                what,
                expected: self.num_resources,
                actual: row.len(),
            });
        }
        Ok(())
    }
}
