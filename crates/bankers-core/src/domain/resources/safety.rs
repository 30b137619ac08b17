//! Safety Check - Fixed-Point Reachability
//!
//! # Algorithm
//!
//! ```text
//! work   := available
//! finish := [false; P]
//! repeat
//!     for each unfinished i with need[i] <= work (component-wise):
//!         work      += allocation[i]
//!         finish[i] := true
//! until a full pass finishes nobody
//! safe   <=> all finish[i]
//! ```
//!
//! Finishing a process only ever grows `work`, so the set of processes that
//! eventually finish is the same for every scan order. Only the witnessed
//! completion order depends on it.
//!
//! Worst case O(P² × R): at most P passes, each scanning P rows of R cells.

use super::state::ResourceState;
use super::types::{ProcessId, StateError};

impl ResourceState {
    /// Whether every process can run to completion from this state
    pub fn is_safe(&self) -> bool {
        self.safe_sequence().is_some()
    }

    /// Virtual completion order found by an index-order scan
    ///
    /// Returns `None` when the state is unsafe.
    pub fn safe_sequence(&self) -> Option<Vec<ProcessId>> {
        let order: Vec<usize> = (0..self.num_processes).collect();
        let sequence = self.scan_to_fixed_point(&order);
        (sequence.len() == self.num_processes).then_some(sequence)
    }

    /// Run the safety check visiting processes in `order` within each pass
    ///
    /// # Errors
    /// - `InvalidScanOrder`: `order` is not a permutation of all processes
    pub fn is_safe_with_order(&self, order: &[ProcessId]) -> Result<bool, StateError> {
        let mut seen = vec![false; self.num_processes];
        let valid = order.len() == self.num_processes
            && order.iter().all(|p| match seen.get_mut(p.as_usize()) {
                Some(slot) if !*slot => {
                    *slot = true;
                    true
                }
                _ => false,
            });

        if !valid {
            return Err(StateError::InvalidScanOrder {
                num_processes: self.num_processes,
            });
        }

        let order: Vec<usize> = order.iter().map(|p| p.as_usize()).collect();
        Ok(self.scan_to_fixed_point(&order).len() == self.num_processes)
    }

    /// Returns the processes that finished, in the order they finished
    fn scan_to_fixed_point(&self, order: &[usize]) -> Vec<ProcessId> {
        // Sums of allocations may exceed Units::MAX
        let mut work: Vec<u64> = self.available.iter().map(|&a| u64::from(a)).collect();
        let mut finish = vec![false; self.num_processes];
        let mut sequence = Vec::with_capacity(self.num_processes);

        loop {
            let mut progressed = false;

            for &i in order {
                if finish[i] {
                    continue;
                }

                let fits = self.need[i]
                    .iter()
                    .zip(&work)
                    .all(|(&need, &free)| u64::from(need) <= free);

                if fits {
                    for (free, &held) in work.iter_mut().zip(&self.allocation[i]) {
                        *free += u64::from(held);
                    }
                    finish[i] = true;
                    sequence.push(ProcessId(i));
                    progressed = true;
                }
            }

            if !progressed {
                break;
            }
        }

        sequence
    }
}
