//! Request Validation and Application

use super::state::ResourceState;
use super::types::{ProcessId, RequestError, ResourceId, Units};
use tracing::debug;

impl ResourceState {
    /// Check a request against the process's Need and the Available vector
    ///
    /// Pure: never mutates the state.
    ///
    /// # Errors
    /// - `ProcessOutOfRange`: no such process
    /// - `DimensionMismatch`: `amounts.len() != num_resources`
    /// - `ExceedsNeed`: first resource where the request exceeds remaining need
    /// - `ExceedsAvailable`: first resource where the request exceeds free instances
    pub fn check_request(&self, process: ProcessId, amounts: &[Units]) -> Result<(), RequestError> {
        if process.as_usize() >= self.num_processes {
            return Err(RequestError::ProcessOutOfRange {
                process,
                num_processes: self.num_processes,
            });
        }

        if amounts.len() != self.num_resources {
            return Err(RequestError::DimensionMismatch {
                expected: self.num_resources,
                actual: amounts.len(),
            });
        }

        let need = &self.need[process.as_usize()];
        for (j, &requested) in amounts.iter().enumerate() {
            if requested > need[j] {
                return Err(RequestError::ExceedsNeed {
                    resource: ResourceId(j),
                    requested,
                    need: need[j],
                });
            }
            if requested > self.available[j] {
                return Err(RequestError::ExceedsAvailable {
                    resource: ResourceId(j),
                    requested,
                    available: self.available[j],
                });
            }
        }

        Ok(())
    }

    /// Whether `amounts` may be granted to `process` right now
    #[inline]
    pub fn can_request(&self, process: ProcessId, amounts: &[Units]) -> bool {
        self.check_request(process, amounts).is_ok()
    }

    /// Move `amounts` from Available into the process's Allocation
    ///
    /// The request is validated first; on error the state is untouched.
    ///
    /// # Errors
    /// Same as [`check_request`](Self::check_request).
    pub fn apply_request(&mut self, process: ProcessId, amounts: &[Units]) -> Result<(), RequestError> {
        self.check_request(process, amounts)?;

        let i = process.as_usize();
        for (j, &requested) in amounts.iter().enumerate() {
            self.allocation[i][j] += requested;
            self.available[j] -= requested;
            self.need[i][j] = self.need[i][j].saturating_sub(requested);
        }

        debug!(%process, ?amounts, available = ?self.available, "request applied");
        Ok(())
    }

    /// Copy of this state with the request applied
    ///
    /// `self` is left as it was, so a speculative grant never needs a rollback.
    ///
    /// # Errors
    /// Same as [`check_request`](Self::check_request).
    pub fn granted(&self, process: ProcessId, amounts: &[Units]) -> Result<Self, RequestError> {
        self.check_request(process, amounts)?;
        let mut next = self.clone();
        next.apply_request(process, amounts)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> ResourceState {
        let mut state = ResourceState::new(2, 2);
        state.set_available(&[2, 1]).unwrap();
        state.set_max_row(ProcessId(0), &[3, 2]).unwrap();
        state.set_max_row(ProcessId(1), &[1, 1]).unwrap();
        state.set_allocation_row(ProcessId(0), &[1, 0]).unwrap();
        state.set_allocation_row(ProcessId(1), &[0, 1]).unwrap();
        state.compute_need();
        state
    }

    #[test]
    fn test_check_request_reasons() {
        let state = two_by_two();

        assert_eq!(state.check_request(ProcessId(0), &[2, 1]), Ok(()));
        assert_eq!(
            state.check_request(ProcessId(5), &[0, 0]),
            Err(RequestError::ProcessOutOfRange { process: ProcessId(5), num_processes: 2 })
        );
        assert_eq!(
            state.check_request(ProcessId(0), &[1]),
            Err(RequestError::DimensionMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(state.check_request(ProcessId(1), &[1, 0]), Ok(()));
        assert_eq!(
            state.check_request(ProcessId(0), &[3, 0]),
            Err(RequestError::ExceedsNeed { resource: ResourceId(0), requested: 3, need: 2 })
        );
        assert_eq!(
            state.check_request(ProcessId(1), &[0, 1]),
            Err(RequestError::ExceedsNeed { resource: ResourceId(1), requested: 1, need: 0 })
        );
    }

    #[test]
    fn test_exceeds_available() {
        let mut state = two_by_two();
        state.set_available(&[1, 1]).unwrap();
        assert_eq!(
            state.check_request(ProcessId(0), &[2, 0]),
            Err(RequestError::ExceedsAvailable { resource: ResourceId(0), requested: 2, available: 1 })
        );
        assert!(!state.can_request(ProcessId(0), &[2, 0]));
    }

    #[test]
    fn test_apply_request_moves_units() {
        let mut state = two_by_two();
        let totals = state.total_instances();

        state.apply_request(ProcessId(0), &[1, 1]).unwrap();

        assert_eq!(state.allocation()[0], vec![2, 1]);
        assert_eq!(state.available(), &[1, 0]);
        assert_eq!(state.need()[0], vec![1, 1]);
        assert_eq!(state.total_instances(), totals);
    }

    #[test]
    fn test_apply_invalid_request_leaves_state() {
        let mut state = two_by_two();
        let before = state.clone();

        assert!(state.apply_request(ProcessId(0), &[3, 0]).is_err());
        assert!(state.apply_request(ProcessId(9), &[0, 0]).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_granted_returns_copy() {
        let state = two_by_two();
        let next = state.granted(ProcessId(1), &[1, 0]).unwrap();

        assert_eq!(state, two_by_two());
        assert_eq!(next.available(), &[1, 1]);
        assert_eq!(next.need()[1], vec![0, 0]);
    }

    #[test]
    fn test_zero_request_is_valid() {
        let state = two_by_two();
        assert!(state.can_request(ProcessId(1), &[0, 0]));
        assert_eq!(state.granted(ProcessId(1), &[0, 0]).unwrap(), state);
    }
}
