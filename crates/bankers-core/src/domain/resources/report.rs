//! State Reporting
//!
//! Borrowing [`Display`](fmt::Display) adapters. Nothing is rendered until
//! the adapter is formatted, and it can be formatted any number of times.

use super::state::ResourceState;
use super::types::{Matrix, Units};
use std::fmt;

/// Full state rendering: dimensions, Available, Max, Allocation, Need
#[derive(Debug, Clone, Copy)]
pub struct StateReport<'a> {
    state: &'a ResourceState,
}

/// Need matrix preceded by a caller-supplied header line
#[derive(Debug, Clone, Copy)]
pub struct NeedReport<'a> {
    state: &'a ResourceState,
    header: &'a str,
}

impl ResourceState {
    /// Render the complete state
    pub fn report(&self) -> StateReport<'_> {
        StateReport { state: self }
    }

    /// Render only the Need matrix under `header`
    pub fn need_report<'a>(&'a self, header: &'a str) -> NeedReport<'a> {
        NeedReport { state: self, header }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[Units]) -> fmt::Result {
    for (j, value) in row.iter().enumerate() {
        if j > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", value)?;
    }
    writeln!(f)
}

fn write_matrix(f: &mut fmt::Formatter<'_>, header: &str, matrix: &Matrix) -> fmt::Result {
    writeln!(f, "{}", header)?;
    matrix.iter().try_for_each(|row| write_row(f, row))
}

impl fmt::Display for StateReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state;
        writeln!(f, "Resources: {}, Processes: {}", s.num_resources, s.num_processes)?;
        writeln!(f, "Available")?;
        write_row(f, &s.available)?;
        write_matrix(f, "Max", &s.max)?;
        write_matrix(f, "Allocation", &s.allocation)?;
        write_matrix(f, "Need", &s.need)
    }
}

impl fmt::Display for NeedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_matrix(f, self.header, &self.state.need)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProcessId;

    fn small() -> ResourceState {
        let mut state = ResourceState::new(2, 2);
        state.set_available(&[1, 2]).unwrap();
        state.set_max_row(ProcessId(0), &[3, 3]).unwrap();
        state.set_max_row(ProcessId(1), &[1, 4]).unwrap();
        state.set_allocation_row(ProcessId(0), &[1, 0]).unwrap();
        state.set_allocation_row(ProcessId(1), &[0, 2]).unwrap();
        state.compute_need();
        state
    }

    #[test]
    fn test_need_report() {
        let state = small();
        assert_eq!(state.need_report("New Need").to_string(), "New Need\n2 3\n1 2\n");
    }

    #[test]
    fn test_full_report() {
        let expected = "\
Resources: 2, Processes: 2
Available
1 2
Max
3 3
1 4
Allocation
1 0
0 2
Need
2 3
1 2
";
        assert_eq!(small().report().to_string(), expected);
    }

    #[test]
    fn test_report_is_restartable() {
        let state = small();
        let report = state.report();
        assert_eq!(report.to_string(), report.to_string());
    }

    #[test]
    fn test_report_without_resources() {
        let state = ResourceState::new(1, 0);
        assert_eq!(state.need_report("Need").to_string(), "Need\n\n");
    }
}
