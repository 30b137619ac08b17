//! Kani Formal Verification Proofs

#![cfg(kani)]

use super::state::ResourceState;
use super::types::*;

const BOUND: Units = 16;

fn any_bounded() -> Units {
    let v: Units = kani::any();
    kani::assume(v <= BOUND);
    v
}

/// Symbolic 2 x 2 state with small counts
fn any_state() -> ResourceState {
    let mut state = ResourceState::new(2, 2);
    state.set_available(&[any_bounded(), any_bounded()]).unwrap();
    for i in 0..2 {
        let p = ProcessId(i);
        state.set_max_row(p, &[any_bounded(), any_bounded()]).unwrap();
        state.set_allocation_row(p, &[any_bounded(), any_bounded()]).unwrap();
    }
    state.compute_need();
    state
}

/// Verify Need is max - allocation clamped at zero
#[kani::proof]
fn proof_verify_need_invariant() {
    let state = any_state();

    for i in 0..2 {
        for j in 0..2 {
            let max = state.max()[i][j];
            let held = state.allocation()[i][j];
            let expected = if max > held { max - held } else { 0 };
            kani::assert(state.need()[i][j] == expected, "need must be clamped difference");
        }
    }
}

/// Verify a granted request conserves total instances
///
/// ```text
/// allocation'[p][j] = allocation[p][j] + req[j]
/// available'[j]     = available[j] - req[j]
/// ```
#[kani::proof]
fn proof_verify_apply_conservation() {
    let mut state = any_state();
    let totals = state.total_instances();
    let before = state.clone();

    let p = ProcessId(if kani::any() { 0 } else { 1 });
    let req = [any_bounded(), any_bounded()];

    if state.apply_request(p, &req).is_ok() {
        kani::assert(state.total_instances() == totals, "totals must be conserved");
        for j in 0..2 {
            kani::assert(
                state.allocation()[p.as_usize()][j] == before.allocation()[p.as_usize()][j] + req[j],
                "allocation grows by the request",
            );
            kani::assert(
                state.available()[j] == before.available()[j] - req[j],
                "available shrinks by the request",
            );
        }
    } else {
        kani::assert(state == before, "rejected request must not mutate");
    }
}

/// Verify the verdict does not depend on scan order
#[kani::proof]
fn proof_verify_scan_order_independence() {
    let state = any_state();

    let forward = state.is_safe_with_order(&[ProcessId(0), ProcessId(1)]);
    let backward = state.is_safe_with_order(&[ProcessId(1), ProcessId(0)]);

    kani::assert(forward == backward, "scan order must not change verdict");
    kani::assert(forward == Ok(state.is_safe()), "default scan agrees");
}

/// Verify can_request and check_request agree and are pure
#[kani::proof]
fn proof_verify_can_request_pure() {
    let state = any_state();
    let before = state.clone();

    let p = ProcessId(if kani::any() { 0 } else { 1 });
    let req = [any_bounded(), any_bounded()];

    let allowed = state.can_request(p, &req);
    let expected = (0..2).all(|j| {
        req[j] <= state.need()[p.as_usize()][j] && req[j] <= state.available()[j]
    });

    kani::assert(allowed == expected, "can_request matches its definition");
    kani::assert(state == before, "can_request must not mutate");
}
