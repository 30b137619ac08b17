//! Property Tests - Algebraic Laws of ResourceState
//!
//! States come from a fixed-seed `StdRng` so failures reproduce.

use bankers_core::{ProcessId, ResourceState, Units};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform in `0..=bound`
fn below(rng: &mut StdRng, bound: Units) -> Units {
    rng.gen_range(0..=bound)
}

fn random_state(rng: &mut StdRng, processes: usize, resources: usize) -> ResourceState {
    let mut state = ResourceState::new(processes, resources);
    let available: Vec<Units> = (0..resources).map(|_| below(rng, 4)).collect();
    state.set_available(&available).unwrap();

    for i in 0..processes {
        let max: Vec<Units> = (0..resources).map(|_| below(rng, 6)).collect();
        let alloc: Vec<Units> = max.iter().map(|&m| below(rng, m)).collect();
        state.set_max_row(ProcessId(i), &max).unwrap();
        state.set_allocation_row(ProcessId(i), &alloc).unwrap();
    }

    state.compute_need();
    state
}

/// All permutations of `0..n` (Heap's algorithm)
fn permutations(n: usize) -> Vec<Vec<ProcessId>> {
    fn heap(k: usize, items: &mut Vec<ProcessId>, out: &mut Vec<Vec<ProcessId>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            let swap = if k % 2 == 0 { i } else { 0 };
            items.swap(swap, k - 1);
            heap(k - 1, items, out);
        }
    }

    let mut items: Vec<ProcessId> = (0..n).map(ProcessId).collect();
    let mut out = Vec::new();
    heap(n, &mut items, &mut out);
    out
}

#[test]
fn test_permutation_helper() {
    let mut all = permutations(4);
    assert_eq!(all.len(), 24);
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 24);
    assert_eq!(permutations(1), vec![vec![ProcessId(0)]]);
}

#[test]
fn test_verdict_is_scan_order_independent() {
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
    let orders = permutations(4);
    let mut safe_seen = 0;

    for _ in 0..200 {
        let state = random_state(&mut rng, 4, 3);
        let expected = state.is_safe();
        safe_seen += usize::from(expected);

        for order in &orders {
            assert_eq!(state.is_safe_with_order(order), Ok(expected), "order {order:?}");
        }
    }

    // The generator must exercise both verdicts
    assert!(safe_seen > 0 && safe_seen < 200);
}

#[test]
fn test_need_invariant() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let mut state = ResourceState::new(3, 3);
        for i in 0..3 {
            let max: Vec<Units> = (0..3).map(|_| below(&mut rng, 5)).collect();
            // Allocation may exceed max here
            let alloc: Vec<Units> = (0..3).map(|_| below(&mut rng, 5)).collect();
            state.set_max_row(ProcessId(i), &max).unwrap();
            state.set_allocation_row(ProcessId(i), &alloc).unwrap();
        }
        state.compute_need();

        for i in 0..3 {
            for j in 0..3 {
                let expected = state.max()[i][j].saturating_sub(state.allocation()[i][j]);
                assert_eq!(state.need()[i][j], expected);
            }
        }
    }
}

#[test]
fn test_apply_request_conservation() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut applied = 0;

    for _ in 0..300 {
        let mut state = random_state(&mut rng, 3, 3);
        let before = state.clone();
        let totals = state.total_instances();

        let pid = ProcessId(rng.gen_range(0..3));
        let req: Vec<Units> = (0..3).map(|_| below(&mut rng, 3)).collect();

        let allowed = state.can_request(pid, &req);
        assert_eq!(state, before, "can_request must not mutate");

        match state.apply_request(pid, &req) {
            Ok(()) => {
                assert!(allowed);
                applied += 1;
                let i = pid.as_usize();
                for j in 0..3 {
                    assert_eq!(state.allocation()[i][j], before.allocation()[i][j] + req[j]);
                    assert_eq!(state.available()[j], before.available()[j] - req[j]);
                    assert_eq!(state.need()[i][j], before.need()[i][j] - req[j]);
                }
                assert_eq!(state.total_instances(), totals);
            }
            Err(_) => {
                assert!(!allowed);
                assert_eq!(state, before);
            }
        }
    }

    assert!(applied > 0);
}

#[test]
fn test_can_request_definition() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..300 {
        let state = random_state(&mut rng, 3, 2);
        let pid = ProcessId(rng.gen_range(0..4));
        let req: Vec<Units> = (0..2).map(|_| below(&mut rng, 4)).collect();

        let expected = pid.as_usize() < 3
            && (0..2).all(|j| {
                req[j] <= state.need()[pid.as_usize()][j] && req[j] <= state.available()[j]
            });

        assert_eq!(state.can_request(pid, &req), expected);
    }
}

#[test]
fn test_granted_matches_apply_request() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let state = random_state(&mut rng, 3, 3);
        let pid = ProcessId(rng.gen_range(0..3));
        let req: Vec<Units> = (0..3).map(|_| below(&mut rng, 2)).collect();

        let mut in_place = state.clone();
        let applied = in_place.apply_request(pid, &req);
        let copied = state.granted(pid, &req);

        match (applied, copied) {
            (Ok(()), Ok(next)) => assert_eq!(next, in_place),
            (Err(a), Err(b)) => assert_eq!(a, b),
            other => panic!("granted and apply_request disagree: {other:?}"),
        }
    }
}

#[test]
fn test_is_safe_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..50 {
        let state = random_state(&mut rng, 5, 3);
        let before = state.clone();
        let first = state.is_safe();
        assert_eq!(state.is_safe(), first);
        assert_eq!(state.safe_sequence().is_some(), first);
        assert_eq!(state, before);
    }
}

#[test]
fn test_safe_sequence_is_a_witness() {
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..100 {
        let state = random_state(&mut rng, 4, 3);
        let Some(sequence) = state.safe_sequence() else {
            continue;
        };

        let mut work: Vec<u64> = state.available().iter().map(|&a| u64::from(a)).collect();
        for pid in sequence {
            let i = pid.as_usize();
            for j in 0..3 {
                assert!(u64::from(state.need()[i][j]) <= work[j]);
            }
            for j in 0..3 {
                work[j] += u64::from(state.allocation()[i][j]);
            }
        }
    }
}
