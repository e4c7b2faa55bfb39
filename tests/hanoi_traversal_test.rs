//! Tests for the iterative traversal against the recursive definition.

use strictly_hanoi::{
    HanoiInvariants, InvariantSet, MoveEvent, Outcome, PegId, Puzzle, RingCount, expected_moves,
    solve,
};

/// The textbook recursive solution, used as the reference ordering.
fn recursive(ring: u8, from: PegId, spare: PegId, to: PegId, out: &mut Vec<MoveEvent>) {
    if ring > 0 {
        recursive(ring - 1, from, to, spare, out);
    }
    out.push(MoveEvent::new(ring, from, to));
    if ring > 0 {
        recursive(ring - 1, spare, from, to, out);
    }
}

fn reference(rings: u8) -> Vec<MoveEvent> {
    let mut out = Vec::new();
    if let Some(top) = rings.checked_sub(1) {
        recursive(top, PegId::Start, PegId::Middle, PegId::End, &mut out);
    }
    out
}

fn count(rings: u8) -> RingCount {
    RingCount::new(u64::from(rings)).expect("valid count")
}

fn iterative(rings: u8) -> Vec<MoveEvent> {
    Puzzle::new(count(rings))
        .collect::<Result<Vec<_>, _>>()
        .expect("legal traversal")
}

#[test]
fn test_matches_recursive_order() {
    for rings in 1..=12 {
        assert_eq!(iterative(rings), reference(rings), "{rings} rings");
    }
}

#[test]
fn test_move_count_is_two_to_the_n_minus_one() {
    for rings in 1..=14 {
        let moves = iterative(rings).len() as u64;
        assert_eq!(moves, expected_moves(rings));
        assert_eq!(moves, (1u64 << rings) - 1);
    }
}

#[test]
fn test_deterministic_across_runs() {
    assert_eq!(iterative(9), iterative(9));
}

#[test]
fn test_single_ring() {
    assert_eq!(
        iterative(1),
        vec![MoveEvent::new(0, PegId::Start, PegId::End)]
    );
}

#[test]
fn test_three_rings_end_on_destination() {
    let solution = Puzzle::new(count(3)).solve(|_| {}).expect("solves");
    assert_eq!(*solution.moves(), 7);

    let pegs = solution.pegs();
    assert_eq!(pegs[0].peg, PegId::Start);
    assert!(pegs[0].top_down.is_empty());
    assert!(pegs[1].top_down.is_empty());
    assert_eq!(pegs[2].name, "C");
    assert_eq!(pegs[2].top_down, vec![0, 1, 2]);
}

#[test]
fn test_all_rings_end_on_destination() {
    for rings in 1..=10 {
        let solution = Puzzle::new(count(rings)).solve(|_| {}).expect("solves");
        let expected: Vec<u8> = (0..rings).collect();
        assert_eq!(solution.pegs()[2].top_down, expected);
    }
}

#[test]
fn test_pegs_stay_descending_after_every_move() {
    let mut puzzle = Puzzle::new(count(7));
    while let Some(event) = puzzle.next() {
        event.expect("legal move");
        assert!(HanoiInvariants::check_all(&puzzle).is_ok());
    }
}

#[test]
fn test_every_move_takes_the_top_ring() {
    // Replaying the events on plain stacks never pops the wrong ring.
    let mut stacks: [Vec<u8>; 3] = [(0..6).rev().collect(), Vec::new(), Vec::new()];
    for event in iterative(6) {
        let ring = stacks[event.from.index()].pop().expect("ring on source");
        assert_eq!(ring, event.ring);
        if let Some(&top) = stacks[event.to.index()].last() {
            assert!(top > ring, "ring {ring} placed on ring {top}");
        }
        stacks[event.to.index()].push(ring);
    }
    assert_eq!(stacks[2], vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn test_zero_rings_do_not_run_engine() {
    let mut seen = 0;
    let outcome = solve(count(0), &Puzzle::default_names(), |_| seen += 1).expect("ok");
    assert_eq!(outcome, Outcome::NothingToSolve);
    assert_eq!(outcome.moves(), 0);
    assert!(outcome.solution().is_none());
    assert_eq!(seen, 0);
}

#[test]
fn test_solve_streams_events_in_order() {
    let mut streamed = Vec::new();
    let outcome = solve(count(5), &Puzzle::default_names(), |e| streamed.push(*e))
        .expect("solves");
    assert_eq!(outcome.moves(), 31);
    assert_eq!(streamed, reference(5));
}
