//! Board-level properties: capacities, conservation, rejection.

use chain_reaction_core::{Board, Cell, MoveError, PlayerId, Position, Roster};

/// Deterministic pseudo-random coordinates for long move sequences.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 33) as usize) % bound
    }
}

#[test]
fn test_capacity_is_grid_neighbor_count() {
    for (rows, cols) in [(1, 1), (1, 2), (1, 5), (2, 2), (3, 3), (4, 7), (6, 9)] {
        let board = Board::new(rows, cols);
        for pos in board.positions() {
            let expected = [
                pos.row > 0,
                pos.col > 0,
                pos.row + 1 < rows,
                pos.col + 1 < cols,
            ]
            .into_iter()
            .filter(|&present| present)
            .count() as u32;
            assert_eq!(
                board.cell(pos).map(Cell::capacity),
                Some(expected),
                "capacity at {pos} on {rows}x{cols}"
            );
        }
    }
}

#[test]
fn test_standard_board_capacities() {
    let board = Board::new(5, 6);
    let count = |cap: u32| board.cells().iter().filter(|c| c.capacity() == cap).count();
    assert_eq!(count(2), 4);
    assert_eq!(count(3), 2 * (5 - 2) + 2 * (6 - 2));
    assert_eq!(count(4), (5 - 2) * (6 - 2));
}

#[test]
fn test_every_placement_adds_exactly_one_token() {
    let mut board = Board::new(4, 5);
    let mut roster = Roster::new(3);
    let mut rng = Lcg(7);
    let mut placed = 0;

    for turn in 0..400 {
        let player = PlayerId((turn % 3) as u8);
        let pos = Position::new(rng.next(4), rng.next(5));
        let before = board.total_tokens();
        match board.place(pos, player, &mut roster) {
            Ok(_) => {
                placed += 1;
                assert_eq!(board.total_tokens(), before + 1);
            }
            Err(MoveError::CellOwned { .. }) => assert_eq!(board.total_tokens(), before),
            Err(other) => panic!("unexpected rejection: {other}"),
        }
        assert_eq!(roster.total_tokens(), board.total_tokens());
        for record in roster.records() {
            assert_eq!(*record.tokens(), board.tokens_owned_by(*record.id()));
        }
    }
    assert_eq!(board.total_tokens(), placed);
}

#[test]
fn test_rejected_move_is_a_no_op() {
    let mut board = Board::new(3, 3);
    let mut roster = Roster::new(2);
    board.place(Position::new(1, 1), PlayerId(0), &mut roster).unwrap();
    board.place(Position::new(0, 0), PlayerId(1), &mut roster).unwrap();
    let (board_before, roster_before) = (board.clone(), roster.clone());

    assert!(board.place(Position::new(1, 1), PlayerId(1), &mut roster).is_err());
    assert!(board.place(Position::new(0, 0), PlayerId(0), &mut roster).is_err());
    assert!(board.place(Position::new(3, 0), PlayerId(0), &mut roster).is_err());
    assert!(board.place(Position::new(0, 9), PlayerId(0), &mut roster).is_err());

    assert_eq!(board, board_before);
    assert_eq!(roster, roster_before);
}

#[test]
fn test_chain_visits_neighbors_depth_first() {
    // Two corners primed, then the edge between them is triggered.
    let mut board = Board::new(2, 3);
    let mut roster = Roster::new(2);
    let p0 = PlayerId(0);
    board.place(Position::new(0, 0), p0, &mut roster).unwrap();
    board.place(Position::new(0, 2), p0, &mut roster).unwrap();
    board.place(Position::new(1, 1), PlayerId(1), &mut roster).unwrap();
    board.place(Position::new(0, 1), p0, &mut roster).unwrap();
    board.place(Position::new(0, 1), p0, &mut roster).unwrap();
    let placement = board.place(Position::new(0, 1), p0, &mut roster).unwrap();

    // (0,1) bursts into (0,0), which bursts into (1,0) and back into (0,1).
    // (1,1) is captured next; with the second player wiped out, (0,2) stays at capacity.
    assert_eq!(placement.explosions(), &2);
    assert_eq!(placement.captured(), &1);
    let tokens: Vec<_> = board.cells().iter().map(|c| c.tokens()).collect();
    assert_eq!(tokens, vec![0, 1, 2, 1, 2, 0]);
    assert!(board.cell(Position::new(0, 2)).is_some_and(|c| c.is_critical()));
    assert!(board.cells().iter().all(|c| c.owner() != Some(PlayerId(1))));
}
