//! Matches between policies.

use rust_othello::{
    random_playout, Action, Board, Color, GameRng, Match, MatchConfig, MatchError, MovePolicy,
    RandomPolicy, Square,
};

/// Always plays the first legal move in row-major order.
struct FirstMove;

impl MovePolicy for FirstMove {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Square> {
        board.valid_moves(color).iter().next().copied()
    }

    fn name(&self) -> &str {
        "first"
    }
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_random_games_on_every_size() {
    for (i, size) in [4, 6, 8, 10].into_iter().enumerate() {
        let config = MatchConfig::new().with_board_size(size);
        let seed = i as u64;
        let mut m = Match::new(config, RandomPolicy::new(seed), RandomPolicy::new(seed + 100)).unwrap();

        let result = m.play().unwrap();

        assert!(result.finished, "size {size}");
        assert!(result.plies <= size * size - 4);
        assert_eq!(result.score.total(), 4 + result.plies);
        assert_eq!(result.winner, m.board().winner());
    }
}

#[test]
fn test_deterministic_match() {
    let run = || {
        let mut m = Match::new(MatchConfig::new(), FirstMove, FirstMove).unwrap();
        m.play().unwrap();
        m.board().clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_same_seeds_same_game() {
    let play = |seed: u64| {
        let mut m = Match::new(
            MatchConfig::new().with_board_size(6),
            RandomPolicy::new(seed),
            RandomPolicy::new(seed ^ 0xff),
        )
        .unwrap();
        m.play().unwrap();
        m.log().clone()
    };
    assert_eq!(play(11), play(11));
}

#[test]
fn test_log_alternates_colors() {
    let mut m = Match::new(
        MatchConfig::new().with_board_size(6),
        RandomPolicy::new(21),
        FirstMove,
    )
    .unwrap();
    m.play().unwrap();

    let log = m.log();
    for (i, record) in log.iter().enumerate() {
        assert_eq!(record.sequence as usize, i);
        let expected = if i % 2 == 0 { Color::Black } else { Color::White };
        assert_eq!(record.color, expected, "record {i}");
        if record.is_pass() {
            assert_eq!(record.flipped, 0);
        } else {
            assert!(record.flipped > 0);
        }
    }
    let placements = log.iter().filter(|r| matches!(r.action, Action::Place(_))).count();
    assert_eq!(placements, m.plies());
}

// =============================================================================
// Contract Violations
// =============================================================================

#[test]
fn test_illegal_policy_reports_error() {
    let occupied = |_: &Board, _: Color| Some(Square::new(3, 3));
    let mut m = Match::new(MatchConfig::new(), occupied, RandomPolicy::new(0)).unwrap();

    let err = m.play().unwrap_err();

    assert_eq!(
        err,
        MatchError::PolicyIllegalMove {
            color: Color::Black,
            square: Square::new(3, 3)
        }
    );
    assert_eq!(err.to_string(), "Black policy chose illegal move d4");
}

#[test]
fn test_invalid_config() {
    let result = Match::new(MatchConfig::new().with_board_size(3), FirstMove, FirstMove);
    assert!(result.is_err());
}

// =============================================================================
// Playouts
// =============================================================================

#[test]
fn test_playout_from_midgame() {
    let mut board = Board::new(8).unwrap();
    board.make_move(2, 3, Color::Black).unwrap();
    let snapshot = board.copy();

    let mut rng = GameRng::new(77);
    let a = random_playout(&board, &mut rng);
    let b = random_playout(&board, &mut rng);

    assert!(a.is_game_over());
    assert!(b.is_game_over());
    assert_eq!(board, snapshot);
}

#[test]
fn test_log_serialization() {
    let mut m = Match::new(
        MatchConfig::new().with_board_size(4),
        RandomPolicy::new(5),
        RandomPolicy::new(6),
    )
    .unwrap();
    m.play().unwrap();

    let json = serde_json::to_string(m.log()).unwrap();
    let restored: im::Vector<rust_othello::MoveRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, m.log());
}
