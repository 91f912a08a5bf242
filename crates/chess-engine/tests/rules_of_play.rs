//! End-to-end games through the public host interface.

use chess_core::{Color, Piece, PieceKind, Square};
use chess_engine::{attempt_move, new_game, piece_at, Board, Game, MoveError, MoveOutcome};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn place(board: &mut Board, kind: PieceKind, color: Color, at: Square) {
    board.set_piece(at, Some(Piece::new(kind, color, at)));
}

fn play(game: &mut Game, moves: &[((u8, u8), (u8, u8))]) -> MoveOutcome {
    let mut last = None;
    for &((fr, fc), (tr, tc)) in moves {
        let outcome = attempt_move(game, sq(fr, fc), sq(tr, tc));
        assert!(outcome.accepted, "move {}-{} rejected", sq(fr, fc), sq(tr, tc));
        last = Some(outcome);
    }
    last.expect("at least one move")
}

#[test]
fn initial_position_queries() {
    init_logging();
    let game = new_game();
    assert!(!game.is_check());
    assert!(!game.is_checkmate());

    let moves = game.legal_moves();
    assert_eq!(moves.len(), 20);
    let pawn_moves = moves
        .iter()
        .filter(|m| piece_at(&game, m.from).map(|v| v.kind) == Some(PieceKind::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
}

#[test]
fn fools_mate() {
    init_logging();
    let mut game = new_game();
    play(
        &mut game,
        &[((1, 5), (2, 5)), ((6, 4), (4, 4)), ((1, 6), (3, 6))],
    );
    assert_eq!(game.side_to_move(), Color::Black);

    let outcome = attempt_move(&mut game, sq(7, 3), sq(3, 7));
    assert_eq!(
        outcome,
        MoveOutcome {
            accepted: true,
            check: true,
            checkmate: true,
            next_player: Color::White,
        }
    );
    assert_eq!(game.side_to_move(), Color::White);
    assert!(game.is_check());
    assert!(game.is_checkmate());
    assert!(game.legal_moves().is_empty());
    assert_eq!(game.winner(), Some(Color::Black));

    let after = attempt_move(&mut game, sq(1, 0), sq(2, 0));
    assert!(!after.accepted);
    assert!(after.checkmate);
    assert_eq!(game.validate(sq(1, 0), sq(2, 0)), Err(MoveError::GameOver));
}

#[test]
fn scholars_mate() {
    init_logging();
    let mut game = new_game();
    let outcome = play(
        &mut game,
        &[
            ((1, 4), (3, 4)),
            ((6, 4), (4, 4)),
            ((0, 5), (3, 2)),
            ((7, 1), (5, 2)),
            ((0, 3), (4, 7)),
            ((7, 6), (5, 5)),
            ((4, 7), (6, 5)),
        ],
    );
    assert!(outcome.check);
    assert!(outcome.checkmate);
    assert_eq!(outcome.next_player, Color::Black);
    assert_eq!(game.winner(), Some(Color::White));
}

#[test]
fn check_that_can_be_answered() {
    init_logging();
    let mut game = new_game();
    // 1. e4 f6 2. Qh5+ can still be met by g6.
    let outcome = play(
        &mut game,
        &[((1, 4), (3, 4)), ((6, 5), (5, 5)), ((0, 3), (4, 7))],
    );
    assert!(outcome.check);
    assert!(!outcome.checkmate);
    assert!(game.is_check());
    assert!(!game.is_checkmate());
    assert!(game.is_valid_move(sq(6, 6), sq(5, 6)));
    // Moves that ignore the check are rejected.
    assert_eq!(
        game.validate(sq(6, 0), sq(5, 0)),
        Err(MoveError::SelfCheck(Color::Black))
    );
}

#[test]
fn self_check_through_vacated_line() {
    init_logging();
    let mut board = Board::empty();
    place(&mut board, PieceKind::King, Color::White, sq(0, 0));
    place(&mut board, PieceKind::Knight, Color::White, sq(1, 1));
    place(&mut board, PieceKind::Bishop, Color::Black, sq(5, 5));
    place(&mut board, PieceKind::King, Color::Black, sq(7, 7));
    let game = Game::from_board(board, Color::White).unwrap();

    assert!(!game.is_check());
    for m in [sq(3, 2), sq(2, 3), sq(3, 0), sq(0, 3)] {
        assert_eq!(game.validate(sq(1, 1), m), Err(MoveError::SelfCheck(Color::White)));
    }
    assert!(game.legal_moves_from(sq(1, 1)).is_empty());
    assert!(!game.legal_moves_from(sq(0, 0)).is_empty());
}

#[test]
fn sliders_cannot_jump() {
    init_logging();
    let mut board = Board::empty();
    place(&mut board, PieceKind::King, Color::White, sq(0, 7));
    place(&mut board, PieceKind::King, Color::Black, sq(7, 7));
    place(&mut board, PieceKind::Rook, Color::White, sq(0, 0));
    place(&mut board, PieceKind::Bishop, Color::White, sq(2, 0));
    place(&mut board, PieceKind::Queen, Color::White, sq(4, 0));
    place(&mut board, PieceKind::Pawn, Color::Black, sq(0, 3));
    place(&mut board, PieceKind::Pawn, Color::Black, sq(3, 1));
    place(&mut board, PieceKind::Pawn, Color::Black, sq(4, 2));
    let game = Game::from_board(board, Color::White).unwrap();

    assert!(game.is_valid_move(sq(0, 0), sq(0, 3)));
    assert_eq!(
        game.validate(sq(0, 0), sq(0, 5)),
        Err(MoveError::Blocked(PieceKind::Rook, sq(0, 5)))
    );
    assert!(game.is_valid_move(sq(2, 0), sq(3, 1)));
    assert!(!game.is_valid_move(sq(2, 0), sq(4, 2)));
    assert!(game.is_valid_move(sq(4, 0), sq(4, 2)));
    assert!(!game.is_valid_move(sq(4, 0), sq(4, 5)));
    assert_eq!(
        game.validate(sq(4, 0), sq(6, 1)),
        Err(MoveError::IllegalPattern(PieceKind::Queen))
    );
}

#[test]
fn pawn_double_step_rules() {
    init_logging();
    let mut game = new_game();
    assert!(game.is_valid_move(sq(1, 2), sq(3, 2)));
    play(&mut game, &[((0, 6), (2, 5)), ((6, 4), (4, 4))]);
    // A piece on the intermediate square blocks the double step.
    assert_eq!(
        game.validate(sq(1, 5), sq(3, 5)),
        Err(MoveError::Blocked(PieceKind::Pawn, sq(3, 5)))
    );

    play(&mut game, &[((1, 2), (2, 2)), ((6, 0), (5, 0))]);
    assert_eq!(
        game.validate(sq(2, 2), sq(4, 2)),
        Err(MoveError::IllegalPattern(PieceKind::Pawn))
    );
}

#[test]
fn turns_alternate_once_per_accepted_move() {
    init_logging();
    let mut game = new_game();
    let rejected = attempt_move(&mut game, sq(6, 4), sq(4, 4));
    assert!(!rejected.accepted);
    assert_eq!(game.side_to_move(), Color::White);

    let accepted = attempt_move(&mut game, sq(1, 4), sq(3, 4));
    assert_eq!(accepted.next_player, Color::Black);
    let accepted = attempt_move(&mut game, sq(6, 4), sq(4, 4));
    assert_eq!(accepted.next_player, Color::White);
}

#[test]
fn queries_are_idempotent() {
    init_logging();
    let mut game = new_game();
    play(&mut game, &[((1, 4), (3, 4)), ((6, 5), (5, 5)), ((0, 3), (4, 7))]);
    let snapshot = game.clone();
    assert_eq!(game.is_check(), game.is_check());
    assert_eq!(game.is_checkmate(), game.is_checkmate());
    assert_eq!(game.legal_moves(), game.legal_moves());
    assert_eq!(game, snapshot);
}
