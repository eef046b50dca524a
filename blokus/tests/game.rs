//! Players, minting, and the turn loop.

use blokus::{
    game::EndRule, BoardGrid, Piece, PieceFactory, Player, PlayerId, ShapeCatalog, TurnEngine,
};

fn pid(id: u8) -> PlayerId {
    PlayerId::new(id).unwrap()
}

/// A catalog with a single 1x1 piece type.
fn unit_catalog() -> ShapeCatalog {
    ShapeCatalog::parse("1\n0 1 1\no\n").unwrap()
}

#[test]
fn player_id_zero_is_rejected() {
    assert!(PlayerId::new(0).is_err());
    assert_eq!(pid(3).get(), 3);
}

#[test]
fn minted_ids_are_monotonic_across_players() {
    let catalog = ShapeCatalog::standard();
    let mut factory = PieceFactory::new(&catalog);
    let mut first = Player::new(pid(1));
    let mut second = Player::new(pid(2));
    first.init_pieces(&mut factory).unwrap();
    second.init_pieces(&mut factory).unwrap();

    assert_eq!(first.piece(0).unwrap().id(), 1);
    assert_eq!(first.piece(20).unwrap().id(), 21);
    assert_eq!(second.piece(0).unwrap().id(), 22);
    assert_eq!(second.piece(20).unwrap().id(), 42);
    assert_eq!(factory.next_id(), 43);
}

#[test]
fn init_pieces_fills_every_slot() {
    let catalog = ShapeCatalog::standard();
    let mut factory = PieceFactory::new(&catalog);
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();

    assert_eq!(player.num_pieces(), catalog.num_types());
    assert_eq!(player.unused_slots().count(), catalog.num_types());
    assert!(player.has_unused());
    for (type_id, shape) in catalog.iter() {
        let piece = player.piece(type_id).unwrap();
        assert_eq!(piece.owner(), pid(1));
        assert_eq!(piece.shape(), shape);
    }
}

#[test]
fn successful_placement_marks_the_slot_used() {
    let catalog = unit_catalog();
    let mut factory = PieceFactory::new(&catalog);
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();
    let mut board = BoardGrid::default();

    assert!(player.is_unused(0));
    assert_eq!(player.attempt_place(&mut board, 0, (3, 3)), Ok(true));
    assert!(!player.is_unused(0));
    assert!(!player.has_unused());

    // A used slot is refused without touching the board.
    assert_eq!(player.attempt_place(&mut board, 0, (5, 5)), Ok(false));
    assert_eq!(board.get((5, 5)).unwrap(), None);
}

#[test]
fn rejected_placement_keeps_the_slot_unused() {
    let catalog = ShapeCatalog::parse("2\n0 1 1\no\n1 1 1\no\n").unwrap();
    let mut factory = PieceFactory::new(&catalog);
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();
    let mut board = BoardGrid::default();

    assert_eq!(player.attempt_place(&mut board, 0, (0, 0)), Ok(true));
    assert_eq!(player.attempt_place(&mut board, 1, (0, 0)), Ok(false));
    assert!(player.is_unused(1));
    assert_eq!(player.unused_slots().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn slot_out_of_range_is_an_error() {
    let catalog = unit_catalog();
    let mut factory = PieceFactory::new(&catalog);
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();
    let mut board = BoardGrid::default();

    let err = player.attempt_place(&mut board, 9, (0, 0)).unwrap_err();
    assert_eq!(err.slot(), 9);
    assert_eq!(err.num_slots(), 1);
    assert!(player.rotate_piece(9).is_err());
    assert!(player.piece(9).is_err());
}

#[test]
fn rotating_a_slot_turns_the_piece_in_place() {
    let catalog = ShapeCatalog::parse("1\n0 2 3\nooo\no..\n").unwrap();
    let mut factory = PieceFactory::new(&catalog);
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();

    player.rotate_piece(0).unwrap();
    let shape = player.piece(0).unwrap().shape();
    assert_eq!((shape.height(), shape.width()), (3, 2));
    assert_eq!(shape.count_occupied(), 4);
}

#[test]
fn duplicate_player_ids_are_rejected() {
    let mut engine = TurnEngine::new(BoardGrid::default());
    engine.add_player(Player::new(pid(1))).unwrap();
    let err = engine.add_player(Player::new(pid(1))).unwrap_err();
    assert_eq!(err.player().id(), pid(1));
    let reclaimed = err.into_player();
    assert_eq!(reclaimed.id(), pid(1));

    engine.add_player(Player::new(pid(2))).unwrap();
    assert_eq!(engine.num_players(), 2);
}

#[test]
fn turn_advances_only_on_success() {
    let catalog = unit_catalog();
    let mut factory = PieceFactory::new(&catalog);
    let mut engine = TurnEngine::new(BoardGrid::default());
    for id in 1..=2 {
        let mut player = Player::new(pid(id));
        player.init_pieces(&mut factory).unwrap();
        engine.add_player(player).unwrap();
    }

    assert_eq!(engine.current().id(), pid(1));
    assert_eq!(engine.try_place(0, (0, 0)), Ok(true));
    assert_eq!(engine.current().id(), pid(2));
    // An occupied target is rejected and the turn stays put.
    assert_eq!(engine.try_place(0, (0, 0)), Ok(false));
    assert_eq!(engine.current().id(), pid(2));
    assert_eq!(engine.try_place(0, (1, 1)), Ok(true));
    // The order wraps around.
    assert_eq!(engine.current().id(), pid(1));
}

#[test]
fn pass_forfeits_the_turn() {
    let mut engine = TurnEngine::new(BoardGrid::default());
    engine.add_player(Player::new(pid(1))).unwrap();
    engine.add_player(Player::new(pid(2))).unwrap();

    assert_eq!(engine.current().id(), pid(1));
    engine.pass();
    assert_eq!(engine.current().id(), pid(2));
    engine.pass();
    assert_eq!(engine.current().id(), pid(1));
}

#[test]
fn end_rule_is_a_pluggable_seam() {
    struct FirstCellCovered;
    impl EndRule for FirstCellCovered {
        fn is_end(&self, board: &BoardGrid, _players: &[Player]) -> bool {
            board.get((0, 0)).map(|cell| cell.is_some()).unwrap_or(false)
        }
    }

    let catalog = unit_catalog();
    let mut factory = PieceFactory::new(&catalog);
    let mut engine = TurnEngine::new(BoardGrid::default());
    let mut player = Player::new(pid(1));
    player.init_pieces(&mut factory).unwrap();
    engine.add_player(player).unwrap();

    // Default rule: the game never ends on its own.
    assert!(!engine.is_end());
    engine.set_end_rule(FirstCellCovered);
    assert!(!engine.is_end());
    assert_eq!(engine.try_place(0, (0, 0)), Ok(true));
    assert!(engine.is_end());
}

#[test]
fn pieces_rotate_independently() {
    let catalog = ShapeCatalog::parse("1\n0 1 2\noo\n").unwrap();
    let mut factory = PieceFactory::new(&catalog);
    let twin_a: Piece = factory.mint(0, pid(1)).unwrap();
    let mut twin_b: Piece = factory.mint(0, pid(1)).unwrap();

    twin_b.rotate();
    assert_eq!((twin_a.shape().height(), twin_a.shape().width()), (1, 2));
    assert_eq!((twin_b.shape().height(), twin_b.shape().width()), (2, 1));
}
