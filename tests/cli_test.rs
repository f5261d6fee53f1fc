use std::io::Cursor;

use battleships::{
    parse_coord, Board, CellState, CliPlayer, Console, InputError, Orientation, PlacementMode,
    TurnAction, FLEET,
};

fn console(input: &str) -> Console<Cursor<&str>, Vec<u8>> {
    Console::new(Cursor::new(input), Vec::new())
}

fn transcript(console: Console<Cursor<&str>, Vec<u8>>) -> String {
    String::from_utf8(console.into_parts().1).expect("non utf8 output")
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("0"), Some(0));
    assert_eq!(parse_coord("9"), Some(9));
    assert_eq!(parse_coord("007"), Some(7));
    assert_eq!(parse_coord("10"), None);
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("-1"), None);
    assert_eq!(parse_coord("+3"), None);
    assert_eq!(parse_coord("3a"), None);
    assert_eq!(parse_coord("99999999999999999999999"), None);
}

#[test]
fn test_tokens_span_lines() {
    let mut c = console("\n  3 4\n\n5\n");
    assert_eq!(c.prompt_token("a: ").unwrap(), "3");
    assert_eq!(c.prompt_token("b: ").unwrap(), "4");
    assert_eq!(c.prompt_token("c: ").unwrap(), "5");
    assert!(matches!(c.prompt_token("d: "), Err(InputError::Closed)));
}

#[test]
fn test_choose_placement_mode() {
    let mut c = console("x\n\nMANUAL\n");
    let mode = CliPlayer::new().choose_placement_mode(&mut c).unwrap();
    assert_eq!(mode, PlacementMode::Manual);
    assert!(transcript(c).contains("Invalid option"));

    let mut c = console("  a\n");
    assert_eq!(
        CliPlayer::new().choose_placement_mode(&mut c).unwrap(),
        PlacementMode::Auto
    );

    let mut c = console("q\n");
    assert!(matches!(
        CliPlayer::new().choose_placement_mode(&mut c),
        Err(InputError::Closed)
    ));
}

#[test]
fn test_non_utf8_line_reprompts() {
    let mut c = Console::new(Cursor::new(&b"\xff\na\n"[..]), Vec::new());
    assert_eq!(
        CliPlayer::new().choose_placement_mode(&mut c).unwrap(),
        PlacementMode::Auto
    );
    let out = String::from_utf8(c.into_parts().1).expect("non utf8 output");
    assert!(out.contains("Invalid option"));

    let board = Board::new();
    let mut c = Console::new(Cursor::new(&b"\xc3\x28\n2 \xff\n2 5\n"[..]), Vec::new());
    assert_eq!(
        CliPlayer::new().select_target(&mut c, &board).unwrap(),
        TurnAction::Attack(2, 5)
    );
}

#[test]
fn test_manual_placement_reprompts_same_ship() {
    // Cruiser: out of bounds, bad row, bad column, then valid.
    // Battleship: overlaps the cruiser, then valid.
    let input = "0 8\nx\n0 z\n0 0\n0 2\n1 0\n2 0\n3 0\n5 0\n";
    let mut c = console(input);
    let mut board = Board::new();
    CliPlayer::new().place_ships(&mut c, &mut board, &FLEET).unwrap();

    let expected = [
        (0, 0, 3, Orientation::Horizontal),
        (1, 0, 4, Orientation::Horizontal),
        (2, 0, 2, Orientation::Horizontal),
        (3, 0, 2, Orientation::Vertical),
        (5, 0, 3, Orientation::Vertical),
    ];
    let mut reference = Board::new();
    for (r, col, len, o) in expected {
        reference.place_ship(r, col, len, o).unwrap();
    }
    assert_eq!(board, reference);

    let out = transcript(c);
    assert_eq!(out.matches("Ship placed!").count(), 5);
    assert_eq!(out.matches("cannot be placed").count(), 2);
    assert_eq!(out.matches("Invalid coordinates").count(), 2);
    assert!(out.contains("PLAYER's final board"));
}

#[test]
fn test_manual_placement_aborts_on_eof() {
    let mut c = console("0 0\n1\n");
    let mut board = Board::new();
    let res = CliPlayer::new().place_ships(&mut c, &mut board, &FLEET);
    assert!(matches!(res, Err(InputError::Closed)));
    assert_eq!(board.count(CellState::Ship), 3);
}

#[test]
fn test_select_target_debug_codes() {
    let board = Board::new();
    let mut c = console("win\n");
    assert_eq!(
        CliPlayer::new().select_target(&mut c, &board).unwrap(),
        TurnAction::ForceWin
    );
    let mut c = console("lose\n");
    assert_eq!(
        CliPlayer::new().select_target(&mut c, &board).unwrap(),
        TurnAction::ForceLoss
    );
    // codes are case sensitive and only honoured at the row prompt
    let mut c = console("WIN\n4 lose\n4 6\n");
    assert_eq!(
        CliPlayer::new().select_target(&mut c, &board).unwrap(),
        TurnAction::Attack(4, 6)
    );
}

#[test]
fn test_select_target_rejects_attacked_cell() {
    let mut board = Board::new();
    board.hit(2, 3);
    let mut c = console("2 3\n12\n2 4\n");
    assert_eq!(
        CliPlayer::new().select_target(&mut c, &board).unwrap(),
        TurnAction::Attack(2, 4)
    );
    let out = transcript(c);
    assert!(out.contains("You already fired there"));
    assert!(out.contains("Invalid coordinates"));
}
