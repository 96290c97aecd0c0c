//! Tests for clicking, jumping and sorting through the public reducer.

use timetravel_tictactoe::{
    GameEvent, GameState, HistoryEntry, Player, Position, SortOrder, Square, render,
};

fn play(state: GameState, positions: &[Position]) -> GameState {
    positions
        .iter()
        .fold(state, |s, &pos| s.apply(GameEvent::Click(pos)))
}

#[test]
fn test_diagonal_win_sequence() {
    let state = play(
        GameState::new(),
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::MiddleLeft,
            Position::BottomRight,
        ],
    );

    // X holds 0, 4, 8; O holds 1, 3. The top row is incomplete.
    assert_eq!(state.status().to_string(), "Winner: X");
    assert_eq!(
        state.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );

    let view = render(&state);
    let highlighted: Vec<Position> = view
        .board()
        .rows()
        .iter()
        .flatten()
        .filter(|sq| sq.is_winner())
        .map(|sq| sq.position())
        .collect();
    assert_eq!(
        highlighted,
        vec![Position::TopLeft, Position::Center, Position::BottomRight]
    );
    assert_eq!(
        view.board().square(Position::Center).class(),
        "square winnerSquare"
    );
}

#[test]
fn test_click_on_occupied_square_is_noop() {
    let state = play(GameState::new(), &[Position::Center]);
    let after = state.apply(GameEvent::Click(Position::Center));
    assert_eq!(after, state);
    assert_eq!(after.history().len(), 2);
    assert_eq!(after.step_number(), 1);
}

#[test]
fn test_click_after_win_is_noop() {
    let won = play(
        GameState::new(),
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    assert_eq!(won.winner(), Some(Player::X));
    for pos in Position::ALL {
        assert_eq!(won.apply(GameEvent::Click(pos)), won);
    }
}

#[test]
fn test_jump_to_start_resets_view() {
    let state = play(
        GameState::new(),
        &[Position::Center, Position::TopLeft, Position::BottomRight],
    );
    let rewound = state.apply(GameEvent::Jump(0));

    assert!(
        rewound
            .board()
            .squares()
            .iter()
            .all(|sq| *sq == Square::Empty)
    );
    assert_eq!(rewound.status().to_string(), "Next player: X");
    assert_eq!(rewound.history().len(), 4);
}

#[test]
fn test_jump_back_to_won_board_shows_winner_again() {
    let won = play(
        GameState::new(),
        &[
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ],
    );
    let earlier = won.apply(GameEvent::Jump(4));
    assert_eq!(earlier.winner(), None);
    assert_eq!(earlier.status().to_string(), "Next player: X");

    let again = earlier.apply(GameEvent::Jump(5));
    assert_eq!(again.status().to_string(), "Winner: X");
}

#[test]
fn test_move_after_jump_discards_future() {
    let state = play(
        GameState::new(),
        &[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ],
    );
    assert_eq!(state.history().len(), 5);

    let step = 2;
    let branched = state
        .apply(GameEvent::Jump(step))
        .apply(GameEvent::Click(Position::BottomRight));

    assert_eq!(branched.history().len(), step + 2);
    assert_eq!(branched.step_number(), step + 1);
    assert_eq!(
        branched.history().entries()[..=step],
        state.history().entries()[..=step]
    );
    let last: &HistoryEntry = &branched.history().entries()[step + 1];
    assert_eq!(*last.selected(), Some(Position::BottomRight));
    assert_eq!(
        last.board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_jump_leaves_later_steps_until_next_move() {
    let state = play(GameState::new(), &[Position::Center, Position::TopLeft]);
    let rewound = state.apply(GameEvent::Jump(1));
    assert_eq!(rewound.history(), state.history());
    assert_eq!(rewound.step_number(), 1);
    assert_eq!(rewound.next_player(), Player::O);
}

#[test]
fn test_sort_history_is_idempotent() {
    let state = play(GameState::new(), &[Position::Center]);
    let once = state.apply(GameEvent::SortHistory(SortOrder::Ascending));
    let twice = once.apply(GameEvent::SortHistory(SortOrder::Ascending));
    assert_eq!(once, twice);
}

#[test]
fn test_reversed_list_jumps_to_underlying_step() {
    let state = play(
        GameState::new(),
        &[Position::Center, Position::TopLeft, Position::TopRight],
    )
    .apply(GameEvent::SortHistory(SortOrder::Descending));

    let view = render(&state);
    // Displayed last: the game start.
    let bottom = view.moves().last().copied().expect("move list is never empty");
    assert_eq!(bottom.step(), 0);

    let jumped = state.apply(GameEvent::Jump(bottom.step()));
    assert_eq!(jumped.step_number(), 0);
    assert_eq!(jumped.sort_order(), SortOrder::Descending);
}

#[test]
fn test_coordinates_in_move_list() {
    let state = play(GameState::new(), &[Position::Center, Position::TopLeft]);
    let coordinates: Vec<Option<String>> = render(&state)
        .moves()
        .iter()
        .map(|m| m.coordinates())
        .collect();
    assert_eq!(
        coordinates,
        vec![None, Some("(2, 2)".to_string()), Some("(1, 1)".to_string())]
    );
}

#[test]
fn test_current_step_is_marked_selected() {
    let state = play(GameState::new(), &[Position::Center, Position::TopLeft])
        .apply(GameEvent::Jump(1));
    let classes: Vec<Option<&str>> = render(&state).moves().iter().map(|m| m.class()).collect();
    assert_eq!(classes, vec![None, Some("moveSelected"), None]);
}
