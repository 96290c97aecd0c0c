//! The 3x3 grid.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use timetravel_tictactoe::view::classes;
use timetravel_tictactoe::{BoardView, Position};

use crate::Square;

/// Lays out nine squares in three `board-row`s.
///
/// Each square's click is forwarded as the square's [`Position`].
#[component]
pub fn Board(board: BoardView, on_click: Callback<Position>) -> impl IntoView {
    let rows = board
        .rows()
        .iter()
        .map(|row| {
            let squares = row
                .iter()
                .map(|&square| {
                    let position = square.position();
                    let forward = Callback::new(move |_| on_click.run(position));
                    view! { <Square square=square on_click=forward /> }
                })
                .collect_view();
            view! { <div class=classes::BOARD_ROW>{squares}</div> }
        })
        .collect_view();

    view! { <div>{rows}</div> }
}
