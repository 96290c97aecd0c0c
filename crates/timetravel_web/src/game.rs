//! The stateful root component.

use leptos::callback::Callback;
use leptos::prelude::*;
use timetravel_tictactoe::view::classes;
use timetravel_tictactoe::{GameEvent, GameState, MoveView, Position, SortOrder, render};
use tracing::debug;

use crate::Board;

/// Owns the game state; renders the board, status line and move list.
///
/// `sort_order` sets the initial order of the move list.
#[component]
pub fn Game(#[prop(optional)] sort_order: SortOrder) -> impl IntoView {
    let state = RwSignal::new(GameState::with_sort_order(sort_order));
    let game_view = Memo::new(move |_| state.with(render));

    let dispatch = move |event: GameEvent| {
        debug!(?event, "Dispatching event");
        state.update(|current| *current = current.apply(event));
    };
    let on_square = Callback::new(move |position: Position| dispatch(GameEvent::Click(position)));

    view! {
        <div class=classes::GAME>
            <div class=classes::GAME_BOARD>
                {move || {
                    let board = game_view.with(|v| *v.board());
                    view! { <Board board=board on_click=on_square /> }
                }}
            </div>
            <div class=classes::GAME_INFO>
                <div>{move || game_view.with(|v| v.status().to_string())}</div>
                <div>
                    <button on:click=move |_| {
                        let target = game_view.with(|v| v.sort_toggle().target());
                        dispatch(GameEvent::SortHistory(target));
                    }>
                        {move || game_view.with(|v| v.sort_toggle().label())}
                    </button>
                </div>
                <ol>
                    <For
                        each=move || game_view.with(|v| v.moves().clone())
                        key=|entry: &MoveView| (entry.step(), entry.selected())
                        children=move |entry: MoveView| {
                            let step = entry.step();
                            let is_current = move || state.with(|s| s.step_number() == step);
                            view! {
                                <li class=(classes::MOVE_SELECTED, is_current)>
                                    <button on:click=move |_| dispatch(GameEvent::Jump(step))>
                                        {entry.label()}
                                    </button>
                                    {entry.coordinates()}
                                </li>
                            }
                        }
                    />
                </ol>
            </div>
        </div>
    }
}
