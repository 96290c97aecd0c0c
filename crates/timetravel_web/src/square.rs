//! A single board square.

use leptos::callback::{Callable, Callback};
use leptos::prelude::*;
use timetravel_tictactoe::SquareView;

/// Stateless square: shows its mark and reports clicks to the caller.
#[component]
pub fn Square(square: SquareView, on_click: Callback<()>) -> impl IntoView {
    let class = square.class();
    let text = square.text();
    view! {
        <button class=class on:click=move |_| on_click.run(())>
            {text}
        </button>
    }
}
