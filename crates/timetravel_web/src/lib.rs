//! Browser frontend for time-travel tic-tac-toe.
//!
//! Three leptos components mirror the layout of the page: [`Square`],
//! [`Board`] and [`Game`]. Only [`Game`] holds state; it renders the
//! [`GameView`](timetravel_tictactoe::GameView) derived from its
//! [`GameState`](timetravel_tictactoe::GameState) and feeds every DOM event
//! back through the reducer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod square;

pub use board::Board;
pub use error::MountError;
pub use game::Game;
pub use square::Square;

use leptos::prelude::*;
use tracing::{info, instrument};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Id of the host element the game attaches to.
pub const MOUNT_POINT: &str = "root";

/// Mounts the game into the element with the given id.
///
/// # Errors
///
/// Returns [`MountError`] when the document has no such element or the
/// element is not an HTML element.
#[instrument]
pub fn mount(id: &str) -> Result<(), MountError> {
    let parent = document()
        .get_element_by_id(id)
        .ok_or_else(|| MountError::new(format!("No element with id '{}'", id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| MountError::new(format!("Element '{}' is not an HTML element", id)))?;

    info!("Mounting game");
    leptos::mount::mount_to(parent, || view! { <Game /> }).forget();
    Ok(())
}
