//! Game engine and the view contract
//!
//! `Game` owns the grid, cursor, secret and keyboard state and changes only
//! through `Command`s; renderers read it through `GameView`.

mod engine;
mod grid;
mod message;
mod view;

pub use engine::{Command, Game};
pub use grid::{Cursor, Grid, GuessRow, MAX_ATTEMPTS};
pub use message::{GameStatus, Message};
pub use view::GameView;
