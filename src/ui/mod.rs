//! Terminal front end: renders session snapshots and forwards key presses
//! to the session as column clicks, new games and round advances.

mod app;
mod game_view;

pub use app::App;
