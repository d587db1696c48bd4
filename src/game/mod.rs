//! Core Connect Four rules: the board value type, player seats and colours,
//! the round state machine, and the session that owns the current snapshot.

mod board;
mod player;
mod session;
mod state;

pub use board::{Board, Cell, DropError, Outcome, COLS, ROWS};
pub use player::{player_for, ParseColorError, PieceColor, PlayerId};
pub use session::GameSession;
pub use state::{GamePhase, GameState, MoveError, DRAW_MESSAGE};
