use log::{debug, info, warn};
use serde::Serialize;

use super::board::{Board, DropError, Outcome};
use super::player::{player_for, PieceColor, PlayerId};

pub const DRAW_MESSAGE: &str = "Draw Game!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GamePhase {
    AwaitingStart,
    InProgress,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (0-6)")]
    InvalidColumn(usize),

    #[error("no game has been started")]
    NotStarted,

    #[error("the round is over")]
    GameOver,
}

/// Immutable snapshot of a session. Every transition returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    player_a: PieceColor,
    player_b: PieceColor,
    current_player: PlayerId,
    phase: GamePhase,
    message: String,
}

impl GameState {
    /// State before the first game: empty board, nothing playable yet.
    pub fn awaiting(starter: PieceColor) -> Self {
        GameState {
            board: Board::empty(),
            player_a: starter,
            player_b: starter.other(),
            current_player: PlayerId::PlayerA,
            phase: GamePhase::AwaitingStart,
            message: String::new(),
        }
    }

    /// Start a new game; the starter colour goes to PlayerA, who moves first.
    pub fn start(starter: PieceColor) -> Self {
        info!("new game, {} starts", starter);
        GameState {
            phase: GamePhase::InProgress,
            ..GameState::awaiting(starter)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Result line, empty while a round is undecided
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn color_of(&self, player: PlayerId) -> PieceColor {
        match player {
            PlayerId::PlayerA => self.player_a,
            PlayerId::PlayerB => self.player_b,
        }
    }

    /// Seat holding `color` in this session.
    pub fn player_with(&self, color: PieceColor) -> PlayerId {
        player_for(color, self.player_a)
    }

    /// Colour of the player who opened the session.
    pub fn starter(&self) -> PieceColor {
        self.player_a
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn outcome(&self) -> Outcome {
        self.board.evaluate()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column is not an error: the move is ignored and the same state
    /// comes back.
    pub fn drop_piece(&self, column: usize) -> Result<GameState, MoveError> {
        match self.phase {
            GamePhase::InProgress => {}
            GamePhase::AwaitingStart => return Err(MoveError::NotStarted),
            GamePhase::Over => return Err(MoveError::GameOver),
        }

        let board = match self.board.drop_piece(column, self.current_player.to_cell()) {
            Ok(board) => board,
            Err(DropError::ColumnFull(_)) => {
                debug!("column {column} is full, move ignored");
                return Ok(self.clone());
            }
            Err(DropError::InvalidColumn(col)) => {
                warn!("rejected drop into column {col}");
                return Err(MoveError::InvalidColumn(col));
            }
            Err(DropError::EmptyPiece) => unreachable!("players always own a piece"),
        };

        debug!("{} drops into column {column}", self.current_player.name());

        let next = match board.evaluate() {
            Outcome::Win(piece) => {
                let Some(winner) = PlayerId::from_cell(piece) else {
                    unreachable!("evaluate never reports an empty cell as the winner")
                };
                let message = format!("{} wins!", winner.name());
                info!("round over: {message}");
                GameState {
                    board,
                    phase: GamePhase::Over,
                    message,
                    ..self.clone()
                }
            }
            Outcome::Draw => {
                info!("round over: {DRAW_MESSAGE}");
                GameState {
                    board,
                    phase: GamePhase::Over,
                    message: DRAW_MESSAGE.to_string(),
                    ..self.clone()
                }
            }
            Outcome::Undecided => GameState {
                board,
                current_player: self.current_player.other(),
                message: String::new(),
                ..self.clone()
            },
        };
        Ok(next)
    }

    /// Fresh board with the turn order flipped. Legal in every phase, so a
    /// round in progress is abandoned.
    pub fn advance_round(&self) -> GameState {
        let current_player = self.current_player.other();
        debug!("next round, {} to move", current_player.name());
        GameState {
            board: Board::empty(),
            current_player,
            phase: GamePhase::InProgress,
            message: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    #[test]
    fn test_awaiting_state() {
        let state = GameState::awaiting(PieceColor::Yellow);
        assert_eq!(state.phase(), GamePhase::AwaitingStart);
        assert_eq!(state.drop_piece(0), Err(MoveError::NotStarted));
    }

    #[test]
    fn test_start_binds_starter_to_player_a() {
        let state = GameState::start(PieceColor::Yellow);
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.current_player(), PlayerId::PlayerA);
        assert_eq!(state.color_of(PlayerId::PlayerA), PieceColor::Yellow);
        assert_eq!(state.color_of(PlayerId::PlayerB), PieceColor::Red);
        assert_eq!(state.player_with(PieceColor::Yellow), PlayerId::PlayerA);
        assert_eq!(state.player_with(PieceColor::Red), PlayerId::PlayerB);
        assert!(state.board().is_empty());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_drop_toggles_turn() {
        let state = GameState::start(PieceColor::Red);
        let next = state.drop_piece(3).unwrap();

        assert_eq!(next.current_player(), PlayerId::PlayerB);
        assert_eq!(next.board().get(5, 3), Cell::PlayerA);
        assert_eq!(next.phase(), GamePhase::InProgress);
        // The original snapshot is untouched
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_full_column_is_ignored() {
        let mut state = GameState::start(PieceColor::Red);
        for _ in 0..ROWS {
            state = state.drop_piece(0).unwrap();
        }
        let before = state.clone();
        let after = state.drop_piece(0).unwrap();
        assert_eq!(after, before);
        assert_eq!(after.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let state = GameState::start(PieceColor::Red);
        assert_eq!(state.drop_piece(COLS), Err(MoveError::InvalidColumn(COLS)));
    }

    #[test]
    fn test_win_keeps_current_player() {
        let mut state = GameState::start(PieceColor::Red);

        // PlayerA builds a horizontal line on the bottom row
        for col in 0..4 {
            state = state.drop_piece(col).unwrap();
            if col < 3 {
                state = state.drop_piece(col).unwrap();
            }
        }

        assert!(state.is_over());
        assert_eq!(state.outcome(), Outcome::Win(Cell::PlayerA));
        assert_eq!(state.current_player(), PlayerId::PlayerA);
        assert_eq!(state.message(), "Player1 wins!");
        assert_eq!(state.drop_piece(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_player_b_win_message() {
        let mut state = GameState::start(PieceColor::Red);
        for col in [6, 0, 6, 0, 6, 0, 5, 0] {
            state = state.drop_piece(col).unwrap();
        }
        assert!(state.is_over());
        assert_eq!(state.message(), "Player2 wins!");
        assert_eq!(state.current_player(), PlayerId::PlayerB);
    }

    #[test]
    fn test_advance_round_flips_turn() {
        let state = GameState::start(PieceColor::Red).drop_piece(2).unwrap();
        assert_eq!(state.current_player(), PlayerId::PlayerB);

        let next = state.advance_round();
        assert_eq!(next.current_player(), PlayerId::PlayerA);
        assert_eq!(next.phase(), GamePhase::InProgress);
        assert!(next.board().is_empty());
        assert_eq!(next.starter(), PieceColor::Red);
    }

    #[test]
    fn test_advance_round_from_awaiting() {
        let next = GameState::awaiting(PieceColor::Red).advance_round();
        assert_eq!(next.phase(), GamePhase::InProgress);
        assert_eq!(next.current_player(), PlayerId::PlayerB);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn(7).to_string(),
            "column 7 is out of range (0-6)"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the round is over");
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::start(PieceColor::Yellow).drop_piece(1).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["phase"], "InProgress");
        assert_eq!(json["current_player"], "PlayerB");
        assert_eq!(json["player_a"], "yellow");
        assert_eq!(json["board"]["cells"][5][1], "PlayerA");
        assert_eq!(json["message"], "");
    }
}
