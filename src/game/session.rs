use log::info;

use super::player::PieceColor;
use super::state::{GameState, MoveError};

/// Owner of the authoritative [`GameState`] across rounds.
///
/// Each transition computes the next snapshot from the current one and
/// replaces it; callers read the result through the returned reference or
/// [`GameSession::state`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    starter: PieceColor,
    state: GameState,
    /// Set by the first undecided move of a game, cleared when a game
    /// starts or a round ends. Round advances leave it alone.
    underway: bool,
}

impl GameSession {
    /// A session waiting for its first game.
    pub fn new(starter: PieceColor) -> Self {
        GameSession {
            starter,
            state: GameState::awaiting(starter),
            underway: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Starter colour used by [`GameSession::new_game`].
    pub fn starter(&self) -> PieceColor {
        self.starter
    }

    /// Start a game with `starter` moving first, discarding any current
    /// round.
    pub fn start_game(&mut self, starter: PieceColor) -> &GameState {
        self.starter = starter;
        self.state = GameState::start(starter);
        self.underway = false;
        &self.state
    }

    /// Start a game with the remembered starter colour.
    pub fn new_game(&mut self) -> &GameState {
        self.start_game(self.starter)
    }

    /// Remember a new starter colour. Takes effect immediately unless the
    /// current game has had a move since it started or last finished, in
    /// which case it waits for the next [`GameSession::new_game`].
    pub fn choose_starter(&mut self, starter: PieceColor) -> &GameState {
        self.starter = starter;
        if self.underway {
            info!("{starter} will start the next new game");
            return &self.state;
        }
        self.start_game(starter)
    }

    pub fn drop_piece(&mut self, column: usize) -> Result<&GameState, MoveError> {
        let next = self.state.drop_piece(column)?;
        if next != self.state {
            self.underway = !next.is_over();
        }
        self.state = next;
        Ok(&self.state)
    }

    pub fn advance_round(&mut self) -> &GameState {
        self.state = self.state.advance_round();
        &self.state
    }

    /// Column click from the board: plays a move while a round is running,
    /// starts the next round once it is over.
    pub fn select_column(&mut self, column: usize) -> Result<&GameState, MoveError> {
        if self.state.is_over() {
            return Ok(self.advance_round());
        }
        self.drop_piece(column)
    }
}
