use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Logical seat in a session. PlayerA is always the starter of the first
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerId {
    PlayerA,
    PlayerB,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::PlayerA => PlayerId::PlayerB,
            PlayerId::PlayerB => PlayerId::PlayerA,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            PlayerId::PlayerA => Cell::PlayerA,
            PlayerId::PlayerB => Cell::PlayerB,
        }
    }

    /// Owner of a piece, `None` for an empty cell.
    pub fn from_cell(cell: Cell) -> Option<PlayerId> {
        match cell {
            Cell::PlayerA => Some(PlayerId::PlayerA),
            Cell::PlayerB => Some(PlayerId::PlayerB),
            Cell::Empty => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PlayerId::PlayerA => "Player1",
            PlayerId::PlayerB => "Player2",
        }
    }
}

/// Colour label a player carries for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
}

impl PieceColor {
    pub fn other(self) -> PieceColor {
        match self {
            PieceColor::Red => PieceColor::Yellow,
            PieceColor::Yellow => PieceColor::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "Red",
            PieceColor::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown colour '{0}' (expected 'red' or 'yellow')")]
pub struct ParseColorError(String);

impl FromStr for PieceColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(PieceColor::Red),
            "yellow" => Ok(PieceColor::Yellow),
            _ => Err(ParseColorError(s.to_string())),
        }
    }
}

/// Seat that plays `color` when `starter` opens the session.
pub fn player_for(color: PieceColor, starter: PieceColor) -> PlayerId {
    if color == starter {
        PlayerId::PlayerA
    } else {
        PlayerId::PlayerB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::PlayerA.other(), PlayerId::PlayerB);
        assert_eq!(PlayerId::PlayerB.other(), PlayerId::PlayerA);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(PlayerId::PlayerA.name(), "Player1");
        assert_eq!(PlayerId::PlayerB.name(), "Player2");
    }

    #[test]
    fn test_cell_mapping() {
        for player in [PlayerId::PlayerA, PlayerId::PlayerB] {
            assert_eq!(PlayerId::from_cell(player.to_cell()), Some(player));
        }
        assert_eq!(PlayerId::from_cell(Cell::Empty), None);
    }

    #[test]
    fn test_player_for() {
        assert_eq!(player_for(PieceColor::Red, PieceColor::Red), PlayerId::PlayerA);
        assert_eq!(player_for(PieceColor::Yellow, PieceColor::Red), PlayerId::PlayerB);
        assert_eq!(player_for(PieceColor::Yellow, PieceColor::Yellow), PlayerId::PlayerA);
        assert_eq!(player_for(PieceColor::Red, PieceColor::Yellow), PlayerId::PlayerB);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!("red".parse::<PieceColor>(), Ok(PieceColor::Red));
        assert_eq!(" YELLOW ".parse::<PieceColor>(), Ok(PieceColor::Yellow));
        let err = "blue".parse::<PieceColor>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown colour 'blue' (expected 'red' or 'yellow')"
        );
    }
}
