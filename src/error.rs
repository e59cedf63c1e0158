use crate::board::Mark;

/// A rejected move. The game it was aimed at is left untouched.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Copy, Clone)]
pub enum InvalidMove {
    #[error("invalid cell (expected: 0-8, found: {0})")]
    OutOfRange(usize),
    #[error("cell {0} is occupied")]
    CellOccupied(usize),
    #[error("can't make a move on a finished game")]
    GameOver,
    #[error("it is the computer's turn (playing {0})")]
    NotYourTurn(Mark),
}
