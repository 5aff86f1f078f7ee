use thiserror::Error;

/// Errors raised by the table view layer.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("seat index {seat} out of range (table has {seats} seats)")]
    SeatOutOfRange { seat: usize, seats: usize },

    #[error("board slot {slot} out of range (the board has 5 slots)")]
    BoardSlotOutOfRange { slot: usize },

    #[error("hole card slot {slot} out of range (each seat has 2)")]
    HoleSlotOutOfRange { slot: usize },

    #[error("flop needs 3 cards, got {got}")]
    IncompleteFlop { got: usize },

    #[error("a table needs at least one seat")]
    NoSeats,

    #[error("invalid card rank {0} (expected 0..=12)")]
    InvalidRank(u8),

    #[error(transparent)]
    Bet(#[from] BetError),
}

/// Failure to hand a bet off to the backend. Recoverable: the dialog
/// keeps the entered amount so the user can retry.
#[derive(Debug, Error)]
pub enum BetError {
    #[error("bet could not be delivered: {0}")]
    Delivery(String),
}
