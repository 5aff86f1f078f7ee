//! Card-rendering and table-state display layer for a poker table UI.
//!
//! The crate maps abstract game state (seats, hole cards, board cards,
//! chip counts, dealer position) onto addressable visual slots, and
//! dispatches user actions (bet dialog, call) as view updates. The
//! concrete UI tree is an injected [`TableSurface`] capability, so the
//! whole layer runs and tests headlessly.

pub mod cards;
pub mod config;
pub mod controller;
pub mod errors;
pub mod messages;
pub mod slots;
pub mod sprite;
pub mod view;

pub use cards::{Card, Rank, Suit, TableCard};
pub use controller::{Action, BetSink, Controller, JsonBetSink, NullBetSink};
pub use errors::{BetError, TableError};
pub use messages::ClientMsg;
pub use slots::{MemorySurface, SlotId, TableSurface};
pub use sprite::{locate, SpriteOffset};
pub use view::TableView;
