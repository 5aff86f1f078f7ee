//! The table view: maps abstract table state onto visual slots.
//!
//! A [`TableView`] owns its [`TableSurface`] and is the only writer to
//! it. All operations validate seat and board indices before touching
//! the surface, so a failed call leaves the visual tree unchanged.

use crate::cards::{Card, TableCard};
use crate::errors::TableError;
use crate::slots::{SlotId, TableSurface, BOARD_SLOTS, HOLE_SLOTS};
use crate::sprite::locate;

/// The seat occupied by the local player.
pub const LOCAL_SEAT: usize = 0;

/// Style class marking the seat that holds the dealer button.
pub const DEALER_CLASS: &str = "dealer";

pub struct TableView<S> {
    surface: S,
    seats: usize,
}

impl<S: TableSurface> TableView<S> {
    /// Build the table for `seats` players. Seat 0 (the local player)
    /// is assumed pre-existing in the host layout; opponent seats are
    /// mounted through the surface.
    pub fn new(surface: S, seats: usize) -> Result<Self, TableError> {
        if seats == 0 {
            return Err(TableError::NoSeats);
        }
        let mut view = TableView { surface, seats };
        for seat in 1..seats {
            view.surface.mount_seat(seat);
        }
        tracing::info!(seats, "table initialized");
        Ok(view)
    }

    pub fn seats(&self) -> usize {
        self.seats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn check_seat(&self, seat: usize) -> Result<(), TableError> {
        if seat < self.seats {
            Ok(())
        } else {
            Err(TableError::SeatOutOfRange {
                seat,
                seats: self.seats,
            })
        }
    }

    /// Paint `card`'s sprite region onto a visual slot. Mutates the
    /// slot's visual style only; no model state is kept.
    pub fn render_card(&mut self, card: TableCard, slot: SlotId) -> Result<(), TableError> {
        match slot {
            SlotId::Hole { seat, slot } => {
                self.check_seat(seat)?;
                if slot >= HOLE_SLOTS {
                    return Err(TableError::HoleSlotOutOfRange { slot });
                }
            }
            SlotId::Board(i) if i >= BOARD_SLOTS => {
                return Err(TableError::BoardSlotOutOfRange { slot: i });
            }
            _ => {}
        }
        let offset = locate(card);
        tracing::debug!(slot = %slot, x = offset.x, y = offset.y, "render card");
        self.surface.set_sprite(slot, offset);
        Ok(())
    }

    /// Render `cards[i]` into hole slot `i` of the seat.
    pub fn deal_to_seat(&mut self, seat: usize, cards: &[TableCard]) -> Result<(), TableError> {
        self.check_seat(seat)?;
        for (slot, &card) in cards.iter().enumerate() {
            self.render_card(card, SlotId::Hole { seat, slot })?;
        }
        Ok(())
    }

    /// Render the first three cards into board slots 0-2. Extra cards
    /// are ignored; fewer than three is an error.
    pub fn show_flop(&mut self, cards: &[TableCard]) -> Result<(), TableError> {
        if cards.len() < 3 {
            return Err(TableError::IncompleteFlop { got: cards.len() });
        }
        if cards.len() > 3 {
            tracing::debug!(extra = cards.len() - 3, "ignoring cards past the flop");
        }
        for (i, &card) in cards.iter().take(3).enumerate() {
            self.surface.set_sprite(SlotId::Board(i), locate(card));
        }
        Ok(())
    }

    /// Render the fourth community card, leaving other slots untouched.
    pub fn show_turn(&mut self, card: TableCard) {
        self.surface.set_sprite(SlotId::Board(3), locate(card));
    }

    /// Render the fifth community card, leaving other slots untouched.
    pub fn show_river(&mut self, card: TableCard) {
        self.surface.set_sprite(SlotId::Board(4), locate(card));
    }

    pub fn set_chips(&mut self, seat: usize, amount: u32) -> Result<(), TableError> {
        self.check_seat(seat)?;
        self.surface.set_text(SlotId::Chips(seat), &amount.to_string());
        Ok(())
    }

    pub fn set_status_message(&mut self, seat: usize, text: &str) -> Result<(), TableError> {
        self.check_seat(seat)?;
        self.surface.set_text(SlotId::Status(seat), text);
        Ok(())
    }

    pub fn set_status(&mut self, seat: usize, amount: u32, text: &str) -> Result<(), TableError> {
        self.set_chips(seat, amount)?;
        self.set_status_message(seat, text)
    }

    pub fn set_pot(&mut self, amount: u32) {
        self.surface.set_text(SlotId::Pot, &amount.to_string());
    }

    /// Move the dealer button: clears the marker on every seat, then
    /// sets it on `seat`. At most one seat is marked at any time.
    pub fn set_dealer(&mut self, seat: usize) -> Result<(), TableError> {
        self.check_seat(seat)?;
        for s in 0..self.seats {
            self.surface
                .set_class(SlotId::DealerMarker(s), DEALER_CLASS, s == seat);
        }
        Ok(())
    }

    /// Reset the per-round visual state: a face-down pair and zeroed
    /// chips/status for every opponent, the two open `local_cards` for
    /// seat 0, an empty pot, and the dealer button on the local seat.
    ///
    /// The button stays on seat 0 every round; rotating it is the
    /// host's call once it drives rounds from real game state.
    pub fn start_round(&mut self, local_cards: [Card; 2]) -> Result<(), TableError> {
        for seat in 1..self.seats {
            self.deal_to_seat(seat, &[TableCard::FaceDown, TableCard::FaceDown])?;
            self.set_status(seat, 0, "")?;
        }
        let [first, second] = local_cards;
        self.deal_to_seat(
            LOCAL_SEAT,
            &[TableCard::Open(first), TableCard::Open(second)],
        )?;
        self.set_status(LOCAL_SEAT, 0, "")?;
        self.set_pot(0);
        self.set_dealer(LOCAL_SEAT)?;
        tracing::info!(seats = self.seats, "round started");
        Ok(())
    }
}
