//! User-action dispatch for the table.
//!
//! Actions arrive through a single [`Controller::handle`] call instead
//! of UI event callbacks, so the whole interaction layer runs without
//! any browser or widget toolkit. The only state is the bet dialog:
//! open or closed, plus whatever amount has been entered into it.

use std::io::Write;

use crate::cards::{Card, TableCard};
use crate::errors::{BetError, TableError};
use crate::messages::ClientMsg;
use crate::slots::TableSurface;
use crate::view::TableView;

/// Where confirmed bets are handed off. This is the single seam to a
/// future backend; nothing else in the crate performs I/O.
pub trait BetSink {
    fn place_bet(&mut self, amount: u32) -> Result<(), BetError>;
}

/// Accepts the bet and does nothing. Stands in until a backend exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBetSink;

impl BetSink for NullBetSink {
    fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        tracing::debug!(amount, "place_bet stub, no backend attached");
        Ok(())
    }
}

/// Writes each bet as one JSON line in the wire format a backend would
/// consume.
pub struct JsonBetSink<W> {
    out: W,
}

impl<W: Write> JsonBetSink<W> {
    pub fn new(out: W) -> Self {
        JsonBetSink { out }
    }
}

impl<W: Write> BetSink for JsonBetSink<W> {
    fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        let msg = ClientMsg::PlaceBet { amount };
        let line = serde_json::to_string(&msg).map_err(|e| BetError::Delivery(e.to_string()))?;
        writeln!(self.out, "{line}").map_err(|e| BetError::Delivery(e.to_string()))
    }
}

/// A user-facing action, with any payload it needs from game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the bet dialog.
    OpenBetDialog,
    /// Record the amount typed into the open dialog.
    EnterAmount(u32),
    /// Confirm the entered bet: hand it to the sink, clear the input,
    /// close the dialog.
    ConfirmBet,
    /// Close the dialog and discard the entered amount.
    CancelBet,
    /// Call the current bet. The flop comes from the caller's game
    /// state; this layer never invents cards.
    Call { flop: [Card; 3] },
}

#[derive(Debug, Default)]
pub struct Controller {
    dialog_open: bool,
    amount: Option<u32>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn entered_amount(&self) -> Option<u32> {
        self.amount
    }

    /// Dispatch one action against the view. Confirm and cancel while
    /// the dialog is closed are no-ops.
    pub fn handle<S, B>(
        &mut self,
        action: Action,
        view: &mut TableView<S>,
        sink: &mut B,
    ) -> Result<(), TableError>
    where
        S: TableSurface,
        B: BetSink,
    {
        match action {
            Action::OpenBetDialog => {
                if !self.dialog_open {
                    self.dialog_open = true;
                    tracing::debug!("bet dialog opened");
                }
                Ok(())
            }
            Action::EnterAmount(amount) => {
                if self.dialog_open {
                    self.amount = Some(amount);
                }
                Ok(())
            }
            Action::ConfirmBet => {
                if !self.dialog_open {
                    return Ok(());
                }
                let amount = self.amount.unwrap_or(0);
                match sink.place_bet(amount) {
                    Ok(()) => {
                        tracing::info!(amount, "bet placed");
                        self.amount = None;
                        self.dialog_open = false;
                        Ok(())
                    }
                    Err(e) => {
                        // Keep the dialog open and the amount entered
                        // so the user can retry.
                        tracing::warn!(amount, error = %e, "bet not delivered");
                        Err(e.into())
                    }
                }
            }
            Action::CancelBet => {
                if self.dialog_open {
                    self.amount = None;
                    self.dialog_open = false;
                    tracing::debug!("bet dialog cancelled");
                }
                Ok(())
            }
            Action::Call { flop } => {
                let cards = flop.map(TableCard::Open);
                view.show_flop(&cards)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::slots::{MemorySurface, SlotId};

    struct CountingSink {
        bets: Vec<u32>,
        fail: bool,
    }

    impl CountingSink {
        fn new() -> Self {
            CountingSink {
                bets: Vec::new(),
                fail: false,
            }
        }
    }

    impl BetSink for CountingSink {
        fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
            if self.fail {
                return Err(BetError::Delivery("backend unreachable".into()));
            }
            self.bets.push(amount);
            Ok(())
        }
    }

    fn fixture() -> (Controller, TableView<MemorySurface>, CountingSink) {
        let view = TableView::new(MemorySurface::new(), 2).unwrap();
        (Controller::new(), view, CountingSink::new())
    }

    fn flop() -> [Card; 3] {
        [
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Four, Suit::Spades),
        ]
    }

    #[test]
    fn bet_then_confirm_places_and_closes() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        assert!(ctl.dialog_open());
        ctl.handle(Action::EnterAmount(50), &mut view, &mut sink).unwrap();
        ctl.handle(Action::ConfirmBet, &mut view, &mut sink).unwrap();
        assert_eq!(sink.bets, vec![50]);
        assert!(!ctl.dialog_open());
        assert_eq!(ctl.entered_amount(), None);
    }

    #[test]
    fn bet_then_cancel_closes_without_placing() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        ctl.handle(Action::EnterAmount(75), &mut view, &mut sink).unwrap();
        ctl.handle(Action::CancelBet, &mut view, &mut sink).unwrap();
        assert!(sink.bets.is_empty());
        assert!(!ctl.dialog_open());
        assert_eq!(ctl.entered_amount(), None);
    }

    #[test]
    fn confirm_and_cancel_while_closed_are_no_ops() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::ConfirmBet, &mut view, &mut sink).unwrap();
        ctl.handle(Action::CancelBet, &mut view, &mut sink).unwrap();
        assert!(sink.bets.is_empty());
        assert!(!ctl.dialog_open());
    }

    #[test]
    fn entering_an_amount_while_closed_is_ignored() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::EnterAmount(99), &mut view, &mut sink).unwrap();
        assert_eq!(ctl.entered_amount(), None);
    }

    #[test]
    fn opening_twice_stays_open() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        ctl.handle(Action::EnterAmount(10), &mut view, &mut sink).unwrap();
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        assert!(ctl.dialog_open());
        assert_eq!(ctl.entered_amount(), Some(10));
    }

    #[test]
    fn failed_delivery_keeps_the_dialog_and_amount() {
        let (mut ctl, mut view, mut sink) = fixture();
        sink.fail = true;
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        ctl.handle(Action::EnterAmount(30), &mut view, &mut sink).unwrap();
        let err = ctl.handle(Action::ConfirmBet, &mut view, &mut sink);
        assert!(matches!(err, Err(TableError::Bet(_))));
        assert!(ctl.dialog_open());
        assert_eq!(ctl.entered_amount(), Some(30));

        // Retry once the backend recovers.
        sink.fail = false;
        ctl.handle(Action::ConfirmBet, &mut view, &mut sink).unwrap();
        assert_eq!(sink.bets, vec![30]);
        assert!(!ctl.dialog_open());
    }

    #[test]
    fn call_renders_the_flop_regardless_of_dialog_state() {
        let (mut ctl, mut view, mut sink) = fixture();
        ctl.handle(Action::OpenBetDialog, &mut view, &mut sink).unwrap();
        ctl.handle(Action::Call { flop: flop() }, &mut view, &mut sink).unwrap();
        for i in 0..3 {
            assert!(view.surface().sprite(SlotId::Board(i)).is_some());
        }
        // The dialog is untouched by a call.
        assert!(ctl.dialog_open());
        assert!(sink.bets.is_empty());
    }

    #[test]
    fn json_sink_writes_one_line_per_bet() {
        let mut out = Vec::new();
        {
            let mut sink = JsonBetSink::new(&mut out);
            sink.place_bet(40).unwrap();
            sink.place_bet(80).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"type":"PlaceBet","data":{"amount":40}}"#);
    }
}
