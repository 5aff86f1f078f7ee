//! Slot addressing and the host-surface capability.
//!
//! The view layer never touches a concrete UI tree. It addresses
//! visual elements through [`SlotId`] and mutates them through the
//! injected [`TableSurface`] capability; the host (DOM, canvas,
//! terminal) decides what those mutations mean.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::sprite::SpriteOffset;

/// Hole-card slots per seat.
pub const HOLE_SLOTS: usize = 2;
/// Community-card slots on the board.
pub const BOARD_SLOTS: usize = 5;

/// Stable identifier of one addressable visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotId {
    /// Hole-card slot `slot` (0 or 1) of a seat.
    Hole { seat: usize, slot: usize },
    /// Community-card slot 0..5.
    Board(usize),
    /// A seat's chip-count label.
    Chips(usize),
    /// A seat's free-text status label.
    Status(usize),
    /// A seat's dealer-button marker.
    DealerMarker(usize),
    /// The shared pot label.
    Pot,
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotId::Hole { seat, slot } => write!(f, "player-{seat}-card-{slot}"),
            SlotId::Board(i) => write!(f, "board-{i}"),
            SlotId::Chips(seat) => write!(f, "player-{seat}-chips"),
            SlotId::Status(seat) => write!(f, "player-{seat}-status"),
            SlotId::DealerMarker(seat) => write!(f, "playmarker-{seat}"),
            SlotId::Pot => write!(f, "pot"),
        }
    }
}

/// Injected host capability backing the table view.
pub trait TableSurface {
    /// Construct a seat's visual structure and attach it to the table.
    fn mount_seat(&mut self, seat: usize);
    /// Set a slot's background image region.
    fn set_sprite(&mut self, slot: SlotId, offset: SpriteOffset);
    /// Set a slot's text content.
    fn set_text(&mut self, slot: SlotId, text: &str);
    /// Add (`on = true`) or remove a style class on a slot.
    fn set_class(&mut self, slot: SlotId, class: &str, on: bool);
}

/// In-memory visual tree: keeps the latest sprite offset, text and
/// class set per slot. Serves as the reference surface for tests and
/// the demo binary.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    mounted: BTreeSet<usize>,
    sprites: BTreeMap<SlotId, SpriteOffset>,
    texts: BTreeMap<SlotId, String>,
    classes: BTreeMap<SlotId, BTreeSet<String>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted_seats(&self) -> &BTreeSet<usize> {
        &self.mounted
    }

    pub fn sprite(&self, slot: SlotId) -> Option<SpriteOffset> {
        self.sprites.get(&slot).copied()
    }

    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn has_class(&self, slot: SlotId, class: &str) -> bool {
        self.classes
            .get(&slot)
            .is_some_and(|set| set.contains(class))
    }

    pub fn sprites(&self) -> impl Iterator<Item = (SlotId, SpriteOffset)> + '_ {
        self.sprites.iter().map(|(slot, off)| (*slot, *off))
    }

    pub fn texts(&self) -> impl Iterator<Item = (SlotId, &str)> + '_ {
        self.texts.iter().map(|(slot, text)| (*slot, text.as_str()))
    }
}

impl TableSurface for MemorySurface {
    fn mount_seat(&mut self, seat: usize) {
        self.mounted.insert(seat);
    }

    fn set_sprite(&mut self, slot: SlotId, offset: SpriteOffset) {
        self.sprites.insert(slot, offset);
    }

    fn set_text(&mut self, slot: SlotId, text: &str) {
        self.texts.insert(slot, text.to_owned());
    }

    fn set_class(&mut self, slot: SlotId, class: &str, on: bool) {
        let set = self.classes.entry(slot).or_default();
        if on {
            set.insert(class.to_owned());
        } else {
            set.remove(class);
        }
    }
}
