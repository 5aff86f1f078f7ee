//! Sprite-sheet addressing for card faces.
//!
//! The sheet lays out the 13 ranks of a suit left to right in 72px
//! columns and the four suits top to bottom in 100px rows, with a
//! single card-back region off to the side. The geometry is fixed by
//! the asset and must not drift.

use serde::{Deserialize, Serialize};

use crate::cards::{Suit, TableCard};

/// Width of one rank column, in pixels.
pub const CARD_WIDTH: i32 = 72;
/// Height of one suit row, in pixels.
pub const SUIT_ROW_HEIGHT: i32 = 100;
/// Background offset of the card-back region.
pub const CARD_BACK: SpriteOffset = SpriteOffset { x: -360, y: -400 };

/// A 2D background offset into the sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteOffset {
    pub x: i32,
    pub y: i32,
}

fn suit_row(suit: Suit) -> i32 {
    match suit {
        Suit::Hearts => 0,
        Suit::Diamonds => 1,
        Suit::Clubs => 2,
        Suit::Spades => 3,
    }
}

/// Map a card to its background offset. Pure and deterministic; a
/// face-down card always maps to the card back.
pub fn locate(card: TableCard) -> SpriteOffset {
    match card {
        TableCard::FaceDown => CARD_BACK,
        TableCard::Open(c) => SpriteOffset {
            x: -(c.rank.as_u8() as i32) * CARD_WIDTH,
            y: -suit_row(c.suit) * SUIT_ROW_HEIGHT,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank};

    #[test]
    fn open_cards_follow_the_grid() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let off = locate(TableCard::Open(Card::new(rank, suit)));
                assert_eq!(off.x, -72 * rank.as_u8() as i32);
                let expected_y = match suit {
                    Suit::Hearts => 0,
                    Suit::Diamonds => -100,
                    Suit::Clubs => -200,
                    Suit::Spades => -300,
                };
                assert_eq!(off.y, expected_y);
            }
        }
    }

    #[test]
    fn locate_is_deterministic() {
        let card = TableCard::Open(Card::new(Rank::Queen, Suit::Clubs));
        assert_eq!(locate(card), locate(card));
    }

    #[test]
    fn face_down_always_maps_to_the_back() {
        assert_eq!(locate(TableCard::FaceDown), SpriteOffset { x: -360, y: -400 });
    }

    #[test]
    fn spot_checks_against_the_asset() {
        // 4 of spades.
        let off = locate(TableCard::Open(Card::new(Rank::Four, Suit::Spades)));
        assert_eq!(off, SpriteOffset { x: -216, y: -300 });
        // Ace of hearts sits at the origin.
        let off = locate(TableCard::Open(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(off, SpriteOffset { x: 0, y: 0 });
    }
}
