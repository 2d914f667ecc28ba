// src/logic/rules/common.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Suit;

/// 赤 (♥♦) か黒 (♣♠)。場札は色を交互に積む。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl From<Suit> for CardColor {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}
