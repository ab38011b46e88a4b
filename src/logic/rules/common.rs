//! ルール判定で共通して使うヘルパー型や関数を置くよ。

use serde::{Deserialize, Serialize};

use crate::components::card::{Suit, ALL_SUITS};

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Spade ♠️, 3: Club ♣️
pub fn get_foundation_suit(foundation_index: usize) -> Option<Suit> {
    ALL_SUITS.get(foundation_index).copied()
}

/// スートから組札のインデックスを引く (get_foundation_suit の逆)。
pub fn get_foundation_index(suit: Suit) -> usize {
    match suit {
        Suit::Heart => 0,
        Suit::Diamond => 1,
        Suit::Spade => 2,
        Suit::Club => 3,
    }
}
