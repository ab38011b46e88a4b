// src/piles/foundation.rs
//! 組札 (Foundation)。スートごとに1つあって、A → 2 → ... → K の順にしか積めないよ。

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use super::{CardPile, Pile, PileData};
use crate::components::{Card, PileId, Rank, Suit, ALL_RANKS};
use crate::config::rules::RANKS_PER_SUIT;
use crate::error::{GameError, Result};
use crate::logic::rules::can_move_to_foundation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Foundation {
    suit: Suit,
    pile: Pile,
}

impl Foundation {
    /// スートを決めて空の組札を作る。スートは後から変わらないよ。
    pub fn new(suit: Suit) -> Self {
        Self { suit, pile: Pile::new(PileId::Foundation(suit)) }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn can_accept(&self, card: &Card) -> bool {
        can_move_to_foundation(card, self.suit, self.peek())
    }

    /// ルールを満たしていれば積む。ダメなら何も変えずに `IllegalMove`。
    pub fn add(&mut self, card: Card) -> Result<()> {
        if !self.can_accept(&card) {
            debug!("Foundation({}) rejected {}", self.suit, card);
            return Err(GameError::illegal(format!(
                "cannot place {} on the {} foundation",
                card, self.suit
            )));
        }
        self.pile.push(card);
        Ok(())
    }

    /// 13 枚揃っていれば完成！
    pub fn is_complete(&self) -> bool {
        self.len() == RANKS_PER_SUIT
    }

    /// A から `up_to` までを一気に積んだ状態にする (終盤の検証用)。
    pub(crate) fn fill_through(&mut self, up_to: Rank) {
        let suit = self.suit;
        self.pile.take_all();
        self.pile.extend(
            ALL_RANKS
                .iter()
                .take_while(|&&rank| rank <= up_to)
                .map(|&rank| Card::new(rank, suit)),
        );
    }

    pub(crate) fn clear(&mut self) {
        self.pile.take_all();
    }
}

#[derive(Deserialize)]
struct FoundationData {
    suit: Suit,
    pile: PileData,
}

/// JSON から組札を戻す時は、カードを1枚ずつ `add` し直すよ。
/// スート違いや順番の飛んだ組札はここで弾かれる。
impl<'de> Deserialize<'de> for Foundation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = FoundationData::deserialize(deserializer)?;
        Foundation::from_data(data).map_err(serde::de::Error::custom)
    }
}

impl Foundation {
    fn from_data(data: FoundationData) -> Result<Self> {
        let FoundationData { suit, pile: PileData { id, cards } } = data;
        if id != PileId::Foundation(suit) {
            return Err(GameError::illegal(format!("{} does not belong to the {} foundation", id, suit)));
        }
        let mut foundation = Foundation::new(suit);
        for card in cards {
            foundation.add(card)?;
        }
        Ok(foundation)
    }
}

impl CardPile for Foundation {
    fn pile(&self) -> &Pile {
        &self.pile
    }
}
