// src/piles/stock.rs
//! 山札 (Stock)。上から1枚ずつ引いて、空になったら Waste からまとめて補充するよ。

use serde::Serialize;

use super::{CardPile, Pile};
use crate::components::{Card, PileId};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stock {
    pile: Pile,
}

impl Stock {
    pub fn new() -> Self {
        Self { pile: Pile::new(PileId::Stock) }
    }

    /// 一番上のカードを引く (`pop` と同じ)。空なら `EmptyPile` ("Stock is empty")。
    pub fn draw(&mut self) -> Result<Card> {
        self.pile.pop()
    }

    pub fn push(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// まとめて補充する。リサイクルの時だけ使うよ。
    /// `cards` の最後の要素が新しい一番上になる。
    pub fn refill<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.pile.extend(cards);
    }

    pub(crate) fn clear(&mut self) {
        self.pile.take_all();
    }
}

impl Default for Stock {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPile for Stock {
    fn pile(&self) -> &Pile {
        &self.pile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Rank, Suit};
    use crate::error::GameError;

    #[test]
    fn test_draw_from_empty_stock() {
        let mut stock = Stock::new();
        let err = stock.draw().unwrap_err();
        assert!(matches!(err, GameError::EmptyPile { pile: PileId::Stock }));
        assert_eq!(err.to_string(), "Stock is empty");
    }

    #[test]
    fn test_refill_then_draw() {
        let mut stock = Stock::new();
        let a = Card::new(Rank::Ace, Suit::Heart);
        let b = Card::new(Rank::Two, Suit::Heart);
        stock.refill(vec![b, a]);
        assert_eq!(stock.len(), 2);
        assert_eq!(stock.draw().unwrap(), a, "最後に補充されたカードから引くはず");
        assert_eq!(stock.draw().unwrap(), b);
        assert!(stock.is_empty());
    }
}
