// src/piles/waste.rs
//! 捨て札 (Waste)。山札から1枚ずつ受け取って、一番上だけが動かせる普通のパイル。

use serde::Serialize;

use super::{CardPile, Pile};
use crate::components::{Card, PileId};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waste {
    pile: Pile,
}

impl Waste {
    pub fn new() -> Self {
        Self { pile: Pile::new(PileId::Waste) }
    }

    pub fn push(&mut self, card: Card) {
        self.pile.push(card);
    }

    pub fn pop(&mut self) -> Result<Card> {
        self.pile.pop()
    }

    /// 中身を全部取り出す (下から上の順)。リサイクル用。
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        self.pile.take_all()
    }
}

impl Default for Waste {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPile for Waste {
    fn pile(&self) -> &Pile {
        &self.pile
    }
}
