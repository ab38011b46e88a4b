// src/piles/mod.rs
//! カードを積むパイルたち！📦
//!
//! `Pile` が共通の入れ物 (push / pop / peek / is_empty)。
//! Stock, Waste, Foundation, Tableau はそれぞれ `Pile` を1つ持って、自分のルールを足すよ。
//! 読み取り専用の操作は `CardPile` トレイトにまとめてあるから、
//! どの種類のパイルでも同じように中身を見られる。

pub mod foundation;
pub mod stock;
pub mod tableau;
pub mod waste;

pub use foundation::Foundation;
pub use stock::Stock;
pub use tableau::Tableau;
pub use waste::Waste;

use serde::{Deserialize, Serialize};

use crate::components::{Card, PileId};
use crate::error::{GameError, Result};

/// 順番つきのカードの入れ物。最後の要素が一番上だよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
}

/// JSON から読んだままの `Pile`。ルールのチェックは Foundation / Tableau の読み込み側でやる。
#[derive(Deserialize)]
struct PileData {
    id: PileId,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self { id, cards: Vec::new() }
    }

    /// 一番上にカードを積む。ベースのパイルにはルールが無いので必ず成功するよ。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上のカードを取り出す。空なら `EmptyPile`。
    pub fn pop(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::empty(self.id))
    }

    pub(crate) fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// `index` から上を全部切り取って返す。範囲チェックは呼び出し側の責任。
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// 中身を全部取り出して空にする。
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

/// どの種類のパイルでも使える読み取り専用のビュー。
pub trait CardPile {
    fn pile(&self) -> &Pile;

    fn id(&self) -> PileId {
        self.pile().id
    }

    /// 下から上の順のカード。
    fn cards(&self) -> &[Card] {
        &self.pile().cards
    }

    fn len(&self) -> usize {
        self.cards().len()
    }

    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// 一番上のカードを覗く (取り出さない)。
    fn peek(&self) -> Option<&Card> {
        self.cards().last()
    }
}

impl CardPile for Pile {
    fn pile(&self) -> &Pile {
        self
    }
}
