// src/piles/tableau.rs
//! 場札 (Tableau)。裏向きのカードの上に、表向きのカードが「ランク降順・色交互」で並ぶ列だよ。
//!
//! 表向きの枚数は `visible_count` で管理する。
//! 並び順のルールは置く瞬間 (`can_accept`) にだけチェックするので、
//! 配った直後の裏向きの部分がバラバラでも問題ないよ (裏向きのカードは単独では動かせないからね)。

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use super::{CardPile, Pile, PileData};
use crate::components::{Card, PileId};
use crate::error::{GameError, Result};
use crate::logic::rules::{can_move_to_tableau, is_valid_tableau_run};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tableau {
    pile: Pile,
    /// 上から何枚が表向きか。常に `0 <= visible_count <= len`。
    visible_count: usize,
}

impl Tableau {
    pub fn new(index: usize) -> Self {
        Self { pile: Pile::new(PileId::Tableau(index)), visible_count: 0 }
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// 裏向きのカードの枚数。表向きの部分はこのインデックスから始まるよ。
    pub fn hidden_count(&self) -> usize {
        self.len().saturating_sub(self.visible_count)
    }

    pub fn hidden_cards(&self) -> &[Card] {
        &self.cards()[..self.hidden_count()]
    }

    pub fn visible_cards(&self) -> &[Card] {
        &self.cards()[self.hidden_count()..]
    }

    /// `index` のカードが表向きかどうか。範囲外なら false。
    pub fn is_visible_index(&self, index: usize) -> bool {
        index < self.len() && index >= self.hidden_count()
    }

    /// 空なら King だけ、そうでなければ一番上より1つ小さくて色違いのカードだけ置ける。
    pub fn can_accept(&self, card: &Card) -> bool {
        can_move_to_tableau(card, self.peek())
    }

    /// 場札にカードを足す唯一の入口だよ。1枚だけ置く時も1枚の並びとして渡す。
    ///
    /// 先頭のカード (`cards[0]`) だけをルールでチェックして、全部を表向きで積む。
    pub fn add_sequence(&mut self, cards: Vec<Card>) -> Result<()> {
        let lead = cards.first().ok_or(GameError::EmptyInput)?;
        if !self.can_accept(lead) {
            debug!("{} rejected {}", self.id(), lead);
            return Err(GameError::illegal(format!("cannot place {} on {}", lead, self.id())));
        }
        self.visible_count += cards.len();
        self.pile.extend(cards);
        Ok(())
    }

    /// `index` から上のカードを全部取り除いて返す。
    ///
    /// 負の `index` は `len + index` として扱うよ (-1 なら一番上の1枚)。
    /// 切る位置が裏向きの部分に入っていたら `IllegalMove`。
    /// 成功しても自動ではめくらないので、必要なら後で `reveal()` を呼んでね。
    pub fn remove_from(&mut self, index: isize) -> Result<Vec<Card>> {
        let len = self.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };
        let start = match resolved {
            Some(start) if start < len => start,
            _ => {
                return Err(GameError::illegal(format!("no card at index {} in {}", index, self.id())))
            }
        };
        if start < self.hidden_count() {
            return Err(GameError::illegal("cannot remove hidden cards"));
        }

        let removed = self.pile.split_off(start);
        self.visible_count = self.visible_count.saturating_sub(removed.len());
        Ok(removed)
    }

    /// 一番上の1枚だけを取り除いて、下のカードが出てきたらめくるよ。
    pub fn remove_top(&mut self) -> Result<Card> {
        let card = self.pile.pop()?;
        self.visible_count = self.visible_count.saturating_sub(1);
        self.reveal();
        Ok(card)
    }

    /// 裏向きのカードが表になる唯一の仕組み！👀
    ///
    /// 空なら `visible_count = 0`、表向きが0枚になっていたら一番上を1枚めくる。
    pub fn reveal(&mut self) {
        if self.is_empty() {
            self.visible_count = 0;
        } else if self.visible_count == 0 {
            self.visible_count = 1;
        }
    }

    /// 配る時用: ルールを通さずに裏向きで積む。
    pub(crate) fn deal_face_down(&mut self, card: Card) {
        self.pile.push(card);
    }

    pub(crate) fn clear(&mut self) {
        self.pile.take_all();
        self.visible_count = 0;
    }
}

#[derive(Deserialize)]
struct TableauData {
    pile: PileData,
    visible_count: usize,
}

/// JSON から場札を戻す時に、表向きの枚数と並びをチェックするよ。
impl<'de> Deserialize<'de> for Tableau {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let data = TableauData::deserialize(deserializer)?;
        Tableau::from_data(data).map_err(serde::de::Error::custom)
    }
}

impl Tableau {
    fn from_data(data: TableauData) -> Result<Self> {
        let TableauData { pile: PileData { id, cards }, visible_count } = data;
        let PileId::Tableau(index) = id else {
            return Err(GameError::illegal(format!("{} is not a tableau", id)));
        };
        if visible_count > cards.len() {
            return Err(GameError::illegal(format!(
                "{} has {} cards but {} face-up",
                id,
                cards.len(),
                visible_count
            )));
        }
        if !is_valid_tableau_run(&cards[cards.len() - visible_count..]) {
            return Err(GameError::illegal(format!("face-up cards on {} are out of sequence", id)));
        }
        let mut tableau = Tableau::new(index);
        tableau.pile.extend(cards);
        tableau.visible_count = visible_count;
        Ok(tableau)
    }
}

impl CardPile for Tableau {
    fn pile(&self) -> &Pile {
        &self.pile
    }
}
