// src/snapshot.rs
//! `Solitaire` の今の状態をまるごと写し取って、JSON にできる形にするよ！📸
//!
//! 表示側はパイルを直接いじらずにこれを読む。
//! 各パイルのカード (下から順) と、場札の裏向き / 表向きの分かれ目が入ってる。

use log::info;
use serde::{Deserialize, Serialize};

use crate::components::{Card, GameStatus, Suit};
use crate::error::Result;
use crate::piles::CardPile;
use crate::solitaire::Solitaire;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FoundationSnapshot {
    pub suit: Suit,
    pub cards: Vec<Card>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableauSnapshot {
    pub index: usize,
    pub hidden: Vec<Card>,
    pub visible: Vec<Card>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub status: GameStatus,
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: Vec<FoundationSnapshot>,
    pub tableaus: Vec<TableauSnapshot>,
}

impl GameSnapshot {
    pub fn capture(game: &Solitaire) -> Self {
        Self {
            status: game.status(),
            stock: game.stock().cards().to_vec(),
            waste: game.waste().cards().to_vec(),
            foundations: game
                .foundations()
                .iter()
                .map(|f| FoundationSnapshot { suit: f.suit(), cards: f.cards().to_vec() })
                .collect(),
            tableaus: game
                .tableaus()
                .iter()
                .enumerate()
                .map(|(index, t)| TableauSnapshot {
                    index,
                    hidden: t.hidden_cards().to_vec(),
                    visible: t.visible_cards().to_vec(),
                })
                .collect(),
        }
    }

    /// 全パイルのカードの合計枚数 (いつも 52 枚のはず)。
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundations.iter().map(|f| f.cards.len()).sum::<usize>()
            + self.tableaus.iter().map(|t| t.hidden.len() + t.visible.len()).sum::<usize>()
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        info!("Serialized game snapshot ({} cards).", self.card_count());
        Ok(json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
