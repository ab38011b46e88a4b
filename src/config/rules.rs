// src/config/rules.rs
//! ゲームの形 (列の数、デッキの枚数など) に関する定数と、ゲーム開始時の設定を定義するよ！

use serde::{Deserialize, Serialize};

use crate::components::card::{Suit, ALL_SUITS};
use crate::error::Result;

pub const DECK_SIZE: usize = 52; // 標準デッキの枚数
pub const RANKS_PER_SUIT: usize = 13; // 1スートあたりの枚数 (A..K)
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数 (スートごとに1つ)

// 場札に配る枚数 1+2+...+7 = 28、残りが山札へ
pub const INITIAL_TABLEAU_CARDS: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2;
pub const INITIAL_STOCK_SIZE: usize = DECK_SIZE - INITIAL_TABLEAU_CARDS;

/// 組札を探す時の固定の順番 (ハート → ダイヤ → スペード → クラブ)。
pub const FOUNDATION_ORDER: [Suit; FOUNDATION_COUNT] = ALL_SUITS;

/// ゲームを始める時にホストから渡される設定だよ。
///
/// `seed: None` ならシステムの乱数でシャッフルする🎲
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// JSON の設定ドキュメントを読み込むよ。例: `{"seed": 42}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
