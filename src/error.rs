// src/error.rs
//! ルール違反や空のパイル操作を表すエラー型だよ。
//!
//! どのエラーも「プレイヤーの無効な操作」の結果で、致命的なものはひとつも無い。
//! エラーを返した操作は、どのパイルも一切変更しないことが約束だよ。

use thiserror::Error;

use crate::components::PileId;

/// パイルやゲームの操作が返すエラーの種類。
#[derive(Debug, Error)]
pub enum GameError {
    /// カードが1枚は必要なのに、`pile` が空っぽだった。
    #[error("{pile} is empty")]
    EmptyPile { pile: PileId },

    /// まとめて置こうとしたカードが0枚だった。
    #[error("no cards to place")]
    EmptyInput,

    /// 置き方のルール違反。
    #[error("illegal move: {reason}")]
    IllegalMove { reason: String },

    /// 空のデッキから `Deck::deal_one` しようとした。
    #[error("the deck is empty")]
    EmptyDeck,

    /// 場札の番号が `0..TABLEAU_COUNT` の外。
    #[error("no tableau at index {index}")]
    NoSuchPile { index: usize },

    /// 設定やスナップショットの JSON が読み書きできなかった。
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalMove { reason: reason.into() }
    }

    pub(crate) fn empty(pile: PileId) -> Self {
        GameError::EmptyPile { pile }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Suit;

    #[test]
    fn error_messages_name_the_pile() {
        assert_eq!(GameError::empty(PileId::Stock).to_string(), "Stock is empty");
        assert_eq!(
            GameError::empty(PileId::Foundation(Suit::Club)).to_string(),
            "Foundation(clubs) is empty"
        );
        assert_eq!(
            GameError::illegal("cannot move hidden cards").to_string(),
            "illegal move: cannot move hidden cards"
        );
        assert_eq!(GameError::NoSuchPile { index: 9 }.to_string(), "no tableau at index 9");
    }
}
