// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆
///
/// 名前のついた状態は「プレイ中」と「勝利」の2つだけ。
/// `Solitaire::status()` が組札の状態から毎回計算するので、どこかに保存はしないよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 4つの組札が全部 King まで揃った状態。
    Won,
}

impl GameStatus {
    pub fn from_win_flag(won: bool) -> Self {
        if won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_won(self) -> bool {
        self == GameStatus::Won
    }
}
