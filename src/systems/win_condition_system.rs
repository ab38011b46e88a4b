// src/systems/win_condition_system.rs

// ゲームの勝利条件をチェックするよ！🏆🎉
// 勝ち負けの状態はどこにも保存しないで、組札の枚数から毎回計算する。

use crate::components::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::piles::CardPile;
use crate::solitaire::Solitaire;

impl Solitaire {
    /// 4つの組札がすべて13枚 (A..K) になっていれば true。
    pub fn check_win(&self) -> bool {
        let sizes: Vec<usize> = self.foundations.iter().map(|f| f.len()).collect();
        check_win_condition(&sizes)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_win_flag(self.check_win())
    }
}
