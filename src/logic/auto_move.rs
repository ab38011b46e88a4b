// src/logic/auto_move.rs
//! カードを受け入れてくれる組札（Foundation）を探すロジックだよ！🪄
//!
//! 組札は固定の順番 (ハート → ダイヤ → スペード → クラブ) で調べて、
//! 最初に受け入れてくれたものを返す。スートが排他的だから、見つかるのは多くても1つだけ。

use log::debug;

use crate::components::card::Card;
use crate::piles::Foundation;

/// `card` を置ける組札のインデックスを探すよ。
///
/// # 戻り値
/// * `Some(index)`: 受け入れてくれる組札 (`foundations[index]`) が見つかった場合。
/// * `None`: どの組札にも置けない場合。
pub fn find_foundation_for(card: &Card, foundations: &[Foundation]) -> Option<usize> {
    let found = foundations.iter().position(|foundation| foundation.can_accept(card));
    match found {
        Some(index) => debug!("[AutoMove] {} fits Foundation({})", card, foundations[index].suit()),
        None => debug!("[AutoMove] No suitable foundation found for {}", card),
    }
    found
}
