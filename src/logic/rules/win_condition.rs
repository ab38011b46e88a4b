//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::rules::{FOUNDATION_COUNT, RANKS_PER_SUIT};

/// 4つの組札それぞれが 13 枚ずつ持っていればクリア！🏆
///
/// # 引数
/// * `foundation_sizes`: 各組札のカード枚数。
pub fn check_win_condition(foundation_sizes: &[usize]) -> bool {
    foundation_sizes.len() == FOUNDATION_COUNT
        && foundation_sizes.iter().all(|&size| size == RANKS_PER_SUIT)
}
