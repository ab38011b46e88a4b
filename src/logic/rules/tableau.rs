//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::trace;

use crate::components::card::{Card, Rank};

/// 指定されたカードが、場札の一番上 (`top`) に置けるかチェックする。
///
/// * 場札が空 (`top == None`) なら King だけ！🤴
/// * そうでなければ、`top` よりランクが1つ小さくて、色が違うカードだけ。
pub fn can_move_to_tableau(card: &Card, top: Option<&Card>) -> bool {
    match top {
        Some(top_card) => {
            let colors_different = card.color() != top_card.color();
            let rank_is_one_less = card.rank.next() == Some(top_card.rank);
            trace!(
                "[Tableau Rule] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
                card,
                top_card,
                colors_different,
                rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            let is_king = card.rank == Rank::King;
            trace!("[Tableau Rule] Moving {} onto empty Tableau. Is King: {}.", card, is_king);
            is_king
        }
    }
}

/// `cards` (下から上の順) が「ランク降順・色交互」の並びになっているかを見るよ。
/// 空や1枚だけの並びは常に OK。
pub fn is_valid_tableau_run(cards: &[Card]) -> bool {
    cards
        .iter()
        .tuple_windows()
        .all(|(below, above)| can_move_to_tableau(above, Some(below)))
}
