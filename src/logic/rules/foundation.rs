//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank, Suit};

/// 指定されたカードが、`foundation_suit` の組札の一番上 (`top`) に置けるかチェックする。
///
/// * 組札が空 (`top == None`) なら、置けるのは同じスートの Ace だけ。
/// * そうでなければ、同じスートで `top` よりちょうど1つ大きいランクだけ。
pub fn can_move_to_foundation(card: &Card, foundation_suit: Suit, top: Option<&Card>) -> bool {
    if card.suit != foundation_suit {
        trace!("[Foundation Rule] {} -> Foundation({}): suit mismatch", card, foundation_suit);
        return false;
    }

    let result = match top {
        None => card.rank == Rank::Ace,
        Some(top_card) => top_card.rank.next() == Some(card.rank),
    };
    trace!(
        "[Foundation Rule] {} -> Foundation({}) (top: {:?}): {}",
        card,
        foundation_suit,
        top.map(ToString::to_string),
        result
    );
    result
}
