// src/logic/deck.rs

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use crate::error::{GameError, Result};

/// 標準的な52枚のカードデッキ（ソリティア用）だよ！🃏
///
/// ゲーム開始時に1回だけ作って、場札と山札に配り切ったら捨てる。
/// 山札の再利用 (recycle) は Stock/Waste だけでやるので、Deck は使い回さないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// スートが外側、ランクが内側のループで 52 枚全部を作るよ。
    /// (ハートの A..K → ダイヤの A..K → スペード → クラブ)
    pub fn new() -> Self {
        Self { cards: create_standard_deck() }
    }

    /// 渡された乱数生成器で残りのカードをシャッフルする。
    /// テストでは `StdRng::seed_from_u64` を渡せば毎回同じ並びになるよ。
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// 一番最後のカードを取り出して返す。空なら `EmptyDeck`。
    pub fn deal_one(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck with {} cards", self.cards.len())
    }
}

/// 52枚のカードを生成する関数だよ。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = Deck::new();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique_cards: HashSet<Card> = deck.cards().iter().copied().collect();
        assert_eq!(unique_cards.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. スートが外側、ランクが内側の順番
        assert_eq!(deck.cards()[0], Card::new(Rank::Ace, Suit::Heart));
        assert_eq!(deck.cards()[12], Card::new(Rank::King, Suit::Heart));
        assert_eq!(deck.cards()[13], Card::new(Rank::Ace, Suit::Diamond));
        assert_eq!(deck.cards()[26], Card::new(Rank::Ace, Suit::Spade));
        assert_eq!(deck.cards()[51], Card::new(Rank::King, Suit::Club));

        println!("Deck::new のテスト、成功！🎉 {}", deck);
    }

    #[test]
    fn test_shuffle_is_seedable() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b, "同じシードなら同じ並びになるはず");

        let mut c = Deck::new();
        c.shuffle(&mut StdRng::seed_from_u64(8));
        assert_ne!(a, c, "シードが違えば (ほぼ確実に) 並びも違うはず");
    }

    #[test]
    fn test_shuffle_keeps_all_cards() {
        let mut deck = Deck::new();
        deck.shuffle(&mut StdRng::seed_from_u64(1234));
        assert_eq!(deck.len(), 52, "シャッフルでカード数が変わった！");
        let unique: HashSet<Card> = deck.cards().iter().copied().collect();
        let expected: HashSet<Card> = create_standard_deck().into_iter().collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_deal_one_until_empty() {
        let mut deck = Deck::new();
        let last = *deck.cards().last().unwrap();
        assert_eq!(deck.deal_one().unwrap(), last, "最後のカードから配られるはず");

        for _ in 0..51 {
            deck.deal_one().unwrap();
        }
        assert!(deck.is_empty());
        assert!(matches!(deck.deal_one(), Err(GameError::EmptyDeck)));
        assert_eq!(deck.to_string(), "Deck with 0 cards");
    }
}
