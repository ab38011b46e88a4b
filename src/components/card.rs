// src/components/card.rs

use std::fmt;

// serde を使う宣言！スナップショットを JSON にする時とかに使うよ！
use serde::{Deserialize, Serialize};

use crate::logic::rules::common::CardColor;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♠️♣️
///
/// 並び順はデッキ生成の順番 (ハート → ダイヤ → スペード → クラブ) と同じにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Spade,   // ♠️
    Club,    // ♣️
}

impl Suit {
    /// 表示用の名前 (小文字の複数形) を返すよ。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Heart => "hearts",
            Suit::Diamond => "diamonds",
            Suit::Spade => "spades",
            Suit::Club => "clubs",
        }
    }

    /// スートの色。赤ならハートとダイヤ、黒ならスペードとクラブ！
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `Ace = 1` から `King = 13` まで。PartialOrd, Ord もあるから大小比較もできる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// 数値としてのランク (1..=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値 (1..=13) から Rank を作るよ。範囲外なら None！
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// ひとつ上のランク。King の上は無いから None。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    fn name(self) -> Option<&'static str> {
        match self {
            Rank::Ace => Some("Ace"),
            Rank::Jack => Some("Jack"),
            Rank::Queen => Some("Queen"),
            Rank::King => Some("King"),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value()),
        }
    }
}

/// 全スート。デッキ生成も組札 (Foundation) の探索もこの順番だよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club];

/// 全ランク (Ace → King)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す値だよ！🃏
///
/// 一度作ったら変わらない (immutable) ので Copy にしてある。
/// 表向き/裏向きはカード自身じゃなくて、場札 (Tableau) の `visible_count` が管理するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Rank::Ace, Suit::Spade);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert_eq!(card.color(), CardColor::Black);

        println!("作成したカード: {}", card);
        println!("Card 作成テスト、成功！🎉");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King > Rank::Ace);
        assert_eq!(Rank::Seven, Rank::Seven);

        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn rank_values_round_trip_through_from_value() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(11), Some(Rank::Jack));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::King.next(), None);
        assert_eq!(Rank::Seven.next(), Some(Rank::Eight));
    }

    #[test]
    fn display_uses_face_names() {
        assert_eq!(Card::new(Rank::Ace, Suit::Heart).to_string(), "Ace of hearts");
        assert_eq!(Card::new(Rank::Seven, Suit::Club).to_string(), "7 of clubs");
        assert_eq!(Card::new(Rank::Queen, Suit::Diamond).to_string(), "Queen of diamonds");
    }
}
