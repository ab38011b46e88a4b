// src/logic/rules/tests.rs
//! rules モジュール内の関数のユニットテスト。

use super::*;
use super::common::{get_foundation_index, get_foundation_suit};
use crate::components::card::{Card, Rank, Suit, ALL_SUITS};

// --- テスト用ヘルパー関数 ---
fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

// --- 各ルール関数のテスト ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    println!("CardColor テスト、成功！🎉");
}

#[test]
fn test_foundation_index_mapping() {
    for (i, suit) in ALL_SUITS.iter().enumerate() {
        assert_eq!(get_foundation_suit(i), Some(*suit));
        assert_eq!(get_foundation_index(*suit), i);
    }
    assert_eq!(get_foundation_suit(4), None);
}

#[test]
fn test_can_move_to_foundation_rules() {
    // シナリオ 1: 空の組札には Ace だけ
    assert!(can_move_to_foundation(&card(Rank::Ace, Suit::Heart), Suit::Heart, None));
    assert!(!can_move_to_foundation(&card(Rank::Two, Suit::Heart), Suit::Heart, None));
    // スート違いの Ace はダメ
    assert!(!can_move_to_foundation(&card(Rank::Ace, Suit::Spade), Suit::Heart, None));

    // シナリオ 2: Ace の上には同じスートの 2
    let ace_hearts = card(Rank::Ace, Suit::Heart);
    assert!(can_move_to_foundation(&card(Rank::Two, Suit::Heart), Suit::Heart, Some(&ace_hearts)));
    assert!(!can_move_to_foundation(&card(Rank::Three, Suit::Heart), Suit::Heart, Some(&ace_hearts)));
    assert!(!can_move_to_foundation(&card(Rank::Two, Suit::Diamond), Suit::Heart, Some(&ace_hearts)));

    // シナリオ 3: Queen の上に King で完成
    let queen_clubs = card(Rank::Queen, Suit::Club);
    assert!(can_move_to_foundation(&card(Rank::King, Suit::Club), Suit::Club, Some(&queen_clubs)));
    println!("Foundation 移動ルールテスト、成功！🎉");
}

#[test]
fn test_can_move_to_tableau_rules() {
    // シナリオ 1: 空の Tableau には King だけ
    for suit in ALL_SUITS {
        assert!(can_move_to_tableau(&card(Rank::King, suit), None), "空の Tableau に King of {} は置けるはず", suit);
        assert!(!can_move_to_tableau(&card(Rank::Queen, suit), None), "空の Tableau に Queen of {} は置けないはず", suit);
    }

    // シナリオ 2: 黒の 8 の上に赤の 7 はOK、黒の 7 はダメ
    let eight_spades = card(Rank::Eight, Suit::Spade);
    assert!(can_move_to_tableau(&card(Rank::Seven, Suit::Heart), Some(&eight_spades)));
    assert!(can_move_to_tableau(&card(Rank::Seven, Suit::Diamond), Some(&eight_spades)));
    assert!(!can_move_to_tableau(&card(Rank::Seven, Suit::Club), Some(&eight_spades)));

    // シナリオ 3: ランク違い
    assert!(!can_move_to_tableau(&card(Rank::Six, Suit::Heart), Some(&eight_spades)));
    assert!(!can_move_to_tableau(&card(Rank::Nine, Suit::Heart), Some(&eight_spades)));

    // Ace の上には何も置けない
    let ace_spades = card(Rank::Ace, Suit::Spade);
    assert!(!can_move_to_tableau(&card(Rank::King, Suit::Heart), Some(&ace_spades)));
    println!("Tableau 移動ルールテスト、成功！🎉");
}

#[test]
fn test_valid_tableau_run() {
    let run = [
        card(Rank::King, Suit::Spade),
        card(Rank::Queen, Suit::Heart),
        card(Rank::Jack, Suit::Club),
    ];
    assert!(is_valid_tableau_run(&run));
    assert!(is_valid_tableau_run(&run[..1]));
    assert!(is_valid_tableau_run(&[]));

    let broken = [card(Rank::King, Suit::Spade), card(Rank::Queen, Suit::Club)];
    assert!(!is_valid_tableau_run(&broken));
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false), "ストックがあれば配れるはず");
    assert!(!can_deal_from_stock(true), "ストックが空なら配れないはず");
    assert!(!can_recycle_waste(false), "ストックがある場合は戻せないはず");
    assert!(can_recycle_waste(true), "ストックが空なら戻せるはず");
    println!("Stock/Waste ルールテスト、成功！🎉");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition(&[13, 13, 13, 13]), "全部13枚ならクリアなはず！🏆");
    assert!(!check_win_condition(&[13, 13, 13, 12]), "51枚ではクリアじゃないはず！🙅");
    assert!(!check_win_condition(&[0, 0, 0, 0]), "0枚ではクリアじゃないはず！🙅");
    assert!(!check_win_condition(&[13, 13, 13]), "組札が3つしかないのはクリアじゃないはず！");
    println!("ゲームクリア判定テスト、成功！🎉");
}
