// src/systems/deal_system.rs

// === 初期カード配置！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うよ。
// 終盤の状態を作る検証用のセットアップもここ。

use log::info;
use rand::Rng;

use crate::components::card::{Card, Rank, ALL_SUITS};
use crate::logic::deck::Deck;
use crate::piles::CardPile;
use crate::solitaire::Solitaire;

impl Solitaire {
    /// 新しいデッキをシャッフルして配り直すよ！🎉
    ///
    /// 登録済みのイベントリスナーはそのまま残る。
    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deal_new_game(rng);
    }

    /// # 処理の流れ
    /// 1. 新しいカードデッキ (52枚) を作ってシャッフルする。
    /// 2. 前のゲームのカードを全部片付ける🧹
    /// 3. 場札 i 列目に i+1 枚配る。一番上の1枚だけ表向き。
    /// 4. 残りの 24 枚を、配った順番で山札へ。
    pub(crate) fn deal_new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // --- 1. デッキの準備 ---
        let mut deck = Deck::new();
        deck.shuffle(rng);
        info!("🃏 デッキ作成完了！ ({})", deck);

        // --- 2. 既存カードのクリア ---
        self.clear_piles();

        // --- 3. 場札 (Tableau) への配置 ---
        // deal_one がエラーを返したらそこで打ち止め (52 枚あるので実際には起きない)。
        let mut cards = std::iter::from_fn(|| deck.deal_one().ok());
        for (index, tableau) in self.tableaus.iter_mut().enumerate() {
            for card in cards.by_ref().take(index + 1) {
                tableau.deal_face_down(card);
            }
            // 一番上をめくる！👀
            tableau.reveal();
        }

        // --- 4. 山札 (Stock) への配置 ---
        for card in cards {
            self.stock.push(card);
        }
        info!("✅ 配り終わり！ 山札 {} 枚", self.stock.len());
    }

    /// 終盤の状態を作る検証用ヘルパーだよ。普通のプレイでは使わない。
    ///
    /// * 組札はそれぞれ A..Q まで積まれた状態 (残りは King だけ)。
    /// * King は4枚しかないので、場札 0..3 に1枚ずつ表向きで置く。場札 4..6 は空。
    /// * 山札と捨て札は空。
    pub fn setup_almost_win_state(&mut self) {
        self.clear_piles();
        for foundation in self.foundations.iter_mut() {
            foundation.fill_through(Rank::Queen);
        }
        for (tableau, &suit) in self.tableaus.iter_mut().zip(ALL_SUITS.iter()) {
            tableau.deal_face_down(Card::new(Rank::King, suit));
            tableau.reveal();
        }
        info!("Almost-win state ready: four kings left to place.");
    }
}
