// src/solitaire.rs

// --- ゲーム全体を管理する構造体 ---
// 山札1つ、捨て札1つ、組札4つ、場札7つを持っていて、
// カードはここの移動メソッドを通してしかパイル間を動かないよ。
//
// メソッドは役割ごとにファイルを分けてある：
// * 配る / 終盤セットアップ  → systems/deal_system.rs
// * 移動                     → systems/move_card_system.rs
// * 勝利判定                 → systems/win_condition_system.rs

use std::fmt;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::Suit;
use crate::components::PileId;
use crate::config::rules::{FOUNDATION_COUNT, FOUNDATION_ORDER, TABLEAU_COUNT};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::event::{EventListener, MoveEvent};
use crate::logic::rules::common::get_foundation_index;
use crate::piles::{CardPile, Foundation, Stock, Tableau, Waste};
use crate::snapshot::GameSnapshot;

/// クロンダイク1ゲーム分のセッション！🃏
///
/// どの移動も「全部成功」か「どのパイルも変えずにエラー」のどちらか。
/// 中身はシングルスレッド前提なので、スレッド間で共有するならセッションごと1つのロックで包んでね。
pub struct Solitaire {
    pub(crate) stock: Stock,
    pub(crate) waste: Waste,
    pub(crate) foundations: [Foundation; FOUNDATION_COUNT],
    pub(crate) tableaus: [Tableau; TABLEAU_COUNT],
    listener: Option<EventListener>,
}

impl Solitaire {
    /// 全部のパイルが空の状態。配るのは deal_system の仕事だよ。
    pub(crate) fn empty() -> Self {
        Self {
            stock: Stock::new(),
            waste: Waste::new(),
            foundations: FOUNDATION_ORDER.map(Foundation::new),
            tableaus: std::array::from_fn(Tableau::new),
            listener: None,
        }
    }

    /// システムの乱数でシャッフルして新しいゲームを始める。
    pub fn new() -> Self {
        Self::new_game(&mut rand::thread_rng())
    }

    /// 渡された乱数生成器でシャッフルして新しいゲームを始める。
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self::empty();
        game.deal_new_game(rng);
        game
    }

    /// 同じシードなら毎回同じ配り方になるよ。テストやリプレイ用！🎲
    pub fn from_seed(seed: u64) -> Self {
        Self::new_game(&mut StdRng::seed_from_u64(seed))
    }

    pub fn with_config(config: &GameConfig) -> Self {
        match config.seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::new(),
        }
    }

    // --- 読み取り専用のクエリ ---

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn waste(&self) -> &Waste {
        &self.waste
    }

    pub fn is_stock_empty(&self) -> bool {
        self.stock.is_empty()
    }

    pub fn is_waste_empty(&self) -> bool {
        self.waste.is_empty()
    }

    /// 組札はハート、ダイヤ、スペード、クラブの順。
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[get_foundation_index(suit)]
    }

    pub fn tableaus(&self) -> &[Tableau] {
        &self.tableaus
    }

    pub fn tableau(&self, index: usize) -> Result<&Tableau> {
        self.tableaus.get(index).ok_or(GameError::NoSuchPile { index })
    }

    /// `PileId` からパイルを引く。存在しない場札番号なら None。
    pub fn pile(&self, id: PileId) -> Option<&dyn CardPile> {
        match id {
            PileId::Stock => Some(&self.stock as &dyn CardPile),
            PileId::Waste => Some(&self.waste as &dyn CardPile),
            PileId::Foundation(suit) => Some(self.foundation(suit) as &dyn CardPile),
            PileId::Tableau(index) => self.tableaus.get(index).map(|t| t as &dyn CardPile),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    // --- イベント ---

    /// 移動が成功するたびに呼ばれるコールバックを登録するよ。前のものは置き換え。
    pub fn set_event_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&MoveEvent) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_event_listener(&mut self) {
        self.listener = None;
    }

    /// 成功した移動をログに出して、リスナーに知らせてから返す。
    pub(crate) fn record(&mut self, event: MoveEvent) -> MoveEvent {
        info!(
            "{:?}: {} card(s) {} -> {}",
            event.kind,
            event.cards.len(),
            event.from,
            event.to
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
        if self.status().is_won() {
            info!("All foundations complete. Game won! 🏆");
        }
        event
    }

    pub(crate) fn check_tableau_index(&self, index: usize) -> Result<usize> {
        if index < TABLEAU_COUNT {
            Ok(index)
        } else {
            Err(GameError::NoSuchPile { index })
        }
    }

    pub(crate) fn clear_piles(&mut self) {
        self.stock.clear();
        self.waste.take_all();
        self.foundations.iter_mut().for_each(Foundation::clear);
        self.tableaus.iter_mut().for_each(Tableau::clear);
    }
}

impl Default for Solitaire {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Solitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solitaire")
            .field("stock", &self.stock)
            .field("waste", &self.waste)
            .field("foundations", &self.foundations)
            .field("tableaus", &self.tableaus)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
