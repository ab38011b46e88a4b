// src/systems/move_card_system.rs

// カード移動のロジック！🖱️💨
//
// どの移動も「チェック → 変更」の2段階でやるよ。
// 1. 変更前の状態 (先頭カードのコピー) でルールをチェックする。
// 2. 全部 OK の時だけ、移動元から取り出して移動先に積む。
// だから、エラーで返った時はどのパイルも一切変わっていない！

use log::debug;

use crate::components::{Card, PileId};
use crate::error::{GameError, Result};
use crate::event::{MoveEvent, MoveKind};
use crate::logic::auto_move::find_foundation_for;
use crate::logic::rules::{can_deal_from_stock, can_recycle_waste};
use crate::piles::CardPile;
use crate::solitaire::Solitaire;

/// 一番上の1枚だけを動かせる移動元 (山札か捨て札)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TopSource {
    Stock,
    Waste,
}

impl TopSource {
    fn pile_id(self) -> PileId {
        match self {
            TopSource::Stock => PileId::Stock,
            TopSource::Waste => PileId::Waste,
        }
    }
}

impl Solitaire {
    /// 山札の一番上を1枚めくって捨て札へ。
    pub fn draw_from_stock(&mut self) -> Result<MoveEvent> {
        if !can_deal_from_stock(self.stock.is_empty()) {
            debug!("Stock is empty. Cannot draw.");
            return Err(GameError::empty(PileId::Stock));
        }
        let card = self.stock.draw()?;
        self.waste.push(card);
        Ok(self.record(MoveEvent::single(MoveKind::DrawFromStock, card, PileId::Stock, PileId::Waste)))
    }

    /// 山札が空の時に、捨て札を全部山札に戻す。
    ///
    /// 捨て札を逆順で積むので、一番最初に捨てたカードが次に引かれるカードになるよ。
    pub fn recycle_stock(&mut self) -> Result<MoveEvent> {
        if !can_recycle_waste(self.stock.is_empty()) {
            debug!("Stock still has {} cards. Cannot recycle.", self.stock.len());
            return Err(GameError::illegal("cannot recycle while Stock has cards"));
        }
        let mut cards = self.waste.take_all();
        cards.reverse();
        self.stock.refill(cards.iter().copied());
        Ok(self.record(MoveEvent::new(MoveKind::RecycleStock, cards, PileId::Waste, PileId::Stock)))
    }

    pub fn move_waste_to_tableau(&mut self, tableau_index: usize) -> Result<MoveEvent> {
        self.move_top_to_tableau(TopSource::Waste, tableau_index)
    }

    pub fn move_waste_to_foundation(&mut self) -> Result<MoveEvent> {
        self.move_top_to_foundation(TopSource::Waste)
    }

    pub fn move_stock_to_tableau(&mut self, tableau_index: usize) -> Result<MoveEvent> {
        self.move_top_to_tableau(TopSource::Stock, tableau_index)
    }

    pub fn move_stock_to_foundation(&mut self) -> Result<MoveEvent> {
        self.move_top_to_foundation(TopSource::Stock)
    }

    /// 場札の一番上を、受け入れてくれる組札へ。
    /// 取り除いた後、下のカードが裏向きならめくるよ。
    pub fn move_tableau_to_foundation(&mut self, tableau_index: usize) -> Result<MoveEvent> {
        let index = self.check_tableau_index(tableau_index)?;
        let from = PileId::Tableau(index);
        let card = *self.tableaus[index].peek().ok_or(GameError::empty(from))?;
        let target = self.find_foundation(&card)?;

        let card = self.tableaus[index].remove_top()?;
        self.foundations[target].add(card)?;
        self.tableaus[index].reveal();

        let to = self.foundations[target].id();
        Ok(self.record(MoveEvent::single(MoveKind::TableauToFoundation, card, from, to)))
    }

    /// 場札から場札へ、表向きの並びをまとめて動かす。
    ///
    /// `start_card_index` は移動元の下から数えた位置で、そこから上が全部動くよ。
    /// 表向きの部分の外を指していたら `IllegalMove` ("cannot move hidden cards")。
    pub fn move_within_tableau(
        &mut self,
        from_index: usize,
        to_index: usize,
        start_card_index: usize,
    ) -> Result<MoveEvent> {
        let from_index = self.check_tableau_index(from_index)?;
        let to_index = self.check_tableau_index(to_index)?;
        if from_index == to_index {
            return Err(GameError::illegal("source and destination are the same tableau"));
        }

        // --- 1. チェック (まだ何も変えない) ---
        let source = &self.tableaus[from_index];
        if start_card_index >= source.len() {
            return Err(GameError::illegal(format!(
                "no card at index {} in {}",
                start_card_index,
                source.id()
            )));
        }
        if !source.is_visible_index(start_card_index) {
            return Err(GameError::illegal("cannot move hidden cards"));
        }
        let lead = source.cards()[start_card_index];
        if !self.tableaus[to_index].can_accept(&lead) {
            debug!("{} rejected run starting at {}", self.tableaus[to_index].id(), lead);
            return Err(GameError::illegal(format!(
                "cannot place {} on {}",
                lead,
                self.tableaus[to_index].id()
            )));
        }
        let start = isize::try_from(start_card_index)
            .map_err(|_| GameError::illegal("card index out of range"))?;

        // --- 2. 移動 ---
        let run = self.tableaus[from_index].remove_from(start)?;
        self.tableaus[to_index].add_sequence(run.clone())?;
        self.tableaus[from_index].reveal();

        Ok(self.record(MoveEvent::new(
            MoveKind::WithinTableau,
            run,
            PileId::Tableau(from_index),
            PileId::Tableau(to_index),
        )))
    }

    // --- 内部ヘルパー ---

    fn peek_top(&self, source: TopSource) -> Result<Card> {
        let top = match source {
            TopSource::Stock => self.stock.peek(),
            TopSource::Waste => self.waste.peek(),
        };
        top.copied().ok_or(GameError::empty(source.pile_id()))
    }

    fn pop_top(&mut self, source: TopSource) -> Result<Card> {
        match source {
            TopSource::Stock => self.stock.draw(),
            TopSource::Waste => self.waste.pop(),
        }
    }

    fn find_foundation(&self, card: &Card) -> Result<usize> {
        find_foundation_for(card, &self.foundations)
            .ok_or_else(|| GameError::illegal(format!("no foundation accepts {}", card)))
    }

    fn move_top_to_tableau(&mut self, source: TopSource, tableau_index: usize) -> Result<MoveEvent> {
        let index = self.check_tableau_index(tableau_index)?;
        let card = self.peek_top(source)?;
        if !self.tableaus[index].can_accept(&card) {
            debug!("{} rejected {} from {}", self.tableaus[index].id(), card, source.pile_id());
            return Err(GameError::illegal(format!(
                "cannot place {} on {}",
                card,
                self.tableaus[index].id()
            )));
        }

        let card = self.pop_top(source)?;
        self.tableaus[index].add_sequence(vec![card])?;

        let kind = match source {
            TopSource::Stock => MoveKind::StockToTableau,
            TopSource::Waste => MoveKind::WasteToTableau,
        };
        Ok(self.record(MoveEvent::single(kind, card, source.pile_id(), PileId::Tableau(index))))
    }

    fn move_top_to_foundation(&mut self, source: TopSource) -> Result<MoveEvent> {
        let card = self.peek_top(source)?;
        let target = self.find_foundation(&card)?;

        let card = self.pop_top(source)?;
        self.foundations[target].add(card)?;

        let kind = match source {
            TopSource::Stock => MoveKind::StockToFoundation,
            TopSource::Waste => MoveKind::WasteToFoundation,
        };
        let to = self.foundations[target].id();
        Ok(self.record(MoveEvent::single(kind, card, source.pile_id(), to)))
    }
}
