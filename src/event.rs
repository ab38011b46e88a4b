// src/event.rs

// 成功した移動を外に知らせるためのイベント型だよ！📣
// ログやリプレイ表示みたいな観測レイヤーが使う想定。ルールの正しさには関係しない。
// Serialize があるので、そのまま JSON にして流すこともできるよ。
use serde::{Deserialize, Serialize};

use crate::components::{Card, PileId};

/// どの種類の移動だったか。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    DrawFromStock,
    RecycleStock,
    WasteToTableau,
    WasteToFoundation,
    StockToTableau,
    StockToFoundation,
    TableauToFoundation,
    WithinTableau,
}

/// 成功した移動1回分の記録。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveEvent {
    pub kind: MoveKind,
    /// 動いたカード (移動先に積まれた順番)。
    pub cards: Vec<Card>,
    pub from: PileId,
    pub to: PileId,
}

impl MoveEvent {
    pub fn new(kind: MoveKind, cards: Vec<Card>, from: PileId, to: PileId) -> Self {
        Self { kind, cards, from, to }
    }

    /// 1枚だけ動いた時の便利コンストラクタ。
    pub fn single(kind: MoveKind, card: Card, from: PileId, to: PileId) -> Self {
        Self::new(kind, vec![card], from, to)
    }
}

/// 移動が成功した後に呼ばれるコールバック。
pub type EventListener = Box<dyn FnMut(&MoveEvent) + Send>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Rank, Suit};

    #[test]
    fn test_move_event_json() {
        let event = MoveEvent::single(
            MoveKind::WasteToFoundation,
            Card::new(Rank::Ace, Suit::Heart),
            PileId::Waste,
            PileId::Foundation(Suit::Heart),
        );
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("WasteToFoundation"));
        let back: MoveEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        println!("MoveEvent JSON テスト、成功！💌 {}", json);
    }
}
