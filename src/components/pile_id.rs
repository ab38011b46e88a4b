// src/components/pile_id.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::Suit;

/// カードが置かれている場所 (パイル) を示す Enum だよ。
/// エラーやイベントで「どこから・どこへ」を伝えるのに使うよ。
/// Serialize, Deserialize があるから JSON にもそのままできる！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 山札 (Stock)。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。スートごとに1つ。
    Foundation(Suit),
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(usize),
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => f.write_str("Stock"),
            PileId::Waste => f.write_str("Waste"),
            PileId::Foundation(suit) => write!(f, "Foundation({})", suit),
            PileId::Tableau(index) => write!(f, "Tableau({})", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_id_display() {
        assert_eq!(PileId::Stock.to_string(), "Stock");
        assert_eq!(PileId::Foundation(Suit::Heart).to_string(), "Foundation(hearts)");
        assert_eq!(PileId::Tableau(2).to_string(), "Tableau(2)");
        println!("PileId 表示テスト、成功！👍");
    }

    #[test]
    fn test_pile_id_json() {
        let json = serde_json::to_string(&PileId::Tableau(5)).unwrap();
        let back: PileId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PileId::Tableau(5));
    }
}
