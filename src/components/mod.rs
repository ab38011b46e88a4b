// src/components/mod.rs

// ゲームで使うデータ部品たち！
pub mod card;
pub mod game_state;
pub mod pile_id;

pub use card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile_id::PileId;
