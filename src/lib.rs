// src/lib.rs

//! クロンダイク (Klondike) ソリティアのルールエンジンだよ！🃏
//!
//! 52枚のカードを山札 (Stock)、捨て札 (Waste)、組札 (Foundation) 4つ、
//! 場札 (Tableau) 7つに配って、ルールに従った移動だけを受け付ける。
//! 表示や入力は持たないので、どんなフロントエンドからでも使えるよ。
//!
//! ```
//! use klondike_rules::{CardPile, Solitaire, GameStatus};
//!
//! let mut game = Solitaire::from_seed(42);
//! game.draw_from_stock().unwrap();
//! assert_eq!(game.waste().len(), 1);
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod logic;
pub mod piles;
pub mod snapshot;
pub mod solitaire;
mod systems;

// よく使う型はクレートの直下からも使えるようにしておくよ。
pub use components::{Card, GameStatus, PileId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use config::GameConfig;
pub use error::{GameError, Result};
pub use event::{EventListener, MoveEvent, MoveKind};
pub use logic::Deck;
pub use piles::{CardPile, Foundation, Stock, Tableau, Waste};
pub use snapshot::GameSnapshot;
pub use solitaire::Solitaire;
