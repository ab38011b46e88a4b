// src/logic/mod.rs

pub mod auto_move;
pub mod deck;
pub mod rules;

pub use deck::Deck;
