// src/components/mod.rs

// ゲームに出てくる「モノ」のデータ部品をまとめるモジュールだよ！
pub mod card;
pub mod position;

pub use card::{Card, CardHolder, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use position::{Position, Rect, Size};
