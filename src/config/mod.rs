// src/config/mod.rs
//! 設定まわり: 固定のレイアウト定数と、起動時に作る GameConfig。

pub mod game_config;
pub mod layout;

pub use game_config::{DrawMode, GameConfig};
pub use layout::BoardLayout;
