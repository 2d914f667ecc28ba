// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ 下の層 (カード・ルール) から上の層 (ブラウザ) へ。
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod zones;
pub mod board;
pub mod systems;
pub mod controller;
pub mod snapshot;
pub mod high_score;
pub mod render;
pub mod app;

#[cfg(test)]
mod controller_tests;

pub use app::game_app::GameApp;
pub use board::Board;
pub use components::card::{Card, Rank, Suit};
pub use config::game_config::{DrawMode, GameConfig};
pub use controller::{ClickKind, GameController};
pub use error::{ConfigError, HighScoreError};
pub use high_score::{HighScore, HighScoreTable};
pub use render::Renderer;
pub use snapshot::BoardSnapshot;
pub use zones::{Zone, ZoneId};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    if let Err(e) = app::console_logger::init(log::LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {}", e)));
    }
    log::info!("Panic hook set!");
}
