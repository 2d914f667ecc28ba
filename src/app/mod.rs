// src/app/mod.rs
//! ブラウザ側のつなぎ込み (GameApp) を役割ごとに分割して置くモジュールだよ！

pub mod browser_event_manager;
pub mod console_logger;
pub mod game_app;
pub mod input;
pub mod renderer;
pub mod state_getter;
pub mod storage;
