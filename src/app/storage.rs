// src/app/storage.rs
//! ハイスコアを localStorage に保存・読み込みするよ。

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::high_score::HighScoreTable;

pub const HIGH_SCORE_KEY: &str = "solitaire.high_scores";

fn local_storage() -> Result<Storage, JsValue> {
    let window = web_sys::window().ok_or("Failed to get window")?;
    window.local_storage()?.ok_or_else(|| JsValue::from_str("localStorage is not available"))
}

/// 保存されているハイスコア。読めない・壊れているときは空の表から始める。
pub fn load_high_scores() -> HighScoreTable {
    let text = match local_storage().and_then(|storage| storage.get_item(HIGH_SCORE_KEY)) {
        Ok(Some(text)) => text,
        Ok(None) => return HighScoreTable::new(),
        Err(e) => {
            warn!("ハイスコアを読めませんでした: {:?}", e);
            return HighScoreTable::new();
        }
    };
    HighScoreTable::parse(&text).unwrap_or_else(|e| {
        warn!("ハイスコアが壊れているので作り直します: {}", e);
        HighScoreTable::new()
    })
}

pub fn save_high_scores(table: &HighScoreTable) -> Result<(), JsValue> {
    local_storage()?.set_item(HIGH_SCORE_KEY, &table.to_text())
}
