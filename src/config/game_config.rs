// src/config/game_config.rs
//! 起動時に一度だけ作って、コントローラーとゾーンに明示的に渡す設定値だよ！
//! グローバルな可変変数は使わない。

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::logic::scoring::ScoringRules;

/// 山札から一度に何枚めくるか。JSON では整数 (1 か 3) で書くよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawMode {
    One,
    Three,
}

impl DrawMode {
    /// 1回のめくりで動かす枚数 (= 捨て札の見える窓の大きさ)。
    pub fn count(self) -> usize {
        match self {
            DrawMode::One => 1,
            DrawMode::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawMode {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(DrawMode::One),
            3 => Ok(DrawMode::Three),
            other => Err(ConfigError::InvalidDrawCount(other)),
        }
    }
}

impl From<DrawMode> for u8 {
    fn from(mode: DrawMode) -> Self {
        mode.count() as u8
    }
}

/// ゲーム全体の設定。
///
/// `#[serde(default)]` なので、JSON に書かなかった項目はデフォルト値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub draw_mode: DrawMode,
    /// 1回のアニメーションにかかる秒数。
    pub animation_seconds: f32,
    /// ダブルクリックとみなす間隔 (ミリ秒)。入力側の ClickClassifier が使う。
    pub double_click_ms: f64,
    /// カード裏面の色。テクスチャ名 `back_<color>` になる。
    pub card_back_color: String,
    /// Fisher–Yates を何回かけるか。
    pub shuffle_passes: u32,
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 960.0,
            draw_mode: DrawMode::Three,
            animation_seconds: 0.1,
            double_click_ms: 300.0,
            card_back_color: "purple".to_string(),
            shuffle_passes: 1,
            scoring: ScoringRules::default(),
        }
    }
}

impl GameConfig {
    /// JSON 文字列から設定を読み込んで、検証までするよ。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::InvalidWindow {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !(self.animation_seconds >= 0.0) {
            return Err(ConfigError::InvalidAnimationDuration(self.animation_seconds));
        }
        if self.shuffle_passes == 0 {
            return Err(ConfigError::NoShufflePasses);
        }
        Ok(())
    }

    /// 裏面のテクスチャ名。
    pub fn card_back_texture(&self) -> String {
        format!("back_{}", self.card_back_color)
    }
}
