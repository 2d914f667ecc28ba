// src/error.rs
//! Recoverable errors (configuration, high-score text). Gameplay never produces these:
//! an illegal move is an ordinary outcome and broken invariants panic.

use std::num::ParseIntError;

use thiserror::Error;

/// `GameConfig` の読み込み・検証で起きるエラー。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("draw count must be 1 or 3, got {0}")]
    InvalidDrawCount(u8),

    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindow { width: f32, height: f32 },

    #[error("animation duration must be zero or positive, got {0}")]
    InvalidAnimationDuration(f32),

    #[error("shuffle passes must be at least 1")]
    NoShufflePasses,
}

/// ハイスコア表 (`score,date` の行) のパースエラー。
#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("line {line_no}: expected `score,date`, got {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("line {line_no}: invalid score")]
    InvalidScore {
        line_no: usize,
        #[source]
        source: ParseIntError,
    },
}
