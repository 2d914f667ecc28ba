// src/logic/scoring.rs
//! 点数計算。どこからどこへ動いたかで加点・減点するよ。

use serde::{Deserialize, Serialize};

use crate::config::game_config::DrawMode;
use crate::zones::ZoneId;

/// 移動ごとの点数表。`GameConfig` の一部として JSON で上書きできる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub discard_to_tableau: i32,
    pub discard_to_foundation: i32,
    pub tableau_to_foundation: i32,
    pub reveal_tableau_card: i32,
    pub foundation_to_tableau: i32,
    pub recycle_draw_one: i32,
    pub recycle_draw_three: i32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            discard_to_tableau: 5,
            discard_to_foundation: 10,
            tableau_to_foundation: 10,
            reveal_tableau_card: 5,
            foundation_to_tableau: -15,
            recycle_draw_one: -100,
            recycle_draw_three: 0,
        }
    }
}

impl ScoringRules {
    /// `from` から `to` へカードが移ったときの点数。関係ない移動は 0。
    pub fn for_move(&self, from: ZoneId, to: ZoneId) -> i32 {
        match (from, to) {
            (ZoneId::Discard, ZoneId::Tableau(_)) => self.discard_to_tableau,
            (ZoneId::Discard, ZoneId::Foundation(_)) => self.discard_to_foundation,
            (ZoneId::Tableau(_), ZoneId::Foundation(_)) => self.tableau_to_foundation,
            (ZoneId::Foundation(_), ZoneId::Tableau(_)) => self.foundation_to_tableau,
            _ => 0,
        }
    }

    /// 捨て札を山札に戻したときの点数。
    pub fn for_recycle(&self, draw_mode: DrawMode) -> i32 {
        match draw_mode {
            DrawMode::One => self.recycle_draw_one,
            DrawMode::Three => self.recycle_draw_three,
        }
    }
}

/// いまの点数。0 より下にはならない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score(u32);

impl Score {
    pub fn value(self) -> u32 {
        self.0
    }

    pub fn apply(&mut self, delta: i32) {
        self.0 = self.0.saturating_add_signed(delta);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
