// src/app/input.rs
//! クリックがシングルかダブルかを、時間のしきい値で判定する。

use crate::controller::ClickKind;

#[derive(Debug, Clone)]
pub struct ClickClassifier {
    threshold_ms: f64,
    last_down_ms: Option<f64>,
}

impl ClickClassifier {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            last_down_ms: None,
        }
    }

    /// `now_ms` に押されたクリックの種類。前のクリックからしきい値以内ならダブル。
    /// ダブルの後は数え直すので、3回目はシングルになる。
    pub fn classify(&mut self, now_ms: f64) -> ClickKind {
        let kind = match self.last_down_ms {
            Some(last) if now_ms - last <= self.threshold_ms => ClickKind::Double,
            _ => ClickKind::Single,
        };
        self.last_down_ms = match kind {
            ClickKind::Double => None,
            ClickKind::Single => Some(now_ms),
        };
        kind
    }
}
