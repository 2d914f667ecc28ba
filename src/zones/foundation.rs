// src/zones/foundation.rs

use super::{Zone, ZoneBehavior, ZoneId, ZoneKind};
use crate::config::layout::BoardLayout;

/// 組札。カードをしまっておくだけで、置けるかどうかの判定は Selection 側がやるよ。
pub struct FoundationBehavior;

impl ZoneBehavior for FoundationBehavior {
    /// 触れるのは一番上の1枚だけ。
    fn get_clicked(&self, zone: &Zone, x: f32, y: f32) -> Option<usize> {
        zone.top_card()
            .filter(|top| top.bounds(zone.card_size()).contains(x, y))
            .map(|_| 1)
    }
}

impl Zone {
    pub fn foundation(index: u8, layout: &BoardLayout) -> Self {
        Zone::with_kind(
            ZoneId::Foundation(index),
            ZoneKind::Foundation,
            layout.foundations[usize::from(index)],
            layout.card_size,
            0.0,
            0.0,
        )
    }
}
