// src/zones/tableau.rs

use log::debug;

use super::{Zone, ZoneBehavior, ZoneId, ZoneKind};
use crate::config::layout::{BoardLayout, TABLEAU_CARD_SEPARATION};

/// 場札の列。裏向きと表向きが混ざっていて、表向きの連続した部分をまとめて動かせる。
pub struct TableauBehavior;

impl ZoneBehavior for TableauBehavior {
    /// 下から見て、当たったのが裏向きなら選べない。表向きならそこから上を全部。
    fn get_clicked(&self, zone: &Zone, x: f32, y: f32) -> Option<usize> {
        let (_, y_sep) = zone.separation();
        let nested_width = zone.size().width;
        zone.cards()
            .iter()
            .position(|card| card.is_clicked(x, y, nested_width, y_sep, zone.card_size()))
            .filter(|&index| zone.cards()[index].is_face_up)
            .map(|index| zone.len() - index)
    }

    /// 一番上が裏向きならめくる。
    fn cleanup(&self, zone: &mut Zone) -> bool {
        let id = zone.id();
        match zone.top_card_mut() {
            Some(top) if !top.is_face_up => {
                top.make_face_up();
                debug!("{}: revealed {}", id, top);
                true
            }
            _ => false,
        }
    }
}

impl Zone {
    pub fn tableau(index: u8, layout: &BoardLayout) -> Self {
        Zone::with_kind(
            ZoneId::Tableau(index),
            ZoneKind::Tableau,
            layout.tableaus[usize::from(index)],
            layout.card_size,
            0.0,
            TABLEAU_CARD_SEPARATION,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Suit};
    use crate::config::game_config::GameConfig;

    /// 裏2枚 + 表2枚の列。アンカーは (45.375, 320)。
    fn mixed_column() -> Zone {
        let layout = BoardLayout::from_config(&GameConfig::default());
        let mut zone = Zone::tableau(0, &layout);
        zone.add_cards(vec![
            Card::from_value(9, Suit::Club),
            Card::from_value(4, Suit::Diamond),
            Card::from_value(8, Suit::Heart).face_up(),
            Card::from_value(7, Suit::Spade).face_up(),
        ]);
        zone
    }

    #[test]
    fn face_down_cards_are_not_selectable() {
        let zone = mixed_column();
        assert_eq!(zone.get_clicked(60.0, 330.0), None);
        assert_eq!(zone.get_clicked(60.0, 360.0), None);
    }

    #[test]
    fn clicking_a_face_up_card_selects_the_run_above_it() {
        let zone = mixed_column();
        assert_eq!(zone.get_clicked(60.0, 385.0), Some(2));
        assert_eq!(zone.get_clicked(60.0, 500.0), Some(1));
        assert_eq!(zone.get_clicked(60.0, 700.0), None);
    }

    #[test]
    fn cleanup_reveals_the_new_top_card() {
        let mut zone = mixed_column();
        zone.remove_cards(2, false);
        assert!(!zone.top_card().map_or(true, |c| c.is_face_up));

        assert!(zone.cleanup(), "裏向きの一番上はめくれるはず");
        assert!(zone.top_card().map_or(false, |c| c.is_face_up));
        assert!(!zone.cleanup(), "もう表向きなので何もしない");
    }

    #[test]
    fn cleanup_on_empty_column_does_nothing() {
        let layout = BoardLayout::from_config(&GameConfig::default());
        let mut zone = Zone::tableau(6, &layout);
        assert!(!zone.cleanup());
    }
}
