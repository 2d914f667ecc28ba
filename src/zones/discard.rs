// src/zones/discard.rs

use super::{Zone, ZoneBehavior, ZoneId, ZoneKind};
use crate::components::card::Card;
use crate::components::position::{Rect, Size};
use crate::config::game_config::DrawMode;
use crate::config::layout::{BoardLayout, DISCARD_SEPARATION};

/// 捨て札。最後の `window` 枚だけ横にずらして見せ、それより古いカードはアンカーに重ねておく。
pub struct DiscardBehavior;

impl ZoneBehavior for DiscardBehavior {
    fn add_cards(&self, zone: &mut Zone, cards: Vec<Card>) {
        zone.push_cards(cards);
        let window = zone.window();
        zone.realign_window(window);
    }

    /// 山札に戻すときは全部裏向き。
    fn remove_for_transfer(&self, zone: &mut Zone, count: usize, dst: ZoneId) -> Vec<Card> {
        let mut cards = zone.remove_cards(count, false);
        if dst == ZoneId::Deck {
            cards.iter_mut().for_each(Card::make_face_down);
        }
        cards
    }

    /// 1枚抜けたら窓を1つ縮めて、残りのカードがその場に留まるようにする。
    /// 窓を元の大きさに戻すのは移動完了後の `cleanup`。
    fn after_transfer(&self, zone: &mut Zone, dst: ZoneId) {
        if dst != ZoneId::Deck {
            let window = zone.window().saturating_sub(1);
            zone.realign_window(window);
        }
    }

    /// 選べるのは一番上のカードだけ。
    fn get_clicked(&self, zone: &Zone, x: f32, y: f32) -> Option<usize> {
        zone.top_card()
            .filter(|top| top.bounds(zone.card_size()).contains(x, y))
            .map(|_| 1)
    }

    /// 当たり判定は見えている窓の範囲だけ。
    fn is_clicked(&self, zone: &Zone, x: f32, y: f32) -> bool {
        zone.visible_bounds().contains(x, y)
    }

    fn cleanup(&self, zone: &mut Zone) -> bool {
        let window = zone.window();
        zone.realign_window(window);
        false
    }
}

impl Zone {
    pub fn discard(layout: &BoardLayout, draw_mode: DrawMode) -> Self {
        Zone::with_kind(
            ZoneId::Discard,
            ZoneKind::Discard { window: draw_mode.count() },
            layout.discard,
            layout.card_size,
            DISCARD_SEPARATION,
            0.0,
        )
    }

    /// 捨て札の窓の大きさ。捨て札以外は全部見えるものとして枚数を返す。
    pub fn window(&self) -> usize {
        match self.kind() {
            ZoneKind::Discard { window } => *window,
            _ => self.len(),
        }
    }

    /// 見えているカード (捨て札なら窓の中、それ以外は全部)。
    pub fn visible_cards(&self) -> &[Card] {
        let visible = self.window().min(self.len());
        &self.cards()[self.len() - visible..]
    }

    /// 窓より古いカードをアンカーへ、窓の中のカードを横に並べる。
    pub fn realign_window(&mut self, window: usize) {
        let anchor = self.position();
        let hidden = self.len().saturating_sub(window);
        for card in &mut self.cards_mut()[..hidden] {
            card.position = anchor;
        }
        self.realign(window);
    }

    fn visible_bounds(&self) -> Rect {
        let (dx, _) = self.separation();
        let extra = self.visible_cards().len().saturating_sub(1) as f32;
        let card = self.card_size();
        Rect::new(self.position(), Size::new(card.width + dx * extra, card.height))
    }
}
