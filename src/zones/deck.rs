// src/zones/deck.rs

use log::debug;
use rand::Rng;

use super::{Zone, ZoneBehavior, ZoneId, ZoneKind};
use crate::components::card::Card;
use crate::config::layout::BoardLayout;
use crate::logic::deck::shuffle_deck;

/// 山札。カードは全部アンカーに重ねて置くので separation は 0。
pub struct DeckBehavior;

impl ZoneBehavior for DeckBehavior {
    /// 山札からは「前」から配る (古いものから)。
    ///
    /// 捨て札行きは全部表向き、場札行きは全部裏向きで最後の1枚だけ表。
    fn remove_for_transfer(&self, zone: &mut Zone, count: usize, dst: ZoneId) -> Vec<Card> {
        let mut cards = zone.remove_cards(count, true);
        match dst {
            ZoneId::Discard => cards.iter_mut().for_each(Card::make_face_up),
            ZoneId::Tableau(_) => cards.iter_mut().for_each(Card::make_face_down),
            _ => {}
        }
        if let Some(last) = cards.last_mut() {
            last.un_nest();
            if dst.is_tableau() {
                last.make_face_up();
            }
        }
        cards
    }

    fn get_clicked(&self, zone: &Zone, x: f32, y: f32) -> Option<usize> {
        if !zone.is_empty() && zone.bounds().contains(x, y) {
            Some(1)
        } else {
            None
        }
    }
}

impl Zone {
    pub fn deck(layout: &BoardLayout) -> Self {
        Zone::with_kind(ZoneId::Deck, ZoneKind::Deck, layout.deck, layout.card_size, 0.0, 0.0)
    }

    /// 山札のカードをシャッフルして並べ直す。
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, passes: u32) {
        assert!(matches!(self.kind(), ZoneKind::Deck), "only the deck can be shuffled, not {}", self.id());
        shuffle_deck(self.cards_mut(), rng, passes);
        self.relayout();
        self.normalize_nesting();
        debug!("Deck shuffled ({} passes, {} cards)", passes, self.len());
    }
}
