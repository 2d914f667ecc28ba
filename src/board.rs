// src/board.rs
//! 盤面。山札・捨て札・組札4つ・場札7列・Selection をまとめて持つよ。
//!
//! カードの持ち主が変わる道はここの `move_cards` / `take_cards` / `receive_cards` だけ。
//! 取り出してから入れる、の順番なので、同じカードが2か所にいることも、どこにもいないこともない。

use log::{debug, trace};

use crate::components::card::Card;
use crate::config::game_config::GameConfig;
use crate::config::layout::{BoardLayout, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::zones::{Zone, ZoneId};

#[derive(Debug, Clone)]
pub struct Board {
    deck: Zone,
    discard: Zone,
    foundations: Vec<Zone>,
    tableaus: Vec<Zone>,
    selection: Zone,
}

impl Board {
    /// 空の盤面を作る。
    pub fn new(config: &GameConfig) -> Self {
        let layout = BoardLayout::from_config(config);
        Self {
            deck: Zone::deck(&layout),
            discard: Zone::discard(&layout, config.draw_mode),
            foundations: (0..FOUNDATION_COUNT as u8).map(|i| Zone::foundation(i, &layout)).collect(),
            tableaus: (0..TABLEAU_COUNT as u8).map(|i| Zone::tableau(i, &layout)).collect(),
            selection: Zone::selection(&layout),
        }
    }

    pub fn zone(&self, id: ZoneId) -> &Zone {
        match id {
            ZoneId::Deck => &self.deck,
            ZoneId::Discard => &self.discard,
            ZoneId::Foundation(i) => &self.foundations[usize::from(i)],
            ZoneId::Tableau(i) => &self.tableaus[usize::from(i)],
            ZoneId::Selection => &self.selection,
        }
    }

    pub(crate) fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        match id {
            ZoneId::Deck => &mut self.deck,
            ZoneId::Discard => &mut self.discard,
            ZoneId::Foundation(i) => &mut self.foundations[usize::from(i)],
            ZoneId::Tableau(i) => &mut self.tableaus[usize::from(i)],
            ZoneId::Selection => &mut self.selection,
        }
    }

    pub fn deck(&self) -> &Zone {
        &self.deck
    }

    pub fn discard(&self) -> &Zone {
        &self.discard
    }

    pub fn foundations(&self) -> &[Zone] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Zone] {
        &self.tableaus
    }

    pub fn selection(&self) -> &Zone {
        &self.selection
    }

    pub(crate) fn selection_mut(&mut self) -> &mut Zone {
        &mut self.selection
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Zone {
        &mut self.deck
    }

    /// Selection と、別のゾーン `id` を同時に借りる。持ち上げの準備に使う。
    pub(crate) fn selection_and(&mut self, id: ZoneId) -> (&mut Zone, &Zone) {
        let other = match id {
            ZoneId::Deck => &self.deck,
            ZoneId::Discard => &self.discard,
            ZoneId::Foundation(i) => &self.foundations[usize::from(i)],
            ZoneId::Tableau(i) => &self.tableaus[usize::from(i)],
            ZoneId::Selection => panic!("the selection cannot be its own source"),
        };
        (&mut self.selection, other)
    }

    /// 盤面に置かれている本物のゾーン (Selection 以外) を、クリック判定の順番で。
    pub fn playing_zones(&self) -> impl Iterator<Item = &Zone> {
        std::iter::once(&self.deck)
            .chain(std::iter::once(&self.discard))
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    /// Selection も含めた全ゾーン。
    pub fn all_zones(&self) -> impl Iterator<Item = &Zone> {
        self.playing_zones().chain(std::iter::once(&self.selection))
    }

    /// `(x, y)` に当たっている最初のゾーン (山札 → 捨て札 → 組札 → 場札の順)。
    pub fn find_clicked_zone(&self, x: f32, y: f32) -> Option<ZoneId> {
        self.playing_zones().find(|zone| zone.is_clicked(x, y)).map(Zone::id)
    }

    /// `src` の上から `count` 枚を取り出す。行き先 `dst` に合わせて向きなどを整える。
    pub fn take_cards(&mut self, src: ZoneId, count: usize, dst: ZoneId) -> Vec<Card> {
        let zone = self.zone_mut(src);
        let behavior = zone.behavior();
        let cards = behavior.remove_for_transfer(zone, count, dst);
        behavior.after_transfer(zone, dst);
        trace!("took {} cards from {} for {}", cards.len(), src, dst);
        cards
    }

    /// `dst` にカードを入れる。
    pub fn receive_cards(&mut self, dst: ZoneId, cards: Vec<Card>) {
        self.zone_mut(dst).add_cards(cards);
    }

    /// `src` から `dst` へ `count` 枚をそのまま移す。
    pub fn move_cards(&mut self, src: ZoneId, count: usize, dst: ZoneId) {
        let cards = self.take_cards(src, count, dst);
        debug!("move {} card(s): {} -> {}", cards.len(), src, dst);
        self.receive_cards(dst, cards);
    }

    /// 移動が終わった後の後片付け (場札はめくる、捨て札は窓を整える)。
    pub fn cleanup(&mut self, id: ZoneId) -> bool {
        self.zone_mut(id).cleanup()
    }

    pub fn foundation_counts(&self) -> Vec<usize> {
        self.foundations.iter().map(Zone::len).collect()
    }

    /// ゾーンにあるカードの総数 (アニメーション中のカードは含まない)。
    pub fn card_count(&self) -> usize {
        self.all_zones().map(Zone::len).sum()
    }

    /// 全ゾーンのカード (アニメーション中のカードは含まない)。
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.all_zones().flat_map(|zone| zone.cards().iter())
    }
}
