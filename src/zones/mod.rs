// src/zones/mod.rs
//! カードの置き場所 (ゾーン) のモデルだよ！🗂️
//!
//! どのゾーンも「カードの並び + アンカー座標 + ずらし幅 (separation) + 大きさ」を共通で持つ。
//! 種類ごとに違うのは、追加・取り出し・クリック判定・後片付けのちょっとした部分だけなので、
//! `ZoneKind` で種類を持って、差分は `ZoneBehavior` トレイトの短い実装に分けてるよ。
//!
//! カードの持ち主が変わるのは `Board::move_cards` / `take_cards` / `receive_cards` だけ。
//! ここにある `add_cards` / `remove_cards` はその部品。

use std::fmt;

use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardHolder};
use crate::components::position::{Position, Rect, Size};

pub mod deck;
pub mod discard;
pub mod foundation;
pub mod selection;
pub mod tableau;

pub use deck::DeckBehavior;
pub use discard::DiscardBehavior;
pub use foundation::FoundationBehavior;
pub use selection::{SelectionBehavior, SelectionState};
pub use tableau::TableauBehavior;

/// ゾーンの識別子。カードの「持ち主の控え」としても使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Deck,
    Discard,
    Foundation(u8),
    Tableau(u8),
    Selection,
}

impl ZoneId {
    pub fn is_foundation(self) -> bool {
        matches!(self, ZoneId::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, ZoneId::Tableau(_))
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Deck => write!(f, "Deck"),
            ZoneId::Discard => write!(f, "Discard"),
            ZoneId::Foundation(i) => write!(f, "Foundation[{}]", i),
            ZoneId::Tableau(i) => write!(f, "Tableau[{}]", i),
            ZoneId::Selection => write!(f, "Selection"),
        }
    }
}

/// ゾーンの種類。種類固有の状態もここに入れる。
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneKind {
    Deck,
    /// `window` 枚だけが見える捨て札。
    Discard { window: usize },
    Foundation,
    Tableau,
    Selection(SelectionState),
}

/// ゾーンの種類ごとに違う振る舞い。
///
/// デフォルト実装がベースの動き。上書きが必要なところだけ各種類で実装するよ。
pub trait ZoneBehavior: Sync {
    /// カードを受け取る。
    fn add_cards(&self, zone: &mut Zone, cards: Vec<Card>) {
        zone.push_cards(cards);
    }

    /// `dst` に渡すためにカードを取り出す。向きの変更などはここで。
    fn remove_for_transfer(&self, zone: &mut Zone, count: usize, _dst: ZoneId) -> Vec<Card> {
        zone.remove_cards(count, false)
    }

    /// 取り出しが終わった後、残ったカードを整える。
    fn after_transfer(&self, _zone: &mut Zone, _dst: ZoneId) {}

    /// `(x, y)` のクリックで上から何枚が対象になるか。当たらなければ `None`。
    fn get_clicked(&self, zone: &Zone, x: f32, y: f32) -> Option<usize> {
        let (nested_width, nested_height) = zone.nested_region();
        zone.scan_from_bottom(x, y, nested_width, nested_height)
    }

    /// ゾーン全体の当たり判定。
    fn is_clicked(&self, zone: &Zone, x: f32, y: f32) -> bool {
        zone.bounds().contains(x, y)
    }

    /// カードが出て行った移動が完了した後の後片付け。場札のカードがめくれたら `true`。
    fn cleanup(&self, _zone: &mut Zone) -> bool {
        false
    }
}

/// カードの並び (0 が一番下、最後が一番上) とレイアウト情報を持つ入れ物。
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    id: ZoneId,
    kind: ZoneKind,
    cards: Vec<Card>,
    position: Position,
    size: Size,
    card_size: Size,
    x_separation: f32,
    y_separation: f32,
}

impl Zone {
    pub(crate) fn with_kind(
        id: ZoneId,
        kind: ZoneKind,
        position: Position,
        card_size: Size,
        x_separation: f32,
        y_separation: f32,
    ) -> Self {
        Self {
            id,
            kind,
            cards: Vec::new(),
            position,
            size: card_size,
            card_size,
            x_separation,
            y_separation,
        }
    }

    /// この種類の振る舞い。
    pub fn behavior(&self) -> &'static dyn ZoneBehavior {
        match self.kind {
            ZoneKind::Deck => &DeckBehavior,
            ZoneKind::Discard { .. } => &DiscardBehavior,
            ZoneKind::Foundation => &FoundationBehavior,
            ZoneKind::Tableau => &TableauBehavior,
            ZoneKind::Selection(_) => &SelectionBehavior,
        }
    }

    // --- 種類ごとの振る舞いへの入り口 ---

    pub fn add_cards(&mut self, cards: Vec<Card>) {
        self.behavior().add_cards(self, cards);
    }

    pub fn get_clicked(&self, x: f32, y: f32) -> Option<usize> {
        self.behavior().get_clicked(self, x, y)
    }

    pub fn is_clicked(&self, x: f32, y: f32) -> bool {
        self.behavior().is_clicked(self, x, y)
    }

    pub fn cleanup(&mut self) -> bool {
        self.behavior().cleanup(self)
    }

    // --- アクセサ ---

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn kind(&self) -> &ZoneKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut ZoneKind {
        &mut self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub(crate) fn top_card_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn card_size(&self) -> Size {
        self.card_size
    }

    pub fn separation(&self) -> (f32, f32) {
        (self.x_separation, self.y_separation)
    }

    pub(crate) fn set_separation(&mut self, x_separation: f32, y_separation: f32) {
        self.x_separation = x_separation;
        self.y_separation = y_separation;
        self.refresh_size();
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    // --- ベースの仕組み ---

    /// 末尾にカードを積む。位置は `anchor + index * separation`、持ち主はこのゾーン。
    /// 一番上以外はネスト、一番上だけネスト解除。
    pub(crate) fn push_cards(&mut self, cards: Vec<Card>) {
        for mut card in cards {
            card.position = self.slot_position(self.cards.len());
            card.holder = Some(CardHolder::Zone(self.id));
            self.cards.push(card);
        }
        self.normalize_nesting();
        self.refresh_size();
        trace!("{} now holds {}", self.id, self);
    }

    /// 後ろ (または前) から `count` 枚取り出す。取り出したカードは元の並び順のまま返す。
    ///
    /// # Panics
    /// `count` が持っている枚数より多いとパニック。呼ぶ側のバグだよ。
    pub(crate) fn remove_cards(&mut self, count: usize, from_front: bool) -> Vec<Card> {
        assert!(
            count <= self.cards.len(),
            "cannot remove {} cards from {} holding {}",
            count,
            self.id,
            self.cards.len()
        );
        let removed = if from_front {
            let removed: Vec<Card> = self.cards.drain(..count).collect();
            self.relayout();
            removed
        } else {
            let at = self.cards.len() - count;
            self.cards.split_off(at)
        };
        if let Some(top) = self.cards.last_mut() {
            top.un_nest();
        }
        self.refresh_size();
        removed
    }

    /// i 番目のカードが置かれる位置。
    pub fn slot_position(&self, index: usize) -> Position {
        self.position.offset_by(self.x_separation, self.y_separation, index)
    }

    /// 次にカードを置いたときの位置。空ならアンカー。
    pub fn next_insertion_point(&self) -> Position {
        match self.cards.last() {
            Some(top) => Position::new(top.position.x + self.x_separation, top.position.y + self.y_separation),
            None => self.position,
        }
    }

    /// 後ろ `num` 枚を `anchor + i * separation` に並べ直す。
    pub fn realign(&mut self, num: usize) {
        let num = num.min(self.cards.len());
        let start = self.cards.len() - num;
        for (i, card) in self.cards[start..].iter_mut().enumerate() {
            card.position = self.position.offset_by(self.x_separation, self.y_separation, i);
        }
    }

    /// 全部のカードを並べ直す。
    pub fn relayout(&mut self) {
        let anchor = self.position;
        let (dx, dy) = (self.x_separation, self.y_separation);
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.position = anchor.offset_by(dx, dy, i);
        }
    }

    /// ドロップ先として当たっているか。空ならゾーンの枠、そうでなければ一番上のカード。
    pub fn is_dropped_on(&self, x: f32, y: f32) -> bool {
        match self.cards.last() {
            Some(top) => top.bounds(self.card_size).contains(x, y),
            None => Rect::new(self.position, self.card_size).contains(x, y),
        }
    }

    /// ネストされたカードの当たり判定の大きさ。ずらし幅が 0 の方向はカードの大きさそのまま。
    pub(crate) fn nested_region(&self) -> (f32, f32) {
        let width = if self.x_separation > 0.0 { self.x_separation } else { self.card_size.width };
        let height = if self.y_separation > 0.0 { self.y_separation } else { self.card_size.height };
        (width, height)
    }

    /// 下から順に見て、最初に当たったカードから上を全部対象にする。
    pub(crate) fn scan_from_bottom(&self, x: f32, y: f32, nested_width: f32, nested_height: f32) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.is_clicked(x, y, nested_width, nested_height, self.card_size))
            .map(|index| self.cards.len() - index)
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub(crate) fn normalize_nesting(&mut self) {
        let len = self.cards.len();
        for (i, card) in self.cards.iter_mut().enumerate() {
            if i + 1 == len {
                card.un_nest();
            } else {
                card.nest();
            }
        }
    }

    /// 1枚ならカード1枚ぶん、そこから1枚ごとに separation ずつ大きくなる。
    fn refresh_size(&mut self) {
        let extra = self.cards.len().saturating_sub(1) as f32;
        self.size = Size::new(
            self.card_size.width + self.x_separation * extra,
            self.card_size.height + self.y_separation * extra,
        );
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cards.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::config::layout::CARD_SIZE;

    fn column() -> Zone {
        Zone::with_kind(ZoneId::Tableau(0), ZoneKind::Tableau, Position::new(50.0, 300.0), CARD_SIZE, 0.0, 30.0)
    }

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::from_value(r, Suit::Spade).face_up()).collect()
    }

    #[test]
    fn add_cards_lays_out_and_nests() {
        let mut zone = column();
        zone.push_cards(cards(&[13, 12, 11]));

        assert_eq!(zone.len(), 3);
        assert_eq!(zone.cards()[2].position, Position::new(50.0, 360.0));
        assert!(zone.cards()[0].is_nested && zone.cards()[1].is_nested);
        assert!(!zone.cards()[2].is_nested);
        assert!(zone.cards().iter().all(|c| c.holder == Some(CardHolder::Zone(ZoneId::Tableau(0)))));
        assert_eq!(zone.size(), Size::new(131.0, 260.0));
        assert_eq!(zone.to_string(), "[KS, QS, JS]");
    }

    #[test]
    fn size_grows_and_shrinks_by_one_separation() {
        let mut zone = column();
        assert_eq!(zone.size(), CARD_SIZE);
        zone.push_cards(cards(&[5]));
        assert_eq!(zone.size(), CARD_SIZE, "1枚目では大きくならない");
        zone.push_cards(cards(&[4]));
        assert_eq!(zone.size().height, 230.0);

        let removed = zone.remove_cards(1, false);
        assert_eq!(removed[0].rank, Rank::Four);
        assert_eq!(zone.size(), CARD_SIZE);
        assert!(!zone.cards()[0].is_nested, "新しい一番上はネスト解除");

        zone.remove_cards(1, false);
        assert!(zone.is_empty());
        assert_eq!(zone.size(), CARD_SIZE);
        assert_eq!(zone.top_card(), None);
        assert_eq!(zone.bottom_card(), None);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut zone = column();
        zone.push_cards(cards(&[9, 8, 7, 6]));

        let back: Vec<Rank> = zone.remove_cards(2, false).iter().map(|c| c.rank).collect();
        assert_eq!(back, vec![Rank::Seven, Rank::Six]);

        let front: Vec<Rank> = zone.remove_cards(1, true).iter().map(|c| c.rank).collect();
        assert_eq!(front, vec![Rank::Nine]);
        assert_eq!(zone.cards()[0].rank, Rank::Eight);
        assert_eq!(zone.cards()[0].position, zone.position());
    }

    #[test]
    #[should_panic(expected = "cannot remove")]
    fn removing_too_many_panics() {
        let mut zone = column();
        zone.push_cards(cards(&[1]));
        zone.remove_cards(2, false);
    }

    #[test]
    fn next_insertion_point_follows_top_card() {
        let mut zone = column();
        assert_eq!(zone.next_insertion_point(), Position::new(50.0, 300.0));
        zone.push_cards(cards(&[10, 9]));
        assert_eq!(zone.next_insertion_point(), Position::new(50.0, 360.0));
    }

    #[test]
    fn drop_target_is_top_card_or_empty_box() {
        let mut zone = column();
        assert!(zone.is_dropped_on(60.0, 310.0));
        zone.push_cards(cards(&[10, 9]));
        // 一番上のカードは y=330 から
        assert!(!zone.is_dropped_on(60.0, 310.0));
        assert!(zone.is_dropped_on(60.0, 500.0));
    }
}
