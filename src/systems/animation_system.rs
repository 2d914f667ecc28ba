// src/systems/animation_system.rs
//! カードが2つのゾーンの間を飛んでいるアニメーション。
//!
//! `Animation` はゾーンではないよ。作った瞬間に移動元からカードを預かり (take)、
//! 目的地に着いたら移動先に渡す (receive)。持ち主の変更はこの2回だけ。
//! 途中でキャンセルはできない。一度始まったら必ず最後まで進む。

use std::mem;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::components::card::{Card, CardHolder};
use crate::components::position::Position;
use crate::zones::ZoneId;

/// アニメーションの通し番号。カードの持ち主の控えに使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u32);

/// 着地して完了した移動の記録。点数計算に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedMove {
    pub source: ZoneId,
    pub target: ZoneId,
    pub count: usize,
    /// 移動元の場札で裏向きのカードがめくれたか。
    pub revealed: bool,
}

/// 飛んでいる途中のカードたち。
#[derive(Debug, Clone)]
pub struct Animation {
    id: AnimationId,
    cards: Vec<Card>,
    source: ZoneId,
    target: ZoneId,
    start: Position,
    location: Position,
    target_location: Position,
    x_separation: f32,
    y_separation: f32,
    progress: f32,
    duration: f32,
    valid: bool,
}

impl Animation {
    /// `source` の上から `count` 枚を預かって、`target` へ飛ばし始める。
    ///
    /// 目的地は、カードを取り出す前の `target` の「次に置く位置」で一度だけ決める。
    pub fn start(id: AnimationId, board: &mut Board, source: ZoneId, count: usize, target: ZoneId, duration: f32) -> Self {
        let src = board.zone(source);
        let start = src
            .len()
            .checked_sub(count)
            .and_then(|i| src.cards().get(i))
            .map_or_else(|| src.next_insertion_point(), |card| card.position);
        let (x_separation, y_separation) = src.separation();
        let target_location = board.zone(target).next_insertion_point();

        let mut cards = board.take_cards(source, count, target);
        for card in &mut cards {
            card.holder = Some(CardHolder::Animation(id));
        }
        debug!(
            "Animation {:?}: {} card(s) {} -> {} ({:?} -> {:?})",
            id,
            cards.len(),
            source,
            target,
            start,
            target_location
        );

        let mut animation = Self {
            id,
            cards,
            source,
            target,
            start,
            location: start,
            target_location,
            x_separation,
            y_separation,
            progress: 0.0,
            duration,
            valid: true,
        };
        animation.reposition_cards();
        animation
    }

    pub fn id(&self) -> AnimationId {
        self.id
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn source(&self) -> ZoneId {
        self.source
    }

    pub fn target(&self) -> ZoneId {
        self.target
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn target_location(&self) -> Position {
        self.target_location
    }

    /// まだ飛んでいるか。着地したら二度と `true` には戻らない。
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// `dt` 秒ぶん進める。着地したらカードを移動先に渡して、その記録を返す。
    ///
    /// 進み具合が 1 に届いたら位置を目的地そのものにするので、到着判定は `==` で確実に止まる。
    pub fn update(&mut self, dt: f32, board: &mut Board) -> Option<CompletedMove> {
        if !self.valid {
            return None;
        }

        self.progress = if self.duration > 0.0 {
            (self.progress + dt.max(0.0) / self.duration).min(1.0)
        } else {
            1.0
        };
        self.location = if self.progress >= 1.0 {
            self.target_location
        } else {
            self.start.lerp(self.target_location, self.progress)
        };
        self.reposition_cards();
        trace!("Animation {:?} at {:?} ({:.2})", self.id, self.location, self.progress);

        if self.location == self.target_location {
            Some(self.finish(board))
        } else {
            None
        }
    }

    fn finish(&mut self, board: &mut Board) -> CompletedMove {
        let cards = mem::take(&mut self.cards);
        let count = cards.len();
        board.receive_cards(self.target, cards);

        let revealed = match self.source {
            ZoneId::Tableau(_) | ZoneId::Discard => board.cleanup(self.source),
            _ => false,
        };
        self.valid = false;
        debug!("Animation {:?} landed on {}", self.id, self.target);

        CompletedMove {
            source: self.source,
            target: self.target,
            count,
            revealed,
        }
    }

    fn reposition_cards(&mut self) {
        let (anchor, dx, dy) = (self.location, self.x_separation, self.y_separation);
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.position = anchor.offset_by(dx, dy, i);
        }
    }
}

/// 動いているアニメーションの一覧。毎フレーム進めて、終わったものを捨てる。
#[derive(Debug, Clone)]
pub struct AnimationSystem {
    animations: Vec<Animation>,
    next_id: u32,
    duration: f32,
}

impl AnimationSystem {
    pub fn new(duration: f32) -> Self {
        Self {
            animations: Vec::new(),
            next_id: 0,
            duration,
        }
    }

    /// 新しいアニメーションを始める。
    pub fn spawn(&mut self, board: &mut Board, source: ZoneId, count: usize, target: ZoneId) -> AnimationId {
        let id = AnimationId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let animation = Animation::start(id, board, source, count, target, self.duration);
        self.animations.push(animation);
        id
    }

    /// 全部のアニメーションを `dt` 秒進めて、着地したものを一覧から外す。
    pub fn run(&mut self, dt: f32, board: &mut Board) -> Vec<CompletedMove> {
        let completed: Vec<CompletedMove> = self
            .animations
            .iter_mut()
            .filter_map(|animation| animation.update(dt, board))
            .collect();
        self.animations.retain(Animation::is_valid);
        completed
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    pub fn is_idle(&self) -> bool {
        self.animations.is_empty()
    }

    /// 飛んでいる途中のカードの枚数。
    pub fn card_count(&self) -> usize {
        self.animations.iter().map(|a| a.cards().len()).sum()
    }

    /// 新しいゲーム用。飛んでいたカードごと捨てる。
    pub fn clear(&mut self) {
        self.animations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Suit;
    use crate::config::game_config::GameConfig;

    fn board_with_column() -> Board {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(
            ZoneId::Tableau(0),
            vec![
                Card::from_value(9, Suit::Club),
                Card::from_value(1, Suit::Heart).face_up(),
            ],
        );
        board
    }

    #[test]
    fn animation_holds_the_cards_while_in_flight() {
        let mut board = board_with_column();
        let mut system = AnimationSystem::new(0.1);
        let id = system.spawn(&mut board, ZoneId::Tableau(0), 1, ZoneId::Foundation(0));

        assert_eq!(board.card_count(), 1);
        assert_eq!(system.card_count(), 1);
        let flying = &system.animations()[0];
        assert_eq!(flying.cards()[0].holder, Some(CardHolder::Animation(id)));
        assert_eq!(flying.target_location(), board.zone(ZoneId::Foundation(0)).position());
        assert!(!system.is_idle());
    }

    #[test]
    fn animation_moves_partway_then_lands_exactly() {
        let mut board = board_with_column();
        let mut system = AnimationSystem::new(0.1);
        system.spawn(&mut board, ZoneId::Tableau(0), 1, ZoneId::Foundation(0));
        let start = system.animations()[0].location();

        assert!(system.run(0.05, &mut board).is_empty(), "半分ではまだ着かない");
        let halfway = system.animations()[0].location();
        assert!(halfway.x > start.x && halfway.x < 640.0);

        // 行き過ぎる dt でも目的地でピタッと止まる
        let completed = system.run(1.0, &mut board);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].source, ZoneId::Tableau(0));
        assert!(completed[0].revealed, "下の裏向きカードがめくれるはず");
        assert!(system.is_idle());

        let foundation = board.zone(ZoneId::Foundation(0));
        assert_eq!(foundation.len(), 1);
        assert_eq!(foundation.cards()[0].position, foundation.position());
        assert_eq!(foundation.cards()[0].holder, Some(CardHolder::Zone(ZoneId::Foundation(0))));
        assert!(board.zone(ZoneId::Tableau(0)).cards()[0].is_face_up);
        println!("アニメーション着地テスト、成功！🛬");
    }

    #[test]
    fn zero_duration_lands_on_the_first_tick() {
        let mut board = board_with_column();
        let mut system = AnimationSystem::new(0.0);
        system.spawn(&mut board, ZoneId::Tableau(0), 1, ZoneId::Tableau(3));

        let completed = system.run(0.0, &mut board);
        assert_eq!(completed.len(), 1);
        assert_eq!(board.zone(ZoneId::Tableau(3)).len(), 1);
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn finished_animation_stays_invalid() {
        let mut board = board_with_column();
        let mut animation = Animation::start(AnimationId(7), &mut board, ZoneId::Tableau(0), 1, ZoneId::Foundation(2), 0.0);
        assert!(animation.update(0.016, &mut board).is_some());
        assert!(!animation.is_valid());
        assert!(animation.update(0.016, &mut board).is_none());
        assert_eq!(board.zone(ZoneId::Foundation(2)).len(), 1);
    }
}
