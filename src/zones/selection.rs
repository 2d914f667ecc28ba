// src/zones/selection.rs
//! ポインターで持ち上げているカード (ドラッグ中) を預かる特別なゾーン。
//!
//! 持ち上げ元のゾーンと、持ち上げた瞬間のポインターとカードのずれを覚えておいて、
//! ドラッグ中もカードがカーソルにピタッと付いてくるようにするよ。
//! 「ここに置いていい？」の判定 (`is_valid_move`) もここに集めてある。

use log::debug;

use super::{Zone, ZoneBehavior, ZoneId, ZoneKind};
use crate::components::position::Position;
use crate::config::layout::BoardLayout;
use crate::logic::rules::{can_move_run_to_foundation, can_move_run_to_tableau};

/// ドラッグ中の状態。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionState {
    /// 持ち上げ元。空のときは `None`。
    pub source: Option<ZoneId>,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// 振る舞いはベースのまま。
pub struct SelectionBehavior;

impl ZoneBehavior for SelectionBehavior {}

impl Zone {
    pub fn selection(layout: &BoardLayout) -> Self {
        Zone::with_kind(
            ZoneId::Selection,
            ZoneKind::Selection(SelectionState::default()),
            Position::default(),
            layout.card_size,
            0.0,
            0.0,
        )
    }

    fn selection_state(&self) -> &SelectionState {
        match self.kind() {
            ZoneKind::Selection(state) => state,
            _ => panic!("{} is not the selection zone", self.id()),
        }
    }

    fn selection_state_mut(&mut self) -> &mut SelectionState {
        let id = self.id();
        match self.kind_mut() {
            ZoneKind::Selection(state) => state,
            _ => panic!("{} is not the selection zone", id),
        }
    }

    /// 持ち上げ元のゾーン。
    pub fn source(&self) -> Option<ZoneId> {
        self.selection_state().source
    }

    /// 選択中のカードがあるか。
    pub fn is_active(&self) -> bool {
        self.source().is_some() && !self.is_empty()
    }

    /// 持ち上げ元を覚えて、ずらし幅も持ち上げ元に合わせる。
    pub fn set_source_zone(&mut self, source: &Zone) {
        assert!(
            self.is_empty(),
            "selection already holds cards from {:?}",
            self.source()
        );
        let (dx, dy) = source.separation();
        self.set_separation(dx, dy);
        self.selection_state_mut().source = Some(source.id());
    }

    /// 持ち上げる `count` 枚のうち一番下のカードとポインターとのずれを記録する。
    /// アンカーもそのカードの位置にしておくので、取り込んだカードは元の場所のまま見える。
    pub fn set_relative_offsets(&mut self, source: &Zone, count: usize, x: f32, y: f32) {
        let bottom = source.len().checked_sub(count).and_then(|i| source.cards().get(i));
        let origin = match bottom {
            Some(card) => card.position,
            None => source.next_insertion_point(),
        };
        let state = self.selection_state_mut();
        state.offset_x = x - origin.x;
        state.offset_y = y - origin.y;
        self.set_position(origin);
    }

    /// ポインターの位置に合わせてカードを動かす。
    pub fn update_position(&mut self, x: f32, y: f32) {
        let state = *self.selection_state();
        self.set_position(Position::new(x - state.offset_x, y - state.offset_y));
        self.relayout();
    }

    /// 空っぽの「何も持っていない」状態に戻す。
    ///
    /// # Panics
    /// カードが残っているのに呼ぶとパニック。カードが行方不明になっちゃうからね。
    pub fn reset(&mut self) {
        assert!(self.is_empty(), "selection reset while still holding {} cards", self.len());
        *self.selection_state_mut() = SelectionState::default();
        self.set_separation(0.0, 0.0);
    }

    /// 選択中のカードを `dst` に置けるか。置き先のルールは種類ごと。
    pub fn is_valid_move(&self, dst: &Zone) -> bool {
        let valid = match dst.kind() {
            ZoneKind::Foundation => can_move_run_to_foundation(self.cards(), dst.top_card()),
            ZoneKind::Tableau => can_move_run_to_tableau(self.cards(), dst.top_card()),
            _ => false,
        };
        debug!("Selection {} -> {}: {}", self, dst.id(), if valid { "ok" } else { "rejected" });
        valid
    }
}
