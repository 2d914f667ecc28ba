use log::{debug, info};

use crate::board::Board;
use crate::config::game_config::DrawMode;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste, cards_to_deal};
use crate::systems::animation_system::{AnimationId, AnimationSystem};
use crate::zones::{Zone, ZoneId};

/// 持ち上げたカードを離したときの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// 置けた！ `revealed` は移動元の場札でカードがめくれたかどうか。
    Placed {
        source: ZoneId,
        target: ZoneId,
        count: usize,
        revealed: bool,
    },
    /// 置ける場所がなかったので、元の場所へ戻るアニメーションを出した。
    Returned { source: ZoneId, animation: AnimationId },
}

/// 山札をクリックしたときの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckOutcome {
    /// 捨て札へ n 枚めくった。
    Dealt(usize),
    /// 捨て札 n 枚を山札に戻した。
    Recycled(usize),
    /// 山札も捨て札も空っぽ。
    Nothing,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 持ち上げ (pick up)、置く (drop)、戻す (return)、山札クリック、ダブルクリックでの自動移動。
/// 状態は持たない。状態は全部 `Board` と `AnimationSystem` の中。
#[derive(Debug, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// `source` の上から `count` 枚を Selection に持ち上げる。`(x, y)` はポインターの位置。
    pub fn pick_up(&self, board: &mut Board, source: ZoneId, count: usize, x: f32, y: f32) {
        let (selection, src) = board.selection_and(source);
        selection.set_source_zone(src);
        selection.set_relative_offsets(src, count, x, y);
        board.move_cards(source, count, ZoneId::Selection);
        debug!("picked up {} card(s) from {}", count, source);
    }

    /// ドラッグ中のカードをポインターに付いていかせる。
    pub fn drag(&self, board: &mut Board, x: f32, y: f32) {
        if board.selection().is_active() {
            board.selection_mut().update_position(x, y);
        }
    }

    /// `(x, y)` で離した。組札 → 場札の順に置ける場所を探して、なければ元へ戻す。
    /// 何も持っていなければ `None`。
    pub fn drop_selection(&self, board: &mut Board, animations: &mut AnimationSystem, x: f32, y: f32) -> Option<DropOutcome> {
        let selection = board.selection();
        let Some(source) = selection.source() else {
            return None;
        };
        if selection.is_empty() {
            board.selection_mut().reset();
            return None;
        }

        let target = board
            .foundations()
            .iter()
            .chain(board.tableaus())
            .filter(|zone| zone.id() != source)
            .find(|zone| zone.is_dropped_on(x, y) && selection.is_valid_move(zone))
            .map(Zone::id);

        match target {
            Some(target) => Some(self.complete_move(board, source, target)),
            None => self.return_to_source(board, animations),
        }
    }

    /// Selection のカードを `target` に移して、持ち上げ元を片付けて、Selection を空に戻す。
    pub fn complete_move(&self, board: &mut Board, source: ZoneId, target: ZoneId) -> DropOutcome {
        let count = board.selection().len();
        board.move_cards(ZoneId::Selection, count, target);
        let revealed = board.cleanup(source);
        board.selection_mut().reset();
        info!("{} card(s) moved: {} -> {}", count, source, target);
        DropOutcome::Placed {
            source,
            target,
            count,
            revealed,
        }
    }

    /// 持ち上げ元へ戻るアニメーションを出す。すぐには移さない。
    /// カードが本当に戻るのはアニメーションが着地したとき。
    pub fn return_to_source(&self, board: &mut Board, animations: &mut AnimationSystem) -> Option<DropOutcome> {
        let source = board.selection().source()?;
        let count = board.selection().len();
        let animation = animations.spawn(board, ZoneId::Selection, count, source);
        board.selection_mut().reset();
        debug!("returning {} card(s) to {}", count, source);
        Some(DropOutcome::Returned { source, animation })
    }

    /// 山札のクリック。山札があれば `draw` 枚 (足りなければ残り全部) めくる。
    /// 空なら捨て札を全部裏向きにして山札へ戻す。
    pub fn click_deck(&self, board: &mut Board, draw: DrawMode) -> DeckOutcome {
        let deck_is_empty = board.deck().is_empty();
        if can_deal_from_stock(deck_is_empty) {
            let count = cards_to_deal(board.deck().len(), draw.count());
            board.move_cards(ZoneId::Deck, count, ZoneId::Discard);
            DeckOutcome::Dealt(count)
        } else if can_reset_stock_from_waste(deck_is_empty, board.discard().is_empty()) {
            let count = board.discard().len();
            board.move_cards(ZoneId::Discard, count, ZoneId::Deck);
            info!("捨て札 {} 枚を山札に戻したよ", count);
            DeckOutcome::Recycled(count)
        } else {
            DeckOutcome::Nothing
        }
    }

    /// ダブルクリックされたゾーンの一番上のカードを、置ける組札へ飛ばす。
    pub fn auto_play(&self, board: &mut Board, animations: &mut AnimationSystem, source: ZoneId) -> Option<AnimationId> {
        if !matches!(source, ZoneId::Discard | ZoneId::Tableau(_)) {
            return None;
        }
        let card = board.zone(source).top_card().filter(|card| card.is_face_up)?;
        let target = find_automatic_foundation_move(board, card)?;
        Some(animations.spawn(board, source, 1, target))
    }
}
