// src/controller.rs
//! ゲーム全体の司令塔だよ！🎮
//!
//! 盤面 (`Board`)、飛んでいるアニメーション、点数を持っていて、
//! ポインターの入力を振り分けて、毎フレーム `update(dt)` でアニメーションと自動クリアを進める。
//! 1フレームの中で全部同期的に処理するので、ロックも非同期もいらない。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::game_config::GameConfig;
use crate::logic::scoring::Score;
use crate::snapshot::BoardSnapshot;
use crate::systems::{
    Animation, AnimationSystem, CompletedMove, DealInitialCardsSystem, DeckOutcome, DropOutcome, MoveCardSystem,
    WinConditionSystem,
};
use crate::zones::{Zone, ZoneId};

/// 入力側が判定したクリックの種類。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

pub struct GameController {
    config: GameConfig,
    board: Board,
    animations: AnimationSystem,
    deal_system: DealInitialCardsSystem,
    move_system: MoveCardSystem,
    win_system: WinConditionSystem,
    rng: StdRng,
    score: Score,
    /// 山札の上でポインターが押された。離したときも山札の上ならめくる。
    deck_armed: bool,
}

impl GameController {
    /// 新しいゲームを配った状態で作る。
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// シード固定。テストやリプレイ用。
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut controller = Self {
            board: Board::new(&config),
            animations: AnimationSystem::new(config.animation_seconds),
            deal_system: DealInitialCardsSystem,
            move_system: MoveCardSystem::new(),
            win_system: WinConditionSystem::new(),
            rng,
            score: Score::default(),
            deck_armed: false,
            config,
        };
        controller.new_game();
        controller
    }

    /// 52枚を作り直して配り直す。選択中のカード、アニメーション、点数、自動クリアも全部リセット。
    pub fn new_game(&mut self) {
        self.board = Board::new(&self.config);
        self.animations.clear();
        self.win_system.reset();
        self.score.reset();
        self.deck_armed = false;
        self.deal_system
            .execute(&mut self.board, &mut self.rng, self.config.shuffle_passes);
        info!("新しいゲーム開始！ (draw {})", self.config.draw_mode.count());
    }

    /// アニメーション中や自動クリア中は新しい操作を受け付けない。
    pub fn is_input_locked(&self) -> bool {
        self.win_system.is_auto_winning() || !self.animations.is_idle()
    }

    pub fn handle_pointer_down(&mut self, x: f32, y: f32, kind: ClickKind) {
        if self.is_input_locked() {
            debug!("pointer down ignored while animating");
            return;
        }
        if self.board.selection().is_active() {
            return;
        }

        if kind == ClickKind::Double && self.handle_double_click(x, y) {
            return;
        }

        match self.board.find_clicked_zone(x, y) {
            Some(ZoneId::Deck) => self.deck_armed = true,
            Some(id) => {
                if let Some(count) = self.board.zone(id).get_clicked(x, y) {
                    self.move_system.pick_up(&mut self.board, id, count, x, y);
                }
            }
            None => {}
        }
    }

    /// 自動クリアできるならそれを始める。できなければクリックしたカードを組札へ。
    /// 何かしたら `true`。
    fn handle_double_click(&mut self, x: f32, y: f32) -> bool {
        if self.win_system.start_auto_win(&self.board) {
            return true;
        }
        let Some(id) = self.board.find_clicked_zone(x, y) else {
            return false;
        };
        if self.board.zone(id).get_clicked(x, y) != Some(1) {
            return false;
        }
        self.move_system
            .auto_play(&mut self.board, &mut self.animations, id)
            .is_some()
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32) {
        self.move_system.drag(&mut self.board, x, y);
    }

    pub fn handle_pointer_up(&mut self, x: f32, y: f32) {
        if self.board.selection().source().is_some() {
            if let Some(DropOutcome::Placed {
                source,
                target,
                revealed,
                ..
            }) = self
                .move_system
                .drop_selection(&mut self.board, &mut self.animations, x, y)
            {
                self.score_move(source, target, revealed);
            }
        } else if self.deck_armed && self.board.deck().is_clicked(x, y) {
            if let DeckOutcome::Recycled(_) = self.move_system.click_deck(&mut self.board, self.config.draw_mode) {
                let delta = self.config.scoring.for_recycle(self.config.draw_mode);
                self.score.apply(delta);
            }
        }
        self.deck_armed = false;
    }

    /// UI のボタンなどから自動クリアを頼む。始められたら `true`。
    pub fn request_auto_win(&mut self) -> bool {
        if !self.animations.is_idle() || self.board.selection().is_active() {
            return false;
        }
        self.win_system.start_auto_win(&self.board)
    }

    /// 1フレームぶん進める。アニメーション → 点数 → 自動クリアの次の一手。
    pub fn update(&mut self, dt: f32) {
        let completed = self.animations.run(dt, &mut self.board);
        for CompletedMove {
            source,
            target,
            revealed,
            ..
        } in completed
        {
            if source != ZoneId::Selection {
                self.score_move(source, target, revealed);
            }
        }
        self.win_system.step(&mut self.board, &mut self.animations);
    }

    fn score_move(&mut self, source: ZoneId, target: ZoneId, revealed: bool) {
        let rules = &self.config.scoring;
        let mut delta = rules.for_move(source, target);
        if revealed {
            delta += rules.reveal_tableau_card;
        }
        self.score.apply(delta);
        debug!("score {:+} -> {}", delta, self.score.value());
    }

    // --- 読み出し ---

    /// 4つの組札が全部13枚になったか。
    pub fn game_over(&self) -> bool {
        self.win_system.is_game_over(&self.board)
    }

    pub fn is_auto_winning(&self) -> bool {
        self.win_system.is_auto_winning()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// いま持ち上げているカード (カーソルに付いて描く用)。
    pub fn selection(&self) -> &Zone {
        self.board.selection()
    }

    /// 飛んでいる途中のアニメーション (描く用)。
    pub fn animations(&self) -> &[Animation] {
        self.animations.animations()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// 盤面と飛んでいるカードを合わせた枚数。いつでも 52。
    pub fn card_count(&self) -> usize {
        self.board.card_count() + self.animations.card_count()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}
