// src/systems/win_condition_system.rs
use log::info;

use crate::board::Board;
use crate::logic::auto_move::{can_auto_win, next_auto_win_move};
use crate::logic::rules::check_win_condition;
use crate::systems::animation_system::{AnimationId, AnimationSystem};

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 自動クリア (auto-win) も担当する。アニメーションが全部終わっているときだけ、
/// 1手ずつ組札へ送るアニメーションを出すよ。
#[derive(Debug, Default)]
pub struct WinConditionSystem {
    auto_winning: bool,
}

impl WinConditionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 4つの組札が全部13枚になっていたらクリア！
    pub fn is_game_over(&self, board: &Board) -> bool {
        check_win_condition(&board.foundation_counts())
    }

    pub fn is_auto_winning(&self) -> bool {
        self.auto_winning
    }

    /// 自動クリアを始める。始められない盤面なら `false`。
    pub fn start_auto_win(&mut self, board: &Board) -> bool {
        if self.auto_winning {
            return true;
        }
        if can_auto_win(board) {
            info!("自動クリア開始！🪄");
            self.auto_winning = true;
        }
        self.auto_winning
    }

    pub fn reset(&mut self) {
        self.auto_winning = false;
    }

    /// 自動クリアを1手進める。アニメーションが残っている間は何もしない。
    ///
    /// 出せる手がもうなければ自動クリアを終える。
    pub fn step(&mut self, board: &mut Board, animations: &mut AnimationSystem) -> Option<AnimationId> {
        if !self.auto_winning || !animations.is_idle() {
            return None;
        }
        match next_auto_win_move(board) {
            Some((source, target)) => Some(animations.spawn(board, source, 1, target)),
            None => {
                if self.is_game_over(board) {
                    info!("自動クリア完了！🏆");
                } else {
                    info!("自動クリア: もう動かせるカードがないので終了");
                }
                self.auto_winning = false;
                None
            }
        }
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Suit, ALL_SUITS};
    use crate::config::game_config::GameConfig;
    use crate::zones::ZoneId;

    fn full_foundation(suit: Suit) -> Vec<Card> {
        (1..=13).map(|r| Card::from_value(r, suit).face_up()).collect()
    }

    #[test]
    fn game_over_only_when_all_foundations_are_full() {
        let system = WinConditionSystem::new();
        let mut board = Board::new(&GameConfig::default());
        for (i, &suit) in ALL_SUITS.iter().enumerate().take(3) {
            board.receive_cards(ZoneId::Foundation(i as u8), full_foundation(suit));
        }
        let mut spades: Vec<Card> = full_foundation(Suit::Spade);
        let king = spades.pop().expect("13 cards");
        board.receive_cards(ZoneId::Foundation(3), spades);
        assert!(!system.is_game_over(&board), "12枚の組札がある");

        board.receive_cards(ZoneId::Foundation(3), vec![king]);
        assert!(system.is_game_over(&board));
        println!("勝利条件達成テスト、成功！🏆");
    }

    #[test]
    fn auto_win_runs_one_animation_at_a_time_until_done() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(
            ZoneId::Tableau(0),
            vec![Card::from_value(2, Suit::Heart).face_up(), Card::from_value(1, Suit::Heart).face_up()],
        );
        let mut animations = AnimationSystem::new(0.1);
        let mut system = WinConditionSystem::new();
        assert!(system.start_auto_win(&board));

        assert!(system.step(&mut board, &mut animations).is_some());
        assert!(system.step(&mut board, &mut animations).is_none(), "アニメーション中は次の手を出さない");
        assert_eq!(animations.animations().len(), 1);

        animations.run(1.0, &mut board);
        assert!(system.step(&mut board, &mut animations).is_some());
        animations.run(1.0, &mut board);
        assert!(system.step(&mut board, &mut animations).is_none());
        assert!(!system.is_auto_winning(), "カードがなくなったら終了");
        assert_eq!(board.zone(ZoneId::Foundation(0)).len(), 2);
    }

    #[test]
    fn auto_win_refuses_a_board_with_hidden_cards() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Tableau(0), vec![Card::from_value(5, Suit::Club)]);
        let mut system = WinConditionSystem::new();
        assert!(!system.start_auto_win(&board));
        assert!(!system.is_auto_winning());
    }
}
