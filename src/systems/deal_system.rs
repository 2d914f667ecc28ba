// src/systems/deal_system.rs

use log::info;
use rand::Rng;

use crate::board::Board;
use crate::config::layout::TABLEAU_COUNT;
use crate::logic::deck::create_standard_deck;
use crate::zones::ZoneId;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 新しい52枚を山札に入れて、シャッフルする。
    /// 2. 場札の j 列目 (1〜7) に j 枚ずつ配る。最後の1枚だけ表向き。
    /// 3. 残り24枚が山札に残る。
    ///
    /// `board` は空っぽである前提。
    pub fn execute<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R, shuffle_passes: u32) {
        assert_eq!(board.card_count(), 0, "deal expects an empty board");

        board.receive_cards(ZoneId::Deck, create_standard_deck());
        board.deck_mut().shuffle(rng, shuffle_passes);

        for column in 0..TABLEAU_COUNT {
            board.move_cards(ZoneId::Deck, column + 1, ZoneId::Tableau(column as u8));
        }
        info!("🃏 配り終わり！ 山札に {} 枚", board.deck().len());
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game_config::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_deal_follows_klondike_layout() {
        let mut board = Board::new(&GameConfig::default());
        DealInitialCardsSystem.execute(&mut board, &mut StdRng::seed_from_u64(2024), 1);

        assert_eq!(board.deck().len(), 24);
        assert!(board.discard().is_empty());
        let dealt: usize = board.tableaus().iter().map(|t| t.len()).sum();
        assert_eq!(dealt, 28);

        for (i, tableau) in board.tableaus().iter().enumerate() {
            assert_eq!(tableau.len(), i + 1, "{} 列目の枚数がおかしい", i + 1);
            let (top, rest) = tableau.cards().split_last().expect("column is not empty");
            assert!(top.is_face_up && !top.is_nested);
            assert!(rest.iter().all(|c| !c.is_face_up && c.is_nested));
        }
        assert!(board.deck().cards().iter().all(|c| !c.is_face_up));
        println!("初期配置テスト、成功！🎉");
    }

    #[test]
    #[should_panic(expected = "empty board")]
    fn dealing_twice_is_a_bug() {
        let mut board = Board::new(&GameConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        DealInitialCardsSystem.execute(&mut board, &mut rng, 1);
        DealInitialCardsSystem.execute(&mut board, &mut rng, 1);
    }
}
