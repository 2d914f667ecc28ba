// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! ダブルクリックで組札に送る先探しと、自動クリア (auto-win) の次の一手を決める。
//! ここは盤面を読むだけ。実際に動かすのは systems の仕事。

use log::{debug, trace};

use crate::board::Board;
use crate::components::card::Card;
use crate::logic::rules::can_move_to_foundation;
use crate::zones::{Zone, ZoneId};

/// `card` を置ける組札を左から探す。見つからなければ `None`。
pub fn find_automatic_foundation_move(board: &Board, card: &Card) -> Option<ZoneId> {
    let found = board
        .foundations()
        .iter()
        .find(|foundation| can_move_to_foundation(card, foundation.top_card()))
        .map(Zone::id);
    trace!("[AutoMove] {} -> {:?}", card, found);
    found
}

/// 自動クリアを始めてよいか。
///
/// 山札と捨て札が空っぽで、場札のカードが全部表向き、しかもまだ場札にカードが残っているとき。
pub fn can_auto_win(board: &Board) -> bool {
    board.deck().is_empty()
        && board.discard().is_empty()
        && board.selection().is_empty()
        && board.tableaus().iter().any(|t| !t.is_empty())
        && board.tableaus().iter().flat_map(|t| t.cards()).all(|c| c.is_face_up)
}

/// 自動クリアの次の一手 (移動元の場札, 移動先の組札)。
///
/// 一番カードの少ない組札に置ける場札の一番上を優先する。空の組札には A を探す。
/// それが無理なら、置ける組み合わせならどれでも。何もなければ `None` (自動クリア終了)。
pub fn next_auto_win_move(board: &Board) -> Option<(ZoneId, ZoneId)> {
    let feeds = |foundation: &Zone| {
        board
            .tableaus()
            .iter()
            .find(|tableau| {
                tableau
                    .top_card()
                    .is_some_and(|card| can_move_to_foundation(card, foundation.top_card()))
            })
            .map(|tableau| (tableau.id(), foundation.id()))
    };

    let step = board
        .foundations()
        .iter()
        .min_by_key(|foundation| foundation.len())
        .and_then(&feeds)
        .or_else(|| board.foundations().iter().find_map(&feeds));
    debug!("[AutoMove] next auto-win step: {:?}", step);
    step
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::config::game_config::GameConfig;

    fn up(rank: u8, suit: Suit) -> Card {
        Card::from_value(rank, suit).face_up()
    }

    #[test]
    fn finds_first_foundation_that_accepts_the_card() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Foundation(0), vec![up(1, Suit::Club)]);
        board.receive_cards(ZoneId::Foundation(1), vec![up(1, Suit::Heart)]);

        assert_eq!(find_automatic_foundation_move(&board, &up(2, Suit::Heart)), Some(ZoneId::Foundation(1)));
        assert_eq!(find_automatic_foundation_move(&board, &up(1, Suit::Spade)), Some(ZoneId::Foundation(2)));
        assert_eq!(find_automatic_foundation_move(&board, &up(3, Suit::Club)), None);
        println!("自動移動先テスト、成功！🎉");
    }

    #[test]
    fn auto_win_needs_every_card_face_up_and_no_stock() {
        let mut board = Board::new(&GameConfig::default());
        assert!(!can_auto_win(&board), "場札が空っぽなら自動クリアすることがない");

        board.receive_cards(ZoneId::Tableau(0), vec![up(13, Suit::Club), up(12, Suit::Heart)]);
        assert!(can_auto_win(&board));

        board.receive_cards(ZoneId::Tableau(1), vec![Card::new(Suit::Spade, Rank::Four)]);
        assert!(!can_auto_win(&board), "裏向きのカードが残ってる");

        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Tableau(0), vec![up(2, Suit::Club)]);
        board.receive_cards(ZoneId::Deck, vec![Card::new(Suit::Spade, Rank::Four)]);
        assert!(!can_auto_win(&board), "山札が残ってる");
    }

    #[test]
    fn auto_win_feeds_the_smallest_foundation_first() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Foundation(0), vec![up(1, Suit::Club), up(2, Suit::Club)]);
        board.receive_cards(ZoneId::Foundation(1), vec![up(1, Suit::Heart)]);
        board.receive_cards(ZoneId::Foundation(2), vec![up(1, Suit::Spade)]);
        board.receive_cards(ZoneId::Foundation(3), vec![up(1, Suit::Diamond)]);
        board.receive_cards(ZoneId::Tableau(0), vec![up(3, Suit::Club)]);
        board.receive_cards(ZoneId::Tableau(4), vec![up(2, Suit::Heart)]);

        assert_eq!(next_auto_win_move(&board), Some((ZoneId::Tableau(4), ZoneId::Foundation(1))));
    }

    #[test]
    fn empty_foundation_takes_an_ace() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Tableau(2), vec![up(2, Suit::Spade), up(1, Suit::Spade)]);

        assert_eq!(next_auto_win_move(&board), Some((ZoneId::Tableau(2), ZoneId::Foundation(0))));
    }

    #[test]
    fn falls_back_to_any_valid_pair_or_stops() {
        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Foundation(0), vec![up(1, Suit::Club)]);
        board.receive_cards(ZoneId::Foundation(1), vec![up(1, Suit::Heart)]);
        board.receive_cards(ZoneId::Foundation(2), vec![up(1, Suit::Spade)]);
        // Foundation(3) が一番少ない (空) けど、A はもうない
        board.receive_cards(ZoneId::Tableau(5), vec![up(2, Suit::Spade)]);
        assert_eq!(next_auto_win_move(&board), Some((ZoneId::Tableau(5), ZoneId::Foundation(2))));

        let mut board = Board::new(&GameConfig::default());
        board.receive_cards(ZoneId::Tableau(5), vec![up(5, Suit::Spade)]);
        assert_eq!(next_auto_win_move(&board), None);
    }
}
