// src/controller_tests.rs
//! GameController を通して、ポインター操作から点数・勝利判定まで通しで確かめるテスト。

use crate::board::Board;
use crate::components::card::{Card, Suit, ALL_SUITS};
use crate::config::game_config::{DrawMode, GameConfig};
use crate::controller::{ClickKind, GameController};
use crate::zones::ZoneId;

fn up(rank: u8, suit: Suit) -> Card {
    Card::from_value(rank, suit).face_up()
}

fn down(rank: u8, suit: Suit) -> Card {
    Card::from_value(rank, suit)
}

/// 空っぽの盤面にしたコントローラー。カードはテストごとに並べる。
fn empty_table(config: GameConfig) -> GameController {
    let mut controller = GameController::with_seed(config, 7);
    let empty = Board::new(controller.config());
    *controller.board_mut() = empty;
    controller
}

/// ゾーンの一番上のカード (空ならアンカー) の左上から少し内側。
fn top_point(controller: &GameController, id: ZoneId) -> (f32, f32) {
    let zone = controller.board().zone(id);
    let pos = zone.top_card().map_or(zone.position(), |c| c.position);
    (pos.x + 10.0, pos.y + 10.0)
}

fn drag(controller: &mut GameController, from: ZoneId, to: ZoneId) {
    let (x, y) = top_point(controller, from);
    controller.handle_pointer_down(x, y, ClickKind::Single);
    let (tx, ty) = top_point(controller, to);
    controller.handle_pointer_move(tx, ty);
    controller.handle_pointer_up(tx, ty);
}

fn click_deck(controller: &mut GameController) {
    let (x, y) = top_point(controller, ZoneId::Deck);
    controller.handle_pointer_down(x, y, ClickKind::Single);
    controller.handle_pointer_up(x, y);
}

fn settle(controller: &mut GameController) {
    for _ in 0..1000 {
        if !controller.is_input_locked() {
            return;
        }
        controller.update(0.05);
        assert_eq!(controller.card_count(), 52);
    }
    panic!("animations never settled");
}

#[test]
fn new_game_deals_28_and_leaves_24_in_the_deck() {
    let controller = GameController::with_seed(GameConfig::default(), 1);
    let board = controller.board();

    assert_eq!(board.deck().len(), 24);
    assert!(board.deck().cards().iter().all(|c| !c.is_face_up));
    for (i, tableau) in board.tableaus().iter().enumerate() {
        assert_eq!(tableau.len(), i + 1);
        let (top, rest) = tableau.cards().split_last().expect("dealt column");
        assert!(top.is_face_up);
        assert!(rest.iter().all(|c| !c.is_face_up));
    }
    assert!(board.discard().is_empty());
    assert!(board.foundations().iter().all(|f| f.is_empty()));
    assert_eq!(controller.card_count(), 52);
    assert_eq!(controller.score(), 0);
    println!("Deal test passed! ✅");
}

#[test]
fn same_seed_same_deal() {
    let a = GameController::with_seed(GameConfig::default(), 42);
    let b = GameController::with_seed(GameConfig::default(), 42);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn deck_clicks_keep_52_cards_through_a_full_cycle() {
    let mut controller = GameController::with_seed(GameConfig::default(), 5);

    click_deck(&mut controller);
    assert_eq!(controller.board().discard().len(), 3);
    assert_eq!(controller.board().deck().len(), 21);

    // 24 枚 = 3 枚 × 8 回でちょうど空に
    for _ in 0..7 {
        click_deck(&mut controller);
        assert_eq!(controller.card_count(), 52);
    }
    assert!(controller.board().deck().is_empty());
    assert_eq!(controller.board().discard().len(), 24);

    click_deck(&mut controller);
    assert_eq!(controller.board().deck().len(), 24);
    assert!(controller.board().discard().is_empty());
    assert_eq!(controller.score(), 0, "draw three の戻しは減点なし");
}

#[test]
fn recycle_in_draw_one_never_goes_below_zero() {
    let config = GameConfig {
        draw_mode: DrawMode::One,
        ..GameConfig::default()
    };
    let mut controller = empty_table(config);
    controller
        .board_mut()
        .receive_cards(ZoneId::Discard, vec![up(2, Suit::Club), up(3, Suit::Club)]);

    click_deck(&mut controller);
    assert_eq!(controller.board().deck().len(), 2);
    assert_eq!(controller.score(), 0);

    // 山札も捨て札も空なら何も起きない
    controller.board_mut().move_cards(ZoneId::Deck, 2, ZoneId::Tableau(0));
    click_deck(&mut controller);
    assert!(controller.board().deck().is_empty());
    assert!(controller.board().discard().is_empty());
}

#[test]
fn king_of_spades_to_the_last_foundation_wins() {
    let mut controller = empty_table(GameConfig::default());
    {
        let board = controller.board_mut();
        for (i, suit) in ALL_SUITS.iter().enumerate() {
            let top = if *suit == Suit::Spade { 12 } else { 13 };
            let cards = (1..=top).map(|r| up(r, *suit)).collect();
            board.receive_cards(ZoneId::Foundation(i as u8), cards);
        }
        board.receive_cards(ZoneId::Tableau(0), vec![up(13, Suit::Spade)]);
    }
    let spades = ALL_SUITS.iter().position(|s| *s == Suit::Spade).expect("spade is a suit") as u8;
    assert!(!controller.game_over());

    drag(&mut controller, ZoneId::Tableau(0), ZoneId::Foundation(spades));

    assert!(controller.board().tableaus()[0].is_empty());
    assert_eq!(controller.board().zone(ZoneId::Foundation(spades)).len(), 13);
    assert!(controller.game_over());
    assert_eq!(controller.score(), 10);
    assert!(controller.snapshot().game_over);
    println!("Win test passed! 🏆");
}

#[test]
fn moving_a_run_reveals_and_scores_the_card_below() {
    let mut controller = empty_table(GameConfig::default());
    {
        let board = controller.board_mut();
        board.receive_cards(ZoneId::Tableau(0), vec![down(5, Suit::Club), up(8, Suit::Spade)]);
        board.receive_cards(ZoneId::Tableau(1), vec![up(9, Suit::Diamond)]);
    }

    drag(&mut controller, ZoneId::Tableau(0), ZoneId::Tableau(1));

    let board = controller.board();
    assert_eq!(board.tableaus()[1].len(), 2);
    assert_eq!(board.tableaus()[0].len(), 1);
    assert!(board.tableaus()[0].cards()[0].is_face_up, "下のカードがめくれる");
    assert_eq!(controller.score(), 5);
    assert!(!controller.selection().is_active());
}

#[test]
fn illegal_drop_flies_back_and_locks_input_until_it_lands() {
    let mut controller = GameController::with_seed(GameConfig::default(), 9);
    let original = controller.board().zone(ZoneId::Tableau(6)).clone();

    let (x, y) = top_point(&controller, ZoneId::Tableau(6));
    controller.handle_pointer_down(x, y, ClickKind::Single);
    assert!(controller.selection().is_active());
    controller.handle_pointer_move(5.0, 950.0);
    controller.handle_pointer_up(5.0, 950.0);

    assert!(controller.is_input_locked());
    assert_eq!(controller.card_count(), 52);
    assert_eq!(controller.animations().len(), 1);

    // 飛んでいる間のクリックは無視される
    let (x, y) = top_point(&controller, ZoneId::Tableau(3));
    controller.handle_pointer_down(x, y, ClickKind::Single);
    assert!(!controller.selection().is_active());

    settle(&mut controller);
    assert_eq!(controller.board().zone(ZoneId::Tableau(6)), &original);
    assert_eq!(controller.score(), 0, "戻っただけなら点数は変わらない");
}

#[test]
fn double_click_sends_an_ace_home() {
    let mut controller = empty_table(GameConfig::default());
    controller
        .board_mut()
        .receive_cards(ZoneId::Discard, vec![up(7, Suit::Club), up(1, Suit::Heart)]);
    let (x, y) = top_point(&controller, ZoneId::Discard);

    // 1回目は持ち上げて、その場で離す (元へ戻る)
    controller.handle_pointer_down(x, y, ClickKind::Single);
    controller.handle_pointer_up(x, y);
    controller.update(0.0);
    assert!(!controller.is_input_locked(), "その場で離したらすぐ着地");

    controller.handle_pointer_down(x, y, ClickKind::Double);
    assert_eq!(controller.animations().len(), 1);
    controller.update(1.0);

    assert_eq!(controller.board().zone(ZoneId::Foundation(0)).len(), 1);
    assert_eq!(controller.board().discard().len(), 1);
    assert_eq!(controller.score(), 10);
}

#[test]
fn auto_win_plays_every_card_home() {
    let mut controller = empty_table(GameConfig::default());
    {
        let board = controller.board_mut();
        for (i, suit) in ALL_SUITS.iter().enumerate() {
            let column = (1..=13).rev().map(|r| up(r, *suit)).collect();
            board.receive_cards(ZoneId::Tableau(i as u8), column);
        }
    }
    assert!(controller.request_auto_win());
    assert!(controller.is_input_locked());

    for _ in 0..1000 {
        if !controller.is_auto_winning() {
            break;
        }
        controller.update(0.2);
        assert_eq!(controller.card_count(), 52);
    }

    assert!(!controller.is_auto_winning());
    assert!(controller.game_over());
    assert!(controller.board().tableaus().iter().all(|t| t.is_empty()));
    assert_eq!(controller.score(), 520);
    println!("Auto-win test passed! 🪄");
}

#[test]
fn auto_win_is_refused_while_cards_are_hidden() {
    let mut controller = GameController::with_seed(GameConfig::default(), 3);
    assert!(!controller.request_auto_win());
    assert!(!controller.is_input_locked());
}

#[test]
fn new_game_resets_everything() {
    let mut controller = empty_table(GameConfig::default());
    controller
        .board_mut()
        .receive_cards(ZoneId::Discard, vec![up(1, Suit::Heart)]);
    let (x, y) = top_point(&controller, ZoneId::Discard);
    controller.handle_pointer_down(x, y, ClickKind::Double);
    controller.update(1.0);
    assert_eq!(controller.score(), 10);

    controller.new_game();
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.card_count(), 52);
    assert!(controller.animations().is_empty());
    assert!(!controller.game_over());
}
