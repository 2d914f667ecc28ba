// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの大きさ、各ゾーンの座標、カード同士の重なり具合 (separation) など。

use crate::components::position::{Position, Size};
use crate::config::game_config::GameConfig;

pub const CARD_WIDTH: f32 = 131.0; // カード画像の幅
pub const CARD_HEIGHT: f32 = 200.0; // カード画像の高さ
pub const CARD_SIZE: Size = Size::new(CARD_WIDTH, CARD_HEIGHT);

// --- 山札 (Deck) ---
pub const DECK_POS_X: f32 = 10.0;
pub const DECK_POS_Y: f32 = 10.0;

// --- 捨て札 (Discard) --- 山札の右隣
pub const DISCARD_GAP: f32 = 30.0; // 山札との隙間
pub const DISCARD_POS_X: f32 = DECK_POS_X + CARD_WIDTH + DISCARD_GAP;
pub const DISCARD_POS_Y: f32 = DECK_POS_Y;
pub const DISCARD_SEPARATION: f32 = 20.0; // 窓の中のカードの横ずれ

// --- 組札 (Foundation) --- 上の段、画面の右半分
pub const FOUNDATION_POS_Y: f32 = DECK_POS_Y;
pub const FOUNDATION_COUNT: usize = 4;

// --- 場札 (Tableau) ---
pub const TABLEAU_COUNT: usize = 7;
pub const TABLEAU_CARD_SEPARATION: f32 = 30.0; // 場札の縦ずれ

pub const EMPTY_ZONE_BORDER: f32 = 2.0; // 空のゾーンに描く枠線の太さ

/// 各ゾーンのアンカー (左上) 座標。`GameConfig` のウィンドウサイズから計算するよ。
#[derive(Debug, Clone, PartialEq)]
pub struct BoardLayout {
    pub card_size: Size,
    pub deck: Position,
    pub discard: Position,
    pub foundations: [Position; FOUNDATION_COUNT],
    pub tableaus: [Position; TABLEAU_COUNT],
}

impl BoardLayout {
    pub fn from_config(config: &GameConfig) -> Self {
        // 組札は画面の真ん中から右へ 4 つ並べる
        let foundation_start = config.window_width / 2.0;
        let foundation_space = (foundation_start - CARD_WIDTH * FOUNDATION_COUNT as f32) / FOUNDATION_COUNT as f32;
        let foundations = std::array::from_fn(|i| {
            Position::new(
                foundation_start + (foundation_space + CARD_WIDTH) * i as f32,
                FOUNDATION_POS_Y,
            )
        });

        // 場札は 7 列を等間隔に
        let tableau_space = (config.window_width - CARD_WIDTH * TABLEAU_COUNT as f32) / (TABLEAU_COUNT + 1) as f32;
        let tableau_y = config.window_height / 3.0;
        let tableaus = std::array::from_fn(|i| {
            Position::new(
                tableau_space + (tableau_space + CARD_WIDTH) * i as f32,
                tableau_y,
            )
        });

        Self {
            card_size: CARD_SIZE,
            deck: Position::new(DECK_POS_X, DECK_POS_Y),
            discard: Position::new(DISCARD_POS_X, DISCARD_POS_Y),
            foundations,
            tableaus,
        }
    }
}
