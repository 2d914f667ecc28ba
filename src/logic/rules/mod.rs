// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! ここにあるのは「置けるか？」を答えるだけの純粋な関数。カードを動かすのは zones / systems の仕事。

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


pub use common::CardColor;
pub use foundation::{can_move_run_to_foundation, can_move_to_foundation};
pub use stock_waste::{can_deal_from_stock, can_reset_stock_from_waste, cards_to_deal};
pub use tableau::{can_move_run_to_tableau, can_move_to_tableau};
pub use win_condition::{check_win_condition, is_foundation_complete};
