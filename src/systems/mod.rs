// src/systems/mod.rs

// 盤面を動かすシステムたち！⚙️
// 配る・動かす・アニメーション・勝利判定。どれも `Board` を受け取って処理するよ。
pub mod animation_system;
pub mod deal_system;
pub mod move_card_system;
pub mod win_condition_system;

pub use animation_system::{Animation, AnimationId, AnimationSystem, CompletedMove};
pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{DeckOutcome, DropOutcome, MoveCardSystem};
pub use win_condition_system::WinConditionSystem;
