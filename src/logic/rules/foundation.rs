//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

/// `card` を、一番上が `top` の組札に置けるかチェックする。
///
/// - 空 (`top == None`) なら Ace だけ
/// - そうでなければ同じスートで、ランクがちょうど 1 大きいカードだけ
pub fn can_move_to_foundation(card: &Card, top: Option<&Card>) -> bool {
    let result = match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.is_same_suit(top) && card.rank.value() == top.rank.value() + 1,
    };
    trace!("[Foundation Rule] {} onto {:?}: {}", card, top.map(|c| c.to_string()), result);
    result
}

/// 複数枚のまとまり (`run`) を組札に置けるか。組札は1枚ずつしか受け付けない！
pub fn can_move_run_to_foundation(run: &[Card], top: Option<&Card>) -> bool {
    match run {
        [single] => can_move_to_foundation(single, top),
        _ => false,
    }
}
