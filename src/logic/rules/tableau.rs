//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank};

/// まとまりの一番下のカード `run_bottom` を、一番上が `top` の場札に置けるかチェックする。
///
/// - 空の場札には King から始まるまとまりだけ
/// - そうでなければ色違いで、ランクがちょうど 1 小さいカードだけ
pub fn can_move_to_tableau(run_bottom: &Card, top: Option<&Card>) -> bool {
    let result = match top {
        None => run_bottom.rank == Rank::King,
        Some(top) => {
            let colors_different = run_bottom.is_opposite_color(top);
            let rank_is_one_less = run_bottom.rank.value() + 1 == top.rank.value();
            colors_different && rank_is_one_less
        }
    };
    trace!("[Tableau Rule] {} onto {:?}: {}", run_bottom, top.map(|c| c.to_string()), result);
    result
}

/// まとまり `run` (index 0 が一番下) を場札に置けるか。空のまとまりは置けない。
pub fn can_move_run_to_tableau(run: &[Card], top: Option<&Card>) -> bool {
    run.first().is_some_and(|bottom| can_move_to_tableau(bottom, top))
}
