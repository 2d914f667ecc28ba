//! ゲームの勝利条件判定ロジックを定義するよ。

/// 1つの組札が完成したか (A から K まで 13 枚)。
pub fn is_foundation_complete(card_count: usize) -> bool {
    card_count == 13
}

/// ゲームのクリア条件（4つの組札が全部 13 枚ずつ）を判定する。
pub fn check_win_condition(foundation_card_counts: &[usize]) -> bool {
    foundation_card_counts.len() == 4 && foundation_card_counts.iter().all(|&count| is_foundation_complete(count))
}
