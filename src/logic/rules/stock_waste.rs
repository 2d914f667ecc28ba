//! 山札 (Stock / Deck) と捨て札 (Waste / Discard) に関するルールを定義するよ。

/// 山札から捨て札にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空のときに、捨て札から山札にカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 1回のめくりで実際に動く枚数。山札の残りが少なければそのぶんだけ。
pub fn cards_to_deal(stock_len: usize, draw_count: usize) -> usize {
    stock_len.min(draw_count)
}
