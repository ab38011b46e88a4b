//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ウェスト（捨て札）をストック（山札）に戻せるかチェックする。
/// 山札にカードが残っている間は戻せない。ウェストが空なら、戻しても何も起きないだけ。
pub fn can_recycle_waste(stock_is_empty: bool) -> bool {
    stock_is_empty
}
