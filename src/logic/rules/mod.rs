//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも World やパイルを持たない純粋な判定関数で、パイルと Solitaire から呼ばれる。

pub mod common;
pub mod foundation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use common::CardColor;
pub use foundation::can_move_to_foundation;
pub use stock_waste::{can_deal_from_stock, can_recycle_waste};
pub use tableau::{can_move_to_tableau, is_valid_tableau_run};
pub use win_condition::check_win_condition;
