// src/systems/mod.rs

// Solitaire のメソッドを役割ごとに分けたファイルたちだよ。
// どれも `impl Solitaire` を足すだけなので、ここで公開するものは無い。
mod deal_system;
mod move_card_system;
mod win_condition_system;
