// src/logic/mod.rs

// ゲームのルールや判断ロジックをまとめるモジュールだよ！🧠
// ここは盤面を「読む」だけ。カードを動かすのは zones / systems。
pub mod auto_move;
pub mod deck;
pub mod rules;
pub mod scoring;
