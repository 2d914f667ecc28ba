// src/logic/deck.rs

use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スートとランクの組み合わせで全種類作る。
/// 生成された時点では、すべてのカードは裏向きでネストされてる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52); // 52枚入る容量を確保しておくと効率的！

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードの並びをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates。`passes` 回くり返すけど、1回でも十分ランダム。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R, passes: u32) {
    for _ in 0..passes.max(1) {
        deck.shuffle(rng);
    }
}
