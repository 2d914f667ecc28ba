// src/components/card.rs

use std::fmt;

// serde を使う宣言！カード情報を JS に渡すスナップショットで使うよ！
use serde::{Deserialize, Serialize};

use crate::components::position::{Position, Rect, Size};
use crate::logic::rules::common::CardColor;
use crate::systems::animation_system::AnimationId;
use crate::zones::ZoneId;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamond, // ♦️
    Heart,   // ❤️
    Club,    // ♣️
    Spade,   // ♠️
}

/// 4種類のスート全部。デッキを作るときのループで使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// スートの色。赤 (Heart, Diamond) か黒 (Club, Spade) か。
    pub fn color(self) -> CardColor {
        CardColor::from(self)
    }

    /// テクスチャ名などに使う1文字 ("D", "H", "C", "S")。
    pub fn initial(self) -> char {
        match self {
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Club => 'C',
            Suit::Spade => 'S',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて大小比較もできるようにしておく！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1, // A は 1
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

/// 13種類のランク全部 (A から K の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1 (Ace) 〜 13 (King) の数値。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。1〜13 以外なら `None`。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// 表示用のラベル。"A", "2" … "10", "J", "Q", "K"。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// いまカードを預かっているのは誰か。
///
/// カードが持つのは「参照」だけ。本当の持ち主はゾーン (またはアニメーション) の
/// カード列の方で、ここはルックアップ用の控えだよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardHolder {
    Zone(ZoneId),
    Animation(AnimationId),
}

/// カードそのものを表す構造体だよ！🃏
///
/// - `suit` / `rank`: 作ったら変わらない
/// - `is_face_up`: 表向きか裏向きか
/// - `is_nested`: 上に別のカードが重なっていて、クリックできる範囲が一部だけになっているか
/// - `position`: 左上の角の座標
/// - `holder`: いまどこにいるか (控え)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub is_nested: bool,
    pub position: Position,
    pub holder: Option<CardHolder>,
}

impl Card {
    /// 新しいカード。最初は裏向きで、ネストされた状態から始まるよ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            is_nested: true,
            position: Position::default(),
            holder: None,
        }
    }

    /// 数値ランクからカードを作る。
    ///
    /// # Panics
    /// `value` が 1〜13 の範囲外ならパニック。ここに来る値はコードの中でしか作られないので、
    /// 範囲外はバグそのもの！
    pub fn from_value(value: u8, suit: Suit) -> Self {
        let rank = Rank::from_value(value)
            .unwrap_or_else(|| panic!("{} is not a valid card value (expected 1..=13)", value));
        Self::new(suit, rank)
    }

    /// 表向きにしたカードを返す (テストや盤面の組み立て用)。
    pub fn face_up(mut self) -> Self {
        self.is_face_up = true;
        self
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_same_suit(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    pub fn is_opposite_color(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    pub fn flip(&mut self) {
        self.is_face_up = !self.is_face_up;
    }

    pub fn make_face_up(&mut self) {
        self.is_face_up = true;
    }

    pub fn make_face_down(&mut self) {
        self.is_face_up = false;
    }

    pub fn nest(&mut self) {
        self.is_nested = true;
    }

    pub fn un_nest(&mut self) {
        self.is_nested = false;
    }

    /// このカードがクリックされたかどうか判定するよ！
    ///
    /// ネストされているカードは、左上から `(nested_width, nested_height)` の帯だけが当たり判定。
    /// 一番上のカード (ネストされていない) はカード全体が当たり判定になる。
    pub fn is_clicked(&self, x: f32, y: f32, nested_width: f32, nested_height: f32, card_size: Size) -> bool {
        let size = if self.is_nested {
            Size::new(nested_width, nested_height)
        } else {
            card_size
        };
        Rect::new(self.position, size).contains(x, y)
    }

    /// カード全体の矩形。
    pub fn bounds(&self, card_size: Size) -> Rect {
        Rect::new(self.position, card_size)
    }

    /// 表面の画像名。"AS" とか "10H" みたいになるよ。
    pub fn texture_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.initial())
    }
}
