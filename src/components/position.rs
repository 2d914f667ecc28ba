// src/components/position.rs

// serde を使う宣言！位置情報を JS 側にスナップショットとして送るよ。
use serde::{Deserialize, Serialize};

/// 2D空間での位置を表すよ！ (x, y) 座標を持つ。📍
///
/// カードの左上の角、ゾーンのアンカー、アニメーションの現在地…
/// いろんな場所でこの型を使うよ。
///
/// 座標は `f32`。アニメーションで滑らかに動かすから小数点以下も必要！
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self` を基準に `(dx, dy)` を `steps` 回ぶんずらした位置を返す。
    /// ゾーン内の i 番目のカードの位置計算 (`anchor + i * separation`) に使うよ。
    pub fn offset_by(self, dx: f32, dy: f32, steps: usize) -> Self {
        let steps = steps as f32;
        Self {
            x: self.x + dx * steps,
            y: self.y + dy * steps,
        }
    }

    /// `self` から `target` に向かって `t` (0.0〜1.0) だけ進んだ位置。
    ///
    /// `start + (target - start) * t` の形で計算するので、
    /// `start == target` なら必ず `start` そのものが返る。
    pub fn lerp(self, target: Position, t: f32) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

/// 幅と高さ。カードの大きさやゾーンのバウンディングサイズに使う。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 当たり判定用の矩形。境界線上のクリックも「当たり」として扱うよ (<= で比較)。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.origin.x <= x
            && x <= self.origin.x + self.size.width
            && self.origin.y <= y
            && y <= self.origin.y + self.size.height
    }
}
