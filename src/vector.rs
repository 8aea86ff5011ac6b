use std::ops::{Add, Mul, Sub};

use num_traits::{Float, Num};
use serde::{Deserialize, Serialize};

pub type Vec2f = Vec2<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Num + Copy> Vec2<T> {
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    pub fn length_sq(self) -> T {
        self.dot(self)
    }

    pub fn distance_sq(self, other: Self) -> T {
        (self - other).length_sq()
    }
}

impl<T: Float> Vec2<T> {
    pub fn length(self) -> T {
        self.length_sq().sqrt()
    }

    pub fn distance(self, other: Self) -> T {
        (self - other).length()
    }
}

impl<T: Num> Add for Vec2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Num> Sub for Vec2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Num + Copy> Mul<T> for Vec2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(value: Vec2<T>) -> Self {
        [value.x, value.y]
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2f,
    pub size: Vec2f,
}

impl Rect {
    pub const fn new(pos: Vec2f, size: Vec2f) -> Self {
        Self { pos, size }
    }

    pub fn max(&self) -> Vec2f {
        self.pos + self.size
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: Vec2f) -> bool {
        let max = self.max();
        (self.pos.x..=max.x).contains(&point.x) && (self.pos.y..=max.y).contains(&point.y)
    }
}

/// Distance from `point` to the segment `a..b`, or `None` if the segment has zero length.
pub fn segment_distance(point: Vec2f, a: Vec2f, b: Vec2f) -> Option<f32> {
    let dir = b - a;
    let len_sq = dir.length_sq();
    if len_sq == 0.0 {
        return None;
    }

    let t = ((point - a).dot(dir) / len_sq).clamp(0.0, 1.0);
    let projection = a + dir * t;
    Some(point.distance(projection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_are_inclusive() {
        let rect = Rect::new([10.0, 10.0].into(), [20.0, 5.0].into());
        assert!(rect.contains([10.0, 10.0].into()));
        assert!(rect.contains([30.0, 15.0].into()));
        assert!(!rect.contains([30.5, 15.0].into()));
        assert!(!rect.contains([9.0, 12.0].into()));
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Vec2f::new(0.0, 0.0);
        let b = Vec2f::new(10.0, 0.0);

        assert_eq!(segment_distance([5.0, 3.0].into(), a, b), Some(3.0));
        // past the end the nearest endpoint counts, not the infinite line
        assert_eq!(segment_distance([14.0, 3.0].into(), a, b), Some(5.0));
        assert_eq!(segment_distance([-3.0, -4.0].into(), a, b), Some(5.0));
    }

    #[test]
    fn zero_length_segment_has_no_distance() {
        let p = Vec2f::new(1.0, 1.0);
        assert_eq!(segment_distance(p, p, p), None);
    }
}
