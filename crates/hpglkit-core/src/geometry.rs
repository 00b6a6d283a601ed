//! 2D vector primitives
//!
//! Points double as vectors; every higher layer (parser, transforms,
//! optimizer, router, exporters) is built from these few operations.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Sub};

/// A coordinate in plotter units
///
/// Coordinates are integral when they come out of the parser and when
/// they are exported, but transforms work in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The plotter origin, where every job starts and ends
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product, treating both points as vectors
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product, treating both points as vectors
    pub fn cross(&self, other: &Point) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Vector length
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (*self - *other).length()
    }

    /// Snap to the nearest whole plotter unit
    pub fn rounded(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn scale(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.x * fx, self.y * fy)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

/// Angle at `vertex` between the rays back to `prev` and on to `next`
///
/// Returns radians in `[0, π]`: π for a straight run, small values for a
/// sharp spike. Defined as 0 when `prev == next`. Rounding noise that
/// pushes the cosine outside `[-1, 1]` is clamped; a zero-length ray
/// gives an undefined ratio and is reported as π (no turn).
pub fn vertex_angle(prev: Point, vertex: Point, next: Point) -> f64 {
    if prev == next {
        return 0.0;
    }
    let back = prev - vertex;
    let forward = next - vertex;
    let ratio = back.dot(&forward) / (back.length() * forward.length());
    if ratio.is_nan() {
        return PI;
    }
    ratio.clamp(-1.0, 1.0).acos()
}

/// True when `vertex` lies strictly between `prev` and `next` on one line
///
/// This is the `vertex_angle == π` case decided without `acos`, so it is
/// exact for integral coordinates.
pub fn is_straight(prev: Point, vertex: Point, next: Point) -> bool {
    if prev == vertex || vertex == next {
        return false;
    }
    let back = prev - vertex;
    let forward = next - vertex;
    back.cross(&forward) == 0.0 && back.dot(&forward) < 0.0
}

/// Point at fraction `t` along `a -> b`
///
/// `t` outside `[0, 1]` extrapolates past either end.
pub fn extend(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y))
}
