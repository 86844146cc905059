//! Points

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Location in the plane
///
/// Uses the same units as the pixel size handed to the
///   [Rasterizer](../raster/struct.Rasterizer.html)
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Euclidean distance to `p`
    pub fn distance(self, p: Point) -> f64 {
        self.raw_distance(p).sqrt()
    }
    /// Squared distance to `p`
    pub fn raw_distance(self, p: Point) -> f64 {
        let d = self - p;
        d.x * d.x + d.y * d.y
    }
    /// Both coordinates are neither NaN nor infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Mul<Point> for Point {
    type Output = Self;
    fn mul(self, rhs: Point) -> Self { Self::new(self.x * rhs.x, self.y * rhs.y) }
}
impl Mul<f64> for Point {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}
impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
