//! Transformations

use std::ops::Mul;

use crate::point::Point;

/// Affine Transformation
///
/// ```text
/// x' = x * sx  + y * shx + tx
/// y' = x * shy + y * sy  + ty
/// ```
///
/// Operations added to a transform apply after the existing ones
///
///     use polyscan::{Point, Transform};
///
///     let mut t = Transform::new();
///     t.rotate(std::f64::consts::PI);
///     t.translate(2.0, 0.0);
///     let p = t.apply(Point::new(1.0, 0.0));
///     assert!(p.distance(Point::new(1.0, 0.0)) < 1e-12);
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub sy: f64,
    pub shx: f64,
    pub shy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Creates a new identity Transform
    pub fn new() -> Self {
        Self::linear(1.0, 0.0, 0.0, 1.0)
    }
    /// Transform without translation
    fn linear(sx: f64, shx: f64, shy: f64, sy: f64) -> Self {
        Self { sx, sy, shx, shy, tx: 0.0, ty: 0.0 }
    }
    /// Add a translation to the transform
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.tx += dx;
        self.ty += dy;
    }
    /// Add a scaling to the transform
    pub fn scale(&mut self, sx: f64, sy: f64) {
        *self = *self * Self::linear(sx, 0.0, 0.0, sy);
    }
    /// Add a rotation to the transform
    ///
    /// angle is in radians, counter-clockwise for a y-up axis
    pub fn rotate(&mut self, angle: f64) {
        let (sa, ca) = angle.sin_cos();
        *self = *self * Self::linear(ca, -sa, sa, ca);
    }
    /// Transform a point
    ///
    ///     use polyscan::{Point, Transform};
    ///
    ///     let mut t = Transform::new_scale(2.0, 3.0);
    ///     t.translate(1.0, 1.0);
    ///     assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(3.0, 4.0));
    ///
    pub fn apply(&self, p: Point) -> Point {
        Point::new(p.x * self.sx  + p.y * self.shx + self.tx,
                   p.x * self.shy + p.y * self.sy  + self.ty)
    }
    fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Transform can be inverted
    pub fn is_invertible(&self) -> bool {
        let d = self.determinant();
        d.is_finite() && d != 0.0
    }
    /// Invert the transform in place
    ///
    /// A singular transform yields non-finite components
    pub fn invert(&mut self) {
        let d = self.determinant();
        let mut inv = Self::linear(self.sy / d, -self.shx / d, -self.shy / d, self.sx / d);
        let t = inv.apply(Point::new(self.tx, self.ty));
        inv.translate(-t.x, -t.y);
        *self = inv;
    }
    pub fn new_scale(sx: f64, sy: f64) -> Transform {
        Self::linear(sx, 0.0, 0.0, sy)
    }
    pub fn new_translate(tx: f64, ty: f64) -> Transform {
        Self { tx, ty, .. Self::new() }
    }
    pub fn new_rotate(ang: f64) -> Transform {
        let mut t = Self::new();
        t.rotate(ang);
        t
    }
}

/// `a * b` applies `a` first, then `b`
impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, m: Transform) -> Self {
        let p = m.apply(Point::new(self.tx, self.ty));
        Transform {
            sx:  m.sx  * self.sx  + m.shx * self.shy,
            shx: m.sx  * self.shx + m.shx * self.sy,
            shy: m.shy * self.sx  + m.sy  * self.shy,
            sy:  m.shy * self.shx + m.sy  * self.sy,
            tx:  p.x,
            ty:  p.y,
        }
    }
}
