//! Pixel extents
//!
//! Maps a polygon's bounding box onto the grid of pixels it touches.
//! Pixel `(col, row)` covers `[col * ps, (col + 1) * ps)` horizontally and
//! `[row * ps, (row + 1) * ps)` vertically, where `ps` is the pixel size.

use crate::clip::Rectangle;
use crate::color::Rgba32;
use crate::mask::Mask;
use crate::point::Point;
use crate::VertexSource;

/// Half-open range of pixel indices, `x1 .. x2` by `y1 .. y2`
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Extent {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Extent {
    /// Create a new Extent, empty ranges are collapsed to zero size
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2: x2.max(x1), y2: y2.max(y1) }
    }
    /// Pixels touched by a bounding box
    pub fn from_rect(r: &Rectangle<f64>, pixel_size: f64) -> Self {
        Self::new((r.x1 / pixel_size).floor() as i64,
                  (r.y1 / pixel_size).floor() as i64,
                  (r.x2 / pixel_size).ceil() as i64,
                  (r.y2 / pixel_size).ceil() as i64)
    }
    /// Pixels touched by the bounding box of a polygon
    ///
    ///     use polyscan::{Extent, Polygon};
    ///
    ///     let tri = Polygon::from_xy(&[(0.5, 0.5), (3.5, 0.5), (0.5, 2.0)]).unwrap();
    ///     let e = Extent::from_source(&tri, 1.0);
    ///     assert_eq!(e, Extent::new(0, 0, 4, 2));
    ///     assert_eq!(e.len(), 8);
    ///
    pub fn from_source<VS: VertexSource>(vs: &VS, pixel_size: f64) -> Self {
        match bounding_rect(vs.vertices()) {
            Some(r) => Self::from_rect(&r, pixel_size),
            None => Self::default(),
        }
    }
    /// Number of columns, 0 when `x2 <= x1`
    ///
    /// Saturates for extents wider than `i64::MAX`
    pub fn width(&self) -> usize {
        span(self.x1, self.x2)
    }
    /// Number of rows, 0 when `y2 <= y1`
    pub fn height(&self) -> usize {
        span(self.y1, self.y2)
    }
    /// Number of pixels, saturating
    pub fn len(&self) -> usize {
        self.width().saturating_mul(self.height())
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, col: i64, row: i64) -> bool {
        col >= self.x1 && col < self.x2 && row >= self.y1 && row < self.y2
    }
    /// Position of pixel `(col,row)` in row-major order
    pub fn index(&self, col: i64, row: i64) -> Option<usize> {
        if !self.contains(col, row) {
            return None;
        }
        let dy = row.wrapping_sub(self.y1) as u64 as usize;
        let dx = col.wrapping_sub(self.x1) as u64 as usize;
        dy.checked_mul(self.width())?.checked_add(dx)
    }
    /// Pixel at position `i` in row-major order
    pub fn coord(&self, i: usize) -> (i64, i64) {
        let w = self.width();
        (self.x1 + (i % w) as i64, self.y1 + (i / w) as i64)
    }
    /// Pixel coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = (i64, i64)> {
        let (x1, x2) = (self.x1, self.x2);
        (self.y1 .. self.y2).flat_map(move |row| (x1 .. x2).map(move |col| (col, row)))
    }
    /// Nominal center of pixel `(col,row)`
    pub fn center(col: i64, row: i64, pixel_size: f64) -> Point {
        Point::new((col as f64 + 0.5) * pixel_size,
                   (row as f64 + 0.5) * pixel_size)
    }
    /// Common pixels of two extents
    pub fn intersect(&self, other: &Extent) -> Extent {
        Extent::new(self.x1.max(other.x1), self.y1.max(other.y1),
                    self.x2.min(other.x2), self.y2.min(other.y2))
    }
    /// Mask over this extent filled with transparent placeholders
    pub fn mask(&self) -> Mask {
        Mask::new(*self, vec![Rgba32::default(); self.len()])
    }
}

fn span(lo: i64, hi: i64) -> usize {
    hi.saturating_sub(lo).max(0) as usize
}

/// Smallest rectangle holding all `pts`
pub fn bounding_rect(pts: &[Point]) -> Option<Rectangle<f64>> {
    let first = pts.first()?;
    let mut r = Rectangle::new(first.x, first.y, first.x, first.y);
    for p in pts {
        r.expand(p.x, p.y);
    }
    Some(r)
}
