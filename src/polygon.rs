//! Polygon storage

use crate::clip::Rectangle;
use crate::error::Error;
use crate::extent::bounding_rect;
use crate::point::Point;
use crate::transform::Transform;
use crate::Result;
use crate::VertexSource;

/// Winding direction of a polygon
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PathOrientation {
    Clockwise,
    CounterClockwise
}

/// Closed polygon
///
/// Holds at least three finite vertices; the last vertex connects back to
///   the first.
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl VertexSource for Polygon {
    fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Polygon {
    /// Create a new polygon from its vertices
    ///
    ///     use polyscan::{Error, Point, Polygon};
    ///
    ///     let p = Polygon::new(vec![Point::new(0.,0.), Point::new(1.,0.)]);
    ///     assert!(matches!(p, Err(Error::TooFewVertices(2))));
    ///
    ///     let p = Polygon::new(vec![Point::new(0.,0.), Point::new(1.,0.), Point::new(0., f64::NAN)]);
    ///     assert!(matches!(p, Err(Error::NonFiniteVertex { index: 2, .. })));
    ///
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::TooFewVertices(vertices.len()));
        }
        if let Some((index, p)) = vertices.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(Error::NonFiniteVertex { index, x: p.x, y: p.y });
        }
        Ok(Self { vertices })
    }
    /// Create a new polygon from (x,y) pairs
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self> {
        Self::new(xy.iter().map(|&p| Point::from(p)).collect())
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// Signed area, positive when counter-clockwise
    fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let twice: f64 = (0 .. n).map(|i| {
            let p1 = self.vertices[i];
            let p2 = self.vertices[(i+1) % n];
            p1.x * p2.y - p1.y * p2.x
        }).sum();
        twice / 2.0
    }
    /// Enclosed area (shoelace formula)
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
    /// Winding direction
    pub fn orientation(&self) -> PathOrientation {
        if self.signed_area() < 0.0 {
            PathOrientation::Clockwise
        } else {
            PathOrientation::CounterClockwise
        }
    }
    /// Reverse the vertex order
    pub fn invert(&mut self) {
        self.vertices.reverse();
    }
    /// Reverse the vertex order if the winding is not `dir`
    pub fn arrange_orientation(&mut self, dir: PathOrientation) {
        if self.orientation() != dir {
            self.invert();
        }
    }
    /// Smallest rectangle holding all vertices
    pub fn bounding_rect(&self) -> Rectangle<f64> {
        bounding_rect(&self.vertices).unwrap_or_default()
    }
    /// Polygon with every vertex passed through `trans`
    pub fn transform(&self, trans: &Transform) -> Polygon {
        let vertices = self.vertices.iter().map(|&p| trans.apply(p)).collect();
        Polygon { vertices }
    }
}
