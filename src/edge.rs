//! Polygon edges and their scan-ready form

use crate::point::Point;

/// Directed segment between two consecutive polygon vertices
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
    /// Both end points share the same y value
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }
}

/// Line through an edge
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Slope {
    /// y = m * x + b
    Line { m: f64, b: f64 },
    /// x = constant
    Vertical(f64),
}

impl Slope {
    /// x value where the line crosses the horizontal at `y`
    ///
    /// `m` is never zero; horizontal edges have no Slope.
    pub fn x_at(&self, y: f64) -> f64 {
        match *self {
            Slope::Line { m, b } => (y - b) / m,
            Slope::Vertical(x) => x,
        }
    }
}

/// Edge prepared for scanline crossing tests
///
/// `high` and `low` are the y values of the end points with `high > low`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ScanEdge {
    pub high: f64,
    pub low: f64,
    pub slope: Slope,
}

impl ScanEdge {
    /// Classify an Edge, returning `None` for horizontal edges
    ///
    ///     use polyscan::{Edge, Point, ScanEdge, Slope};
    ///
    ///     let e = Edge::new(Point::new(0.0, 0.0), Point::new(2.0, 4.0));
    ///     let s = ScanEdge::from_edge(&e).unwrap();
    ///     assert_eq!(s.high, 4.0);
    ///     assert_eq!(s.low, 0.0);
    ///     assert_eq!(s.slope, Slope::Line { m: 2.0, b: 0.0 });
    ///
    ///     let flat = Edge::new(Point::new(0.0, 1.0), Point::new(5.0, 1.0));
    ///     assert!(ScanEdge::from_edge(&flat).is_none());
    ///
    pub fn from_edge(edge: &Edge) -> Option<ScanEdge> {
        // Complementary selection: high and low are always opposite ends
        let (high, low) = if edge.start.y >= edge.end.y {
            (edge.start, edge.end)
        } else {
            (edge.end, edge.start)
        };
        let delta = high - low;
        if delta.y == 0.0 {
            return None;
        }
        let slope = if delta.x == 0.0 {
            Slope::Vertical(low.x)
        } else {
            let m = delta.y / delta.x;
            Slope::Line { m, b: low.y - low.x * m }
        };
        Some(ScanEdge { high: high.y, low: low.y, slope })
    }
    /// Edge spans the scanline at `y`, half-open `[low, high)`
    pub fn in_scan_line(&self, y: f64) -> bool {
        self.low <= y && y < self.high
    }
    /// Edge crosses the horizontal through `p` strictly left of `p`
    pub fn passed_by(&self, p: Point) -> bool {
        match self.slope {
            Slope::Line { m, b } => (p.y - b) / m < p.x,
            Slope::Vertical(x) => x < p.x,
        }
    }
    /// Edge is active at `p.y` and lies left of `p`
    pub fn crossed_by(&self, p: Point) -> bool {
        self.in_scan_line(p.y) && self.passed_by(p)
    }
}
