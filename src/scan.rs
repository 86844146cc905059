//! Even-odd inside test over a polygon's scan edges

use crate::edge::Edge;
use crate::edge::ScanEdge;
use crate::point::Point;
use crate::VertexSource;

/// Scan edges of a single polygon
///
/// Built once per raster pass and shared read-only by every sample.
/// Horizontal edges are dropped during construction.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct ScanEdges {
    edges: Vec<ScanEdge>,
}

impl ScanEdges {
    /// Classify a set of edges
    pub fn from_edges<'a, I>(edges: I) -> Self
        where I: IntoIterator<Item = &'a Edge>
    {
        let edges = edges.into_iter()
            .filter_map(|e| {
                let s = ScanEdge::from_edge(e);
                if s.is_none() {
                    log::trace!("dropping horizontal edge {:?}", e);
                }
                s
            })
            .collect();
        Self { edges }
    }
    /// Classify the closed edge set of a polygon
    pub fn from_source<VS: VertexSource>(vs: &VS) -> Self {
        Self::from_edges(&vs.edges())
    }
    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, ScanEdge> {
        self.edges.iter()
    }
    /// Number of edges active at `p.y` lying to the left of `p`
    pub fn crossings(&self, p: Point) -> usize {
        self.edges.iter().filter(|e| e.crossed_by(p)).count()
    }
    /// Point is inside under the even-odd rule
    ///
    ///     use polyscan::{Point, Polygon, ScanEdges};
    ///
    ///     let square = Polygon::from_xy(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)]).unwrap();
    ///     let edges = ScanEdges::from_source(&square);
    ///     assert_eq!(edges.len(), 2);
    ///     assert!(edges.in_scan(Point::new(2.0, 2.0)));
    ///     assert!(!edges.in_scan(Point::new(5.0, 2.0)));
    ///
    pub fn in_scan(&self, p: Point) -> bool {
        self.crossings(p) % 2 == 1
    }
}

impl<'a> IntoIterator for &'a ScanEdges {
    type Item = &'a ScanEdge;
    type IntoIter = std::slice::Iter<'a, ScanEdge>;
    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
