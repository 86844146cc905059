
extern crate polyscan;

use polyscan::{Edge, Point, Polygon, ScanEdge, ScanEdges, Slope, VertexSource};

fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge {
    Edge::new(Point::new(x1, y1), Point::new(x2, y2))
}

#[test]
fn horizontal_edges_are_dropped() {
    assert_eq!(ScanEdge::from_edge(&edge(0.0, 3.0, 7.0, 3.0)), None);
    assert_eq!(ScanEdge::from_edge(&edge(7.0, 3.0, 0.0, 3.0)), None);
    // Zero length edge is horizontal too
    assert_eq!(ScanEdge::from_edge(&edge(1.0, 1.0, 1.0, 1.0)), None);
}

#[test]
fn vertical_edge() {
    let s = ScanEdge::from_edge(&edge(2.0, 5.0, 2.0, 1.0)).unwrap();
    assert_eq!(s.high, 5.0);
    assert_eq!(s.low, 1.0);
    assert_eq!(s.slope, Slope::Vertical(2.0));
}

#[test]
fn sloped_edge() {
    // y = -x + 1
    let s = ScanEdge::from_edge(&edge(1.0, 0.0, 0.0, 1.0)).unwrap();
    assert_eq!(s.high, 1.0);
    assert_eq!(s.low, 0.0);
    assert_eq!(s.slope, Slope::Line { m: -1.0, b: 1.0 });
    assert_eq!(s.slope.x_at(0.25), 0.75);
}

#[test]
fn direction_does_not_change_classification() {
    let a = ScanEdge::from_edge(&edge(1.0, 2.0, 4.0, 8.0));
    let b = ScanEdge::from_edge(&edge(4.0, 8.0, 1.0, 2.0));
    assert_eq!(a, b);
    assert!(a.unwrap().high > a.unwrap().low);
}

#[test]
fn scan_line_is_half_open() {
    let s = ScanEdge::from_edge(&edge(0.0, 0.0, 0.0, 2.0)).unwrap();
    assert!(s.in_scan_line(0.0));
    assert!(s.in_scan_line(1.999));
    assert!(!s.in_scan_line(2.0));
    assert!(!s.in_scan_line(-0.001));
}

#[test]
fn passed_by_is_strict() {
    let v = ScanEdge::from_edge(&edge(1.0, 0.0, 1.0, 2.0)).unwrap();
    assert!(v.passed_by(Point::new(1.5, 1.0)));
    assert!(!v.passed_by(Point::new(1.0, 1.0)));
    assert!(!v.passed_by(Point::new(0.5, 1.0)));

    // x = y / 2
    let l = ScanEdge::from_edge(&edge(0.0, 0.0, 1.0, 2.0)).unwrap();
    assert!(l.passed_by(Point::new(0.6, 1.0)));
    assert!(!l.passed_by(Point::new(0.5, 1.0)));
    assert!(!l.passed_by(Point::new(0.4, 1.0)));
}

#[test]
fn closed_edges_of_polygon() {
    let tri = Polygon::from_xy(&[(0.,0.), (2.,0.), (0.,2.)]).unwrap();
    let edges = tri.edges();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2], edge(0.0, 2.0, 0.0, 0.0));
    // Bottom edge is horizontal
    assert_eq!(ScanEdges::from_source(&tri).len(), 2);
}

#[test]
fn shared_vertex_counted_once() {
    // Scanline y = 0 passes through the left and right corners
    let diamond = Polygon::from_xy(&[(0.,-1.), (1.,0.), (0.,1.), (-1.,0.)]).unwrap();
    let edges = ScanEdges::from_source(&diamond);
    assert_eq!(edges.crossings(Point::new(0.0, 0.0)), 1);
    assert!(edges.in_scan(Point::new(0.0, 0.0)));
    assert_eq!(edges.crossings(Point::new(2.0, 0.0)), 2);
    assert!(!edges.in_scan(Point::new(2.0, 0.0)));
    assert_eq!(edges.crossings(Point::new(-2.0, 0.0)), 0);
    // Top vertex is the exclusive end of both upper edges
    assert_eq!(edges.crossings(Point::new(0.5, 1.0)), 0);
    // Bottom vertex starts both lower edges, a point right of it passes both
    assert_eq!(edges.crossings(Point::new(0.5, -1.0)), 2);
    assert_eq!(edges.crossings(Point::new(0.0, -1.0)), 0);
}

fn inside_convex(pts: &[(f64, f64)], p: Point) -> bool {
    let n = pts.len();
    let sides: Vec<f64> = (0 .. n).map(|i| {
        let (x1, y1) = pts[i];
        let (x2, y2) = pts[(i+1) % n];
        (x2 - x1) * (p.y - y1) - (y2 - y1) * (p.x - x1)
    }).collect();
    sides.iter().all(|&s| s > 0.0) || sides.iter().all(|&s| s < 0.0)
}

#[test]
fn convex_parity_matches_half_planes() {
    let hex = [(2.0, 0.0), (5.0, 0.5), (6.5, 3.0), (5.0, 6.0), (2.0, 5.5), (0.5, 3.0)];
    let poly = Polygon::from_xy(&hex).unwrap();
    let edges = ScanEdges::from_source(&poly);
    for i in 0 .. 40 {
        for j in 0 .. 40 {
            let p = Point::new(-1.0 + i as f64 * 0.213, -1.0 + j as f64 * 0.197);
            let c = edges.crossings(p);
            assert!(c <= 2, "convex polygon crossed {} times at {:?}", c, p);
            assert_eq!(c % 2 == 1, inside_convex(&hex, p), "at {:?}", p);
        }
    }
}

#[test]
fn self_intersecting_uses_even_odd() {
    // Pentagram: the central pentagon has even parity
    let r = 10.0;
    let pts: Vec<(f64, f64)> = (0 .. 5).map(|i| {
        let a = std::f64::consts::PI / 2.0 + (i * 2) as f64 * 2.0 * std::f64::consts::PI / 5.0;
        (r * a.cos(), r * a.sin())
    }).collect();
    let star = Polygon::from_xy(&pts).unwrap();
    let edges = ScanEdges::from_source(&star);
    assert!(!edges.in_scan(Point::new(0.01, 0.03)));
    // Inside one of the star's points
    assert!(edges.in_scan(Point::new(0.0, 8.0)));
}
