
extern crate polyscan;

use polyscan::{Error, Extent, PathOrientation, Point, Polygon, Rasterizer, Rectangle, Transform, VertexSource};

#[test]
fn too_few_vertices() {
    match Polygon::from_xy(&[]) {
        Err(Error::TooFewVertices(0)) => {},
        other => panic!("unexpected {:?}", other),
    }
    match Polygon::from_xy(&[(0.,0.), (1.,1.)]) {
        Err(Error::TooFewVertices(2)) => {},
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn non_finite_vertex() {
    let r = Polygon::from_xy(&[(0.,0.), (std::f64::INFINITY, 1.), (0.,2.)]);
    match r {
        Err(Error::NonFiniteVertex { index, x, y }) => {
            assert_eq!(index, 1);
            assert!(x.is_infinite());
            assert_eq!(y, 1.0);
        },
        other => panic!("unexpected {:?}", other),
    }
    let msg = format!("{}", Polygon::from_xy(&[(0.,0.), (1.,1.)]).unwrap_err());
    assert!(msg.contains('2'), "{}", msg);
}

#[test]
fn orientation_and_area() {
    let ccw = Polygon::from_xy(&[(0.,0.), (4.,0.), (4.,3.), (0.,3.)]).unwrap();
    assert_eq!(ccw.orientation(), PathOrientation::CounterClockwise);
    assert_eq!(ccw.area(), 12.0);

    let mut cw = ccw.clone();
    cw.invert();
    assert_eq!(cw.orientation(), PathOrientation::Clockwise);
    assert_eq!(cw.area(), 12.0);
    assert_eq!(cw.vertices()[0], Point::new(0.0, 3.0));

    cw.arrange_orientation(PathOrientation::CounterClockwise);
    assert_eq!(cw.orientation(), PathOrientation::CounterClockwise);
    let before = cw.clone();
    cw.arrange_orientation(PathOrientation::CounterClockwise);
    assert_eq!(cw, before);
}

#[test]
fn bounding_rect() {
    let tri = Polygon::from_xy(&[(3.,-1.), (-2.,4.), (5.,2.5)]).unwrap();
    assert_eq!(tri.bounding_rect(), Rectangle::new(-2.0, -1.0, 5.0, 4.0));
    assert_eq!(tri.len(), 3);
    assert!(!tri.is_empty());
}

#[test]
fn transformed_polygon() {
    let tri = Polygon::from_xy(&[(0.,0.), (1.,0.), (0.,1.)]).unwrap();
    let mut t = Transform::new_scale(4.0, 2.0);
    t.translate(1.0, 1.0);
    let big = tri.transform(&t);
    assert_eq!(big.vertices(), &[Point::new(1.,1.), Point::new(5.,1.), Point::new(1.,3.)][..]);
    assert_eq!(big.area(), 4.0);

    let mut inv = t;
    assert!(inv.is_invertible());
    inv.invert();
    assert_eq!(big.transform(&inv), tri);

    let quarter = Transform::new_rotate(std::f64::consts::PI / 2.0);
    let p = quarter.apply(Point::new(1.0, 0.0));
    assert!(p.distance(Point::new(0.0, 1.0)) < 1e-12);
    assert!(!Transform::new_scale(0.0, 1.0).is_invertible());
}

#[test]
fn composed_transforms() {
    let a = Transform::new_translate(2.0, 0.0);
    let b = Transform::new_scale(3.0, 3.0);
    let p = Point::new(1.0, 1.0);
    assert_eq!((a * b).apply(p), b.apply(a.apply(p)));
    assert_eq!((a * b).apply(p), Point::new(9.0, 3.0));
    assert_eq!((b * a).apply(p), Point::new(5.0, 3.0));
}

#[test]
fn extent_of_polygon() {
    let tri = Polygon::from_xy(&[(-1.5,0.2), (2.0,0.2), (0.,3.)]).unwrap();
    let e = Extent::from_source(&tri, 1.0);
    assert_eq!(e, Extent::new(-2, 0, 2, 3));
    assert_eq!((e.width(), e.height(), e.len()), (4, 3, 12));

    let coords: Vec<_> = e.coords().collect();
    assert_eq!(coords.len(), 12);
    assert_eq!(coords[0], (-2, 0));
    assert_eq!(coords[1], (-1, 0));
    assert_eq!(coords[4], (-2, 1));
    for (i, &(col, row)) in coords.iter().enumerate() {
        assert_eq!(e.index(col, row), Some(i));
        assert_eq!(e.coord(i), (col, row));
    }
    assert_eq!(e.index(2, 0), None);
    assert_eq!(e.index(-3, 1), None);

    // Half sized pixels double the grid
    assert_eq!(Extent::from_source(&tri, 0.5), Extent::new(-3, 0, 4, 6));
}

#[test]
fn extent_geometry() {
    assert_eq!(Extent::center(0, 0, 1.0), Point::new(0.5, 0.5));
    assert_eq!(Extent::center(-2, 3, 0.5), Point::new(-0.75, 1.75));

    let a = Extent::new(0, 0, 4, 4);
    let b = Extent::new(2, -1, 6, 3);
    assert_eq!(a.intersect(&b), Extent::new(2, 0, 4, 3));
    let none = a.intersect(&Extent::new(5, 5, 8, 8));
    assert!(none.is_empty());
    assert_eq!(none.len(), 0);

    let m = a.mask();
    assert_eq!(m.colors.len(), 16);
    assert!(m.colors.iter().all(|c| c.a == 0.0));
}

#[test]
fn rectangle_clip_flags() {
    use polyscan::{BOTTOM, INSIDE, LEFT, RIGHT, TOP};
    let r = Rectangle::new(4, 4, 0, 0);
    assert_eq!(r, Rectangle { x1: 0, y1: 0, x2: 4, y2: 4 });
    assert_eq!(r.clip_flags(2, 2), INSIDE);
    assert_eq!(r.clip_flags(-1, 2), LEFT);
    assert_eq!(r.clip_flags(5, 2), RIGHT);
    assert_eq!(r.clip_flags(2, -1), BOTTOM);
    assert_eq!(r.clip_flags(2, 5), TOP);
    assert_eq!(r.clip_flags(5, 5), RIGHT | TOP);
    assert!(r.contains(4, 4));
    assert_eq!(r.intersect(&Rectangle::new(3, 3, 9, 9)), Some(Rectangle::new(3, 3, 4, 4)));
    assert_eq!(r.intersect(&Rectangle::new(6, 6, 9, 9)), None);
}

#[test]
fn huge_coordinates_saturate_extent() {
    let p = Polygon::from_xy(&[(-1e19,0.), (1e19,0.), (0.,1.)]).unwrap();
    let e = Rasterizer::new().extent(&p);
    assert_eq!(e.x1, std::i64::MIN);
    assert_eq!(e.x2, std::i64::MAX);
    assert_eq!(e.height(), 1);
    assert_eq!(e.width(), std::i64::MAX as usize);
    assert_eq!(e.len(), std::i64::MAX as usize);
    assert_eq!(e.index(std::i64::MAX - 1, 0), Some(std::u64::MAX as usize - 1));
    assert_eq!(e.index(0, 0), Some(1usize << 63));
}

#[test]
fn inverted_extent_is_empty() {
    let e = Extent { x1: 5, y1: 0, x2: 0, y2: 3 };
    assert_eq!(e.width(), 0);
    assert_eq!(e.height(), 3);
    assert!(e.is_empty());
    assert_eq!(e.index(2, 1), None);
    assert_eq!(e.coords().count(), 0);
    assert_eq!(Extent::new(5, 0, 0, 3), Extent { x1: 5, y1: 0, x2: 5, y2: 3 });
}

#[test]
fn point_arithmetic() {
    let mut p = Point::new(1.0, 2.0);
    p += Point::new(2.0, 2.0);
    assert_eq!(p, Point::new(3.0, 4.0));
    assert_eq!(p.distance(Point::default()), 5.0);
    assert_eq!(p.raw_distance(Point::default()), 25.0);
    p -= Point::new(1.0, 1.0);
    p *= 2.0;
    assert_eq!(p, Point::new(4.0, 6.0));
    assert_eq!(p * Point::new(0.5, -1.0), Point::new(2.0, -6.0));
    assert_eq!(Point::from((1.5, -2.0)) - p, Point::new(-2.5, -8.0));
    assert!(!Point::new(std::f64::NAN, 0.0).is_finite());
}
