//! Supersample constellations

use crate::point::Point;

/// Unit directions visited at every radius, axis neighbors first
const DIRECTIONS: [(f64, f64); 8] = [
    ( 1.0,  0.0),
    (-1.0,  0.0),
    ( 0.0,  1.0),
    ( 0.0, -1.0),
    ( 1.0,  1.0),
    ( 1.0, -1.0),
    (-1.0,  1.0),
    (-1.0, -1.0),
];

/// Number of samples taken per pixel
///
/// `SuperN` visits the first N/8 radii (half, quarter, eighth and sixteenth
///   of a pixel) in eight directions each. `Single` only samples the pixel
///   center, giving binary (aliased) coverage.
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum SampleDepth {
    Single,
    Super8,
    Super16,
    Super24,
    Super32,
}

impl Default for SampleDepth {
    fn default() -> SampleDepth {
        SampleDepth::Super32
    }
}

impl SampleDepth {
    /// Number of radii visited, 0 for `Single`
    pub fn radii(self) -> u32 {
        match self {
            SampleDepth::Single  => 0,
            SampleDepth::Super8  => 1,
            SampleDepth::Super16 => 2,
            SampleDepth::Super24 => 3,
            SampleDepth::Super32 => 4,
        }
    }
    /// Number of sample points per pixel
    pub fn samples(self) -> usize {
        match self {
            SampleDepth::Single => 1,
            _ => self.radii() as usize * DIRECTIONS.len(),
        }
    }
    /// Sample points around `center`
    ///
    /// Ordered radius-major, direction-minor
    pub fn points(self, center: Point, pixel_size: f64) -> Vec<Point> {
        if self == SampleDepth::Single {
            return vec![center];
        }
        let mut out = Vec::with_capacity(self.samples());
        for k in 1 ..= self.radii() {
            let offset = pixel_size / f64::from(1u32 << k);
            for &(dx, dy) in DIRECTIONS.iter() {
                out.push(center + Point::new(dx, dy) * offset);
            }
        }
        out
    }
}

/// The 32 sample points around `center`
///
///     use polyscan::{super_sample, Point};
///
///     let pts = super_sample(Point::new(0.5, 0.5), 1.0);
///     assert_eq!(pts.len(), 32);
///     assert_eq!(pts[0], Point::new(1.0, 0.5));
///     assert_eq!(pts[31], Point::new(0.5 - 1.0/16.0, 0.5 - 1.0/16.0));
///
pub fn super_sample(center: Point, pixel_size: f64) -> Vec<Point> {
    SampleDepth::Super32.points(center, pixel_size)
}
