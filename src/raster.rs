//! Supersampling Rasterizer

use crate::color::Rgba32;
use crate::error::Error;
use crate::extent::Extent;
use crate::mask::Mask;
use crate::point::Point;
use crate::sample::SampleDepth;
use crate::scan::ScanEdges;
use crate::Color;
use crate::Result;
use crate::VertexSource;

/// Rasterizer producing shaded coverage masks
///
/// Coverage of a pixel is the fraction of its sample points that lie inside
///   the polygon under the even-odd rule. The shader is evaluated once per
///   pixel at the pixel center and its alpha scaled by the coverage.
#[derive(Debug,Clone,PartialEq)]
pub struct Rasterizer {
    pixel_size: f64,
    depth: SampleDepth,
    gamma: Option<Vec<f64>>,
    clip: Option<Extent>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Create a rasterizer with unit pixels and 32 samples per pixel
    pub fn new() -> Self {
        Self { pixel_size: 1.0,
               depth: SampleDepth::Super32,
               gamma: None,
               clip: None,
        }
    }
    /// Create a rasterizer with pixels `pixel_size` wide
    pub fn with_pixel_size(pixel_size: f64) -> Result<Self> {
        let mut ras = Self::new();
        ras.set_pixel_size(pixel_size)?;
        Ok(ras)
    }
    /// Create a rasterizer with a gamma function, see [gamma](#method.gamma)
    pub fn new_with_gamma<F>(gfunc: F) -> Self
        where F: Fn(f64) -> f64
    {
        let mut ras = Self::new();
        ras.gamma(gfunc);
        ras
    }
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }
    /// Set the linear size of a pixel, in polygon units
    pub fn set_pixel_size(&mut self, pixel_size: f64) -> Result<()> {
        if !(pixel_size.is_finite() && pixel_size > 0.0) {
            return Err(Error::InvalidPixelSize(pixel_size));
        }
        self.pixel_size = pixel_size;
        Ok(())
    }
    pub fn depth(&self) -> SampleDepth {
        self.depth
    }
    /// Set the number of samples taken per pixel
    pub fn set_depth(&mut self, depth: SampleDepth) {
        self.depth = depth;
    }
    /// Apply a gamma function to the coverage
    ///
    /// The function is tabulated at 256 points over [0,1]; coverage is
    ///   rounded to the nearest entry
    pub fn gamma<F>(&mut self, gfunc: F)
        where F: Fn(f64) -> f64
    {
        let aa_mask = 255.0;
        self.gamma = Some((0..256)
                          .map(|i| gfunc(f64::from(i) / aa_mask))
                          .map(|v| v.max(0.0).min(1.0))
                          .collect());
    }
    /// Remove the gamma function, coverage is used as is
    pub fn reset_gamma(&mut self) {
        self.gamma = None;
    }
    /// Restrict output to pixels `x1 .. x2` by `y1 .. y2`
    pub fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.clip = Some(Extent::new(x1, y1, x2, y2));
    }
    pub fn reset_clipping(&mut self) {
        self.clip = None;
    }
    /// Pixels evaluated for a polygon
    ///
    /// The polygon's bounding pixels, limited by the clip box if set
    pub fn extent<VS: VertexSource>(&self, vs: &VS) -> Extent {
        let extent = Extent::from_source(vs, self.pixel_size);
        match self.clip {
            Some(ref clip) => extent.intersect(clip),
            None => extent,
        }
    }
    /// Fraction of the samples around `center` inside the polygon
    ///
    ///     use polyscan::{Point, Polygon, Rasterizer, ScanEdges};
    ///
    ///     let square = Polygon::from_xy(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)]).unwrap();
    ///     let edges = ScanEdges::from_source(&square);
    ///     let ras = Rasterizer::new();
    ///     assert_eq!(ras.coverage(&edges, Point::new(1.5, 1.5)), 1.0);
    ///     assert_eq!(ras.coverage(&edges, Point::new(9.5, 1.5)), 0.0);
    ///
    pub fn coverage(&self, edges: &ScanEdges, center: Point) -> f64 {
        let pts = self.depth.points(center, self.pixel_size);
        let hits = pts.iter().filter(|&&p| edges.in_scan(p)).count();
        let opacity = hits as f64 / pts.len() as f64;
        match self.gamma {
            Some(ref table) => table[(opacity * 255.0).round() as usize],
            None => opacity,
        }
    }
    /// Rasterize a polygon, shading every pixel of its extent
    ///
    /// `shader` is called exactly once per pixel with the pixel center.
    ///   The returned mask holds the shaded colors with alpha scaled by
    ///   the pixel coverage.
    pub fn scan_raster<F, C, VS>(&self, shader: F, polygon: &VS) -> Mask
        where F: Fn(Point) -> C + Sync,
              C: Color,
              VS: VertexSource
    {
        let edges = ScanEdges::from_source(polygon);
        let extent = self.extent(polygon);
        let mut mask = extent.mask();
        log::debug!("scan raster: {} scan edges, {}x{} pixels, {} samples per pixel",
                    edges.len(), extent.width(), extent.height(), self.depth.samples());

        let pixel_size = self.pixel_size;
        let shade = |i: usize, slot: &mut Rgba32| {
            let (col, row) = extent.coord(i);
            let center = Extent::center(col, row, pixel_size);
            let opacity = self.coverage(&edges, center);
            *slot = Rgba32::from_trait(shader(center)).with_alpha(opacity);
        };

        #[cfg(feature = "multithreading")]
        {
            use rayon::prelude::*;
            mask.colors.par_iter_mut()
                .enumerate()
                .for_each(|(i, slot)| shade(i, slot));
        }
        #[cfg(not(feature = "multithreading"))]
        {
            mask.colors.iter_mut()
                .enumerate()
                .for_each(|(i, slot)| shade(i, slot));
        }
        mask
    }
}

/// Rasterize a polygon with unit pixels and 32 samples per pixel
///
///     use polyscan::{scan_raster, Polygon, Rgba8};
///
///     let square = Polygon::from_xy(&[(0.,0.), (3.,0.), (3.,3.), (0.,3.)]).unwrap();
///     let mask = scan_raster(|_| Rgba8::black(), &square);
///     assert_eq!(mask.extent.len(), 9);
///     assert_eq!(mask.get(1, 1).unwrap().a, 1.0);
///
pub fn scan_raster<F, C, VS>(shader: F, polygon: &VS) -> Mask
    where F: Fn(Point) -> C + Sync,
          C: Color,
          VS: VertexSource
{
    Rasterizer::new().scan_raster(shader, polygon)
}
