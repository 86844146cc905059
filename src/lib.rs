//! Supersampled polygon scan conversion
//!
//! How does this work
//!
//!    polygon = Polygon::from_xy( .. )
//!    ras     = Rasterizer::new()
//!    mask    = ras.scan_raster(shader, &polygon)
//!
//!  Rasterize
//!    ScanEdges::from_source()       -- Edge -> ScanEdge, horizontals dropped
//!    ras.extent()                   -- bounding pixels, clipped
//!    for every pixel (in parallel with `multithreading`)
//!      SampleDepth::points()        -- 32 points on 4 radii around center
//!      ScanEdges::in_scan()         -- even-odd over active, passed edges
//!      coverage = inside / samples
//!      shader(center), alpha *= coverage
//!    Output: Mask with Extent and one Rgba32 per pixel
//!  Render to Image
//!    RenderingBase::blend_mask()
//!      Pixfmt::blend_pix()
//!    RenderingBase::to_file()
//!
//! ```
//! use polyscan::{Pixfmt, Polygon, Rasterizer, RenderingBase, Rgb8, Rgba8};
//!
//! // Draw a triangle from (10,10) - (50,90) - (90,10)
//! let triangle = Polygon::from_xy(&[(10.,10.), (50.,90.), (90.,10.)]).unwrap();
//! let ras = Rasterizer::new();
//! let mask = ras.scan_raster(|_| Rgba8::black(), &triangle);
//!
//! // Blend it into a white 100x100 image
//! let mut ren_base = RenderingBase::new(Pixfmt::<Rgb8>::new(100, 100));
//! ren_base.clear(Rgba8::white());
//! ren_base.blend_mask(&mask);
//! assert_eq!(ren_base.pixf.get((50, 30)), Rgba8::black());
//! ```

pub mod error;
pub mod point;
pub mod edge;
pub mod scan;
pub mod sample;
pub mod clip;
pub mod extent;
pub mod mask;
pub mod polygon;
pub mod transform;
pub mod raster;
pub mod color;
pub mod math;
pub mod buffer;
pub mod pixfmt;
pub mod base;
pub mod render;
pub mod ppm;

pub use crate::error::*;
pub use crate::point::*;
pub use crate::edge::*;
pub use crate::scan::*;
pub use crate::sample::*;
pub use crate::clip::*;
pub use crate::extent::*;
pub use crate::mask::*;
pub use crate::polygon::*;
pub use crate::transform::*;
pub use crate::raster::*;
pub use crate::color::*;
pub use crate::math::*;
pub use crate::buffer::*;
pub use crate::pixfmt::*;
pub use crate::base::*;
pub use crate::render::*;

/// Access to Color properties and compoents
pub trait Color {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
    /// Return if the color is completely transparent, alpha = 0.0
    fn is_transparent(&self) -> bool { self.alpha() == 0.0 }
}

/// Ordered vertices of a closed polygon
pub trait VertexSource {
    /// Vertices in drawing order
    fn vertices(&self) -> &[Point];
    /// Edges between consecutive vertices, including the closing edge
    ///   from the last vertex back to the first
    fn edges(&self) -> Vec<Edge> {
        let v = self.vertices();
        let n = v.len();
        (0 .. n).map(|i| Edge::new(v[i], v[(i+1) % n])).collect()
    }
}

/// Storage layout of a single pixel in a [Pixfmt](pixfmt/struct.Pixfmt.html)
pub trait Pixel {
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Layout passed on when writing image files
    fn color_type() -> image::ColorType;
    /// Store `c` into the pixel's components
    fn write(px: &mut [u8], c: Rgba8);
    /// Load the pixel's components
    fn read(px: &[u8]) -> Rgba8;
}
