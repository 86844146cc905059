//! Rendering Base

use crate::clip::Rectangle;
use crate::color::Rgba8;
use crate::mask::Mask;
use crate::pixfmt::Pixfmt;
use crate::Color;
use crate::Pixel;

/// Rendering Base
///
/// Composites masks into a [Pixfmt](../pixfmt/struct.Pixfmt.html),
///   dropping pixels outside of the image
#[derive(Debug,Clone)]
pub struct RenderingBase<T> {
    pub pixf: Pixfmt<T>,
}

impl<T: Pixel> RenderingBase<T> {
    /// Create new Rendering Base from Pixel Format
    pub fn new(pixf: Pixfmt<T>) -> RenderingBase<T> {
        RenderingBase { pixf }
    }
    /// Set the image to a single color
    pub fn clear(&mut self, color: Rgba8) {
        self.pixf.fill(&color);
    }
    /// Inclusive pixel limits of the image
    pub fn limits(&self) -> Rectangle<i64> {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        Rectangle { x1: 0, y1: 0, x2: w-1, y2: h-1 }
    }
    /// Blend every pixel of `mask` into the image
    ///
    /// Mask colors carry coverage in their alpha, so they are blended at
    ///   full cover. Pixels with zero alpha are skipped.
    ///
    ///     use polyscan::{Pixfmt, Polygon, Rasterizer, RenderingBase, Rgb8, Rgba8};
    ///
    ///     let mut base = RenderingBase::new(Pixfmt::<Rgb8>::new(8, 8));
    ///     base.clear(Rgba8::white());
    ///     let square = Polygon::from_xy(&[(1.,1.), (7.,1.), (7.,7.), (1.,7.)]).unwrap();
    ///     let mask = Rasterizer::new().scan_raster(|_| Rgba8::black(), &square);
    ///     base.blend_mask(&mask);
    ///     assert_eq!(base.pixf.get((4,4)), Rgba8::black());
    ///     assert_eq!(base.pixf.get((0,0)), Rgba8::white());
    ///
    pub fn blend_mask(&mut self, mask: &Mask) {
        let limits = self.limits();
        for ((x, y), c) in mask.iter() {
            if c.is_transparent() || ! limits.contains(x, y) {
                continue;
            }
            self.pixf.blend_pix((x as usize, y as usize), c, 255);
        }
    }
    /// Raw component data
    pub fn as_bytes(&self) -> &[u8] {
        self.pixf.as_bytes()
    }
    /// Write the image to a file, format chosen by the extension
    pub fn to_file<P: AsRef<std::path::Path>>(&self, filename: P) -> crate::Result<()> {
        self.pixf.to_file(filename)
    }
}
