//! Coverage masks

use std::path::Path;

use crate::color::Rgba32;
use crate::extent::Extent;
use crate::Color;

/// Shaded pixels of one rasterized polygon
///
/// `colors` holds one entry per pixel of `extent`, in row-major order.
/// The alpha of each color already includes the pixel's coverage.
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Mask {
    pub extent: Extent,
    pub colors: Vec<Rgba32>,
}

impl Mask {
    pub fn new(extent: Extent, colors: Vec<Rgba32>) -> Self {
        debug_assert_eq!(extent.len(), colors.len());
        Self { extent, colors }
    }
    /// Color of pixel `(col,row)`, `None` outside the extent
    pub fn get(&self, col: i64, row: i64) -> Option<&Rgba32> {
        self.extent.index(col, row).map(|i| &self.colors[i])
    }
    /// Pixel coordinates with their colors
    pub fn iter(&self) -> impl Iterator<Item = ((i64, i64), &Rgba32)> {
        self.extent.coords().zip(self.colors.iter())
    }
    /// Sum of all alpha values
    pub fn coverage_sum(&self) -> f64 {
        self.colors.iter().map(|c| c.alpha()).sum()
    }
    /// Raw RGBA bytes of the extent, row-major
    pub fn as_bytes(&self) -> Vec<u8> {
        self.colors.iter()
            .flat_map(|c| vec![c.red8(), c.green8(), c.blue8(), c.alpha8()])
            .collect()
    }
    /// Write the mask as an RGBA image
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> crate::Result<()> {
        crate::ppm::write_file_rgba(&self.as_bytes(),
                                    self.extent.width(),
                                    self.extent.height(),
                                    filename)
    }
}
