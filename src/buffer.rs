//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and zeroed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every component to `v`
    pub fn fill(&mut self, v: u8) {
        self.data.iter_mut().for_each(|x| *x = v);
    }
    fn offset(&self, (x, y): (usize, usize)) -> usize {
        assert!(x < self.width, "request {} >= {} width", x, self.width);
        assert!(y < self.height, "request {} >= {} height", y, self.height);
        ((y * self.width) + x) * self.bpp
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    /// Components of the pixel at (x,y)
    fn index(&self, index: (usize, usize)) -> &[u8] {
        let i = self.offset(index);
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        let i = self.offset(index);
        let bpp = self.bpp;
        &mut self.data[i .. i + bpp]
    }
}
