//! Pixel Format

use std::marker::PhantomData;

use crate::buffer::RenderingBuffer;
use crate::color::*;
use crate::math::blend_pix;
use crate::Color;
use crate::Pixel;

impl Pixel for Rgb8 {
    fn bpp() -> usize { 3 }
    fn color_type() -> image::ColorType { image::RGB(8) }
    fn write(px: &mut [u8], c: Rgba8) {
        px[0] = c.r;
        px[1] = c.g;
        px[2] = c.b;
    }
    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::new(px[0], px[1], px[2], 255)
    }
}

impl Pixel for Rgba8 {
    fn bpp() -> usize { 4 }
    fn color_type() -> image::ColorType { image::RGBA(8) }
    fn write(px: &mut [u8], c: Rgba8) {
        px[0] = c.r;
        px[1] = c.g;
        px[2] = c.b;
        px[3] = c.a;
    }
    fn read(px: &[u8]) -> Rgba8 {
        Rgba8::new(px[0], px[1], px[2], px[3])
    }
}

/// Pixel Format Wrapper around raw pixel component data
///
/// `T` selects the stored layout, [Rgb8](../color/struct.Rgb8.html) or
///   [Rgba8](../color/struct.Rgba8.html)
#[derive(Debug,Clone)]
pub struct Pixfmt<T> {
    rbuf: RenderingBuffer,
    phantom: PhantomData<T>,
}

impl<T: Pixel> Pixfmt<T> {
    /// Create new Pixel Format of width * height
    ///
    /// Allocates memory of width * height * bpp
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::new(width, height, T::bpp()),
               phantom: PhantomData
        }
    }
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Size of Rendering Buffer in bytes; width * height * bpp
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Underlying Rendering Buffer
    pub fn rbuf(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    /// Raw component data
    pub fn as_bytes(&self) -> &[u8] {
        &self.rbuf.data
    }
    /// Clear the Image
    ///
    /// All color components are set to 255, including `alpha` if present
    ///
    ///     use polyscan::{Pixfmt,Rgb8,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgb8>::new(2,2);
    ///     pix.clear();
    ///     assert_eq!(pix.get((0,0)), Rgba8::white());
    ///     assert_eq!(pix.get((1,1)), Rgba8::white());
    ///
    pub fn clear(&mut self) {
        self.rbuf.fill(255);
    }
    /// Set every pixel to `c`
    pub fn fill<C: Color>(&mut self, c: &C) {
        for y in 0 .. self.height() {
            for x in 0 .. self.width() {
                self.set((x,y), c);
            }
        }
    }
    /// Color of pixel at (`x`,`y`)
    pub fn get(&self, id: (usize, usize)) -> Rgba8 {
        T::read(&self.rbuf[id])
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// [Color]: ../trait.Color.html
    pub fn set<C: Color>(&mut self, id: (usize, usize), c: &C) {
        T::write(&mut self.rbuf[id], Rgba8::new(c.red8(), c.green8(), c.blue8(), c.alpha8()));
    }
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use polyscan::{Pixfmt,Rgba8};
    ///
    ///     let mut pix = Pixfmt::<Rgba8>::new(1,2);
    ///     let black = Rgba8::black();
    ///     pix.copy_pixel(0,1, black);
    ///     assert_eq!(pix.get((0,0)), Rgba8{r:0, g:0, b:0, a:0});
    ///     assert_eq!(pix.get((0,1)), black);
    ///
    ///     pix.copy_pixel(10,10, black); // Ignored, outside of range
    ///
    /// [Color]: ../trait.Color.html
    pub fn copy_pixel<C: Color>(&mut self, x: usize, y: usize, c: C) {
        if x >= self.rbuf.width || y >= self.rbuf.height {
            return;
        }
        self.set((x,y), &c);
    }
    /// Blend the [Color] `c` onto pixel at (`x`,`y`) with coverage `cover`
    ///
    /// `cover` is in 0 ..= 255 and multiplies the alpha of `c`
    ///
    /// [Color]: ../trait.Color.html
    pub fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: &C, cover: u64) {
        let p = self.get(id);
        let out = blend_pix(&p, c, cover);
        self.set(id, &out);
    }
    /// Write the image to a file, format chosen by the extension
    pub fn to_file<P: AsRef<std::path::Path>>(&self, filename: P) -> crate::Result<()> {
        log::trace!("writing {}x{} image to {}", self.width(), self.height(), filename.as_ref().display());
        image::save_buffer(filename, self.as_bytes(),
                           self.width() as u32, self.height() as u32,
                           T::color_type())?;
        Ok(())
    }
}
