//! Reading and writing of image files
//!
//! Formats other than PPM are handled by the `image` crate and chosen by
//!   the file extension.
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Result;

/// Read an image as RGB bytes, returning the data, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}
/// Read an image as RGBA bytes, returning the data, width and height
pub fn read_file_rgba<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}
/// Write RGB bytes to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    log::trace!("writing {}x{} rgb image to {}", width, height, filename.as_ref().display());
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGB(8))?;
    Ok(())
}
/// Write RGBA bytes to an image file
pub fn write_file_rgba<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    log::trace!("writing {}x{} rgba image to {}", width, height, filename.as_ref().display());
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGBA(8))?;
    Ok(())
}
/// Write RGB bytes as a binary (P6) PPM file
pub fn write_ppm<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    let mut fd = File::create(filename)?;
    write!(fd, "P6 {} {} 255 ", width, height)?;
    fd.write_all(buf)?;
    Ok(())
}

/// Compare two image files pixel by pixel
///
/// Differences are reported through `log` at debug level
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        log::debug!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
