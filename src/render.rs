//! Renderer

use crate::base::RenderingBase;
use crate::mask::Mask;
use crate::point::Point;
use crate::raster::Rasterizer;
use crate::Color;
use crate::Pixel;
use crate::VertexSource;

/// Rasterize a polygon and blend it into an image
///
/// Returns the mask that was blended
pub fn render_polygon<T,F,C,VS>(ren: &mut RenderingBase<T>,
                                ras: &Rasterizer,
                                shader: F,
                                polygon: &VS) -> Mask
    where T: Pixel,
          F: Fn(Point) -> C + Sync,
          C: Color,
          VS: VertexSource
{
    let mask = ras.scan_raster(shader, polygon);
    ren.blend_mask(&mask);
    mask
}

/// Render polygons into an image, each with a single color
///
/// Polygons are drawn in order, later ones over earlier ones
pub fn render_all_polygons<T,VS,C>(ren: &mut RenderingBase<T>,
                                   ras: &Rasterizer,
                                   polygons: &[VS],
                                   colors: &[C])
    where T: Pixel,
          C: Color + Copy + Sync,
          VS: VertexSource
{
    debug_assert!(polygons.len() == colors.len());
    for (polygon, &color) in polygons.iter().zip(colors.iter()) {
        render_polygon(ren, ras, move |_| color, polygon);
    }
}
