//! Raster surface backing a canvas element.
//!
//! A [`Surface`] pairs a Cairo ARGB32 image surface with the single drawing
//! context used to paint into it. The pixel buffer is premultiplied ARGB, so a
//! blank surface is all zero bytes.

use super::color::Color;
use std::io::Write;
use thiserror::Error;

/// Largest edge length Cairo accepts for image surfaces.
pub const MAX_SURFACE_EDGE: u32 = 32767;

/// Errors raised while acquiring or exporting a surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size {width}x{height} (each edge must be 1-{max})", max = MAX_SURFACE_EDGE)]
    InvalidSize { width: u32, height: u32 },

    #[error("2D rendering context unavailable: {0}")]
    ContextUnavailable(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(String),
}

/// A single pixel read back from the surface, in raw premultiplied channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub fn is_transparent(self) -> bool {
        self.a == 0 && self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Canvas pixel buffer plus its 2D context.
pub struct Surface {
    image: cairo::ImageSurface,
    ctx: cairo::Context,
    width: u32,
    height: u32,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Allocates a blank surface and acquires its drawing context.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidSize`] when either edge is zero or larger
    /// than [`MAX_SURFACE_EDGE`], and [`SurfaceError::ContextUnavailable`]
    /// when Cairo cannot create the surface or context.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let valid = 1..=MAX_SURFACE_EDGE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        let image =
            cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)?;
        let ctx = cairo::Context::new(&image)?;
        log::debug!("Acquired {width}x{height} drawing context");

        Ok(Self {
            image,
            ctx,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Paints a straight segment with round caps and joins.
    pub fn draw_segment(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        line_width: f64,
    ) -> Result<(), cairo::Error> {
        let ctx = &self.ctx;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(line_width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(from.0, from.1);
        ctx.line_to(to.0, to.1);
        ctx.stroke()
    }

    /// Erases every pixel, restoring the surface to fully transparent.
    pub fn clear(&self) -> Result<(), cairo::Error> {
        self.ctx.save()?;
        self.ctx.set_operator(cairo::Operator::Clear);
        let painted = self.ctx.paint();
        self.ctx.restore()?;
        painted
    }

    /// Runs `f` over the raw ARGB32 bytes (row stride included).
    fn with_pixels<T>(&self, f: impl FnOnce(&[u8], usize) -> T) -> Option<T> {
        let stride = self.image.stride() as usize;
        let mut out = None;
        self.image
            .with_data(|data| out = Some(f(data, stride)))
            .ok()?;
        out
    }

    /// Returns true when no pixel carries any color or alpha.
    pub fn is_blank(&self) -> bool {
        self.painted_pixel_count() == 0
    }

    /// Counts pixels that are not fully transparent.
    pub fn painted_pixel_count(&self) -> usize {
        let (width, height) = (self.width as usize, self.height as usize);
        self.with_pixels(|data, stride| {
            (0..height)
                .map(|row| {
                    let start = row * stride;
                    data[start..start + width * 4]
                        .chunks_exact(4)
                        .filter(|px| px.iter().any(|byte| *byte != 0))
                        .count()
                })
                .sum()
        })
        .unwrap_or(0)
    }

    /// Reads a single pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.with_pixels(|data, stride| {
            let offset = y as usize * stride + x as usize * 4;
            let bytes = [
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ];
            // ARGB32 is a native-endian u32 per pixel.
            let value = u32::from_ne_bytes(bytes);
            Pixel {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            }
        })
    }

    /// Encodes the current pixel buffer as PNG into `writer`.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> Result<(), SurfaceError> {
        self.image.flush();
        self.image
            .write_to_png(writer)
            .map_err(|err| SurfaceError::Png(err.to_string()))
    }

    /// Encodes the current pixel buffer as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, SurfaceError> {
        let mut buffer = Vec::new();
        self.write_png(&mut buffer)?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;

    #[test]
    fn new_surface_is_blank() {
        let surface = Surface::new(40, 20).unwrap();
        assert_eq!(surface.width(), 40);
        assert_eq!(surface.height(), 20);
        assert!(surface.is_blank());
    }

    #[test]
    fn rejects_zero_and_oversized_edges() {
        assert!(matches!(
            Surface::new(0, 10),
            Err(SurfaceError::InvalidSize { width: 0, height: 10 })
        ));
        assert!(matches!(
            Surface::new(10, MAX_SURFACE_EDGE + 1),
            Err(SurfaceError::InvalidSize { .. })
        ));
    }

    #[test]
    fn segment_paints_opaque_pixels() {
        let surface = Surface::new(50, 50).unwrap();
        surface.draw_segment((5.0, 25.0), (45.0, 25.0), BLACK, 4.0).unwrap();

        let center = surface.pixel(25, 25).unwrap();
        assert_eq!(center.a, 255);
        assert_eq!((center.r, center.g, center.b), (0, 0, 0));
        assert!(surface.pixel(25, 5).unwrap().is_transparent());
    }

    #[test]
    fn clear_restores_blank_buffer() {
        let surface = Surface::new(30, 30).unwrap();
        surface.draw_segment((0.0, 0.0), (30.0, 30.0), BLACK, 6.0).unwrap();
        assert!(!surface.is_blank());

        surface.clear().unwrap();
        assert!(surface.is_blank());
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let surface = Surface::new(4, 4).unwrap();
        assert!(surface.pixel(4, 0).is_none());
        assert!(surface.pixel(0, 4).is_none());
    }

    #[test]
    fn png_bytes_carry_signature() {
        let surface = Surface::new(8, 8).unwrap();
        let png = surface.to_png_bytes().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
