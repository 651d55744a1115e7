//! The raster boundary: what a renderer needs from a drawing surface.
//!
//! ## Rust Lesson #14: Traits
//!
//! A trait is a set of methods a type promises to provide, a bit like an
//! interface. The renderers are generic over `S: Surface`, so the same code
//! draws into a `tiny_skia::Pixmap` in the app and into a plain recording
//! buffer in tests.

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Rgba8;
use crate::geometry::Point;

/// Stroke settings for a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba8,
    pub width: f64,
}

/// A fixed-size RGBA8 drawing surface.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Rgba8);

    /// Write one pixel. Out-of-bounds writes are ignored.
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8);

    /// Read one pixel back, `None` when out of bounds.
    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8>;

    /// Stroke a connected polyline through `points`.
    ///
    /// The first point starts the path, each following point adds a
    /// straight segment. Fewer than two points draws nothing.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);

    /// Straight RGBA8 rows (`width * 4` bytes each) for bulk writes.
    ///
    /// Surfaces that cannot hand out their buffer return `None` and get
    /// written one `set_pixel` at a time instead.
    fn rgba_mut(&mut self) -> Option<&mut [u8]> {
        None
    }

    /// Midpoint of the surface in pixel coordinates.
    fn center(&self) -> Point {
        Point::new(self.width() as f64 / 2.0, self.height() as f64 / 2.0)
    }
}

// tiny-skia stores premultiplied pixels. Every pixel the renderers write is
// opaque, where premultiplied and straight bytes are the same, so
// `rgba_mut` can expose the buffer as-is.
impl Surface for Pixmap {
    fn width(&self) -> u32 {
        Pixmap::width(self)
    }

    fn height(&self) -> u32 {
        Pixmap::height(self)
    }

    fn clear(&mut self, color: Rgba8) {
        self.fill(Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
        let width = Pixmap::width(self);
        if x >= width || y >= Pixmap::height(self) {
            return;
        }
        let idx = (y as usize * width as usize + x as usize) * 4;
        let data = self.data_mut();
        data[idx] = premultiply(color.r, color.a);
        data[idx + 1] = premultiply(color.g, color.a);
        data[idx + 2] = premultiply(color.b, color.a);
        data[idx + 3] = color.a;
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        // Pixmap::pixel only bounds-checks the flat index, so x past the row
        // end would read the next row.
        if x >= Pixmap::width(self) || y >= Pixmap::height(self) {
            return None;
        }
        let c = Pixmap::pixel(self, x, y)?.demultiply();
        Some(Rgba8 { r: c.red(), g: c.green(), b: c.blue(), a: c.alpha() })
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                pb.move_to(p.x as f32, p.y as f32);
            } else {
                pb.line_to(p.x as f32, p.y as f32);
            }
        }

        // Non-finite coordinates make the path unbuildable; nothing is drawn.
        let Some(path) = pb.finish() else {
            log::debug!("skipping stroke: path with {} points has no finite bounds", points.len());
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(style.color.r, style.color.g, style.color.b, style.color.a);
        paint.anti_alias = true;

        let stroke = Stroke {
            width: style.width as f32,
            ..Stroke::default()
        };

        self.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn rgba_mut(&mut self) -> Option<&mut [u8]> {
        Some(self.data_mut())
    }
}

#[inline]
fn premultiply(channel: u8, alpha: u8) -> u8 {
    ((channel as u16 * alpha as u16 + 127) / 255) as u8
}

#[cfg(test)]
pub(crate) mod testing {
    //! A surface that records draw calls instead of rasterizing them.

    use super::*;

    #[derive(Debug, Clone)]
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub pixels: Vec<Rgba8>,
        pub clears: Vec<Rgba8>,
        pub strokes: Vec<(Vec<Point>, StrokeStyle)>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![Rgba8 { r: 0, g: 0, b: 0, a: 0 }; (width * height) as usize],
                clears: Vec::new(),
                strokes: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn clear(&mut self, color: Rgba8) {
            self.clears.push(color);
            self.pixels.iter_mut().for_each(|p| *p = color);
        }

        fn set_pixel(&mut self, x: u32, y: u32, color: Rgba8) {
            if x < self.width && y < self.height {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }

        fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
            if x < self.width && y < self.height {
                Some(self.pixels[(y * self.width + x) as usize])
            } else {
                None
            }
        }

        fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
            self.strokes.push((points.to_vec(), *style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixmap_clear_and_read_back() {
        let mut pixmap = Pixmap::new(4, 3).unwrap();
        pixmap.clear(Rgba8::opaque(10, 20, 30));
        assert_eq!(Surface::pixel(&pixmap, 3, 2), Some(Rgba8::opaque(10, 20, 30)));
        assert_eq!(Surface::pixel(&pixmap, 4, 0), None);
    }

    #[test]
    fn pixmap_read_past_row_end_is_none() {
        let mut pixmap = Pixmap::new(4, 3).unwrap();
        pixmap.clear(Rgba8::BLACK);
        pixmap.set_pixel(1, 1, Rgba8::WHITE);
        // (5, 0) would alias (1, 1) through the flat index
        assert_eq!(Surface::pixel(&pixmap, 5, 0), None);
        assert_eq!(Surface::pixel(&pixmap, 0, 3), None);
        assert_eq!(Surface::pixel(&pixmap, 1, 1), Some(Rgba8::WHITE));
    }

    #[test]
    fn pixmap_set_pixel_bounds() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.set_pixel(1, 1, Rgba8::WHITE);
        pixmap.set_pixel(5, 5, Rgba8::WHITE);
        assert_eq!(Surface::pixel(&pixmap, 1, 1), Some(Rgba8::WHITE));
        assert_eq!(Surface::pixel(&pixmap, 0, 0), Some(Rgba8 { r: 0, g: 0, b: 0, a: 0 }));
    }

    #[test]
    fn pixmap_exposes_rows() {
        let mut pixmap = Pixmap::new(3, 2).unwrap();
        let rows = pixmap.rgba_mut().unwrap();
        assert_eq!(rows.len(), 3 * 2 * 4);
    }

    #[test]
    fn stroke_touches_pixels_along_the_line() {
        let mut pixmap = Pixmap::new(20, 20).unwrap();
        pixmap.clear(Rgba8::BLACK);
        let style = StrokeStyle { color: Rgba8::WHITE, width: 3.0 };
        pixmap.stroke_polyline(&[Point::new(2.0, 10.0), Point::new(18.0, 10.0)], &style);

        let mid = Surface::pixel(&pixmap, 10, 10).unwrap();
        assert!(mid.r > 200, "expected stroked pixel, got {:?}", mid);
        assert_eq!(Surface::pixel(&pixmap, 10, 2), Some(Rgba8::BLACK));
    }

    #[test]
    fn stroke_with_nan_is_skipped() {
        let mut pixmap = Pixmap::new(8, 8).unwrap();
        pixmap.clear(Rgba8::BLACK);
        let style = StrokeStyle { color: Rgba8::WHITE, width: 2.0 };
        pixmap.stroke_polyline(&[Point::new(f64::NAN, 1.0), Point::new(4.0, 4.0)], &style);
        pixmap.stroke_polyline(&[Point::new(1.0, 1.0)], &style);
        assert!(pixmap.data().chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }

    #[test]
    fn center_is_midpoint() {
        let pixmap = Pixmap::new(500, 400).unwrap();
        assert_eq!(Surface::center(&pixmap), Point::new(250.0, 200.0));
    }
}
