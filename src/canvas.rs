use image::{Rgb, RgbImage};
use tiny_skia::{Color, FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

pub use tiny_skia::Point;

/// A square canvas that draws flat, aliased shapes onto a `tiny_skia::Pixmap`.
///
/// Pixel `(x, y)` covers the area `x..x + 1`, `y..y + 1`. Rectangles and
/// ellipses take inclusive pixel boxes: fractional corners are truncated and
/// the far row and column are covered. Polygon and line points are placed in
/// continuous pixel space.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Returns `None` for a zero size.
    pub fn new(size: u32, fill: Rgb<u8>) -> Option<Self> {
        let mut pixmap = Pixmap::new(size, size)?;
        pixmap.fill(Color::from_rgba8(fill[0], fill[1], fill[2], 255));
        Some(Self { pixmap })
    }

    /// Flattens the pixmap into an RGB image. Everything drawn is opaque.
    pub fn into_image(self) -> RgbImage {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        RgbImage::from_fn(width, height, |x, y| {
            let idx = (y * width + x) as usize;
            let c = self.pixmap.pixels()[idx].demultiply();
            Rgb([c.red(), c.green(), c.blue()])
        })
    }

    pub fn fill_rect(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb<u8>) {
        if let Some(rect) = pixel_box(x0, y0, x1, y1) {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
    }

    /// Fills a closed polygon with the even-odd rule. Fewer than three points draw nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb<u8>) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.x, first.y);
        for p in rest {
            pb.line_to(p.x, p.y);
        }
        pb.close();

        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::EvenOdd,
                Transform::identity(),
                None,
            );
        }
    }

    /// Strokes a straight segment `width` pixels wide with flat ends.
    pub fn draw_line(&mut self, from: Point, to: Point, width: u32, color: Rgb<u8>) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width: width.max(1) as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }

    /// Fills the ellipse inscribed in an inclusive pixel box.
    pub fn fill_ellipse(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgb<u8>) {
        let Some(path) = pixel_box(x0, y0, x1, y1).and_then(PathBuilder::from_oval) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

fn paint(color: Rgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color[0], color[1], color[2], 255);
    paint.anti_alias = false;
    paint
}

/// The area covered by the pixels `x0..=x1`, `y0..=y1`, corners in any order.
fn pixel_box(x0: f32, y0: f32, x1: f32, y1: f32) -> Option<Rect> {
    let (left, right) = (x0.min(x1).floor(), x0.max(x1).floor() + 1.0);
    let (top, bottom) = (y0.min(y1).floor(), y0.max(y1).floor() + 1.0);
    Rect::from_ltrb(left, top, right, bottom)
}
