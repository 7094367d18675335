use crate::canvas::{Canvas, Point};
use crate::error::{IconError, Result};
use crate::models::{BACKGROUND, BODY_RATIO, FOLD_RATIO, IconLayout, MARK, Mark, PAPER};
use image::RgbImage;

/// Draws the document-with-check-mark icon at `size` x `size` pixels.
pub fn render_icon(size: u32) -> Result<RgbImage> {
    let layout = IconLayout::for_size(size).ok_or(IconError::InvalidSize(size))?;
    let mut canvas = Canvas::new(size, BACKGROUND).ok_or(IconError::InvalidSize(size))?;

    draw_document(&mut canvas, &layout);
    match layout.mark {
        Mark::Check { line_width } => draw_check(&mut canvas, &layout, line_width),
        Mark::Dot { radius } => draw_dot(&mut canvas, &layout, radius),
        Mark::None => {}
    }

    Ok(canvas.into_image())
}

fn draw_document(canvas: &mut Canvas, layout: &IconLayout) {
    let IconLayout { doc_x, doc_y, doc_w, doc_h, .. } = *layout;
    let body_right = doc_x + doc_w * BODY_RATIO;

    canvas.fill_rect(doc_x, doc_y, body_right, doc_y + doc_h, PAPER);

    // Folded corner, top right.
    let fold = [
        Point::from_xy(body_right, doc_y),
        Point::from_xy(doc_x + doc_w, doc_y + doc_h * FOLD_RATIO),
        Point::from_xy(body_right, doc_y + doc_h * FOLD_RATIO),
    ];
    canvas.fill_polygon(&fold, PAPER);
}

fn draw_check(canvas: &mut Canvas, layout: &IconLayout, line_width: u32) {
    let IconLayout { doc_x, doc_y, doc_w, doc_h, .. } = *layout;
    let start = Point::from_xy(doc_x + doc_w * 0.3, doc_y + doc_h * 0.4);
    let bottom = Point::from_xy(start.x + doc_w * 0.15, start.y + doc_h * 0.15);
    let tip = Point::from_xy(start.x + doc_w * 0.3, start.y + doc_h * 0.05);

    canvas.draw_line(start, bottom, line_width, MARK);
    canvas.draw_line(bottom, tip, line_width, MARK);
}

fn draw_dot(canvas: &mut Canvas, layout: &IconLayout, radius: u32) {
    let IconLayout { doc_x, doc_y, doc_w, doc_h, .. } = *layout;
    let cx = doc_x + doc_w * 0.5;
    let cy = doc_y + doc_h * 0.5;
    let r = radius as f32;

    canvas.fill_ellipse(cx - r, cy - r, cx + r, cy + r, MARK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_requested_dimensions() {
        for size in [16, 48, 128] {
            let icon = render_icon(size).unwrap();
            assert_eq!(icon.dimensions(), (size, size));
        }
    }

    #[test]
    fn corners_keep_background_color() {
        for size in [16, 48, 128] {
            let icon = render_icon(size).unwrap();
            let last = size - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(*icon.get_pixel(x, y), BACKGROUND, "{size}px at ({x}, {y})");
            }
        }
    }

    #[test]
    fn document_body_and_fold_are_white() {
        let icon = render_icon(128).unwrap();
        // Top left of the body.
        assert_eq!(*icon.get_pixel(21, 21), PAPER);
        // Bottom of the body, left of the mark.
        assert_eq!(*icon.get_pixel(30, 100), PAPER);
        // Inside the folded corner: x in 98.4..107, just under the top edge.
        assert_eq!(*icon.get_pixel(100, 30), PAPER);
        // Right of the fold, below it, stays background.
        assert_eq!(*icon.get_pixel(105, 60), BACKGROUND);
    }

    #[test]
    fn large_icons_carry_a_check_mark() {
        // 128px: check starts at (46.8, 55.4), bottom at (59.7, 68.3), tip at (72.6, 59.7).
        let icon = render_icon(128).unwrap();
        assert_eq!(*icon.get_pixel(53, 62), MARK);
        assert_eq!(*icon.get_pixel(60, 68), MARK);
        assert_eq!(*icon.get_pixel(66, 64), MARK);
        assert_eq!(*icon.get_pixel(40, 40), PAPER);

        // 48px: start (17.6, 20.8), bottom (22.4, 25.6), tip (27.2, 22.4).
        let icon = render_icon(48).unwrap();
        assert_eq!(*icon.get_pixel(20, 23), MARK);
        assert_eq!(*icon.get_pixel(24, 24), MARK);
        assert_eq!(*icon.get_pixel(12, 12), PAPER);
    }

    #[test]
    fn small_icon_carries_a_round_dot() {
        // Dot box is 6..=10 on both axes.
        let icon = render_icon(16).unwrap();
        assert_eq!(*icon.get_pixel(8, 8), MARK);
        assert_eq!(*icon.get_pixel(10, 8), MARK);
        assert_eq!(*icon.get_pixel(6, 7), MARK);
        assert_eq!(*icon.get_pixel(6, 6), PAPER);
        assert_eq!(*icon.get_pixel(4, 4), PAPER);

        let dot = (6..=10)
            .flat_map(|y| (6..=10).map(move |x| (x, y)))
            .filter(|&(x, y)| *icon.get_pixel(x, y) == MARK)
            .count();
        assert_eq!(dot, 21);
    }

    #[test]
    fn tiny_icon_is_a_plain_document() {
        let icon = render_icon(10).unwrap();
        assert!(icon.pixels().all(|p| *p == BACKGROUND || *p == PAPER));
        assert_eq!(*icon.get_pixel(5, 5), PAPER);
    }

    #[test]
    fn too_small_size_is_rejected() {
        assert!(matches!(render_icon(4), Err(IconError::InvalidSize(4))));
    }
}
