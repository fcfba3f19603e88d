use image::{Rgb, RgbImage};

use crate::config::IconConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self { Self { x, y } }

    /// Point `distance` pixels away in direction `dir`.
    pub fn toward(self, dir: Cardinal, distance: u32) -> Point {
        let (dx, dy) = dir.unit();
        let d = distance as i32;
        Point::new(self.x + dx * d, self.y + dy * d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub const ALL: [Cardinal; 4] = [Cardinal::North, Cardinal::South, Cardinal::East, Cardinal::West];

    /// Unit step in image coordinates (y grows downward).
    pub fn unit(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, -1),
            Cardinal::South => (0, 1),
            Cardinal::East => (1, 0),
            Cardinal::West => (-1, 0),
        }
    }
}

/// Square RGB raster that shapes are drawn into before encoding.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self { img: RgbImage::from_pixel(size, size, background) }
    }

    pub fn size(&self) -> u32 { self.img.width() }

    pub fn center(&self) -> Point {
        let half = (self.size() / 2) as i32;
        Point::new(half, half)
    }

    pub fn into_image(self) -> RgbImage { self.img }

    /// Circle outline whose stroke lies inside the nominal radius.
    pub fn stroke_circle(&mut self, center: Point, radius: u32, width: u32, color: Rgb<u8>) {
        let outer = radius as f32;
        let inner = radius.saturating_sub(width) as f32;
        self.fill_where(center, radius as i32, color, |dist| dist <= outer && dist > inner);
    }

    pub fn fill_circle(&mut self, center: Point, radius: u32, color: Rgb<u8>) {
        let r = radius as f32;
        self.fill_where(center, radius as i32, color, |dist| dist <= r);
    }

    /// Straight segment with flat ends, `width / 2` pixels on each side of the axis.
    pub fn line(&mut self, from: Point, to: Point, width: u32, color: Rgb<u8>) {
        let half = width as f32 * 0.5;
        let (ax, ay) = (from.x as f32, from.y as f32);
        let (vx, vy) = ((to.x - from.x) as f32, (to.y - from.y) as f32);
        let len_sq = vx * vx + vy * vy;
        let pad = half.ceil() as i32;
        let min_x = from.x.min(to.x) - pad;
        let max_x = from.x.max(to.x) + pad;
        let min_y = from.y.min(to.y) - pad;
        let max_y = from.y.max(to.y) + pad;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32 + 0.5 - ax, y as f32 + 0.5 - ay);
                let inside = if len_sq == 0.0 {
                    px.abs() <= half && py.abs() <= half
                } else {
                    // t: position along the axis, c: signed distance across it
                    let t = (px * vx + py * vy) / len_sq;
                    let c = cross(vx, vy, px, py) / len_sq.sqrt();
                    (0.0..=1.0).contains(&t) && c.abs() <= half
                };
                if inside {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn fill_where(&mut self, center: Point, reach: i32, color: Rgb<u8>, hit: impl Fn(f32) -> bool) {
        for y in (center.y - reach)..=(center.y + reach) {
            for x in (center.x - reach)..=(center.x + reach) {
                if hit(distance(center, x, y)) {
                    self.put(x, y, color);
                }
            }
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.img.width() && y < self.img.height() {
            self.img.put_pixel(x, y, color);
        }
    }
}

// Draw the compass: two rings, four cardinal ticks, and a center dot.
pub fn generate_icon(cfg: &IconConfig) -> RgbImage {
    let mut canvas = Canvas::new(cfg.size, cfg.background);
    let c = canvas.center();
    let outer = cfg.outer_radius();
    let inner = cfg.inner_radius();

    canvas.stroke_circle(c, outer, cfg.outer_stroke_width, cfg.stroke);
    canvas.stroke_circle(c, inner, cfg.inner_stroke_width, cfg.stroke);

    for dir in Cardinal::ALL {
        canvas.line(c.toward(dir, outer), c.toward(dir, inner), cfg.tick_width, cfg.stroke);
    }

    canvas.fill_circle(c, cfg.center_dot_radius, cfg.center_dot);
    canvas.into_image()
}

#[inline]
fn distance(center: Point, x: i32, y: i32) -> f32 {
    let dx = (x - center.x) as f32;
    let dy = (y - center.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 { ax * by - ay * bx }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_fixed_size_and_background() {
        let cfg = IconConfig::default();
        let img = generate_icon(&cfg);
        assert_eq!(img.dimensions(), (1024, 1024));
        assert_eq!(*img.get_pixel(0, 0), cfg.background);
        assert_eq!(*img.get_pixel(1023, 1023), cfg.background);
    }

    #[test]
    fn center_dot_covers_its_radius() {
        let cfg = IconConfig::default();
        let img = generate_icon(&cfg);
        let r = cfg.center_dot_radius as i32;
        for dy in -(r - 1)..r {
            for dx in -(r - 1)..r {
                if dx * dx + dy * dy < (r - 1) * (r - 1) {
                    let p = img.get_pixel((512 + dx) as u32, (512 + dy) as u32);
                    assert_eq!(*p, cfg.center_dot, "at offset ({dx},{dy})");
                }
            }
        }
        assert_eq!(*img.get_pixel(512 + 40, 512), cfg.background);
    }

    #[test]
    fn rings_and_ticks_are_stroked() {
        let cfg = IconConfig::default();
        let img = generate_icon(&cfg);
        // outer ring, west side, stroke lies inside radius 341
        assert_eq!(*img.get_pixel(512 - 335, 512 + 50), cfg.stroke);
        // inner ring
        assert_eq!(*img.get_pixel(512 + 295, 512), cfg.stroke);
        // between the rings, away from any tick
        assert_eq!(*img.get_pixel(512 + 220, 512 + 220), cfg.background);
        // north tick spans the gap between rings
        assert_eq!(*img.get_pixel(512, 512 - 320), cfg.stroke);
        assert_eq!(*img.get_pixel(512 + 9, 512 - 320), cfg.stroke);
        assert_eq!(*img.get_pixel(512 + 12, 512 - 320), cfg.background);
        // east tick
        assert_eq!(*img.get_pixel(512 + 320, 512 - 5), cfg.stroke);
        // outside the outer ring
        assert_eq!(*img.get_pixel(512, 512 - 360), cfg.background);
    }

    #[test]
    fn toward_moves_along_axes() {
        let c = Point::new(10, 10);
        assert_eq!(c.toward(Cardinal::North, 3), Point::new(10, 7));
        assert_eq!(c.toward(Cardinal::South, 3), Point::new(10, 13));
        assert_eq!(c.toward(Cardinal::East, 3), Point::new(13, 10));
        assert_eq!(c.toward(Cardinal::West, 3), Point::new(7, 10));
    }

    #[test]
    fn drawing_clips_at_edges() {
        let mut canvas = Canvas::new(8, Rgb([0, 0, 0]));
        canvas.fill_circle(Point::new(0, 0), 5, Rgb([255, 0, 0]));
        canvas.line(Point::new(-4, 7), Point::new(12, 7), 2, Rgb([0, 255, 0]));
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(7, 7), Rgb([0, 255, 0]));
        assert_eq!(*img.get_pixel(7, 0), Rgb([0, 0, 0]));
    }
}
