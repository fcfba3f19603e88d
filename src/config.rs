use image::{ImageFormat, Rgb};
use std::path::{Path, PathBuf};

pub const ICON_SIZE: u32 = 1024;

pub const BACKGROUND: Rgb<u8> = Rgb([0x6B, 0x46, 0xC1]); // purple
pub const STROKE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
pub const CENTER_DOT: Rgb<u8> = Rgb([0xF5, 0x9E, 0x0B]); // gold

pub const OUTER_STROKE_WIDTH: u32 = 20;
pub const INNER_STROKE_WIDTH: u32 = 10;
pub const TICK_WIDTH: u32 = 20;
/// Distance between the outer and inner ring radii.
pub const RING_GAP: u32 = 40;
pub const CENTER_DOT_RADIUS: u32 = 15;

/// Location of the icon relative to the project root.
pub const ICON_SUBPATH: &str = "assets/icons/app_icon.png";

/// All parameters of a compass icon. `Default` yields the fixed icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub size: u32,
    pub background: Rgb<u8>,
    pub stroke: Rgb<u8>,
    pub center_dot: Rgb<u8>,
    pub outer_stroke_width: u32,
    pub inner_stroke_width: u32,
    pub tick_width: u32,
    pub ring_gap: u32,
    pub center_dot_radius: u32,
    pub format: ImageFormat,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            background: BACKGROUND,
            stroke: STROKE,
            center_dot: CENTER_DOT,
            outer_stroke_width: OUTER_STROKE_WIDTH,
            inner_stroke_width: INNER_STROKE_WIDTH,
            tick_width: TICK_WIDTH,
            ring_gap: RING_GAP,
            center_dot_radius: CENTER_DOT_RADIUS,
            format: ImageFormat::Png,
        }
    }
}

impl IconConfig {
    pub fn outer_radius(&self) -> u32 { self.size / 3 }

    pub fn inner_radius(&self) -> u32 { self.outer_radius().saturating_sub(self.ring_gap) }
}

/// Directory the tool lives in, independent of the working directory.
pub fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn output_path_in(root: &Path) -> PathBuf {
    root.join(ICON_SUBPATH)
}

pub fn default_output_path() -> PathBuf {
    output_path_in(&project_root())
}
