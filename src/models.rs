use image::Rgb;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Icon sizes written on every run, in order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];
pub const OUTPUT_DIR: &str = "icons";

pub const BACKGROUND: Rgb<u8> = Rgb([0x66, 0x7e, 0xea]); // #667eea
pub const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
pub const MARK: Rgb<u8> = BACKGROUND;

const MIN_PADDING: u32 = 2;
const MIN_LINE_WIDTH: u32 = 2;
const MIN_DOT_RADIUS: u32 = 2;

/// Width of the document body, as a fraction of the document width. The rest is the folded corner.
pub const BODY_RATIO: f32 = 0.9;
/// Height of the folded corner, as a fraction of the document height.
pub const FOLD_RATIO: f32 = 0.15;

/// The glyph drawn on top of the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mark {
    /// Two strokes, for icons large enough to read them.
    Check { line_width: u32 },
    /// A filled circle with the given radius.
    Dot { radius: u32 },
    None,
}

/// Geometry of the icon for one pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconLayout {
    pub doc_x: f32,
    pub doc_y: f32,
    pub doc_w: f32,
    pub doc_h: f32,
    pub mark: Mark,
}

impl IconLayout {
    /// Returns `None` when the size leaves no room for the document.
    pub fn for_size(size: u32) -> Option<Self> {
        let padding = MIN_PADDING.max(size / 6);
        let extent = size.checked_sub(padding * 2).filter(|e| *e > 0)?;

        let mark = if size >= 48 {
            Mark::Check {
                line_width: MIN_LINE_WIDTH.max(size / 20),
            }
        } else if size >= 16 {
            Mark::Dot {
                radius: MIN_DOT_RADIUS.max(size / 8),
            }
        } else {
            Mark::None
        };

        Some(Self {
            doc_x: padding as f32,
            doc_y: padding as f32,
            doc_w: extent as f32,
            doc_h: extent as f32,
            mark,
        })
    }
}

/// Where to write the icons and which sizes to draw.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            sizes: ICON_SIZES.to_vec(),
        }
    }
}

/// A written icon file.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// The part of a browser extension `manifest.json` that points at the icons.
#[derive(Serialize, Debug)]
pub struct ManifestSnippet {
    pub icons: Value,
}
