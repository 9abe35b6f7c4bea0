pub const INITIAL_WIDTH: i32 = 800;           // Default window width
pub const INITIAL_HEIGHT: i32 = 600;          // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DEFAULT_DPI: f32 = 200.0;           // Rasterization resolution for PDF pages
pub const PDF_POINTS_PER_INCH: f32 = 72.0;

pub const OVERLAY_MARGIN: f32 = 10.0;         // Distance of the corner countdown from the window edges
pub const PLATE_PADDING: f32 = 10.0;          // Background plate padding around the countdown

pub const NORMAL_SIZE_DIVISOR: i32 = 15;      // Font size = window height / divisor
pub const WARNING_SIZE_DIVISOR: i32 = 6;
pub const CRITICAL_SIZE_DIVISOR: i32 = 3;
pub const CAPTION_SIZE_DIVISOR: i32 = 4;      // Caption font size = critical font size / divisor

pub const CRITICAL_CAPTION: &str = "TIME FOR YOUR LAST WORDS";

pub const FONT_ATLAS_SIZE: i32 = 400;         // Glyph size baked when loading a TTF font
pub const OVERLAY_GLYPHS: &str = "0123456789: ABCDEFGHIJKLMNOPQRSTUVWXYZ"; // Only these are baked, keeping the atlas small
