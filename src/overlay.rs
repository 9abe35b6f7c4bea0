//! Layout of the countdown overlay.
//!
//! Everything here is plain data computed from the urgency tier and the viewport;
//! the presenter measures the text with the active font and draws it.

use raylib::prelude::*;

use crate::constants::*;
use crate::scaler::Viewport;
use crate::state::Tier;

pub const PLATE_COLOR: Color = Color::WHITE;

/// Point a piece of text is pinned to.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Anchor {
    TopRight(Vector2),
    Center(Vector2),
}

impl Anchor {
    /// Bounding box of text of the given measured size pinned to this anchor.
    pub fn place(&self, size: Vector2) -> Rectangle {
        match *self {
            Anchor::TopRight(p) => Rectangle::new(p.x - size.x, p.y, size.x, size.y),
            Anchor::Center(p) => Rectangle::new(p.x - size.x / 2.0, p.y - size.y / 2.0, size.x, size.y),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: Color,
    pub anchor: Anchor,
}

impl TextStyle {
    /// Letter spacing proportional to the font size, as raylib's default text drawing does.
    pub fn spacing(&self) -> f32 {
        self.font_size / 10.0
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OverlayStyle {
    pub countdown: TextStyle,
    pub caption: Option<TextStyle>,
}

pub fn style_for(tier: Tier, viewport: Viewport) -> OverlayStyle {
    let width = viewport.width as f32;
    let height = viewport.height as f32;
    let corner = Vector2::new(width - OVERLAY_MARGIN, OVERLAY_MARGIN);

    match tier {
        Tier::Normal => OverlayStyle {
            countdown: TextStyle {
                font_size: font_size(viewport.height, NORMAL_SIZE_DIVISOR),
                color: Color::BLACK,
                anchor: Anchor::TopRight(corner),
            },
            caption: None,
        },
        Tier::Warning => OverlayStyle {
            countdown: TextStyle {
                font_size: font_size(viewport.height, WARNING_SIZE_DIVISOR),
                color: Color::RED,
                anchor: Anchor::TopRight(corner),
            },
            caption: None,
        },
        Tier::Critical => {
            let size = font_size(viewport.height, CRITICAL_SIZE_DIVISOR);
            OverlayStyle {
                countdown: TextStyle {
                    font_size: size,
                    color: Color::RED,
                    anchor: Anchor::Center(Vector2::new(width / 2.0, height / 2.0 - size / 2.0)),
                },
                caption: Some(TextStyle {
                    font_size: font_size(size as i32, CAPTION_SIZE_DIVISOR),
                    color: Color::RED,
                    anchor: Anchor::Center(Vector2::new(width / 2.0, height / 2.0 + size / 2.0)),
                }),
            }
        }
    }
}

/// Background plate behind the countdown text.
pub fn plate(text: Rectangle) -> Rectangle {
    Rectangle::new(
        text.x - PLATE_PADDING,
        text.y - PLATE_PADDING,
        text.width + PLATE_PADDING * 2.0,
        text.height + PLATE_PADDING * 2.0,
    )
}

fn font_size(extent: i32, divisor: i32) -> f32 {
    (extent / divisor).max(1) as f32
}
