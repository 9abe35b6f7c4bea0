use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Instant;

use raylib::ffi;
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::TimerConfig;
use crate::constants::*;
use crate::countdown::format_remaining;
use crate::input::Action;
use crate::overlay::{self, TextStyle};
use crate::scaler::{self, ScaledSlide, Viewport};
use crate::slide::Slide;
use crate::timer::Slideshow;

/// Font used to draw the countdown: a user supplied TTF, or raylib's built-in one.
pub enum OverlayFont {
    Loaded(Font),
    Builtin(WeakFont),
}

impl OverlayFont {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match rl.load_font_ex(thread, &path.to_string_lossy(), FONT_ATLAS_SIZE, Some(OVERLAY_GLYPHS)) {
                Ok(font) => {
                    // Glyphs are baked once and drawn at window-dependent sizes
                    unsafe {
                        ffi::SetTextureFilter(font.texture, TextureFilter::TEXTURE_FILTER_BILINEAR as i32);
                    }
                    return OverlayFont::Loaded(font);
                }
                Err(e) => warn!("Could not load font {}: {}, using the built-in font", path.display(), e),
            }
        }
        OverlayFont::Builtin(rl.get_font_default())
    }
}

impl AsRef<ffi::Font> for OverlayFont {
    fn as_ref(&self) -> &ffi::Font {
        match self {
            OverlayFont::Loaded(font) => font.as_ref(),
            OverlayFont::Builtin(font) => font.as_ref(),
        }
    }
}

/// What is shown where, and for how long. Holds no GPU resources.
pub struct Stage {
    sizes: Vec<(i32, i32)>,
    scaled: Vec<ScaledSlide>,
    viewport: Viewport,
    show: Slideshow,
}

impl Stage {
    /// Returns `None` when there is nothing to present.
    pub fn new(sizes: Vec<(i32, i32)>, viewport: Viewport, config: TimerConfig, now: Instant) -> Option<Self> {
        let count = NonZeroUsize::new(sizes.len())?;
        let scaled = scaler::fit_all(sizes.iter().copied(), viewport);
        Some(Self {
            sizes,
            scaled,
            viewport,
            show: Slideshow::new(config, count, now),
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scaled(&self) -> &[ScaledSlide] {
        &self.scaled
    }

    pub fn show(&self) -> &Slideshow {
        &self.show
    }

    /// Applies one input action. Returns `false` once the user asked to quit.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return false,
            Action::Resize(viewport) => self.resize(viewport),
            _ => {
                self.show.apply(action, now);
                debug!("{:?} -> page {}", action, self.show.current() + 1);
            }
        }
        true
    }

    /// Returns `true` when the countdown ran out and the next slide came up.
    pub fn update(&mut self, now: Instant) -> bool {
        let advanced = self.show.tick(now);
        if advanced {
            debug!("Time is up, auto-advancing to page {}", self.show.current() + 1);
        }
        advanced
    }

    fn resize(&mut self, viewport: Viewport) {
        debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.scaled = scaler::fit_all(self.sizes.iter().copied(), viewport);
    }
}

/// Everything the render loop needs between frames.
pub struct Presenter {
    slides: Vec<Slide>,
    stage: Stage,
    font: OverlayFont,
}

impl Presenter {
    /// Returns `None` when there is nothing to present.
    pub fn new(slides: Vec<Slide>, viewport: Viewport, config: TimerConfig, font: OverlayFont, now: Instant) -> Option<Self> {
        let sizes = slides.iter().map(Slide::size).collect();
        let stage = Stage::new(sizes, viewport, config, now)?;
        Some(Self { slides, stage, font })
    }

    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        self.stage.handle(action, now)
    }

    pub fn update(&mut self, now: Instant) {
        self.stage.update(now);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        let show = self.stage.show();
        let index = show.current();
        self.slides[index].draw(d, &self.stage.scaled()[index]);

        let style = overlay::style_for(show.tier(), self.stage.viewport());
        let text = format_remaining(show.remaining());
        let text_box = self.measure(&text, &style.countdown);

        if let Some(caption) = &style.caption {
            let caption_box = self.measure(CRITICAL_CAPTION, caption);
            self.draw_text(d, CRITICAL_CAPTION, caption, caption_box);
        }

        d.draw_rectangle_rec(overlay::plate(text_box), overlay::PLATE_COLOR);
        self.draw_text(d, &text, &style.countdown, text_box);
    }

    fn measure(&self, text: &str, style: &TextStyle) -> Rectangle {
        let size = raylib::core::text::measure_text_ex(&self.font, text, style.font_size, style.spacing());
        style.anchor.place(size)
    }

    fn draw_text(&self, d: &mut RaylibDrawHandle, text: &str, style: &TextStyle, at: Rectangle) {
        d.draw_text_ex(&self.font, text, Vector2::new(at.x, at.y), style.font_size, style.spacing(), style.color);
    }
}
