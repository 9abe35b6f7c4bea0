use raylib::prelude::*;

/// Drawable area of the window, in pixels.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Where a slide lands in the current viewport.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ScaledSlide {
    pub placement: Rectangle,
}

/// Fits an image of `width` x `height` inside the viewport, keeping its aspect ratio, centered.
pub fn fit(width: i32, height: i32, viewport: Viewport) -> ScaledSlide {
    let page_ratio = width as f32 / height.max(1) as f32;
    let screen_ratio = viewport.width as f32 / viewport.height.max(1) as f32;

    let (new_width, new_height) = if page_ratio > screen_ratio {
        // Fit to screen width
        (viewport.width, (viewport.width as f32 / page_ratio) as i32)
    } else {
        // Fit to screen height
        ((viewport.height as f32 * page_ratio) as i32, viewport.height)
    };

    let x = (viewport.width - new_width) / 2;
    let y = (viewport.height - new_height) / 2;

    ScaledSlide {
        placement: Rectangle::new(x as f32, y as f32, new_width as f32, new_height as f32),
    }
}

/// Recomputes placements for every slide; the previous set is simply replaced.
pub fn fit_all<I>(sizes: I, viewport: Viewport) -> Vec<ScaledSlide>
where
    I: IntoIterator<Item = (i32, i32)>,
{
    sizes
        .into_iter()
        .map(|(width, height)| fit(width, height, viewport))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_page_fits_to_width_and_centers_vertically() {
        let scaled = fit(1000, 500, Viewport::new(800, 600));
        assert_eq!(scaled.placement, Rectangle::new(0.0, 100.0, 800.0, 400.0));
    }

    #[test]
    fn tall_page_fits_to_height_and_centers_horizontally() {
        // A4 portrait at 200 dpi
        let scaled = fit(1654, 2339, Viewport::new(800, 600));
        let placement = scaled.placement;
        assert_eq!(placement.height, 600.0);
        assert_eq!(placement.width, 424.0);
        assert_eq!(placement.x, 188.0);
        assert_eq!(placement.y, 0.0);
    }

    #[test]
    fn matching_ratio_fills_the_viewport() {
        let scaled = fit(1600, 1200, Viewport::new(800, 600));
        assert_eq!(scaled.placement, Rectangle::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn scaling_is_deterministic() {
        let viewport = Viewport::new(800, 600);
        assert_eq!(fit(1920, 1080, viewport), fit(1920, 1080, viewport));
    }

    #[test]
    fn placement_never_exceeds_viewport() {
        let viewport = Viewport::new(1366, 768);
        for (w, h) in [(1, 1000), (1000, 1), (1366, 769), (4000, 3000)] {
            let p = fit(w, h, viewport).placement;
            assert!(p.x >= 0.0 && p.y >= 0.0, "{w}x{h}: {p:?}");
            assert!(p.x + p.width <= 1366.0 && p.y + p.height <= 768.0, "{w}x{h}: {p:?}");
        }
    }

    #[test]
    fn fit_all_follows_slide_order() {
        let scaled = fit_all([(1000, 500), (1600, 1200)], Viewport::new(800, 600));
        assert_eq!(scaled.len(), 2);
        assert_eq!(scaled[0].placement.height, 400.0);
        assert_eq!(scaled[1].placement.height, 600.0);
    }
}
