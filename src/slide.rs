use image::RgbaImage;
use raylib::prelude::*;

use crate::pdf_loader::{LoadError, PageImage};
use crate::scaler::ScaledSlide;

/// A PDF page living on the GPU.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    /// Uploads a rasterized page. Needs an open window.
    pub fn upload(rl: &mut RaylibHandle, thread: &RaylibThread, page: &PageImage) -> Result<Self, LoadError> {
        let texture_error = |reason: String| LoadError::Texture { page: page.index + 1, reason };

        let image = to_raylib_image(&page.pixels).map_err(texture_error)?;

        let mut texture = rl.load_texture_from_image(thread, &image)
            .map_err(|e| texture_error(e.to_string()))?;

        // Pages are shrunk or stretched to the window at draw time
        texture.set_texture_filter(thread, TextureFilter::TEXTURE_FILTER_BILINEAR);

        Ok(Self { image: texture })
    }

    pub fn size(&self) -> (i32, i32) {
        (self.image.width(), self.image.height())
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, scaled: &ScaledSlide) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height), // Source rect uses original texture size
            scaled.placement,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

pub fn upload_all(rl: &mut RaylibHandle, thread: &RaylibThread, pages: &[PageImage]) -> Result<Vec<Slide>, LoadError> {
    pages.iter().map(|page| Slide::upload(rl, thread, page)).collect()
}

/// Copies an RGBA page into a CPU-side raylib image without re-encoding it.
fn to_raylib_image(pixels: &RgbaImage) -> Result<Image, String> {
    let (width, height) = (pixels.width() as i32, pixels.height() as i32);
    let bytes = pixels.as_raw();

    // R8G8B8A8 buffer of width * height * 4 bytes
    let image = Image::gen_image_color(width, height, Color::BLANK);
    if image.width() != width || image.height() != height || image.data().is_null() {
        return Err(format!("could not allocate a {}x{} image", width, height));
    }
    if bytes.len() != (width * height * 4) as usize {
        return Err(format!("expected {} bytes of RGBA data, got {}", width * height * 4, bytes.len()));
    }

    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), image.data() as *mut u8, bytes.len());
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn raylib_image_keeps_page_pixels() {
        let mut page = RgbaImage::new(3, 2);
        page.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        page.put_pixel(2, 1, Rgba([0, 0, 255, 128]));

        let image = to_raylib_image(&page).unwrap();
        assert_eq!((image.width(), image.height()), (3, 2));

        let copied = unsafe { std::slice::from_raw_parts(image.data() as *const u8, 3 * 2 * 4) };
        assert_eq!(copied, page.as_raw().as_slice());
        assert_eq!(&copied[0..4], &[255, 0, 0, 255]);
        assert_eq!(&copied[20..24], &[0, 0, 255, 128]);
    }
}
