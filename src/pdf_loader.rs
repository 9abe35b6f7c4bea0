use std::path::Path;

use image::RgbaImage;
use pdfium_render::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::constants::*;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to bind the pdfium library: {0}")]
    Bind(#[source] PdfiumError),

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: PdfiumError,
    },

    #[error("failed to render page {page}: {source}")]
    Render {
        page: usize,
        #[source]
        source: PdfiumError,
    },

    #[error("page {page} produced an invalid {width}x{height} bitmap")]
    Bitmap { page: usize, width: i32, height: i32 },

    #[error("{0} contains no pages")]
    Empty(String),

    #[error("failed to upload page {page} to the GPU: {reason}")]
    Texture { page: usize, reason: String },
}

/// One rasterized PDF page.
pub struct PageImage {
    pub index: usize,
    pub pixels: RgbaImage,
}

// --- Bind pdfium: next to the executable, then the working directory, then system paths ---
fn bind_pdfium() -> Result<Pdfium, LoadError> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        if let Ok(bindings) = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir)) {
            return Ok(Pdfium::new(bindings));
        }
    }

    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(LoadError::Bind)?;
    Ok(Pdfium::new(bindings))
}

// --- Decode every page of the document at the requested resolution ---
pub fn rasterize(pdf_path: &Path, dpi: f32) -> Result<Vec<PageImage>, LoadError> {
    let display_path = pdf_path.display().to_string();
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, None)
        .map_err(|source| LoadError::Open { path: display_path.clone(), source })?;

    let render_config = PdfRenderConfig::new().scale_page_by_factor(dpi / PDF_POINTS_PER_INCH);

    let mut pages = Vec::new();
    for (index, page) in document.pages().iter().enumerate() {
        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|source| LoadError::Render { page: index + 1, source })?;

        let (width, height) = (bitmap.width(), bitmap.height());
        let pixels = RgbaImage::from_raw(width as u32, height as u32, bitmap.as_rgba_bytes().to_vec())
            .ok_or(LoadError::Bitmap { page: index + 1, width, height })?;

        debug!("Rasterized page {} at {}x{}", index + 1, width, height);
        pages.push(PageImage { index, pixels });
    }

    if pages.is_empty() {
        return Err(LoadError::Empty(display_path));
    }

    info!("Loaded {} pages from {} at {} dpi", pages.len(), display_path, dpi);
    Ok(pages)
}
