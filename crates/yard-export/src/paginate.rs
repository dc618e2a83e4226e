//! Slicing a tall image across fixed-height pages.
//!
//! Every page draws the *whole* image, shifted up by one page height per
//! page, so that page `i` shows the band `[i·P, (i+1)·P)` of the image.

use crate::error::ExportError;
use crate::page::PageSize;

/// Heights closer than this are treated as equal, so an image that is an
/// exact multiple of the page height does not gain a blank trailing page
/// from float rounding.
const EPSILON: f64 = 1e-6;

/// Where the image is drawn on one page, in the page's unit with a top-left
/// origin (`y` grows downward, so later pages have negative offsets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Zero-based page index.
    pub page: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A laid-out document: the page size and one placement per page.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page_size: PageSize,
    pub placements: Vec<Placement>,
}

impl Pagination {
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.placements.len()
    }
}

/// Vertical offsets for an image of `image_height` across pages of
/// `page_height`: `0, -P, -2P, ...`.
///
/// The first offset is always emitted. Further pages are added while the
/// height not yet shown exceeds one page, which yields `ceil(H / P)` pages
/// (and exactly one when `H <= P`).
///
/// # Errors
///
/// Returns [`ExportError::InvalidLayout`] when `page_height` is not a
/// positive finite number or `image_height` is negative or non-finite.
pub fn paginate(image_height: f64, page_height: f64) -> Result<Vec<f64>, ExportError> {
    if !page_height.is_finite() || page_height <= 0.0 {
        return Err(ExportError::InvalidLayout(format!(
            "page height must be positive, got {page_height}"
        )));
    }
    if !image_height.is_finite() || image_height < 0.0 {
        return Err(ExportError::InvalidLayout(format!(
            "image height must be non-negative, got {image_height}"
        )));
    }

    let mut position = 0.0;
    let mut offsets = vec![position];
    let mut remaining = image_height;
    while remaining - page_height > EPSILON {
        position -= page_height;
        offsets.push(position);
        remaining -= page_height;
    }
    Ok(offsets)
}

/// Fit an image of `width_px × height_px` to the page width and paginate it.
///
/// # Errors
///
/// Returns [`ExportError::InvalidLayout`] for a zero-sized image or a
/// degenerate page.
pub fn layout(width_px: u32, height_px: u32, page: PageSize) -> Result<Pagination, ExportError> {
    if width_px == 0 || height_px == 0 {
        return Err(ExportError::InvalidLayout(format!(
            "image has no area ({width_px}x{height_px})"
        )));
    }
    if !page.width.is_finite() || page.width <= 0.0 {
        return Err(ExportError::InvalidLayout(format!(
            "page width must be positive, got {}",
            page.width
        )));
    }

    let width = page.width;
    let height = f64::from(height_px) * width / f64::from(width_px);
    let placements = paginate(height, page.height)?
        .into_iter()
        .enumerate()
        .map(|(page, y)| Placement {
            page,
            x: 0.0,
            y,
            width,
            height,
        })
        .collect();

    Ok(Pagination {
        page_size: page,
        placements,
    })
}
