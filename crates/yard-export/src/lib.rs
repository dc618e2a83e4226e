//! # yard-export
//!
//! Client-side PDF export of a rendered view.
//!
//! The pipeline has three stages:
//! 1. **Capture**: a [`Capture`] source produces a [`RasterImage`] of the view
//!    at the configured scale, flattened onto the background colour.
//! 2. **Paginate**: the image is scaled to the page width and sliced into
//!    page placements, each shifted up by one page height ([`layout`]).
//! 3. **Assemble**: [`PdfAssembler`] writes one PDF page per placement, all
//!    drawing the same embedded image at their offsets.
//!
//! [`export_to_pdf`] runs the whole pipeline and writes the file.

mod error;
mod export;
mod page;
mod paginate;
mod pdf;
mod raster;

pub use error::ExportError;
pub use export::{ExportSummary, export_to_pdf, render_pdf};
pub use page::{ExportOptions, Orientation, PageFormat, PageSize, Rgb, Unit};
pub use paginate::{Pagination, Placement, layout, paginate};
pub use pdf::{ImageHandle, PdfAssembler};
pub use raster::{Capture, EncodedImageCapture, MAX_CAPTURE_PIXELS, RasterImage};
