//! Capture → paginate → assemble pipeline.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ExportError;
use crate::page::ExportOptions;
use crate::paginate::{Pagination, layout};
use crate::pdf::PdfAssembler;
use crate::raster::{Capture, RasterImage};

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub pages: usize,
    pub path: PathBuf,
    /// Captured raster size in device pixels.
    pub image_width: u32,
    pub image_height: u32,
}

/// Lay out `image` on pages described by `options` and build the PDF bytes.
///
/// # Errors
///
/// Returns [`ExportError::InvalidLayout`] for unusable geometry and
/// [`ExportError::Pdf`] if the document cannot be serialized.
pub fn render_pdf(
    image: &RasterImage,
    options: &ExportOptions,
) -> Result<(Vec<u8>, Pagination), ExportError> {
    let (pdf, pagination) = assemble(image, options)?;
    Ok((pdf.to_bytes()?, pagination))
}

fn assemble(
    image: &RasterImage,
    options: &ExportOptions,
) -> Result<(PdfAssembler, Pagination), ExportError> {
    let pagination = layout(image.width(), image.height(), options.page_size())?;

    let mut pdf = PdfAssembler::new(pagination.page_size);
    let handle = pdf.add_image(image)?;
    for placement in &pagination.placements {
        pdf.add_page(&handle, placement);
    }
    Ok((pdf, pagination))
}

/// Capture a view and save it as a paginated PDF at `path`.
///
/// # Errors
///
/// Propagates capture, layout, PDF and I/O failures. Nothing is written
/// unless every earlier stage succeeds.
pub async fn export_to_pdf<C: Capture + Sync>(
    capture: &C,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let path = path.as_ref();
    options.validate()?;

    let image = capture
        .capture(options.capture_scale, options.background)
        .await?;
    let (pdf, pagination) = assemble(&image, options)?;
    pdf.save(path).await?;

    let summary = ExportSummary {
        pages: pagination.page_count(),
        path: path.to_path_buf(),
        image_width: image.width(),
        image_height: image.height(),
    };
    tracing::info!(
        path = %summary.path.display(),
        pages = summary.pages,
        format = %options.page_format,
        "exported pdf"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Orientation, PageFormat, Rgb};
    use image::RgbImage;

    struct Fixed(RasterImage);

    impl Capture for Fixed {
        async fn capture(&self, _scale: f32, _background: Rgb) -> Result<RasterImage, ExportError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Capture for Failing {
        async fn capture(&self, _scale: f32, _background: Rgb) -> Result<RasterImage, ExportError> {
            Err(ExportError::Capture("view is not mounted".into()))
        }
    }

    fn raster(width: u32, height: u32) -> RasterImage {
        RasterImage::from_rgb(RgbImage::from_pixel(width, height, image::Rgb([0, 128, 255])))
    }

    #[test]
    fn short_image_fits_one_page() {
        let (bytes, pagination) = render_pdf(&raster(100, 50), &ExportOptions::default()).unwrap();
        assert_eq!(pagination.page_count(), 1);
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn tall_image_spans_pages() {
        // A3 portrait: 841.89 x 1190.55 pt. A 100x500 image scales to
        // 841.89 x 4209.45 pt, i.e. ceil(4209.45 / 1190.55) = 4 pages.
        let (bytes, pagination) = render_pdf(&raster(100, 500), &ExportOptions::default()).unwrap();
        assert_eq!(pagination.page_count(), 4);
        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }

    #[test]
    fn landscape_changes_page_count() {
        let options = ExportOptions {
            page_format: PageFormat::A4,
            orientation: Orientation::Landscape,
            ..ExportOptions::default()
        };
        // 841.89 wide, 595.28 tall; a square image is 841.89 tall -> 2 pages.
        let (_, pagination) = render_pdf(&raster(10, 10), &options).unwrap();
        assert_eq!(pagination.page_count(), 2);
    }

    #[tokio::test]
    async fn export_writes_file_and_reports_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let summary = export_to_pdf(&Fixed(raster(300, 200)), &path, &ExportOptions::default())
            .await
            .unwrap();

        assert_eq!(summary.pages, 1);
        assert_eq!((summary.image_width, summary.image_height), (300, 200));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn failed_capture_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let err = export_to_pdf(&Failing, &path, &ExportOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Capture(_)));
        assert!(!path.exists());
    }
}
