//! Raster capture: turning a rendered view into opaque pixels.

use std::future::Future;
use std::path::PathBuf;

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::error::ExportError;
use crate::page::Rgb;

/// Captured pixels, already flattened onto an opaque background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbImage,
}

impl RasterImage {
    /// Composite RGBA pixels over `background`.
    #[must_use]
    pub fn from_rgba(rgba: &RgbaImage, background: Rgb) -> Self {
        let Rgb(br, bg, bb) = background;
        let pixels = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            image::Rgb([blend(r, br, a), blend(g, bg, a), blend(b, bb, a)])
        });
        Self { pixels }
    }

    #[must_use]
    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Packed 8-bit RGB samples, row-major.
    #[must_use]
    pub fn as_rgb_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

fn blend(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = u16::from(alpha);
    let mixed = (u16::from(fg) * a + u16::from(bg) * (255 - a) + 127) / 255;
    // mixed <= 255 by construction
    u8::try_from(mixed).unwrap_or(u8::MAX)
}

/// A source that can render a view region to pixels.
///
/// `scale` is the number of device pixels per layout pixel. Implementations
/// must flatten transparency onto `background`.
pub trait Capture {
    fn capture(
        &self,
        scale: f32,
        background: Rgb,
    ) -> impl Future<Output = Result<RasterImage, ExportError>> + Send;
}

#[derive(Debug, Clone)]
enum Source {
    Bytes(Vec<u8>),
    File(PathBuf),
}

/// Capture from an already-rendered PNG or JPEG, treated as a 1x rendering
/// and resampled by the capture scale.
#[derive(Debug, Clone)]
pub struct EncodedImageCapture {
    source: Source,
}

impl EncodedImageCapture {
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            source: Source::Bytes(bytes),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    async fn read(&self) -> Result<Vec<u8>, ExportError> {
        match &self.source {
            Source::Bytes(bytes) => Ok(bytes.clone()),
            Source::File(path) => tokio::fs::read(path).await.map_err(|e| {
                ExportError::Capture(format!("failed to read {}: {e}", path.display()))
            }),
        }
    }
}

impl Capture for EncodedImageCapture {
    async fn capture(&self, scale: f32, background: Rgb) -> Result<RasterImage, ExportError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ExportError::Capture(format!(
                "capture scale must be positive, got {scale}"
            )));
        }
        let bytes = self.read().await?;
        let decoded = image::load_from_memory(&bytes)?;
        let scaled = rescale(decoded, scale)?;
        tracing::debug!(
            width = scaled.width(),
            height = scaled.height(),
            scale,
            "captured raster"
        );
        Ok(RasterImage::from_rgba(&scaled.to_rgba8(), background))
    }
}

/// Upper bound on captured pixels (16384 x 16384).
pub const MAX_CAPTURE_PIXELS: u64 = 1 << 28;

#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn rescale(image: DynamicImage, scale: f32) -> Result<DynamicImage, ExportError> {
    if scale == 1.0 {
        return Ok(image);
    }
    let pixels =
        f64::from(image.width()) * f64::from(image.height()) * f64::from(scale).powi(2);
    if pixels > MAX_CAPTURE_PIXELS as f64 {
        return Err(ExportError::Capture(format!(
            "{}x{} at scale {scale} exceeds {MAX_CAPTURE_PIXELS} pixels",
            image.width(),
            image.height()
        )));
    }
    let target = |side: u32| -> Result<u32, ExportError> {
        let scaled = (f64::from(side) * f64::from(scale)).round();
        if scaled < 1.0 || scaled > f64::from(u32::MAX) {
            return Err(ExportError::Capture(format!(
                "scaled dimension out of range: {side} x {scale}"
            )));
        }
        Ok(scaled as u32)
    };
    let width = target(image.width())?;
    let height = target(image.height())?;
    Ok(DynamicImage::ImageRgba8(imageops::resize(
        &image,
        width,
        height,
        FilterType::Triangle,
    )))
}
