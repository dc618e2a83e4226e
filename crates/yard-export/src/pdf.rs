//! PDF document assembly with `lopdf`.

use std::io::Write;
use std::path::Path;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Document as LoDocument, Object as LoObject, ObjectId, Stream as LoStream, dictionary};

use crate::error::ExportError;
use crate::page::PageSize;
use crate::paginate::Placement;
use crate::raster::RasterImage;

/// An image embedded once in the document, drawable on any page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHandle {
    id: ObjectId,
    name: String,
}

impl ImageHandle {
    /// Resource name used in page content streams (`/Im1`, ...).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Builds a PDF whose pages all share one size.
///
/// Coordinates passed in are in the page's unit with a top-left origin;
/// they are converted to PDF points (bottom-left origin) when written.
#[derive(Debug)]
pub struct PdfAssembler {
    doc: LoDocument,
    pages_id: ObjectId,
    kids: Vec<LoObject>,
    page: PageSize,
    images: usize,
}

impl PdfAssembler {
    #[must_use]
    pub fn new(page: PageSize) -> Self {
        let mut doc = LoDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
            page,
            images: 0,
        }
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Embed `image` as a Flate-compressed RGB image XObject.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if compression fails.
    pub fn add_image(&mut self, image: &RasterImage) -> Result<ImageHandle, ExportError> {
        let data = flate_compress(image.as_rgb_bytes())?;
        let stream = LoStream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width()),
                "Height" => i64::from(image.height()),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            data,
        )
        .with_compression(false);
        let id = self.doc.add_object(stream);
        self.images += 1;
        Ok(ImageHandle {
            id,
            name: format!("Im{}", self.images),
        })
    }

    /// Append a page drawing `image` at `placement`.
    ///
    /// Parts of the image outside the page are clipped by the media box.
    pub fn add_page(&mut self, image: &ImageHandle, placement: &Placement) {
        let unit = self.page.unit;
        let (_, page_height) = self.page.points();
        let x = unit.to_points(placement.x);
        let width = unit.to_points(placement.width);
        let height = unit.to_points(placement.height);
        let bottom = page_height - unit.to_points(placement.y) - height;

        let content = format!(
            "q {width:.4} 0 0 {height:.4} {x:.4} {bottom:.4} cm /{} Do Q\n",
            image.name
        )
        .into_bytes();
        let content_id = self.doc.add_object(LoStream::new(dictionary! {}, content));
        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    image.name.clone() => image.id,
                },
            },
            "MediaBox" => self.media_box(),
        });
        self.kids.push(LoObject::Reference(page_id));
    }

    /// Serialize the finished document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidLayout`] for a document without pages,
    /// or [`ExportError::Pdf`] if serialization fails.
    pub fn to_bytes(mut self) -> Result<Vec<u8>, ExportError> {
        if self.kids.is_empty() {
            return Err(ExportError::InvalidLayout("document has no pages".into()));
        }
        let count = i64::try_from(self.kids.len())
            .map_err(|_| ExportError::InvalidLayout("too many pages".into()))?;
        self.doc.objects.insert(
            self.pages_id,
            LoObject::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );
        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut out = Vec::new();
        self.doc
            .save_to(&mut out)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(out)
    }

    /// Serialize and write the document to `path`.
    ///
    /// # Errors
    ///
    /// See [`Self::to_bytes`]; also returns [`ExportError::Io`] on write
    /// failure.
    pub async fn save(self, path: &Path) -> Result<(), ExportError> {
        let bytes = self.to_bytes()?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn media_box(&self) -> Vec<LoObject> {
        let (width, height) = self.page.points();
        vec![
            0.into(),
            0.into(),
            LoObject::Real(width as f32),
            LoObject::Real(height as f32),
        ]
    }
}

fn flate_compress(data: &[u8]) -> Result<Vec<u8>, ExportError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
