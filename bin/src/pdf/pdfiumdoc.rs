use std::{io::Write, path::Path};

use atomic_write_file::AtomicWriteFile;
use engine::{
    document::{Color, Document, DocumentIo, DocumentSource, Drawing, DrawingsCache},
    error::DocumentAccessError,
    geometry::Rect,
};
use pdfium_render::prelude::*;

use super::PdfBox;

/// Alpha of the fill of annotation overlays.
const OVERLAY_FILL_ALPHA: u8 = 64;
const OVERLAY_STROKE_WIDTH: f32 = 1.0;

/// [Document] over a PDF loaded into Pdfium.
///
/// Pdfium is single threaded. A [PdfiumDocument] must only be used from the thread that bound
/// the library.
pub struct PdfiumDocument<'lib> {
    pdfium: &'lib Pdfium,
    loaded: Option<PdfDocument<'lib>>,
    drawings: DrawingsCache,
}

impl<'lib> PdfiumDocument<'lib> {
    pub fn new(pdfium: &'lib Pdfium) -> Self {
        Self {
            pdfium,
            loaded: None,
            drawings: DrawingsCache::default(),
        }
    }

    fn document(&self) -> Result<&PdfDocument<'lib>, DocumentAccessError> {
        self.loaded.as_ref().ok_or(DocumentAccessError::NotLoaded)
    }
}

impl Document for PdfiumDocument<'_> {
    fn page_count(&self) -> usize {
        self.loaded
            .as_ref()
            .map(|document| usize::from(document.pages().len()))
            .unwrap_or_default()
    }

    fn drawings(&mut self, page: usize) -> Result<Vec<Drawing>, DocumentAccessError> {
        let document = self.loaded.as_ref().ok_or(DocumentAccessError::NotLoaded)?;
        let drawings = self
            .drawings
            .get_or_try_insert_with(page, || read_drawings(document, page))?;
        Ok(drawings.to_vec())
    }

    fn text(&self, rect: &Rect) -> Result<String, DocumentAccessError> {
        let page = get_page(self.document()?, rect.page())?;
        let area = PdfBox::from_page_rect(rect, page.height().value).to_pdf_rect();
        let text = page
            .text()
            .map_err(DocumentAccessError::backend)?
            .inside_rect(area);
        Ok(text.trim().to_owned())
    }

    fn annotate(&mut self, rect: &Rect, color: Color) -> Result<(), DocumentAccessError> {
        // Overlays are path objects themselves, so the page's drawings must be read first.
        self.drawings(rect.page())?;

        let mut page = get_page(self.document()?, rect.page())?;
        let area = PdfBox::from_page_rect(rect, page.height().value).to_pdf_rect();
        page.objects_mut()
            .create_path_object_rect(
                area,
                Some(PdfColor::new(color.r, color.g, color.b, 255)),
                Some(PdfPoints::new(OVERLAY_STROKE_WIDTH)),
                Some(PdfColor::new(color.r, color.g, color.b, OVERLAY_FILL_ALPHA)),
            )
            .map_err(DocumentAccessError::backend)?;
        Ok(())
    }
}

impl DocumentIo for PdfiumDocument<'_> {
    fn load(&mut self, source: &DocumentSource) -> Result<(), DocumentAccessError> {
        self.loaded = None;
        self.drawings.reset(0);

        let document = match source {
            DocumentSource::Path(path) => self.pdfium.load_pdf_from_file(path, None),
            DocumentSource::Bytes { content, .. } => {
                self.pdfium.load_pdf_from_byte_vec(content.clone(), None)
            }
        }
        .map_err(|err| DocumentAccessError::InvalidDocument(format!("{}: {err}", source.name())))?;

        let page_count = usize::from(document.pages().len());
        log::debug!("loaded {:?} with {page_count} pages", source.name());
        self.drawings.reset(page_count);
        self.loaded = Some(document);
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), DocumentAccessError> {
        let content = self
            .document()?
            .save_to_bytes()
            .map_err(DocumentAccessError::backend)?;
        let mut file = AtomicWriteFile::open(path).map_err(DocumentAccessError::backend)?;
        file.write_all(&content)
            .map_err(DocumentAccessError::backend)?;
        file.commit().map_err(DocumentAccessError::backend)?;
        log::debug!("saved document to {path:?}");
        Ok(())
    }
}

fn get_page<'a>(
    document: &'a PdfDocument<'_>,
    page: usize,
) -> Result<PdfPage<'a>, DocumentAccessError> {
    let pages = document.pages();
    let page_count = usize::from(pages.len());
    let index = u16::try_from(page)
        .ok()
        .filter(|_| page < page_count)
        .ok_or(DocumentAccessError::PageOutOfRange { page, page_count })?;
    pages.get(index).map_err(DocumentAccessError::backend)
}

/// Bounding boxes of the top-level path objects on `page`, as reported by pdfium. The boxes
/// include stroke width. Paths inside form XObjects are not visited.
fn read_drawings(
    document: &PdfDocument<'_>,
    page: usize,
) -> Result<Vec<Drawing>, DocumentAccessError> {
    let pdf_page = get_page(document, page)?;
    let page_height = pdf_page.height().value;
    let mut drawings = Vec::new();
    for object in pdf_page.objects().iter() {
        if object.object_type() != PdfPageObjectType::Path {
            continue;
        }
        let bounds = object
            .bounds()
            .map_err(DocumentAccessError::backend)?
            .to_rect();
        drawings.push(Drawing {
            rect: PdfBox::from_pdf_rect(&bounds).to_page_rect(page, page_height),
        });
    }
    log::trace!("read {} drawings from page {page}", drawings.len());
    Ok(drawings)
}
