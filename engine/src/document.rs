//! The narrow port through which the engine reads a loaded document.

use std::path::{Path, PathBuf};

use crate::{error::DocumentAccessError, geometry::Rect};

/// A drawn vector shape on a page. Only its bounding box matters for matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawing {
    pub rect: Rect,
}

/// Colour of an annotation overlay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Overlay colour for plain text fields.
    pub const FIELD: Color = Color { r: 0, g: 0, b: 255 };
    /// Overlay colour for the cells of a table block header.
    pub const BLOCK: Color = Color { r: 255, g: 0, b: 0 };
    /// Overlay colour for the cells of a table row.
    pub const ROW: Color = Color { r: 0, g: 160, b: 0 };
}

/// Read access to a single loaded document, plus annotation for visual verification.
///
/// An implementation is bound to one document for the duration of an extraction pass and is
/// not shared between concurrent passes.
#[cfg_attr(test, mockall::automock)]
pub trait Document {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Returns all drawings on the zero-based `page`.
    fn drawings(&mut self, page: usize) -> Result<Vec<Drawing>, DocumentAccessError>;

    /// Returns the text inside `rect` on [Rect::page], trimmed of surrounding whitespace.
    fn text(&self, rect: &Rect) -> Result<String, DocumentAccessError>;

    /// Paints a translucent overlay over `rect`. This must not change the results of later
    /// [Document::text] or [Document::drawings] calls.
    fn annotate(&mut self, rect: &Rect, color: Color) -> Result<(), DocumentAccessError>;
}

/// Where to load a document from.
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes { name: String, content: Vec<u8> },
}

impl DocumentSource {
    /// Name of the source file, used for validation and reporting.
    pub fn name(&self) -> String {
        match self {
            DocumentSource::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            DocumentSource::Bytes { name, .. } => name.clone(),
        }
    }
}

/// A [Document] that can be (re)loaded and saved.
pub trait DocumentIo: Document {
    /// Loads a document, replacing any previously loaded document and discarding everything
    /// cached about it.
    fn load(&mut self, source: &DocumentSource) -> Result<(), DocumentAccessError>;

    /// Saves the document, including any annotations, to `path`.
    fn save(&mut self, path: &Path) -> Result<(), DocumentAccessError>;
}

/// Lazily populated per-page cache of drawings, for use by [Document] implementations.
///
/// Pages are populated independently on first access. The cache is only ever reset as a whole.
#[derive(Debug, Default)]
pub struct DrawingsCache {
    pages: Vec<Option<Vec<Drawing>>>,
}

impl DrawingsCache {
    /// Creates an empty cache for a document of `page_count` pages.
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![None; page_count],
        }
    }

    /// Discards all cached pages and resizes for a document of `page_count` pages.
    pub fn reset(&mut self, page_count: usize) {
        *self = Self::new(page_count);
    }

    #[cfg(test)]
    fn is_cached(&self, page: usize) -> bool {
        matches!(self.pages.get(page), Some(Some(_)))
    }

    /// Returns the drawings for `page`, calling `read` to populate the entry if it is not yet
    /// cached. A failed `read` leaves the entry unpopulated.
    pub fn get_or_try_insert_with<F>(
        &mut self,
        page: usize,
        read: F,
    ) -> Result<&[Drawing], DocumentAccessError>
    where
        F: FnOnce() -> Result<Vec<Drawing>, DocumentAccessError>,
    {
        let page_count = self.pages.len();
        let entry = self
            .pages
            .get_mut(page)
            .ok_or(DocumentAccessError::PageOutOfRange { page, page_count })?;
        if entry.is_none() {
            *entry = Some(read()?);
        }
        Ok(entry.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use googletest::prelude::*;

    use super::{Drawing, DrawingsCache};
    use crate::{error::DocumentAccessError, geometry::Rect};

    fn drawing(page: usize) -> Drawing {
        Drawing {
            rect: Rect::new(page, 1.0, 2.0, 3.0, 4.0),
        }
    }

    #[gtest]
    fn test_reads_each_page_once() -> anyhow::Result<()> {
        let mut cache = DrawingsCache::new(2);
        let reads = Cell::new(0);
        let read_page_1 = || {
            reads.set(reads.get() + 1);
            Ok(vec![drawing(1)])
        };

        expect_that!(cache.is_cached(1), eq(false));
        let first = cache.get_or_try_insert_with(1, read_page_1)?.to_vec();
        let second = cache
            .get_or_try_insert_with(1, || -> Result<Vec<Drawing>, DocumentAccessError> {
                reads.set(reads.get() + 1);
                Ok(Vec::new())
            })?
            .to_vec();

        expect_that!(first, elements_are![eq(&drawing(1))]);
        expect_that!(second, eq(&first));
        expect_that!(reads.get(), eq(1));
        expect_that!(cache.is_cached(1), eq(true));
        expect_that!(cache.is_cached(0), eq(false));
        Ok(())
    }

    #[gtest]
    fn test_failed_read_is_not_cached() -> anyhow::Result<()> {
        let mut cache = DrawingsCache::new(1);

        let result = cache.get_or_try_insert_with(0, || Err(DocumentAccessError::NotLoaded));
        expect_that!(result.is_err(), eq(true));
        expect_that!(cache.is_cached(0), eq(false));

        let drawings = cache.get_or_try_insert_with(0, || Ok(vec![drawing(0)]))?;
        expect_that!(drawings.len(), eq(1));
        Ok(())
    }

    #[gtest]
    fn test_out_of_range_page() {
        let mut cache = DrawingsCache::new(1);
        let result = cache.get_or_try_insert_with(3, || Ok(Vec::new()));
        expect_that!(
            result.err().map(|err| err.to_string()),
            some(eq("page 3 is out of range for a document of 1 pages"))
        );
    }

    #[gtest]
    fn test_reset_discards_everything() -> anyhow::Result<()> {
        let mut cache = DrawingsCache::new(1);
        cache.get_or_try_insert_with(0, || Ok(vec![drawing(0)]))?;

        cache.reset(3);

        expect_that!(cache.is_cached(0), eq(false));
        expect_that!(cache.is_cached(2), eq(false));
        expect_that!(cache.is_cached(3), eq(false));
        Ok(())
    }
}
