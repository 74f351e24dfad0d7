//! In-memory [Document] and configuration fixtures for tests.

use std::path::{Path, PathBuf};

use map_macro::hashbrown::hash_map;
use testutils::DefaultForTest;

use crate::{
    config::{Headers, PointerSpec, TableMethod, TableObject, TextObject},
    document::{Color, Document, DocumentIo, DocumentSource, Drawing},
    error::DocumentAccessError,
    geometry::{Dimensions, Offset, Rect},
    matcher::Criteria,
};

/// Left edge of the anchors placed by [FakeDocument::with_block_anchor] and
/// [FakeDocument::with_row_anchor].
pub const ANCHOR_X: f32 = 50.0;
pub const ANCHOR_WIDTH: f32 = 500.0;
pub const BLOCK_HEIGHT: f32 = 15.0;
pub const ROW_HEIGHT: f32 = 20.0;
/// Column widths of the rows of [TableObject::default_for_test].
pub const ROW_COLUMN_WIDTHS: [f32; 2] = [300.0, 200.0];

#[derive(Clone, Debug, Default)]
struct FakePage {
    drawings: Vec<Drawing>,
    texts: Vec<(Rect, String)>,
}

/// A [Document] whose drawings and text are given up front.
///
/// [Document::text] returns the space separated texts whose centres lie inside the queried
/// rect, in the order they were added. Annotations, loads and saves are recorded.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    pages: Vec<FakePage>,
    pub annotations: Vec<(Rect, Color)>,
    pub loaded: Vec<String>,
    pub saved: Vec<PathBuf>,
    pub fail_load: bool,
}

impl FakeDocument {
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![FakePage::default(); page_count],
            ..Default::default()
        }
    }

    /// Adds a drawing covering `rect`.
    pub fn with_drawing(mut self, rect: Rect) -> Self {
        if let Some(page) = self.pages.get_mut(rect.page()) {
            page.drawings.push(Drawing { rect });
        }
        self
    }

    /// Adds a text run laid out in `rect`.
    pub fn with_text(mut self, rect: Rect, text: &str) -> Self {
        if let Some(page) = self.pages.get_mut(rect.page()) {
            page.texts.push((rect, text.to_owned()));
        }
        self
    }

    /// Adds a block anchor drawing matching [TableObject::default_for_test] with its top edge at
    /// `y`, and the block's text.
    pub fn with_block_anchor(self, page: usize, y: f32, company: &str) -> Self {
        let rect = Rect::new(page, ANCHOR_X, y, ANCHOR_X + ANCHOR_WIDTH, y + BLOCK_HEIGHT);
        self.with_drawing(rect).with_text(rect, company)
    }

    /// Adds a row anchor drawing matching [TableObject::default_for_test] with its top edge at
    /// `y`, and the text of each of its columns.
    pub fn with_row_anchor(self, page: usize, y: f32, cells: [&str; 2]) -> Self {
        let rect = Rect::new(page, ANCHOR_X, y, ANCHOR_X + ANCHOR_WIDTH, y + ROW_HEIGHT);
        rect.columns(&ROW_COLUMN_WIDTHS)
            .zip(cells)
            .fold(self.with_drawing(rect), |document, (cell, text)| {
                document.with_text(cell, text)
            })
    }

    fn page(&self, page: usize) -> Result<&FakePage, DocumentAccessError> {
        self.pages
            .get(page)
            .ok_or(DocumentAccessError::PageOutOfRange {
                page,
                page_count: self.pages.len(),
            })
    }
}

fn contains_centre(outer: &Rect, inner: &Rect) -> bool {
    let x = (inner.x0() + inner.x1()) / 2.0;
    let y = (inner.y0() + inner.y1()) / 2.0;
    outer.x0() <= x && x <= outer.x1() && outer.y0() <= y && y <= outer.y1()
}

impl Document for FakeDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn drawings(&mut self, page: usize) -> Result<Vec<Drawing>, DocumentAccessError> {
        Ok(self.page(page)?.drawings.clone())
    }

    fn text(&self, rect: &Rect) -> Result<String, DocumentAccessError> {
        let texts: Vec<&str> = self
            .page(rect.page())?
            .texts
            .iter()
            .filter(|(text_rect, _)| contains_centre(rect, text_rect))
            .map(|(_, text)| text.as_str())
            .collect();
        Ok(texts.join(" ").trim().to_owned())
    }

    fn annotate(&mut self, rect: &Rect, color: Color) -> Result<(), DocumentAccessError> {
        self.page(rect.page())?;
        self.annotations.push((*rect, color));
        Ok(())
    }
}

impl DocumentIo for FakeDocument {
    fn load(&mut self, source: &DocumentSource) -> Result<(), DocumentAccessError> {
        if self.fail_load {
            return Err(DocumentAccessError::InvalidDocument(source.name()));
        }
        self.loaded.push(source.name());
        self.annotations.clear();
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), DocumentAccessError> {
        self.saved.push(path.to_owned());
        Ok(())
    }
}

fn pointer(height: f32, names: &[&str], column_widths: &[f32]) -> PointerSpec {
    PointerSpec {
        criteria: Criteria(hash_map! {
            "width".to_owned() => ANCHOR_WIDTH,
            "height".to_owned() => height,
        }),
        headers: Headers {
            names: names.iter().map(|&name| name.to_owned()).collect(),
            column_widths: column_widths.to_vec(),
        },
        offset: Offset::default(),
        dimensions: Dimensions {
            width: ANCHOR_WIDTH,
            height,
        },
        multiple: None,
        tolerance: None,
    }
}

impl DefaultForTest for TextObject {
    fn default_for_test() -> Self {
        Self {
            name: "title".into(),
            page_number: 0,
            offset: Offset { x: 10.0, y: 20.0 },
            dimensions: Dimensions {
                width: 200.0,
                height: 12.0,
            },
            patterns: None,
        }
    }
}

impl DefaultForTest for TableObject {
    fn default_for_test() -> Self {
        Self {
            name: "stoppages".into(),
            method: TableMethod::ByPointers,
            blocks_pointer: pointer(BLOCK_HEIGHT, &["company"], &[ANCHOR_WIDTH]),
            row_pointer: pointer(ROW_HEIGHT, &["start", "hours"], &ROW_COLUMN_WIDTHS),
        }
    }
}
