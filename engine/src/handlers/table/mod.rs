//! Extracts repeating blocks of rows, located by the shapes of anchor drawings.
//!
//! Anchors for blocks and for rows are found anywhere in the document. Each row is then owned by
//! the closest block preceding it in reading order, so a block's rows may continue over page
//! breaks without the rows carrying any reference to their block.

pub mod grouping;

use anyhow::Result;

use super::ObjectHandler;
use crate::{
    config::{Headers, ObjectSpec, PointerSpec, TableMethod, TableObject},
    document::{Color, Document, Drawing},
    error::{ConfigurationError, LayoutError},
    geometry::Rect,
    matcher,
    result::{Extracted, ExtractedValue, FieldMap, TableBlock},
};

/// Handles [ObjectSpec::Table] objects.
pub struct TableHandler;

impl ObjectHandler for TableHandler {
    fn handle(
        &self,
        document: &mut dyn Document,
        object: &ObjectSpec,
        annotate: bool,
    ) -> Result<Extracted> {
        let table: &TableObject = object.try_into()?;
        match &table.method {
            TableMethod::ByPointers => {}
            TableMethod::Other(method) => {
                return Err(ConfigurationError::UnknownTableMethod(method.clone()).into());
            }
        }
        table.blocks_pointer.criteria.validate()?;
        table.row_pointer.criteria.validate()?;

        let Anchors { blocks, rows } = find_anchors(document, table)?;
        log::debug!(
            "table {:?}: found {} block anchors and {} row anchors",
            table.name,
            blocks.len(),
            rows.len(),
        );
        if table.blocks_pointer.multiple == Some(false) && blocks.len() != 1 {
            return Err(LayoutError::UnexpectedBlockCount {
                found: blocks.len(),
            }
            .into());
        }

        let assignment = grouping::assign_rows(&blocks, &rows);
        if !assignment.orphaned.is_empty() {
            log::debug!(
                "table {:?}: {} row anchors precede the first block and are skipped",
                table.name,
                assignment.orphaned.len(),
            );
        }

        let mut table_blocks = Vec::with_capacity(assignment.groups.len());
        for group in &assignment.groups {
            let block = read_fields(
                document,
                &table.blocks_pointer.headers,
                &group.block,
                annotate.then_some(Color::BLOCK),
            )?;
            let rows = group
                .rows
                .iter()
                .map(|row| {
                    read_fields(
                        document,
                        &table.row_pointer.headers,
                        row,
                        annotate.then_some(Color::ROW),
                    )
                })
                .collect::<Result<Vec<_>>>()?;
            table_blocks.push(TableBlock { block, rows });
        }

        Ok(Extracted::Value(ExtractedValue::Table(table_blocks)))
    }
}

/// Block and row anchor rects, each in reading order.
struct Anchors {
    blocks: Vec<Rect>,
    rows: Vec<Rect>,
}

fn find_anchors(document: &mut dyn Document, table: &TableObject) -> Result<Anchors> {
    let mut anchors = Anchors {
        blocks: Vec::new(),
        rows: Vec::new(),
    };
    for page in 0..document.page_count() {
        for drawing in document.drawings(page)? {
            if let Some(rect) = place_anchor(&drawing, &table.blocks_pointer)? {
                anchors.blocks.push(rect);
            }
            if let Some(rect) = place_anchor(&drawing, &table.row_pointer)? {
                anchors.rows.push(rect);
            }
        }
    }
    grouping::sort_reading_order(&mut anchors.blocks);
    grouping::sort_reading_order(&mut anchors.rows);
    Ok(anchors)
}

/// Region described by `pointer` relative to `drawing`, if the drawing is one of its anchors.
fn place_anchor(
    drawing: &Drawing,
    pointer: &PointerSpec,
) -> Result<Option<Rect>, ConfigurationError> {
    Ok(matcher::matches(drawing, &pointer.criteria, pointer.tolerance())?
        .then(|| drawing.rect.place(pointer.offset, pointer.dimensions)))
}

/// Reads the text of each column of `rect`, overlaying each cell in `annotation` if given.
fn read_fields(
    document: &mut dyn Document,
    headers: &Headers,
    rect: &Rect,
    annotation: Option<Color>,
) -> Result<FieldMap> {
    let mut fields = FieldMap::with_capacity(headers.names.len());
    for (name, cell) in headers
        .names
        .iter()
        .zip(rect.columns(&headers.column_widths))
    {
        let text = document.text(&cell)?;
        if let Some(color) = annotation {
            document.annotate(&cell, color)?;
        }
        fields.insert(name.clone(), text);
    }
    Ok(fields)
}
