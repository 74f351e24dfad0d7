//! Values produced by an extraction pass.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Extracted values keyed by object name (or pattern target), in extraction order.
pub type ExtractionResult = IndexMap<String, ExtractedValue>;

/// Column name to cell text, in configured column order.
pub type FieldMap = IndexMap<String, String>;

/// Value of one extracted field or table.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    Text(String),
    Table(Vec<TableBlock>),
    /// A pattern that did not match. Serialises as `null`.
    Absent,
}

impl ExtractedValue {
    /// Returns the text, if this is a present text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtractedValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&[TableBlock]> {
        match self {
            ExtractedValue::Table(blocks) => Some(blocks),
            _ => None,
        }
    }
}

/// One block of a table and the rows it owns.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TableBlock {
    pub block: FieldMap,
    pub rows: Vec<FieldMap>,
}

/// Outcome of handling a single configured object.
#[derive(Clone, Debug, PartialEq)]
pub enum Extracted {
    /// Stored under the object's name.
    Value(ExtractedValue),
    /// Stored under each of its own keys.
    Fields(IndexMap<String, ExtractedValue>),
}
