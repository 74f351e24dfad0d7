//! Configuration driven extraction of fields and repeating table blocks from PDF page layouts.
//!
//! A [config::StructuralConfig] describes where values live on the page, either at fixed
//! coordinates or relative to anchor shapes found by their dimensions. The
//! [processor::Processor] walks the configured objects and queries a [document::Document] for
//! the drawings and text it needs.

mod enum_conversion;

pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod handlers;
pub mod matcher;
pub mod processor;
pub mod result;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use processor::Processor;
pub use result::{ExtractedValue, ExtractionResult, TableBlock};
