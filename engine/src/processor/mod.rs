//! Runs every object of a [StructuralConfig] against one document.


use anyhow::Result;

use crate::{
    config::StructuralConfig,
    document::Document,
    handlers::{HandlerRegistry, ObjectHandler},
    result::{Extracted, ExtractionResult},
};

/// Extracts the values described by a [StructuralConfig] from documents.
#[derive(Default)]
pub struct Processor {
    registry: HandlerRegistry,
}

impl Processor {
    /// Creates a [Processor] that dispatches objects to the handlers of `registry`.
    pub fn new(registry: HandlerRegistry) -> Self {
        Self { registry }
    }

    /// Extracts every object of `config`, in declared order.
    ///
    /// Values of objects are stored under their names. Objects that produce several named
    /// fields, such as text fields with patterns, have each field stored under its own name.
    /// A later value replaces an earlier one of the same name.
    ///
    /// With `annotate`, the regions that were read are overlaid on `document`. Saving the
    /// annotated document is up to the caller.
    pub fn process(
        &self,
        document: &mut dyn Document,
        config: &StructuralConfig,
        annotate: bool,
    ) -> Result<ExtractionResult> {
        let mut result = ExtractionResult::with_capacity(config.objects.len());
        for object in &config.objects {
            log::trace!(
                "extracting {} object {:?}",
                object.type_name(),
                object.name().unwrap_or_default(),
            );
            match self.registry.handle(document, object, annotate)? {
                Extracted::Value(value) => {
                    let name = object.name().unwrap_or(object.type_name());
                    result.insert(name.to_owned(), value);
                }
                Extracted::Fields(fields) => result.extend(fields),
            }
        }
        log::debug!(
            "extracted {} values from {} objects",
            result.len(),
            config.objects.len()
        );
        Ok(result)
    }
}
