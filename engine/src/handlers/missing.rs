use anyhow::Result;

use super::ObjectHandler;
use crate::{
    config::ObjectSpec, document::Document, error::ConfigurationError, result::Extracted,
};

/// Used as a fallback when an [ObjectHandler] has not been registered for an [ObjectSpec]'s
/// kind. It only produces errors.
pub struct MissingHandler;

impl ObjectHandler for MissingHandler {
    fn handle(
        &self,
        _document: &mut dyn Document,
        object: &ObjectSpec,
        _annotate: bool,
    ) -> Result<Extracted> {
        Err(ConfigurationError::UnknownObjectType(object.type_name().to_owned()).into())
    }
}
