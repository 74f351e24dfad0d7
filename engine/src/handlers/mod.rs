//! Extract values for configured objects, one handler per [ObjectKind].

mod missing;
pub mod table;
pub mod text;


use anyhow::Result;

use crate::{
    config::{ObjectKind, ObjectSpec},
    document::Document,
    result::Extracted,
};

pub use missing::MissingHandler;
pub use table::TableHandler;
pub use text::TextHandler;

/// Required trait for types that extract the value of one kind of configured object.
/// Implementations are stateless with regards to the objects and documents they handle.
pub trait ObjectHandler {
    /// Extracts the value of `object` from `document`. When `annotate` is set, the regions that
    /// were read are also overlaid on the document.
    fn handle(
        &self,
        document: &mut dyn Document,
        object: &ObjectSpec,
        annotate: bool,
    ) -> Result<Extracted>;
}

/// A handler that delegates to other handlers based on the [ObjectKind] of any given
/// [ObjectSpec].
pub struct HandlerRegistry {
    handlers: hashbrown::HashMap<ObjectKind, Box<dyn ObjectHandler>>,
    default_handler: MissingHandler,
}

impl HandlerRegistry {
    /// Creates a [HandlerRegistry] that delegates to the given handlers for the given
    /// [ObjectKind]s.
    pub fn new(handlers: hashbrown::HashMap<ObjectKind, Box<dyn ObjectHandler>>) -> Self {
        Self {
            handlers,
            default_handler: MissingHandler,
        }
    }

    /// Creates a [HandlerRegistry] for the object types that the engine supports.
    pub fn builtin() -> Self {
        let mut registry = Self::new(Default::default());
        registry.register(ObjectKind::Text, TextHandler);
        registry.register(ObjectKind::Table, TableHandler);
        registry
    }

    /// Installs `handler` for objects of the given `kind`, replacing any previous handler.
    pub fn register<H>(&mut self, kind: ObjectKind, handler: H)
    where
        H: ObjectHandler + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
    }

    fn handler_for(&self, kind: ObjectKind) -> &dyn ObjectHandler {
        self.handlers
            .get(&kind)
            .map(Box::as_ref)
            .unwrap_or(&self.default_handler)
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ObjectHandler for HandlerRegistry {
    fn handle(
        &self,
        document: &mut dyn Document,
        object: &ObjectSpec,
        annotate: bool,
    ) -> Result<Extracted> {
        self.handler_for(object.kind())
            .handle(document, object, annotate)
    }
}
