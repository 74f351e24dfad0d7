//! Structural configuration: the declarative description of where values live in one PDF
//! layout.

#[cfg(test)]
mod tests;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    geometry::{Dimensions, Offset},
    impl_enum_conversions,
    matcher::{Criteria, DEFAULT_TOLERANCE},
};

/// Describes the objects to extract from one PDF layout, in extraction order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StructuralConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub objects: Vec<ObjectSpec>,
}

/// On-disk wrapper around a [StructuralConfig].
#[derive(Deserialize, Serialize)]
struct ConfigFile {
    pdf_structure: StructuralConfig,
}

impl StructuralConfig {
    /// Parses a configuration file's YAML content.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml_ng::from_str(content).context("parsing structural configuration")?;
        file.pdf_structure.check_known_objects()?;
        Ok(file.pdf_structure)
    }

    /// Reads and parses a configuration file.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let file: ConfigFile =
            serde_yaml_ng::from_reader(reader).context("parsing structural configuration")?;
        file.pdf_structure.check_known_objects()?;
        Ok(file.pdf_structure)
    }

    /// Loads the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("opening structural configuration {:?}", path))?;
        Self::from_reader(std::io::BufReader::new(file))
            .with_context(|| format!("loading structural configuration {:?}", path))
    }

    /// Serialises the configuration in the same file format that the loaders accept.
    #[cfg(test)]
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml_ng::to_string(&ConfigFile {
            pdf_structure: self.clone(),
        })
        .context("serialising structural configuration")
    }

    /// Fails with the parse error of any object that has a known type tag but fell back to
    /// [ObjectSpec::Unknown].
    fn check_known_objects(&self) -> Result<()> {
        for (index, object) in self.objects.iter().enumerate() {
            if let ObjectSpec::Unknown(unknown) = object {
                unknown
                    .check_not_malformed()
                    .with_context(|| format!("in object #{} ({:?})", index, unknown.kind))?;
            }
        }
        Ok(())
    }
}

/// Per-type wrapper of a single configured object.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, strum_macros::EnumDiscriminants)]
#[strum_discriminants(derive(Hash), name(ObjectKind))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectSpec {
    Text(TextObject),
    Table(TableObject),
    /// An object whose type the engine does not support. It is kept so that the failure is
    /// reported when the configuration is used.
    #[serde(untagged)]
    Unknown(UnknownObject),
}

impl ObjectSpec {
    pub fn kind(&self) -> ObjectKind {
        self.into()
    }

    /// Name of the object, if it has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            ObjectSpec::Text(text) => Some(&text.name),
            ObjectSpec::Table(table) => Some(&table.name),
            ObjectSpec::Unknown(unknown) => unknown
                .params
                .get("name")
                .and_then(serde_yaml_ng::Value::as_str),
        }
    }

    /// The declared `type` tag of the object.
    pub fn type_name(&self) -> &str {
        match self {
            ObjectSpec::Text(_) => "text",
            ObjectSpec::Table(_) => "table",
            ObjectSpec::Unknown(unknown) => &unknown.kind,
        }
    }
}

impl_enum_conversions!(ObjectSpec, Text, TextObject, "object");
impl_enum_conversions!(ObjectSpec, Table, TableObject, "object");

/// A single text field at fixed page coordinates.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TextObject {
    pub name: String,
    /// Zero-based page index.
    pub page_number: usize,
    pub offset: Offset,
    pub dimensions: Dimensions,
    /// When present, the text is matched against each pattern instead of being returned as is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<Pattern>>,
}

/// Named regular expression capture. Capture group 1 is the extracted value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Pattern {
    pub target: String,
    pub regex: String,
}

/// Repeating blocks of rows, located by anchor drawings.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TableObject {
    pub name: String,
    pub method: TableMethod,
    pub blocks_pointer: PointerSpec,
    pub row_pointer: PointerSpec,
}

/// How a table's blocks and rows are located.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableMethod {
    /// Blocks and rows are each marked by an anchor drawing of known dimensions.
    ByPointers,
    /// Any other method, rejected when the table is extracted.
    #[serde(untagged)]
    Other(String),
}

/// Locates anchor drawings and describes the region and columns relative to each of them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PointerSpec {
    #[serde(default)]
    pub criteria: Criteria,
    pub headers: Headers,
    #[serde(default)]
    pub offset: Offset,
    pub dimensions: Dimensions,
    /// When explicitly `false`, exactly one anchor must be found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Absolute tolerance used when matching [PointerSpec::criteria].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f32>,
}

impl PointerSpec {
    pub fn tolerance(&self) -> f32 {
        self.tolerance.unwrap_or(DEFAULT_TOLERANCE)
    }
}

/// Ordered columns of a block or row. Columns are paired with widths positionally, and any
/// surplus names or widths are ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Headers {
    pub names: Vec<String>,
    pub column_widths: Vec<f32>,
}

/// Object of an unrecognised type, retaining its other parameters.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnknownObject {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub params: serde_yaml_ng::Mapping,
}

/// Mirror of the known variants of [ObjectSpec], without the fallback.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum KnownObject {
    #[allow(dead_code)]
    Text(TextObject),
    #[allow(dead_code)]
    Table(TableObject),
}

const KNOWN_OBJECT_TYPES: [&str; 2] = ["text", "table"];

impl UnknownObject {
    fn check_not_malformed(&self) -> Result<()> {
        if !KNOWN_OBJECT_TYPES.contains(&self.kind.as_str()) {
            return Ok(());
        }
        let mut mapping = self.params.clone();
        mapping.insert("type".into(), self.kind.as_str().into());
        serde_yaml_ng::from_value::<KnownObject>(serde_yaml_ng::Value::Mapping(mapping))?;
        Ok(())
    }
}
