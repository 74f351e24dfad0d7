//! Validation, extraction and annotated output of a single input document.

use std::path::Path;

use anyhow::{Context, Result};
use engine::{
    ExtractionResult, Processor,
    config::StructuralConfig,
    document::{DocumentIo, DocumentSource},
};
use report::ProcessedReport;

const PDF_EXTENSION: &str = ".pdf";
const PDF_HEADER: &[u8] = b"%PDF-";

/// An input file that does not look like a PDF.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("file {0:?} does not have a \".pdf\" extension")]
    NotPdfName(String),

    #[error("file {0:?} does not start with a PDF header")]
    NotPdfContent(String),
}

/// Name and content of an input document.
#[derive(Clone, Debug)]
pub struct InputFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl InputFile {
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).with_context(|| format!("reading input {path:?}"))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { filename, content })
    }

    /// Checks the name and the header of the file.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.filename.to_lowercase().ends_with(PDF_EXTENSION) {
            return Err(InputError::NotPdfName(self.filename.clone()));
        }
        if !self.content.starts_with(PDF_HEADER) {
            return Err(InputError::NotPdfContent(self.filename.clone()));
        }
        Ok(())
    }
}

/// Runs structural configurations against documents loaded into `D`.
pub struct DocumentService<D> {
    document: D,
    processor: Processor,
}

impl<D: DocumentIo> DocumentService<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            processor: Processor::default(),
        }
    }

    /// Extracts `config` from `input`, saving an annotated copy to `annotated_output` if given.
    pub fn extract(
        &mut self,
        input: &InputFile,
        config: &StructuralConfig,
        annotated_output: Option<&Path>,
    ) -> Result<ExtractionResult> {
        input.validate()?;
        log::debug!("validated {:?}", input.filename);

        self.document.load(&DocumentSource::Bytes {
            name: input.filename.clone(),
            content: input.content.clone(),
        })?;
        let result = self
            .processor
            .process(&mut self.document, config, annotated_output.is_some())?;

        if let Some(path) = annotated_output {
            self.document.save(path)?;
            log::info!("saved annotated document to {path:?}");
        }
        log::info!(
            "extracted {} values from {:?}",
            result.len(),
            input.filename
        );
        Ok(result)
    }

    /// Extracts a lift downtime report from `input` and converts it into records.
    pub fn process_lift_report(
        &mut self,
        input: &InputFile,
        config: &StructuralConfig,
        annotated_output: Option<&Path>,
    ) -> Result<ProcessedReport> {
        let result = self.extract(input, config, annotated_output)?;
        let reports = report::convert_to_reports(&result)
            .with_context(|| format!("converting report {:?}", input.filename))?;
        ProcessedReport::new(input.filename.clone(), &input.content, reports)
    }

    #[cfg(test)]
    fn document(&self) -> &D {
        &self.document
    }
}
