use anyhow::Result;
use clap::Args;
use engine::config::StructuralConfig;

use super::ExtractionArgs;
use crate::{
    output,
    pdf::{self, PdfiumDocument},
    service::{DocumentService, InputFile},
};

/// Extracts the objects of a structural configuration from a PDF as JSON.
#[derive(Args, Debug)]
pub struct Command {
    #[command(flatten)]
    extraction: ExtractionArgs,
}

pub fn run(cmd: &Command) -> Result<()> {
    let args = &cmd.extraction;
    let config = StructuralConfig::load(&args.config)?;
    let input = InputFile::read(&args.input_pdf)?;

    let pdfium = pdf::bind_pdfium()?;
    let mut service = DocumentService::new(PdfiumDocument::new(&pdfium));
    let result = service.extract(&input, &config, args.annotated.as_deref())?;

    output::write_json(&result, args.output.as_deref())
}
