use anyhow::Result;
use clap::Args;
use engine::config::StructuralConfig;

use super::ExtractionArgs;
use crate::{
    output,
    pdf::{self, PdfiumDocument},
    service::{DocumentService, InputFile},
};

/// Converts a lift downtime report PDF into per company stoppage records as JSON.
///
/// The structural configuration must produce "report_time" and "stoppages_data", as
/// configs/lift_report_v1.yml does.
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
    let processed = service.process_lift_report(&input, &config, args.annotated.as_deref())?;

    output::write_json(&processed, args.output.as_deref())
}
