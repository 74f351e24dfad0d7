use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use engine::{
    document::{Document, DocumentIo, DocumentSource, Drawing},
    handlers::table::grouping,
};

use crate::pdf::{self, PdfiumDocument};

/// Lists the drawings on a page, to help choose the criteria of anchors.
///
/// Sizes are the bounds that pdfium reports for top-level path objects, including stroke
/// width. Paths nested in form XObjects are not listed. Criteria should be taken from this
/// output rather than from another PDF tool.
#[derive(Args, Debug)]
pub struct Command {
    /// Path to the input PDF.
    input_pdf: PathBuf,

    /// Zero-based page number.
    #[arg(long, default_value_t = 0)]
    page: usize,
}

pub fn run(cmd: &Command) -> Result<()> {
    let pdfium = pdf::bind_pdfium()?;
    let mut document = PdfiumDocument::new(&pdfium);
    document.load(&DocumentSource::Path(cmd.input_pdf.clone()))?;

    let drawings = document.drawings(cmd.page)?;
    print!("{}", format_drawings(&drawings));
    Ok(())
}

/// Formats one line per drawing in reading order, with a header line.
fn format_drawings(drawings: &[Drawing]) -> String {
    let mut rects: Vec<_> = drawings.iter().map(|drawing| drawing.rect).collect();
    grouping::sort_reading_order(&mut rects);

    let mut out = format!(
        "{:>9} {:>9} {:>9} {:>9}\n",
        "x", "y", "width", "height"
    );
    for rect in &rects {
        out.push_str(&format!(
            "{:>9.2} {:>9.2} {:>9.2} {:>9.2}\n",
            rect.x0(),
            rect.y0(),
            rect.width(),
            rect.height()
        ));
    }
    out
}
