//! Document access backed by the Pdfium library.

mod pdfiumdoc;

use anyhow::{Context, Result};
use engine::geometry::Rect;
use pdfium_render::prelude::{Pdfium, PdfRect};

pub use pdfiumdoc::PdfiumDocument;

/// Binds to the statically linked Pdfium library.
pub fn bind_pdfium() -> Result<Pdfium> {
    let bindings =
        Pdfium::bind_to_statically_linked_library().with_context(|| "binding to Pdfium")?;
    Ok(Pdfium::new(bindings))
}

/// Axis-aligned box in PDF user space, with the origin at the bottom left of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PdfBox {
    left: f32,
    bottom: f32,
    right: f32,
    top: f32,
}

impl PdfBox {
    /// Converts a top-left origin `rect` on a page of `page_height`.
    fn from_page_rect(rect: &Rect, page_height: f32) -> Self {
        Self {
            left: rect.x0(),
            bottom: page_height - rect.y1(),
            right: rect.x1(),
            top: page_height - rect.y0(),
        }
    }

    /// Converts to a top-left origin rect on `page` of `page_height`.
    fn to_page_rect(self, page: usize, page_height: f32) -> Rect {
        Rect::new(
            page,
            self.left,
            page_height - self.top,
            self.right,
            page_height - self.bottom,
        )
    }

    fn from_pdf_rect(rect: &PdfRect) -> Self {
        Self {
            left: rect.left().value,
            bottom: rect.bottom().value,
            right: rect.right().value,
            top: rect.top().value,
        }
    }

    fn to_pdf_rect(self) -> PdfRect {
        PdfRect::new_from_values(self.bottom, self.left, self.top, self.right)
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    const PAGE_HEIGHT: f32 = 842.0;

    #[gtest]
    fn test_flips_vertical_axis() {
        let rect = Rect::new(2, 10.0, 20.0, 110.0, 50.0);

        let pdf_box = PdfBox::from_page_rect(&rect, PAGE_HEIGHT);

        expect_that!(
            pdf_box,
            eq(PdfBox {
                left: 10.0,
                bottom: 792.0,
                right: 110.0,
                top: 822.0,
            })
        );
        expect_that!(pdf_box.to_page_rect(2, PAGE_HEIGHT), eq(rect));
    }

    #[gtest]
    fn test_box_at_page_bottom_ends_at_page_height() {
        let pdf_box = PdfBox {
            left: 0.0,
            bottom: 0.0,
            right: 595.0,
            top: 17.0,
        };

        let rect = pdf_box.to_page_rect(0, PAGE_HEIGHT);

        expect_that!(rect.y0(), eq(825.0));
        expect_that!(rect.y1(), eq(PAGE_HEIGHT));
        expect_that!(rect.width(), eq(595.0));
        expect_that!(rect.height(), eq(17.0));
    }
}
