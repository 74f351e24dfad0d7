//! Page scoped geometry that all matching and extraction operates on.


use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Rectangular region on a single page of a document.
///
/// Coordinates use a top-left origin, with `y` growing down the page, in PDF points
/// (1/72 of an inch). For a well formed [Rect] `x0 <= x1 && y0 <= y1`, although this is not
/// enforced. A degenerate [Rect] simply covers no text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rect {
    page: usize,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl Rect {
    /// Creates a [Rect] on the zero-based `page`.
    pub fn new(page: usize, x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            page,
            x0,
            y0,
            x1,
            y1,
        }
    }

    /// Creates a [Rect] of the given size whose top-left corner is at `(x, y)`.
    pub fn from_origin(page: usize, x: f32, y: f32, dimensions: Dimensions) -> Self {
        Self::new(page, x, y, x + dimensions.width, y + dimensions.height)
    }

    /// Zero-based index of the page within the document.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn x0(&self) -> f32 {
        self.x0
    }

    pub fn y0(&self) -> f32 {
        self.y0
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Places a new [Rect] of `dimensions` at `offset` from this rect's top-left corner, on the
    /// same page.
    pub fn place(&self, offset: Offset, dimensions: Dimensions) -> Self {
        Self::from_origin(
            self.page,
            self.x0 + offset.x,
            self.y0 + offset.y,
            dimensions,
        )
    }

    /// Orders rects by reading position: page first, then top edge.
    pub fn cmp_reading_order(&self, other: &Self) -> Ordering {
        self.page
            .cmp(&other.page)
            .then_with(|| self.y0.total_cmp(&other.y0))
    }

    /// Splits the rect into consecutive columns of the given widths, starting from the left
    /// edge. Each column spans the full height of the rect.
    ///
    /// The columns are not clipped to the rect, so widths summing to more than
    /// [Rect::width] extend past the right edge.
    pub fn columns<'a>(&self, widths: &'a [f32]) -> impl Iterator<Item = Rect> + 'a {
        let Rect {
            page, x0, y0, y1, ..
        } = *self;
        widths.iter().scan(x0, move |left, &width| {
            let column = Rect::new(page, *left, y0, *left + width, y1);
            *left += width;
            Some(column)
        })
    }
}

/// Displacement from an origin point.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// Size of a rectangular region.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}
