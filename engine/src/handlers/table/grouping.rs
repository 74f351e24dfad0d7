//! Assignment of row anchors to the block anchors that own them.

use crate::geometry::Rect;

/// A block anchor and the rows it owns, in reading order.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub block: Rect,
    pub rows: Vec<Rect>,
}

/// Result of [assign_rows].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Assignment {
    /// One group per block, in block order.
    pub groups: Vec<Group>,
    /// Rows that precede the first block, and so are owned by no block.
    pub orphaned: Vec<Rect>,
}

/// Sorts rects into reading order: by page, then by top edge. The sort is stable, so rects at
/// the same position keep their relative order.
pub fn sort_reading_order(rects: &mut [Rect]) {
    rects.sort_by(Rect::cmp_reading_order);
}

/// Assigns each row to the block that most closely precedes it in reading order.
///
/// Both `blocks` and `rows` must already be in reading order (see [sort_reading_order]). A block
/// owns the rows from its own position (inclusive) up to the position of the next block
/// (exclusive), across any number of page breaks. The last block owns every remaining row.
///
/// The inputs are merged in a single pass.
pub fn assign_rows(blocks: &[Rect], rows: &[Rect]) -> Assignment {
    let mut assignment = Assignment {
        groups: Vec::with_capacity(blocks.len()),
        orphaned: Vec::new(),
    };
    let mut rows = rows.iter().copied().peekable();

    for (index, block) in blocks.iter().enumerate() {
        let next_block = blocks.get(index + 1);
        let mut owned = Vec::new();
        while let Some(row) = rows.peek() {
            if row.cmp_reading_order(block).is_lt() {
                // Rows can only precede the current block if they precede all blocks.
                assignment.orphaned.push(*row);
            } else if next_block.is_some_and(|next| row.cmp_reading_order(next).is_ge()) {
                break;
            } else {
                owned.push(*row);
            }
            rows.next();
        }
        assignment.groups.push(Group {
            block: *block,
            rows: owned,
        });
    }

    if blocks.is_empty() {
        assignment.orphaned.extend(rows);
    }

    assignment
}
