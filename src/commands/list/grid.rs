//! Column layout for name grids.
//!
//! Items flow top-to-bottom then left-to-right, like a conventional
//! multi-column directory listing. Cell width is the widest item plus a
//! 2-column gutter; the column count is whatever the terminal fits, clamped
//! to at least one so a too-narrow terminal degrades to a single overflowing
//! column instead of failing.
//!
//! A naive column-major fill concentrates all the slack in one short last
//! column. When the slack exceeds two cells the layout shifts tail cells
//! rightward, column by column, so the emptiness ends up spread across the
//! tail of the last row instead.

use log::debug;

use crate::display::display_width;

/// One entry in a grid: ordering key, rendered label, and the display width
/// of the unformatted label (emphasis tokens occupy zero columns).
#[derive(Clone, Debug)]
pub struct GridItem {
    pub sort_key: String,
    pub label: String,
    pub width: usize,
}

impl GridItem {
    pub fn new(sort_key: impl Into<String>, label: impl Into<String>, width: usize) -> Self {
        Self {
            sort_key: sort_key.into(),
            label: label.into(),
            width,
        }
    }

    /// An unformatted item: the name is both key and label.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        let width = display_width(&name);
        Self {
            sort_key: name.clone(),
            label: name,
            width,
        }
    }
}

/// Width of the gap between columns, also the padding stripped from the end
/// of each assembled line.
const GUTTER: usize = 2;

/// Arrange `items` into lines that fit `terminal_width`.
///
/// Pure and deterministic: sorting, fill, and smoothing all derive from the
/// inputs alone. The caller prints the returned lines followed by one blank
/// line.
pub fn columnise(mut items: Vec<GridItem>, terminal_width: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }

    // Order by the unformatted name; stable, so equal keys keep input order.
    items.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));

    let cell_width = items.iter().map(|item| item.width).max().unwrap_or(0) + GUTTER;

    // The terminal gets the same virtual gutter the last column carries,
    // hence the +2 before dividing. Clamp to one column for degenerate
    // widths rather than erroring.
    let cols = ((terminal_width + GUTTER) / cell_width).max(1);
    let rows = items.len().div_ceil(cols);
    debug!(
        "columnise: {} items, cell {cell_width}, {cols} cols x {rows} rows",
        items.len()
    );

    // Column-major fill: the first `rows` items run down column 0, and so on.
    let mut columns: Vec<Vec<String>> = vec![Vec::new(); cols];
    for (index, item) in items.iter().enumerate() {
        let cell = format!("{}{}", item.label, " ".repeat(cell_width - item.width));
        columns[index / rows].push(cell);
    }

    // Let the last row, not the last column, be the one left partially
    // empty: walking right to left, each column donates its tail to the next.
    let mut diff = rows * cols - items.len();
    if diff > 2 && rows > 1 {
        let mut col = cols - 1;
        diff -= 1;
        while diff > 0 {
            let donor = &mut columns[col - 1];
            // A donor shorter than `diff` gives everything it has.
            let take = diff.min(donor.len());
            let mut moved = donor.split_off(donor.len() - take);
            moved.append(&mut columns[col]);
            columns[col] = moved;
            col -= 1;
            diff -= 1;
        }
    }

    // Transpose to row-major lines; later columns may be shorter. Each cell
    // ends in at least GUTTER spaces of padding, stripped from line ends.
    (0..rows)
        .map(|row| {
            let mut line = String::new();
            for column in &columns {
                if let Some(cell) = column.get(row) {
                    line.push_str(cell);
                }
            }
            line.truncate(line.len().saturating_sub(GUTTER));
            line
        })
        .collect()
}
