//! Flattening frames into per-pixel feature rows.
//!
//! Every pixel of every selected frame becomes one row of nine values: the
//! frame label, the pixel's row and column, then the six channel values.
//! Pixels are emitted row-major within each frame, and frames appear in
//! exactly the order the selection lists them.

use ndarray::{Array2, ArrayView3, ArrayViewMut2, s};

use crate::stack::{FrameStack, CHANNEL_COUNT};

/// Width of one feature row: frame label, row, column, then the channels.
pub const ROW_WIDTH: usize = 3 + CHANNEL_COUNT;

/// Flatten the selected frames of a stack into a `(rows, 9)` array.
///
/// The selection is taken literally: frames appear in the listed order,
/// duplicates are flattened twice, and an empty selection yields an array
/// with zero rows. Each frame contributes `height * width` rows labeled
/// with the frame index it was selected by.
///
/// # Panics
///
/// Panics if any selected index is `>= stack.frame_count()`. Selections are
/// not validated; callers choose indices against
/// [`FrameStack::frame_count`].
///
/// # Example
///
/// ```
/// use frametab::{build_rows, FrameStack};
/// use ndarray::Array4;
///
/// let stack = FrameStack::from_array(Array4::zeros((4, 2, 3, 6)));
/// let rows = build_rows(&stack, &[0, 2]);
/// assert_eq!(rows.dim(), (2 * 2 * 3, 9));
/// ```
pub fn build_rows(stack: &FrameStack, selection: &[usize]) -> Array2<f64> {
    let per_frame = stack.height() * stack.width();
    let mut rows = Array2::zeros((selection.len() * per_frame, ROW_WIDTH));

    for (position, &index) in selection.iter().enumerate() {
        let start = position * per_frame;
        fill_frame_rows(
            stack.frame(index),
            index as f64,
            rows.slice_mut(s![start..start + per_frame, ..]),
        );
    }

    rows
}

/// Fill `rows` with one feature row per pixel of `frame`, labeled with
/// `frame_label`. `rows` must have exactly `height * width` rows.
pub(crate) fn fill_frame_rows(
    frame: ArrayView3<'_, f64>,
    frame_label: f64,
    mut rows: ArrayViewMut2<'_, f64>,
) {
    let (height, width, _) = frame.dim();

    let mut next = 0;
    for i in 0..height {
        for j in 0..width {
            let mut row = rows.row_mut(next);
            row[0] = frame_label;
            row[1] = i as f64;
            row[2] = j as f64;
            for channel in 0..CHANNEL_COUNT {
                row[3 + channel] = frame[(i, j, channel)];
            }
            next += 1;
        }
    }
}
