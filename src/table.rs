//! The per-pixel feature table.
//!
//! [`FeatureTable`] is the final product of the pipeline: a two-dimensional,
//! nine-column table with one row per pixel, ready to feed a clustering
//! algorithm or to dump as CSV for work in other tools.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Result as IoResult, Write};
use std::path::Path;

use log::info;
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayView3};

use crate::error::FrametabError;
use crate::rows::{build_rows, fill_frame_rows, ROW_WIDTH};
use crate::stack::FrameStack;

/// Column names, in table order.
///
/// The first three columns locate a pixel (frame label, row, column); the
/// remaining six are its channel values.
pub const COLUMNS: [&str; ROW_WIDTH] = ["f", "i", "j", "B", "G", "R", "H", "S", "V"];

/// A `(rows, 9)` table of per-pixel features.
///
/// Rows are ordered by selection position, then pixel row, then pixel
/// column. All values are `f64`, including the integer-valued coordinate
/// columns, so the whole table can be handed to numeric code as one array.
///
/// # Example
///
/// ```
/// use frametab::{FeatureTable, FrameStack};
/// use ndarray::Array4;
///
/// let stack = FrameStack::from_array(Array4::zeros((3, 4, 5, 6)));
/// let table = FeatureTable::from_stack(&stack, &[1, 2]);
/// assert_eq!(table.num_rows(), 2 * 4 * 5);
/// assert_eq!(table.num_columns(), 9);
/// ```
#[must_use]
pub struct FeatureTable {
    data: Array2<f64>,
}

impl FeatureTable {
    /// Build a table from the selected frames of a stack.
    ///
    /// # Panics
    ///
    /// Panics if any selected index is `>= stack.frame_count()`, exactly as
    /// [`build_rows`] does.
    pub fn from_stack(stack: &FrameStack, selection: &[usize]) -> Self {
        Self {
            data: build_rows(stack, selection),
        }
    }

    /// Build a table from a single `(height, width, channel)` frame view,
    /// labeling every row with `frame_label`.
    ///
    /// Handy for inspecting one frame without flattening the whole stack.
    pub fn from_single_frame(frame: ArrayView3<'_, f64>, frame_label: f64) -> Self {
        let (height, width, _) = frame.dim();
        let mut data = Array2::zeros((height * width, ROW_WIDTH));
        fill_frame_rows(frame, frame_label, data.view_mut());
        Self { data }
    }

    /// Wrap an existing `(rows, 9)` array.
    ///
    /// # Panics
    ///
    /// Panics if the array does not have exactly [`COLUMNS`]`.len()`
    /// columns.
    pub fn from_rows(data: Array2<f64>) -> Self {
        assert_eq!(
            data.ncols(),
            ROW_WIDTH,
            "feature tables carry exactly {ROW_WIDTH} columns",
        );
        Self { data }
    }

    /// Number of rows (pixels) in the table.
    pub fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns, always `COLUMNS.len()`.
    pub fn num_columns(&self) -> usize {
        self.data.ncols()
    }

    /// Returns `true` when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Borrow the table as a two-dimensional view.
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// View one column by its name in [`COLUMNS`], or `None` for an unknown
    /// name.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        COLUMNS
            .iter()
            .position(|&column| column == name)
            .map(|index| self.data.column(index))
    }

    /// Consume the table and take ownership of the underlying array.
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }

    /// Write the table as CSV, header row first.
    ///
    /// Integer-valued cells are written without a fractional part, so a
    /// typical line reads `0,3,17,255,128,0,90,255,255`.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> IoResult<()> {
        writeln!(writer, "{}", COLUMNS.join(","))?;
        for row in self.data.rows() {
            let mut first = true;
            for value in row {
                if first {
                    first = false;
                } else {
                    write!(writer, ",")?;
                }
                write!(writer, "{value}")?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }

    /// Write the table as CSV to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::Io`] when the file cannot be created or
    /// written.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), FrametabError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_csv(&mut writer)?;
        writer.flush()?;

        info!("Wrote {} rows to {}", self.num_rows(), path.display());
        Ok(())
    }
}

impl Debug for FeatureTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FeatureTable")
            .field("rows", &self.num_rows())
            .field("columns", &COLUMNS)
            .finish()
    }
}
