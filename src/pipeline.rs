//! One-call pipelines from a video file to a feature table.
//!
//! These helpers chain the usual steps: open the source, decode a frame
//! stack, flatten the selected frames into a [`FeatureTable`]. The stack is
//! returned alongside the table so callers can render frames or build
//! further tables without decoding again.

use std::path::Path;

use log::info;

use crate::catalog::SourceCatalog;
use crate::error::FrametabError;
use crate::source::VideoSource;
use crate::stack::{FrameLimit, FrameStack};
use crate::table::FeatureTable;

/// Decode a video and flatten the selected frames into a table.
///
/// `limit` bounds how many frames are decoded into the stack; `selection`
/// picks which of those frames become table rows, in the listed order.
///
/// # Errors
///
/// Returns any error from [`VideoSource::open`] or
/// [`VideoSource::read_stack`].
///
/// # Panics
///
/// Panics if `selection` names a frame at or past the end of the decoded
/// stack. With a [`FrameLimit::Count`] the stack can be shorter than the
/// limit when the file runs out of frames; select against what was actually
/// decoded when that matters.
///
/// # Example
///
/// ```no_run
/// use frametab::{table_from_video, FrameLimit};
///
/// let (table, stack) = table_from_video("input.avi", &[0, 40, 80], FrameLimit::Count(81)).unwrap();
/// assert_eq!(table.num_rows(), 3 * stack.height() * stack.width());
/// ```
pub fn table_from_video<P: AsRef<Path>>(
    path: P,
    selection: &[usize],
    limit: FrameLimit,
) -> Result<(FeatureTable, FrameStack), FrametabError> {
    let mut source = VideoSource::open(path)?;
    let stack = source.read_stack(limit)?;
    let table = FeatureTable::from_stack(&stack, selection);

    info!(
        "Built a {} row table from {} of {} decoded frames",
        table.num_rows(),
        selection.len(),
        stack.frame_count(),
    );

    Ok((table, stack))
}

/// Resolve a scenario through a catalog, then run
/// [`table_from_video`] on it.
///
/// # Errors
///
/// Returns [`FrametabError::UnknownScenario`] for names the catalog does
/// not hold, plus anything [`table_from_video`] can return.
///
/// # Panics
///
/// Panics under the same conditions as [`table_from_video`].
pub fn table_from_catalog(
    catalog: &SourceCatalog,
    name: &str,
    selection: &[usize],
    limit: FrameLimit,
) -> Result<(FeatureTable, FrameStack), FrametabError> {
    let path = catalog.resolve(name)?;
    info!("Scenario {name} resolves to {}", path.display());
    table_from_video(path, selection, limit)
}
