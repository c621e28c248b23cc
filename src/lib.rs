//! # frametab
//!
//! Turn video frames into labeled tables of per-pixel BGR/HSV features for
//! clustering analysis.
//!
//! `frametab` decodes a recording with FFmpeg via the
//! [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next) crate, stacks the
//! frames into a 4-D [`ndarray`] array of per-pixel BGR and HSV channels,
//! and flattens selected frames into a nine-column [`FeatureTable`] with
//! one row per pixel: frame label, pixel row, pixel column, then B, G, R,
//! H, S, V. The table feeds straight into clustering or any other numeric
//! pipeline, or dumps to CSV for work elsewhere.
//!
//! ## Quick Start
//!
//! ### Build a Feature Table
//!
//! ```no_run
//! use frametab::{FrameLimit, table_from_video};
//!
//! let (table, stack) = table_from_video("input.avi", &[0, 40, 80], FrameLimit::All).unwrap();
//! println!("{} rows from {} decoded frames", table.num_rows(), stack.frame_count());
//! table.save_csv("pixels.csv").unwrap();
//! ```
//!
//! ### Decode and Select by Hand
//!
//! ```no_run
//! use frametab::{FeatureTable, FrameLimit, VideoSource};
//!
//! let mut source = VideoSource::open("input.avi").unwrap();
//! let stack = source.read_stack(FrameLimit::Count(120)).unwrap();
//!
//! let last = stack.frame_count() - 1;
//! let table = FeatureTable::from_stack(&stack, &[0, last]);
//! ```
//!
//! ### Name Recordings Through a Catalog
//!
//! ```no_run
//! use frametab::{FrameLimit, SourceCatalog, table_from_catalog};
//!
//! let catalog = SourceCatalog::new()
//!     .with_root("recordings")
//!     .with_source("lab", "lab_run.avi");
//!
//! let (table, _stack) = table_from_catalog(&catalog, "lab", &[0], FrameLimit::All).unwrap();
//! ```
//!
//! ### Probe Before Decoding
//!
//! ```no_run
//! use frametab::VideoProbe;
//!
//! let metadata = VideoProbe::probe("input.avi").unwrap();
//! if let Some(video) = &metadata.video {
//!     println!("{}x{}, ~{} frames", video.width, video.height, video.frame_count);
//! }
//! ```
//!
//! ## Features
//!
//! - **Frame stacks**: every decoded frame in one `(frame, row, column,
//!   channel)` array of `f64`, sized to exactly what was decoded
//! - **Six channels per pixel**: decoded BGR plus HSV derived with OpenCV's
//!   8-bit conventions (hue in half-degrees below 180)
//! - **Explicit frame selection**: tables are built from a caller-supplied
//!   index list, in order, duplicates and all
//! - **CSV export**: nine-column tables with a header row
//! - **Display helpers**: convert stack frames back to RGB arrays or
//!   [`image::RgbImage`] values for inspection
//! - **Source catalogs**: name recordings instead of hard-coding paths,
//!   optionally loaded from JSON
//! - **Stream probing**: lightweight [`VideoProbe`] for quick inspection
//! - **FFmpeg log control**: tune FFmpeg's own stderr output
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system. See the
//! README for platform-specific instructions.

pub mod catalog;
pub mod color;
pub mod display;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod pipeline;
pub mod probe;
pub mod rows;
pub mod source;
pub mod stack;
pub mod table;

pub use catalog::SourceCatalog;
pub use color::bgr_to_hsv;
pub use display::{display_array, display_image};
pub use error::FrametabError;
pub use logging::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use metadata::{SourceMetadata, VideoMetadata};
pub use pipeline::{table_from_catalog, table_from_video};
pub use probe::VideoProbe;
pub use rows::{ROW_WIDTH, build_rows};
pub use source::VideoSource;
pub use stack::{CHANNEL_COUNT, FrameLimit, FrameStack, channel};
pub use table::{COLUMNS, FeatureTable};
