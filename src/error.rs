//! Error types for the `frametab` crate.
//!
//! This module defines [`FrametabError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry enough context (file
//! paths, scenario names, upstream messages) to diagnose a failure without
//! extra logging at the call site.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use thiserror::Error;

/// The unified error type for all `frametab` operations.
///
/// Every public method that can fail returns `Result<T, FrametabError>`.
/// Deliberately *not* covered: out-of-range frame selections, which panic
/// rather than error (the selection is the caller's responsibility, see
/// [`build_rows`](crate::build_rows)).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FrametabError {
    /// The video file could not be opened.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to [`crate::VideoSource::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A video frame could not be decoded or converted.
    #[error("Failed to decode video frame: {0}")]
    VideoDecode(String),

    /// A scenario name was not present in the source catalog.
    #[error("Unknown scenario {name:?} (not present in the source catalog)")]
    UnknownScenario {
        /// The name that failed to resolve.
        name: String,
    },

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    Ffmpeg(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// A catalog file could not be parsed as JSON.
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<FfmpegError> for FrametabError {
    fn from(error: FfmpegError) -> Self {
        FrametabError::Ffmpeg(error.to_string())
    }
}
