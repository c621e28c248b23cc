//! Video source metadata types.
//!
//! This module defines the metadata structures returned by
//! [`VideoSource::metadata`](crate::VideoSource::metadata). Metadata is read
//! once when the file is opened and cached for the lifetime of the source.

use std::time::Duration;

/// Container-level metadata for an opened video file.
///
/// # Example
///
/// ```no_run
/// use frametab::VideoSource;
///
/// let source = VideoSource::open("input.avi").unwrap();
/// let metadata = source.metadata();
/// println!("Format: {}, duration: {:?}", metadata.format, metadata.duration);
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct SourceMetadata {
    /// Video stream metadata, if a video stream is present.
    pub video: Option<VideoMetadata>,
    /// Total duration of the file.
    pub duration: Duration,
    /// Container format name (e.g. `"avi"`, `"mov,mp4,m4a,3gp,3g2,mj2"`).
    pub format: String,
}

/// Metadata for the video stream feeding the frame stack.
///
/// `frame_count` is the container's own figure when it reports one and a
/// duration × frame-rate estimate otherwise; either way it is an upper bound
/// hint, not a promise. The exact number of decoded frames is reported by
/// [`FrameStack::frame_count`](crate::FrameStack::frame_count).
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoMetadata {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second (may be approximate for variable-frame-rate files).
    pub frames_per_second: f64,
    /// Total number of frames as declared by the container, or estimated
    /// from duration and frame rate when the container does not say.
    pub frame_count: u64,
    /// Codec name (e.g. `"mjpeg"`, `"h264"`).
    pub codec: String,
}
