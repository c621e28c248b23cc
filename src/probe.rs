//! Lightweight metadata probing.
//!
//! [`VideoProbe`] answers "what is in this file" without holding a demuxer
//! open or requiring a video stream, which suits inventory passes over a
//! directory of recordings before any decoding starts.

use std::path::Path;

use ffmpeg_next::format;
use log::debug;

use crate::error::FrametabError;
use crate::metadata::SourceMetadata;
use crate::source::inspect_input;

/// Stateless prober for media files.
pub struct VideoProbe;

impl VideoProbe {
    /// Probe a file and return its metadata.
    ///
    /// Unlike [`VideoSource::open`](crate::VideoSource::open), probing a
    /// file with no video stream succeeds; the returned metadata simply has
    /// no video section.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::FileOpen`] when the file cannot be opened
    /// or demuxed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use frametab::VideoProbe;
    ///
    /// let metadata = VideoProbe::probe("input.avi").unwrap();
    /// if let Some(video) = &metadata.video {
    ///     println!("{}x{} at {:.3} fps", video.width, video.height, video.frames_per_second);
    /// }
    /// ```
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<SourceMetadata, FrametabError> {
        ffmpeg_next::init()?;

        let path = path.as_ref();
        let input = format::input(&path).map_err(|error| FrametabError::FileOpen {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;

        debug!("Probing {}", path.display());
        inspect_input(&input)
    }
}
