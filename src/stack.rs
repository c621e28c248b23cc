//! The 4-D frame stack.
//!
//! [`FrameStack`] holds every decoded frame of a video as one
//! `ndarray::Array4<f64>` indexed by `(frame, row, column, channel)`. Each
//! pixel carries six channels: the decoded BGR triple in channels 0 to 2 and
//! the derived HSV triple in channels 3 to 5. The stack is created once by
//! [`VideoSource::read_stack`](crate::VideoSource::read_stack) and never
//! mutated afterwards.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use ndarray::{Array4, ArrayView3, Axis};

use crate::error::FrametabError;

/// Number of channels stored per pixel (BGR plus HSV).
pub const CHANNEL_COUNT: usize = 6;

/// Named indices into the channel axis of a [`FrameStack`].
pub mod channel {
    /// Blue, as decoded.
    pub const B: usize = 0;
    /// Green, as decoded.
    pub const G: usize = 1;
    /// Red, as decoded.
    pub const R: usize = 2;
    /// Hue, in half-degrees `[0, 180)`.
    pub const H: usize = 3;
    /// Saturation, `[0, 255]`.
    pub const S: usize = 4;
    /// Value (brightness), `[0, 255]`.
    pub const V: usize = 5;
}

/// How many frames to decode into a stack.
///
/// The "all frames" sentinel is explicit rather than a magic count. A
/// `Count` larger than the number of frames in the file is clamped by the
/// end of the stream: decoding simply stops early and the stack holds every
/// frame the file had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[must_use]
pub enum FrameLimit {
    /// Decode until the end of the stream.
    #[default]
    All,
    /// Decode at most this many frames.
    Count(usize),
}

impl FrameLimit {
    /// Returns `true` once `decoded` frames satisfy the limit.
    pub(crate) fn reached(self, decoded: usize) -> bool {
        match self {
            FrameLimit::All => false,
            FrameLimit::Count(count) => decoded >= count,
        }
    }
}

impl From<Option<usize>> for FrameLimit {
    fn from(limit: Option<usize>) -> Self {
        match limit {
            Some(count) => FrameLimit::Count(count),
            None => FrameLimit::All,
        }
    }
}

/// A stack of decoded video frames with per-pixel BGR and HSV channels.
///
/// Dimensions are `(frame_count, height, width, CHANNEL_COUNT)`. All frames
/// share one height and width. Channel values are 8-bit quantities stored as
/// `f64`, ready for numeric feature work without further conversion.
///
/// The first dimension is exactly the number of frames that were decoded;
/// there is no reserved or zero-filled tail.
///
/// # Example
///
/// ```no_run
/// use frametab::{FrameLimit, VideoSource};
///
/// let mut source = VideoSource::open("input.avi").unwrap();
/// let stack = source.read_stack(FrameLimit::Count(80)).unwrap();
/// println!(
///     "{} frames of {}x{}",
///     stack.frame_count(),
///     stack.width(),
///     stack.height(),
/// );
/// ```
#[must_use]
pub struct FrameStack {
    data: Array4<f64>,
}

impl FrameStack {
    /// Wrap an existing `(frames, height, width, 6)` array.
    ///
    /// Useful for building synthetic stacks in tests and benchmarks.
    ///
    /// # Panics
    ///
    /// Panics if the channel axis does not have length [`CHANNEL_COUNT`].
    pub fn from_array(data: Array4<f64>) -> Self {
        assert_eq!(
            data.shape()[3],
            CHANNEL_COUNT,
            "frame stacks carry exactly {CHANNEL_COUNT} channels per pixel",
        );
        Self { data }
    }

    /// Build a stack from a flat buffer of interleaved channel values.
    ///
    /// The buffer is laid out frame-major, then row, column, channel, which
    /// is how the decoder appends pixels.
    pub(crate) fn from_buffer(
        buffer: Vec<f64>,
        frames: usize,
        height: usize,
        width: usize,
    ) -> Result<Self, FrametabError> {
        let data = Array4::from_shape_vec((frames, height, width, CHANNEL_COUNT), buffer)
            .map_err(|error| {
                FrametabError::VideoDecode(format!("Frame stack has inconsistent shape: {error}"))
            })?;
        Ok(Self { data })
    }

    /// Number of frames actually decoded into the stack.
    pub fn frame_count(&self) -> usize {
        self.data.shape()[0]
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.data.shape()[1]
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.data.shape()[2]
    }

    /// Returns `true` when the stack holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// View one frame as a `(height, width, channel)` array.
    ///
    /// # Panics
    ///
    /// Panics if `index >= frame_count()`. Selections are not validated
    /// anywhere in this crate; keeping them in range is the caller's job.
    pub fn frame(&self, index: usize) -> ArrayView3<'_, f64> {
        self.data.index_axis(Axis(0), index)
    }

    /// Borrow the underlying 4-D array.
    pub fn data(&self) -> &Array4<f64> {
        &self.data
    }

    /// Consume the stack and take ownership of the underlying array.
    pub fn into_data(self) -> Array4<f64> {
        self.data
    }
}

impl Debug for FrameStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FrameStack")
            .field("frame_count", &self.frame_count())
            .field("height", &self.height())
            .field("width", &self.width())
            .field("channels", &CHANNEL_COUNT)
            .finish()
    }
}
