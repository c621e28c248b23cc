//! Video sources and frame decoding.
//!
//! [`VideoSource`] wraps an FFmpeg demuxer for one video file. Opening a
//! source probes its metadata; [`VideoSource::read_stack`] then decodes
//! frames into a [`FrameStack`], converting every pixel to the six-channel
//! BGR plus HSV layout on the fly.

use std::path::{Path, PathBuf};

use ffmpeg_next::codec::context::Context as CodecContext;
use ffmpeg_next::format::{self, Pixel};
use ffmpeg_next::media::Type;
use ffmpeg_next::software::scaling::{context::Context as ScalingContext, flag::Flags as ScalingFlags};
use ffmpeg_next::util::frame::video::Video;
use log::{debug, info};

use crate::color::bgr_to_hsv;
use crate::error::FrametabError;
use crate::metadata::{SourceMetadata, VideoMetadata};
use crate::stack::{CHANNEL_COUNT, FrameLimit, FrameStack};

/// An opened video file ready for frame extraction.
///
/// Construction probes the container once and caches a [`SourceMetadata`];
/// repeated calls to [`read_stack`](Self::read_stack) rewind to the first
/// frame, so one source can feed several extractions.
///
/// # Example
///
/// ```no_run
/// use frametab::{FrameLimit, VideoSource};
///
/// let mut source = VideoSource::open("input.avi").unwrap();
/// let stack = source.read_stack(FrameLimit::All).unwrap();
/// assert_eq!(stack.height(), source.metadata().video.as_ref().unwrap().height as usize);
/// ```
pub struct VideoSource {
    path: PathBuf,
    input: format::context::Input,
    metadata: SourceMetadata,
}

impl VideoSource {
    /// Open a video file and probe its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::FileOpen`] when the file cannot be opened or
    /// demuxed, and [`FrametabError::NoVideoStream`] when the container has
    /// no video stream.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, FrametabError> {
        ffmpeg_next::init()?;

        let path = path.as_ref().to_path_buf();
        let input = format::input(&path).map_err(|error| FrametabError::FileOpen {
            path: path.clone(),
            reason: error.to_string(),
        })?;

        let metadata = inspect_input(&input)?;
        let video = metadata
            .video
            .as_ref()
            .ok_or(FrametabError::NoVideoStream)?;

        info!(
            "Opened {}: {}x{} at {:.3} fps, ~{} frames ({})",
            path.display(),
            video.width,
            video.height,
            video.frames_per_second,
            video.frame_count,
            video.codec,
        );

        Ok(Self {
            path,
            input,
            metadata,
        })
    }

    /// Path this source was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Metadata probed when the source was opened.
    pub fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    /// Decode frames from the start of the stream into a [`FrameStack`].
    ///
    /// With [`FrameLimit::Count`] the stack holds at most that many frames;
    /// decoding stops as soon as the limit is met. With [`FrameLimit::All`]
    /// every frame in the stream is decoded. A limit of zero yields an empty
    /// stack without touching the decoder.
    ///
    /// # Errors
    ///
    /// Returns [`FrametabError::Ffmpeg`] or [`FrametabError::VideoDecode`]
    /// when the decoder or the pixel format converter fails.
    pub fn read_stack(&mut self, limit: FrameLimit) -> Result<FrameStack, FrametabError> {
        self.read_stack_with(limit, |_| {})
    }

    /// Like [`read_stack`](Self::read_stack), invoking `on_frame` with the
    /// zero-based index of each frame as it lands in the stack.
    ///
    /// The callback exists for progress reporting; it must not assume any
    /// relation between the index and stream timestamps.
    pub fn read_stack_with(
        &mut self,
        limit: FrameLimit,
        mut on_frame: impl FnMut(usize),
    ) -> Result<FrameStack, FrametabError> {
        self.rewind()?;

        let stream = self
            .input
            .streams()
            .best(Type::Video)
            .ok_or(FrametabError::NoVideoStream)?;
        let stream_index = stream.index();

        let context = CodecContext::from_parameters(stream.parameters())?;
        let mut decoder = context.decoder().video()?;

        let width = decoder.width() as usize;
        let height = decoder.height() as usize;

        let mut scaler = ScalingContext::get(
            decoder.format(),
            decoder.width(),
            decoder.height(),
            Pixel::BGR24,
            decoder.width(),
            decoder.height(),
            ScalingFlags::BILINEAR,
        )?;

        debug!(
            "Decoding {} with limit {:?} ({}x{})",
            self.path.display(),
            limit,
            width,
            height,
        );

        // The buffer grows by exactly one frame per decoded frame, so the
        // final stack length equals the number of frames actually decoded.
        let mut buffer: Vec<f64> = Vec::new();
        let mut decoded = 0usize;

        if !limit.reached(decoded) {
            for (stream, packet) in self.input.packets() {
                if stream.index() != stream_index {
                    continue;
                }
                decoder.send_packet(&packet)?;
                receive_frames(
                    &mut decoder,
                    &mut scaler,
                    &mut buffer,
                    &mut decoded,
                    limit,
                    &mut on_frame,
                    width,
                    height,
                )?;
                if limit.reached(decoded) {
                    break;
                }
            }

            if !limit.reached(decoded) {
                decoder.send_eof()?;
                receive_frames(
                    &mut decoder,
                    &mut scaler,
                    &mut buffer,
                    &mut decoded,
                    limit,
                    &mut on_frame,
                    width,
                    height,
                )?;
            }
        }

        info!(
            "Decoded {} frames from {} into a {}x{} stack",
            decoded,
            self.path.display(),
            width,
            height,
        );

        FrameStack::from_buffer(buffer, decoded, height, width)
    }

    /// Seek back to the start of the stream, reopening the file if the
    /// container does not support seeking.
    fn rewind(&mut self) -> Result<(), FrametabError> {
        if let Err(error) = self.input.seek(0, ..1) {
            debug!(
                "Seek to start of {} failed ({error}); reopening",
                self.path.display(),
            );
            self.input =
                format::input(&self.path).map_err(|error| FrametabError::FileOpen {
                    path: self.path.clone(),
                    reason: error.to_string(),
                })?;
        }
        Ok(())
    }
}

/// Drain every frame the decoder is ready to hand over, convert each pixel
/// to the six-channel layout, and append it to the stack buffer.
#[allow(clippy::too_many_arguments)]
fn receive_frames(
    decoder: &mut ffmpeg_next::decoder::Video,
    scaler: &mut ScalingContext,
    buffer: &mut Vec<f64>,
    decoded: &mut usize,
    limit: FrameLimit,
    on_frame: &mut impl FnMut(usize),
    width: usize,
    height: usize,
) -> Result<(), FrametabError> {
    let mut frame = Video::empty();
    while !limit.reached(*decoded) && decoder.receive_frame(&mut frame).is_ok() {
        let mut bgr = Video::empty();
        scaler.run(&frame, &mut bgr)?;
        append_frame(&bgr, buffer, width, height);
        on_frame(*decoded);
        *decoded += 1;
    }
    Ok(())
}

/// Append one BGR24 frame to the buffer as interleaved B, G, R, H, S, V.
///
/// FFmpeg pads each row to its own stride, so rows are sliced out of the
/// plane individually rather than copied wholesale.
fn append_frame(frame: &Video, buffer: &mut Vec<f64>, width: usize, height: usize) {
    let data = frame.data(0);
    let stride = frame.stride(0);

    buffer.reserve(height * width * CHANNEL_COUNT);
    for row in 0..height {
        let start = row * stride;
        let line = &data[start..start + width * 3];
        for pixel in line.chunks_exact(3) {
            let bgr = [pixel[0], pixel[1], pixel[2]];
            let [hue, saturation, value] = bgr_to_hsv(bgr);
            buffer.extend_from_slice(&[
                f64::from(bgr[0]),
                f64::from(bgr[1]),
                f64::from(bgr[2]),
                f64::from(hue),
                f64::from(saturation),
                f64::from(value),
            ]);
        }
    }
}

/// Probe a demuxed input for container and video stream details.
pub(crate) fn inspect_input(
    input: &format::context::Input,
) -> Result<SourceMetadata, FrametabError> {
    let duration = if input.duration() > 0 {
        std::time::Duration::from_micros(input.duration() as u64)
    } else {
        std::time::Duration::ZERO
    };
    let format = input.format().name().to_string();

    let video = match input.streams().best(Type::Video) {
        Some(stream) => {
            let context = CodecContext::from_parameters(stream.parameters())?;
            let decoder = context.decoder().video()?;

            let rate = stream.avg_frame_rate();
            let frames_per_second = if rate.denominator() == 0 {
                0.0
            } else {
                f64::from(rate)
            };

            // Container frame counts are often absent; fall back to a
            // duration-based estimate when the stream does not carry one.
            let frame_count = if stream.frames() > 0 {
                stream.frames() as u64
            } else {
                (duration.as_secs_f64() * frames_per_second).round() as u64
            };

            Some(VideoMetadata {
                width: decoder.width(),
                height: decoder.height(),
                frames_per_second,
                frame_count,
                codec: codec_name(stream.parameters().id()),
            })
        }
        None => None,
    };

    Ok(SourceMetadata {
        video,
        duration,
        format,
    })
}

/// Human-readable codec name, falling back to the identifier's debug form.
fn codec_name(id: ffmpeg_next::codec::Id) -> String {
    ffmpeg_next::decoder::find(id)
        .map(|codec| codec.name().to_string())
        .unwrap_or_else(|| format!("{id:?}").to_lowercase())
}
