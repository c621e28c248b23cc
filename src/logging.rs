//! FFmpeg log level configuration.
//!
//! FFmpeg writes its own diagnostics to stderr through its internal logging
//! machinery, independent of the Rust [`log`](https://crates.io/crates/log)
//! crate. Decoding a whole recording frame by frame can produce a lot of
//! that output, which drowns the progress reporting most extraction runs
//! care about. [`FfmpegLogLevel`] exposes FFmpeg's verbosity knob so callers
//! and the CLI `--log-level` flag can tune or silence it without importing
//! `ffmpeg-next` themselves.
//!
//! # Example
//!
//! ```no_run
//! use frametab::FfmpegLogLevel;
//!
//! // Keep only decode errors.
//! frametab::set_ffmpeg_log_level(FfmpegLogLevel::Error);
//!
//! // Or silence FFmpeg entirely.
//! frametab::set_ffmpeg_log_level(FfmpegLogLevel::Quiet);
//! ```
//!
//! This affects FFmpeg's own console output only. Rust-side messages go
//! through the `log` crate and are configured by whatever subscriber the
//! application installs.

use std::str::FromStr;

use ffmpeg_next::util::log::Level;

/// FFmpeg internal log verbosity level, from `Quiet` (nothing) up to
/// `Trace` (everything).
///
/// Each variant corresponds to one of FFmpeg's `AV_LOG_*` constants;
/// setting a level suppresses everything below that severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FfmpegLogLevel {
    /// Print no output at all.
    Quiet,
    /// Only log right before the process aborts.
    Panic,
    /// Only log unrecoverable errors.
    Fatal,
    /// Log recoverable errors.
    Error,
    /// Log warnings (FFmpeg's default level).
    Warning,
    /// Log informational messages.
    Info,
    /// Log verbose informational messages.
    Verbose,
    /// Log debugging messages.
    Debug,
    /// Extremely verbose tracing output.
    Trace,
}

/// One row per variant: the FFmpeg level it maps to and the name the CLI
/// accepts for it.
const LEVELS: [(FfmpegLogLevel, Level, &str); 9] = [
    (FfmpegLogLevel::Quiet, Level::Quiet, "quiet"),
    (FfmpegLogLevel::Panic, Level::Panic, "panic"),
    (FfmpegLogLevel::Fatal, Level::Fatal, "fatal"),
    (FfmpegLogLevel::Error, Level::Error, "error"),
    (FfmpegLogLevel::Warning, Level::Warning, "warning"),
    (FfmpegLogLevel::Info, Level::Info, "info"),
    (FfmpegLogLevel::Verbose, Level::Verbose, "verbose"),
    (FfmpegLogLevel::Debug, Level::Debug, "debug"),
    (FfmpegLogLevel::Trace, Level::Trace, "trace"),
];

impl FfmpegLogLevel {
    /// The name [`FromStr`] accepts for this level.
    pub fn name(self) -> &'static str {
        LEVELS
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, _, name)| *name)
            .unwrap_or("unknown")
    }
}

impl From<FfmpegLogLevel> for Level {
    fn from(level: FfmpegLogLevel) -> Self {
        LEVELS
            .iter()
            .find(|(variant, _, _)| *variant == level)
            .map(|(_, ffmpeg, _)| *ffmpeg)
            .unwrap_or(Level::Warning)
    }
}

impl From<Level> for FfmpegLogLevel {
    fn from(level: Level) -> Self {
        LEVELS
            .iter()
            .find(|(_, ffmpeg, _)| *ffmpeg == level)
            .map(|(variant, _, _)| *variant)
            .unwrap_or(FfmpegLogLevel::Warning)
    }
}

impl FromStr for FfmpegLogLevel {
    type Err = String;

    /// Parse a level name, case-insensitively; `warn` is accepted as an
    /// alias for `warning`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.to_ascii_lowercase();
        let wanted = if lowered == "warn" { "warning" } else { &lowered };
        LEVELS
            .iter()
            .find(|(_, _, name)| *name == wanted)
            .map(|(variant, _, _)| *variant)
            .ok_or_else(|| format!("unsupported FFmpeg log level: {value}"))
    }
}

/// Set the FFmpeg internal log verbosity level.
///
/// Affects what FFmpeg prints to stderr; Rust-side `log` output is not
/// touched.
pub fn set_ffmpeg_log_level(level: FfmpegLogLevel) {
    ffmpeg_next::util::log::set_level(level.into());
}

/// Get the current FFmpeg internal log verbosity level, or `None` when the
/// level cannot be read.
pub fn get_ffmpeg_log_level() -> Option<FfmpegLogLevel> {
    ffmpeg_next::util::log::get_level()
        .ok()
        .map(FfmpegLogLevel::from)
}

#[cfg(test)]
mod tests {
    use super::FfmpegLogLevel;

    #[test]
    fn every_level_round_trips_through_its_name() {
        for (level, _, _) in super::LEVELS {
            assert_eq!(level.name().parse::<FfmpegLogLevel>(), Ok(level));
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_knows_warn() {
        assert_eq!("QUIET".parse(), Ok(FfmpegLogLevel::Quiet));
        assert_eq!("warn".parse(), Ok(FfmpegLogLevel::Warning));
        assert_eq!("Trace".parse(), Ok(FfmpegLogLevel::Trace));
        assert!("chatty".parse::<FfmpegLogLevel>().is_err());
    }
}
