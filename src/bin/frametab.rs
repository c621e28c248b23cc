use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use frametab::{
    FeatureTable, FfmpegLogLevel, FrameLimit, SourceCatalog, VideoProbe, VideoSource,
    display_image,
};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

const CLI_AFTER_HELP: &str = "Examples:\n  frametab probe input.avi --json\n  frametab table input.avi --frames 0,40,80 --out pixels.csv --progress\n  frametab table lab --catalog recordings.json --root recordings --out lab.csv\n  frametab frame input.avi --frame 40 --out frame_40.png\n  frametab completions zsh > _frametab";

#[derive(Debug, Parser)]
#[command(
    name = "frametab",
    version,
    about = "Turn video frames into per-pixel feature tables",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Show a progress bar while decoding.
    #[arg(long)]
    progress: bool,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print metadata for a video file (alias: info).
    #[command(
        about = "Print video metadata",
        visible_alias = "info",
        after_help = "Examples:\n  frametab probe input.avi\n  frametab probe input.avi --json"
    )]
    Probe {
        /// Input video path.
        input: String,

        /// Output metadata as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Build a per-pixel feature table and write it as CSV.
    #[command(
        about = "Build a per-pixel feature table",
        after_help = "Examples:\n  frametab table input.avi --frames 0,40,80 --out pixels.csv\n  frametab table input.avi --frames 0-5 --limit 6 --out first_six.csv\n  frametab table lab --catalog recordings.json --root recordings --out lab.csv --progress"
    )]
    Table {
        /// Input video path, or a scenario name when --catalog is given.
        input: String,

        /// Frames to flatten: comma-separated indices, ranges allowed (e.g. 0,40,80 or 0-5).
        #[arg(long, default_value = "0")]
        frames: String,

        /// Decode at most this many frames (default: the whole stream).
        #[arg(long)]
        limit: Option<usize>,

        /// Output CSV path; without it, only a summary is printed.
        #[arg(long)]
        out: Option<PathBuf>,

        /// JSON catalog mapping scenario names to video paths.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Directory the catalog's relative paths resolve against.
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Export one decoded frame as an image.
    #[command(
        about = "Export one frame as an image",
        after_help = "Examples:\n  frametab frame input.avi --frame 0 --out first.png\n  frametab frame input.avi --frame 40 --out frame_40.jpg"
    )]
    Frame {
        /// Input video path.
        input: String,

        /// Zero-based frame index to export.
        #[arg(long, default_value_t = 0)]
        frame: usize,

        /// Output image path; the extension picks the format.
        #[arg(long)]
        out: PathBuf,
    },

    /// Generate shell completion scripts.
    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_frame_list(value: &str) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("frame list cannot be empty".into());
    }

    let mut frames = Vec::new();
    for part in trimmed.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(format!("empty entry in frame list: {trimmed}").into());
        }

        match part.split_once('-') {
            Some((start, end)) => {
                let start: usize = start.trim().parse()?;
                let end: usize = end.trim().parse()?;
                if start > end {
                    return Err(format!("descending range in frame list: {part}").into());
                }
                frames.extend(start..=end);
            }
            None => frames.push(part.parse()?),
        }
    }

    Ok(frames)
}

fn ensure_writable_path(path: &Path, overwrite: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            )
            .into());
        }
    }
    Ok(())
}

fn apply_global_options(global: &GlobalOptions) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(level) = &global.log_level {
        frametab::set_ffmpeg_log_level(level.parse::<FfmpegLogLevel>()?);
    }
    Ok(())
}

fn resolve_input(
    input: &str,
    catalog: Option<&Path>,
    root: Option<&Path>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match catalog {
        Some(catalog_path) => {
            let mut catalog = SourceCatalog::from_json_file(catalog_path)?;
            if let Some(root) = root {
                catalog = catalog.with_root(root);
            }
            Ok(catalog.resolve(input)?)
        }
        None => Ok(PathBuf::from(input)),
    }
}

fn decode_progress_bar(
    enabled: bool,
    expected_frames: u64,
) -> Result<Option<ProgressBar>, Box<dyn std::error::Error>> {
    if !enabled {
        return Ok(None);
    }
    let pb = ProgressBar::new(expected_frames);
    let style =
        ProgressStyle::with_template("{spinner:.green} {bar:40.cyan/blue} {pos}/{len} {msg}")?;
    pb.set_style(style.progress_chars("##-"));
    Ok(Some(pb))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    apply_global_options(&cli.global)?;

    match cli.command {
        Commands::Probe { input, json } => {
            let metadata = VideoProbe::probe(&input)?;
            if json {
                let payload = json!({
                    "format": metadata.format,
                    "duration_seconds": metadata.duration.as_secs_f64(),
                    "video": metadata.video.as_ref().map(|video| json!({
                        "width": video.width,
                        "height": video.height,
                        "fps": video.frames_per_second,
                        "frame_count": video.frame_count,
                        "codec": video.codec,
                    })),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("Format: {}", metadata.format);
                println!("Duration: {:?}", metadata.duration);
                match &metadata.video {
                    Some(video) => {
                        println!(
                            "Video: {}x{} @ {:.2} fps [{}], ~{} frames",
                            video.width,
                            video.height,
                            video.frames_per_second,
                            video.codec,
                            video.frame_count,
                        );
                    }
                    None => println!("Video: none"),
                }
            }
        }
        Commands::Table {
            input,
            frames,
            limit,
            out,
            catalog,
            root,
        } => {
            let selection = parse_frame_list(&frames)?;
            if let Some(out) = &out {
                ensure_writable_path(out, cli.global.overwrite)?;
            }

            let path = resolve_input(&input, catalog.as_deref(), root.as_deref())?;
            let mut source = VideoSource::open(&path)?;

            let expected = source
                .metadata()
                .video
                .as_ref()
                .map(|video| video.frame_count)
                .unwrap_or(0);
            let expected = match limit {
                Some(count) => expected.min(count as u64),
                None => expected,
            };

            let progress_bar = decode_progress_bar(cli.global.progress, expected)?;
            let stack = source.read_stack_with(FrameLimit::from(limit), |_| {
                if let Some(pb) = &progress_bar {
                    pb.inc(1);
                }
            })?;
            if let Some(pb) = progress_bar {
                pb.finish_with_message("decoded");
            }

            if cli.global.verbose {
                eprintln!(
                    "decoded {} frames of {}x{} from {}",
                    stack.frame_count(),
                    stack.width(),
                    stack.height(),
                    path.display(),
                );
            }

            if let Some(&highest) = selection.iter().max() {
                if highest >= stack.frame_count() {
                    return Err(format!(
                        "frame {highest} is out of range: only {} frame(s) were decoded",
                        stack.frame_count()
                    )
                    .into());
                }
            }

            let table = FeatureTable::from_stack(&stack, &selection);
            match out {
                Some(out) => {
                    table.save_csv(&out)?;
                    println!(
                        "{} {}",
                        "success:".green().bold(),
                        format!(
                            "Wrote {} pixel row(s) from {} frame(s) to {}",
                            table.num_rows(),
                            selection.len(),
                            out.display()
                        )
                        .green()
                    );
                }
                None => {
                    println!(
                        "Table: {} row(s) x {} column(s) from {} of {} decoded frame(s)",
                        table.num_rows(),
                        table.num_columns(),
                        selection.len(),
                        stack.frame_count(),
                    );
                }
            }
        }
        Commands::Frame { input, frame, out } => {
            ensure_writable_path(&out, cli.global.overwrite)?;

            let mut source = VideoSource::open(&input)?;
            let stack = source.read_stack(FrameLimit::Count(frame + 1))?;
            if frame >= stack.frame_count() {
                return Err(format!(
                    "frame {frame} is out of range: the stream ended after {} frame(s)",
                    stack.frame_count()
                )
                .into());
            }

            let image = display_image(stack.frame(frame));
            image.save(&out)?;

            println!(
                "{} {}",
                "success:".green().bold(),
                format!("Saved frame {frame} to {}", out.display()).green()
            );
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "frametab", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
