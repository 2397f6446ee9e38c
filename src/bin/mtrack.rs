use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use manual_track::{
    ExoOptions, HELP_TEXT, Script, TrackPoint, dedupe_frames, read_log, render_exo, replay,
    segments, simplify, smooth_positions, to_editor_space,
};

#[derive(Parser, Debug)]
#[command(name = "mtrack", version, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted tracking session headlessly.
    Replay(ReplayArgs),
    /// De-duplicate (and optionally smooth) an exported log.
    Clean(CleanArgs),
    /// Convert an exported log into editor object text.
    Exo(ExoArgs),
    /// Print the operator instructions.
    Help,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Session script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Pose cache file written during the session.
    #[arg(long)]
    cache: PathBuf,

    /// Write the last processed frame as a PNG.
    #[arg(long)]
    png: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CleanArgs {
    /// Exported log CSV.
    input: PathBuf,

    /// Output CSV path (stdout when omitted).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Rolling-mean window for x/y (values below 2 disable smoothing).
    #[arg(long, default_value_t = 0)]
    smooth: usize,
}

#[derive(Parser, Debug)]
struct ExoArgs {
    /// Exported log CSV.
    input: PathBuf,

    /// Source video width.
    #[arg(long)]
    width: u32,

    /// Source video height.
    #[arg(long)]
    height: u32,

    /// Source frame rate.
    #[arg(long)]
    fps: u32,

    #[arg(long)]
    new_width: Option<u32>,

    #[arg(long)]
    new_height: Option<u32>,

    #[arg(long)]
    new_fps: Option<u32>,

    #[arg(long, default_value_t = 44_100)]
    audio_rate: u32,

    #[arg(long = "audio-ch", default_value_t = 2)]
    audio_channels: u32,

    /// Rolling-mean window applied before simplification.
    #[arg(long, default_value_t = 3)]
    smooth: usize,

    /// Minimum triangle area a sample must span to survive simplification.
    #[arg(long, default_value_t = 1.0)]
    simplify: f64,

    /// Output path (defaults to the input with an `.exo` extension).
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Clean(args) => cmd_clean(args),
        Command::Exo(args) => cmd_exo(args),
        Command::Help => {
            println!("{HELP_TEXT}");
            Ok(())
        }
    }
}

fn ensure_parent(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let script = Script::from_path(&args.script)?;
    ensure_parent(&args.cache)?;
    let report = replay(&script, &args.cache)
        .with_context(|| format!("replay '{}'", args.script.display()))?;

    tracing::info!(
        frames_drawn = report.frames_drawn,
        x = report.final_pointer.x,
        y = report.final_pointer.y,
        angle = report.final_angle,
        "replay finished"
    );

    if let Some(png) = &args.png {
        ensure_parent(png)?;
        report
            .frame
            .save_with_format(png, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", png.display()))?;
        eprintln!("wrote {}", png.display());
    }
    Ok(())
}

fn load_points(path: &std::path::Path) -> anyhow::Result<Vec<TrackPoint>> {
    let records = read_log(path).with_context(|| format!("read log '{}'", path.display()))?;
    let before = records.len();
    let points: Vec<TrackPoint> = dedupe_frames(&records)
        .into_iter()
        .map(TrackPoint::from)
        .collect();
    tracing::debug!(before, after = points.len(), "duplicate frames collapsed");
    Ok(points)
}

fn cmd_clean(args: CleanArgs) -> anyhow::Result<()> {
    let mut points = load_points(&args.input)?;
    smooth_positions(&mut points, args.smooth);

    let mut text = String::new();
    for p in &points {
        text.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.frame, p.x, p.y, p.width, p.height, p.angle
        ));
    }

    match &args.out {
        Some(out) => {
            ensure_parent(out)?;
            std::fs::write(out, text).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => std::io::stdout()
            .write_all(text.as_bytes())
            .context("write cleaned log to stdout")?,
    }
    Ok(())
}

fn cmd_exo(args: ExoArgs) -> anyhow::Result<()> {
    let mut points = load_points(&args.input)?;
    smooth_positions(&mut points, args.smooth);
    let kept = simplify(&points, args.simplify);
    tracing::info!(samples = points.len(), kept = kept.len(), "track simplified");

    let opts = ExoOptions {
        new_width: args.new_width,
        new_height: args.new_height,
        new_fps: args.new_fps,
        audio_rate: args.audio_rate,
        audio_channels: args.audio_channels,
        ..ExoOptions::new(args.width, args.height, args.fps)
    };
    let text = render_exo(&to_editor_space(&segments(&kept), &opts), &opts)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| args.input.with_extension("exo"));
    ensure_parent(&out)?;
    std::fs::write(&out, text).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
