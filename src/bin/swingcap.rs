use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use swingcap::{
    bvh_to_string, load_stream, stream_to_csv, viewer_json, CoordinateTransform, FrameRate,
    MotionAssembler, Skeleton, SourceFormat, SourceStream, StreamKind,
};

#[derive(Parser, Debug)]
#[command(name = "swingcap", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert TXT exports to a BVH animation file.
    Bvh(BvhArgs),
    /// Convert TXT or CSV exports to the viewer JSON document.
    Json(JsonArgs),
    /// Re-emit TXT exports as fixed-schema CSV files.
    Csv(CsvArgs),
}

#[derive(Parser, Debug)]
struct BvhArgs {
    /// Joint centers TXT export.
    #[arg(long)]
    centers: PathBuf,

    /// Joint rotations TXT export.
    #[arg(long)]
    rotations: PathBuf,

    /// Output BVH path.
    #[arg(long)]
    out: PathBuf,

    /// Capture frame rate in frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct JsonArgs {
    /// Joint centers export.
    #[arg(long)]
    centers: PathBuf,

    /// Joint rotations export.
    #[arg(long)]
    rotations: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Input format of both exports.
    #[arg(long, value_parser = parse_format, default_value = "txt")]
    format: SourceFormat,

    /// Capture frame rate in frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct CsvArgs {
    /// Joint centers TXT export.
    #[arg(long)]
    centers: PathBuf,

    /// Joint rotations TXT export.
    #[arg(long)]
    rotations: PathBuf,

    /// Output path for the centers CSV.
    #[arg(long)]
    out_centers: PathBuf,

    /// Output path for the rotations CSV.
    #[arg(long)]
    out_rotations: PathBuf,
}

fn parse_format(s: &str) -> Result<SourceFormat, String> {
    match s {
        "txt" => Ok(SourceFormat::Txt),
        "csv" => Ok(SourceFormat::Csv),
        other => Err(format!("unknown format '{other}' (expected txt or csv)")),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Bvh(args) => cmd_bvh(args),
        Command::Json(args) => cmd_json(args),
        Command::Csv(args) => cmd_csv(args),
    }
}

fn load_pair(
    centers: &Path,
    rotations: &Path,
    format: SourceFormat,
) -> anyhow::Result<(SourceStream, SourceStream)> {
    let centers = load_stream(StreamKind::Centers, format, centers)?;
    let rotations = load_stream(StreamKind::Rotations, format, rotations)?;
    Ok((centers, rotations))
}

fn cmd_bvh(args: BvhArgs) -> anyhow::Result<()> {
    let (centers, rotations) = load_pair(&args.centers, &args.rotations, SourceFormat::Txt)?;

    let assembler = MotionAssembler::new(Skeleton::standard(), CoordinateTransform::animation())
        .with_frame_rate(FrameRate::new(args.fps, 1)?);
    let sequence = assembler.assemble(&centers, &rotations)?;
    let bvh = bvh_to_string(assembler.skeleton(), &sequence)?;

    write_output(&args.out, &bvh)?;
    eprintln!("wrote {} ({} frames)", args.out.display(), sequence.len());
    Ok(())
}

fn cmd_json(args: JsonArgs) -> anyhow::Result<()> {
    let (centers, rotations) = load_pair(&args.centers, &args.rotations, args.format)?;

    let assembler = MotionAssembler::new(Skeleton::standard(), CoordinateTransform::viewer())
        .with_frame_rate(FrameRate::new(args.fps, 1)?);
    let sequence = assembler.assemble(&centers, &rotations)?;
    let json = viewer_json(assembler.skeleton(), &sequence)?;

    write_output(&args.out, &json)?;
    eprintln!("wrote {} ({} frames)", args.out.display(), sequence.len());
    Ok(())
}

fn cmd_csv(args: CsvArgs) -> anyhow::Result<()> {
    let (centers, rotations) = load_pair(&args.centers, &args.rotations, SourceFormat::Txt)?;

    write_output(&args.out_centers, &stream_to_csv(&centers))?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out_centers.display(),
        centers.len()
    );
    write_output(&args.out_rotations, &stream_to_csv(&rotations))?;
    eprintln!(
        "wrote {} ({} frames)",
        args.out_rotations.display(),
        rotations.len()
    );
    Ok(())
}

fn write_output(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    std::fs::write(path, content).with_context(|| format!("write '{}'", path.display()))
}
