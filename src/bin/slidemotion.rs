use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "slidemotion", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every element's animation state at one instant.
    State(StateArgs),
    /// Compile the slide's animation plan and print the resulting descriptors.
    Compile(InArgs),
    /// Apply a preset to the slide's elements and print the resulting descriptors.
    Preset(PresetArgs),
    /// Sample every frame of the slide and write the states as JSON.
    Filmstrip(FilmstripArgs),
    /// Strictly validate the slide and its animation plan.
    Validate(InArgs),
}

#[derive(Parser, Debug)]
struct InArgs {
    /// Input slide JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct StateArgs {
    /// Input slide JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Seconds into the slide.
    #[arg(long)]
    time: f64,

    /// Compile the slide's plan before evaluating.
    #[arg(long)]
    apply_plan: bool,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Input slide JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// One of: sequential, stagger, all-fade, all-slide, emphasis, clear.
    #[arg(long, value_parser = parse_preset)]
    preset: slidemotion::Preset,
}

#[derive(Parser, Debug)]
struct FilmstripArgs {
    /// Input slide JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Seconds to sample (defaults to the slide duration).
    #[arg(long)]
    duration: Option<f64>,

    /// Compile the slide's plan before sampling.
    #[arg(long)]
    apply_plan: bool,

    /// Sample frames on the rayon thread pool.
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn parse_preset(tag: &str) -> Result<slidemotion::Preset, String> {
    slidemotion::Preset::from_tag(tag).ok_or_else(|| {
        let known: Vec<_> = slidemotion::Preset::ALL.iter().map(|p| p.as_tag()).collect();
        format!("unknown preset '{tag}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::State(args) => cmd_state(args),
        Command::Compile(args) => cmd_compile(args),
        Command::Preset(args) => cmd_preset(args),
        Command::Filmstrip(args) => cmd_filmstrip(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_slide_json(path: &Path) -> anyhow::Result<slidemotion::Slide> {
    let f = File::open(path).with_context(|| format!("open slide '{}'", path.display()))?;
    let r = BufReader::new(f);
    let slide: slidemotion::Slide =
        serde_json::from_reader(r).with_context(|| "parse slide JSON")?;
    Ok(slide)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).with_context(|| "write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let mut slide = read_slide_json(&args.in_path)?;
    if args.apply_plan {
        slide.apply_plan();
    }
    print_json(&slide.element_states(args.time))
}

fn cmd_compile(args: InArgs) -> anyhow::Result<()> {
    let mut slide = read_slide_json(&args.in_path)?;
    let attached = slide.apply_plan();
    tracing::debug!(attached, "plan compiled");
    print_json(&slide.descriptors())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let mut slide = read_slide_json(&args.in_path)?;
    slide.apply_preset(args.preset);
    print_json(&slide.descriptors())
}

fn cmd_filmstrip(args: FilmstripArgs) -> anyhow::Result<()> {
    let mut slide = read_slide_json(&args.in_path)?;
    if args.apply_plan {
        slide.apply_plan();
    }

    let opts = slidemotion::FilmstripOpts {
        fps: slidemotion::Fps::new(args.fps, 1)?,
        duration_secs: args.duration,
    };
    let strip = if args.parallel {
        slidemotion::render_filmstrip_parallel(&slide, &opts)?
    } else {
        slidemotion::render_filmstrip(&slide, &opts)?
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create filmstrip '{}'", args.out.display()))?;
    serde_json::to_writer(f, &strip)
        .with_context(|| format!("write filmstrip '{}'", args.out.display()))?;

    eprintln!("wrote {} ({} frames)", args.out.display(), strip.frames.len());
    Ok(())
}

fn cmd_validate(args: InArgs) -> anyhow::Result<()> {
    let slide = read_slide_json(&args.in_path)?;
    slide.validate()?;
    eprintln!("ok: slide '{}'", slide.id);
    Ok(())
}
