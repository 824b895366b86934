use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snakegif", version)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play Snake in the terminal and record the game as a GIF.
    Play(PlayArgs),
    /// Keep only a time range of a GIF, resolving frame disposal.
    Cut(CutArgs),
    /// Play a GIF faster or slower; writes `<stem>_<ratio>.gif` next to the input.
    Speed(SpeedArgs),
    /// Cut a time range with the system `ffmpeg` binary (requires `ffmpeg` on PATH).
    Ffcut(CutArgs),
    /// Export the composited picture of one frame as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Game config JSON. Built-in defaults when absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output GIF path (overrides the config).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Fruit placement seed (overrides the config).
    #[arg(long)]
    seed: Option<u64>,

    /// Do not draw the board in the terminal while playing.
    #[arg(long)]
    no_preview: bool,
}

#[derive(Parser, Debug)]
struct CutArgs {
    /// Input GIF.
    #[arg(long = "in", default_value = "snake.gif")]
    in_path: PathBuf,

    /// Output GIF.
    #[arg(long, default_value = "snake_cut.gif")]
    out: PathBuf,

    /// Window start in seconds.
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Window end in seconds.
    #[arg(long, default_value_t = 19.67)]
    end: f64,
}

#[derive(Parser, Debug)]
struct SpeedArgs {
    /// Input GIF.
    input: PathBuf,

    /// Playback speed factor, e.g. 2 or 0.5.
    #[arg(value_parser = parse_ratio)]
    ratio: snakegif::SpeedRatio,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input GIF.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn parse_ratio(s: &str) -> Result<snakegif::SpeedRatio, String> {
    s.parse().map_err(|e: snakegif::SnakeGifError| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Play(args) => cmd_play(args),
        Command::Cut(args) => cmd_cut(args),
        Command::Speed(args) => cmd_speed(args),
        Command::Ffcut(args) => cmd_ffcut(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => snakegif::GameConfig::from_path(path)
            .with_context(|| format!("load game config '{}'", path.display()))?,
        None => snakegif::GameConfig::default(),
    };
    if let Some(out) = args.out {
        cfg.gif_path = out;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    cfg.validate()?;

    let seed = cfg.seed.unwrap_or_else(rand::random);
    let fps = cfg.fps()?;
    let out = cfg.gif_path.clone();
    let mut session = snakegif::GameSession::new(cfg.clone(), seed)?;

    let recording = {
        let _guard = snakegif::TerminalGuard::enter()?;
        let mut input = snakegif::TerminalInput;
        let mut clock = snakegif::RealClock::new(fps);
        let mut preview = snakegif::TerminalView::new();
        let view: Option<&mut dyn snakegif::StateView> = if args.no_preview {
            None
        } else {
            Some(&mut preview)
        };
        session.run(&mut input, &mut clock, view)?
    };

    snakegif::save_recording(&cfg, &recording, &out)?;
    eprintln!(
        "game over ({:?}) after {} frames, seed {seed}; wrote {}",
        recording.ending,
        recording.ticks(),
        out.display()
    );
    Ok(())
}

fn cmd_cut(args: CutArgs) -> anyhow::Result<()> {
    let window = snakegif::TimeWindow::new(args.start, args.end)?;
    let report = snakegif::cut_gif(&args.in_path, &args.out, window)?;
    eprintln!(
        "wrote {} ({} of {} frames, {} ms)",
        args.out.display(),
        report.frames_out,
        report.frames_in,
        report.duration_out_ms
    );
    Ok(())
}

fn cmd_speed(args: SpeedArgs) -> anyhow::Result<()> {
    let (out, report) = snakegif::speed_gif(&args.input, args.ratio)?;
    eprintln!(
        "wrote {} at {} ({} ms -> {} ms)",
        out.display(),
        args.ratio,
        report.duration_in_ms,
        report.duration_out_ms
    );
    Ok(())
}

fn cmd_ffcut(args: CutArgs) -> anyhow::Result<()> {
    let cfg = snakegif::TrimConfig {
        in_path: args.in_path,
        out_path: args.out,
        window: snakegif::TimeWindow::new(args.start, args.end)?,
        overwrite: true,
    };
    snakegif::trim_with_ffmpeg(&cfg)?;
    eprintln!("wrote {}", cfg.out_path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let image = snakegif::extract_frame(&args.in_path, snakegif::FrameIndex(args.index))?;
    snakegif::save_png(&image, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
