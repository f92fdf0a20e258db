use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "spinloop",
    version,
    about = "Render a static image as a looping GIF of one eased 360° turn"
)]
struct Cli {
    /// Source image (PNG or any format the image crate decodes).
    input: Option<PathBuf>,

    /// Output GIF path (replaced if it exists).
    output: Option<PathBuf>,

    /// JSON config file; command-line options override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames from 0° to 360° [default: 24].
    #[arg(long)]
    frames: Option<usize>,

    /// Display time per frame in milliseconds [default: 100].
    #[arg(long)]
    duration_ms: Option<u32>,

    /// Play one extra pass instead of looping forever.
    #[arg(long)]
    once: bool,

    /// Timing curve.
    #[arg(long, value_enum)]
    ease: Option<EaseChoice>,

    /// Resampling filter.
    #[arg(long, value_enum)]
    resample: Option<ResampleChoice>,

    /// GIF palette quantization speed, 1 (best) to 30 (fastest).
    #[arg(long)]
    quantize_speed: Option<i32>,

    /// Render frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Print the run summary as JSON.
    #[arg(long)]
    json: bool,

    /// Log per-frame progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EaseChoice {
    Linear,
    Sine,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResampleChoice {
    Bicubic,
    Nearest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let from_file = cli
        .config
        .as_deref()
        .map(spinloop::SpinConfig::from_json_path)
        .transpose()?;
    let cfg = build_config(from_file, &cli)?;
    let summary = spinloop::generate(&cfg)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).context("serialize run summary")?;
        println!("{json}");
    } else {
        println!("{summary}");
    }
    Ok(())
}

fn build_config(
    from_file: Option<spinloop::SpinConfig>,
    cli: &Cli,
) -> anyhow::Result<spinloop::SpinConfig> {
    let mut cfg = from_file.unwrap_or_else(|| spinloop::SpinConfig {
        n_frames: spinloop::EXAMPLE_N_FRAMES,
        ..spinloop::SpinConfig::default()
    });

    if let Some(p) = &cli.input {
        cfg.input_path = p.clone();
    }
    if let Some(p) = &cli.output {
        cfg.output_path = p.clone();
    }
    if cfg.input_path.as_os_str().is_empty() || cfg.output_path.as_os_str().is_empty() {
        anyhow::bail!("INPUT and OUTPUT are required unless both are set in --config");
    }

    if let Some(n) = cli.frames {
        cfg.n_frames = n;
    }
    if let Some(ms) = cli.duration_ms {
        cfg.frame_duration_ms = ms;
    }
    if cli.once {
        cfg.loop_forever = false;
    }
    if let Some(e) = cli.ease {
        cfg.ease = match e {
            EaseChoice::Linear => spinloop::Ease::Linear,
            EaseChoice::Sine => spinloop::Ease::InOutSine,
        };
    }
    if let Some(r) = cli.resample {
        cfg.resample = match r {
            ResampleChoice::Bicubic => spinloop::Resample::Bicubic,
            ResampleChoice::Nearest => spinloop::Resample::Nearest,
        };
    }
    if let Some(s) = cli.quantize_speed {
        cfg.quantize_speed = s;
    }
    if cli.parallel {
        cfg.parallel = true;
    }
    if cli.threads.is_some() {
        cfg.threads = cli.threads;
    }
    Ok(cfg)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "spinloop=debug" } else { "spinloop=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
