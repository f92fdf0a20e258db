use std::fmt;
use std::path::PathBuf;

use crate::{
    animation::angles::angle_sequence,
    assets::decode::load_source,
    config::SpinConfig,
    encode::gif::{AnimationEncoder, GifAnimationEncoder},
    encode::output::write_atomic,
    foundation::core::{Canvas, LoopMode},
    foundation::error::SpinResult,
    render::pipeline::render_frames,
    render::rotate::{CanvasRotator, Rotator, TRANSPARENT},
};

/// Result of a successful run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SpinSummary {
    /// Where the GIF was written.
    pub output_path: PathBuf,
    /// Size of the source and of every frame.
    pub canvas: Canvas,
    /// Frames in the animation.
    pub n_frames: usize,
    /// Requested display time per frame.
    pub frame_duration_ms: u32,
    /// Loop directive stored in the file.
    pub loop_mode: LoopMode,
    /// Size of the written file in bytes.
    pub bytes_written: usize,
}

impl fmt::Display for SpinSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Saved eased rotation GIF to '{}'. Size = {}, Frames = {}, Duration per frame = {}ms, {}.",
            self.output_path.display(),
            self.canvas,
            self.n_frames,
            self.frame_duration_ms,
            self.loop_mode
        )
    }
}

/// Convert `cfg.input_path` into a rotating GIF at `cfg.output_path`.
///
/// Uses [`CanvasRotator`] with the configured filter and [`GifAnimationEncoder`].
pub fn generate(cfg: &SpinConfig) -> SpinResult<SpinSummary> {
    let rotator = CanvasRotator::new(cfg.resample);
    let encoder = GifAnimationEncoder::new(cfg.quantize_speed);
    generate_with(cfg, &rotator, &encoder)
}

/// [`generate`] with caller-supplied rotation and encoding capabilities.
///
/// Steps run strictly in order: validate, decode, compute angles, render every
/// frame, encode to memory, then replace the output file in one step. Any
/// failure before the last step leaves the output path untouched.
#[tracing::instrument(skip_all, fields(input = %cfg.input_path.display(), output = %cfg.output_path.display()))]
pub fn generate_with(
    cfg: &SpinConfig,
    rotator: &dyn Rotator,
    encoder: &dyn AnimationEncoder,
) -> SpinResult<SpinSummary> {
    cfg.validate()?;
    let delay = cfg.frame_delay();
    if !delay.is_exact_in_gif() {
        tracing::warn!(
            requested_ms = delay.ms(),
            stored_ms = u32::from(delay.centiseconds()) * 10,
            "GIF stores delays in 10ms units; duration will be rounded"
        );
    }

    let src = load_source(&cfg.input_path)?;
    let canvas = Canvas::of(&src);

    let angles = angle_sequence(cfg.n_frames, cfg.ease);
    let frames = render_frames(&src, &angles, rotator, TRANSPARENT, &cfg.threading())?;
    drop(src);

    let bytes = encoder.encode(&frames, delay, cfg.loop_mode())?;
    drop(frames);
    write_atomic(&cfg.output_path, &bytes)?;

    let summary = SpinSummary {
        output_path: cfg.output_path.clone(),
        canvas,
        n_frames: angles.len(),
        frame_duration_ms: cfg.frame_duration_ms,
        loop_mode: cfg.loop_mode(),
        bytes_written: bytes.len(),
    };
    tracing::info!(
        frames = summary.n_frames,
        bytes = summary.bytes_written,
        loop_forever = summary.loop_mode.is_forever(),
        "wrote {}",
        summary.output_path.display()
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;
