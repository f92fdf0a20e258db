use std::path::{Path, PathBuf};

use crate::{
    animation::ease::Ease,
    encode::gif::GifAnimationEncoder,
    foundation::core::{FrameDelay, LoopMode},
    foundation::error::{SpinError, SpinResult},
    render::pipeline::RenderThreading,
    render::rotate::Resample,
};

/// Frame count used by the library when none is given.
pub const DEFAULT_N_FRAMES: usize = 36;
/// Frame count used by the command-line entry point (15° average steps).
pub const EXAMPLE_N_FRAMES: usize = 24;
/// Per-frame display time when none is given.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// Everything one conversion run needs.
///
/// Missing fields take their defaults when deserialized, so a JSON file only
/// has to name the two paths.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinConfig {
    /// Source image; any format the `image` crate decodes.
    pub input_path: PathBuf,
    /// Destination GIF; replaced if it exists.
    pub output_path: PathBuf,
    /// Number of frames from 0° to 360°, both ends included.
    pub n_frames: usize,
    /// Display time of each frame in milliseconds.
    pub frame_duration_ms: u32,
    /// Loop forever, or play one extra pass after the first.
    pub loop_forever: bool,
    /// Timing curve for the sweep.
    pub ease: Ease,
    /// Resampling filter for rotated frames.
    pub resample: Resample,
    /// GIF palette quantization speed, 1 (best) to 30 (fastest).
    pub quantize_speed: i32,
    /// Render frames in parallel.
    pub parallel: bool,
    /// Worker threads for parallel rendering; `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            n_frames: DEFAULT_N_FRAMES,
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            loop_forever: true,
            ease: Ease::default(),
            resample: Resample::default(),
            quantize_speed: GifAnimationEncoder::DEFAULT_SPEED,
            parallel: false,
            threads: None,
        }
    }
}

impl SpinConfig {
    /// Config for `input_path` -> `output_path` with every other option at its default.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file.
    pub fn from_json_path(path: &Path) -> SpinResult<Self> {
        let f = std::fs::File::open(path)
            .map_err(|e| SpinError::config(format!("open '{}': {e}", path.display())))?;
        serde_json::from_reader(std::io::BufReader::new(f))
            .map_err(|e| SpinError::config(format!("parse '{}': {e}", path.display())))
    }

    /// Reject option values that cannot produce a valid animation.
    pub fn validate(&self) -> SpinResult<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(SpinError::config("input_path must be set"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(SpinError::config("output_path must be set"));
        }
        if self.n_frames < 1 {
            return Err(SpinError::config(format!(
                "n_frames must be >= 1, got {}",
                self.n_frames
            )));
        }
        if self.frame_duration_ms == 0 {
            return Err(SpinError::config("frame_duration_ms must be > 0"));
        }
        if self.frame_duration_ms > FrameDelay::MAX_MS {
            return Err(SpinError::config(format!(
                "frame_duration_ms must be <= {}, got {}",
                FrameDelay::MAX_MS,
                self.frame_duration_ms
            )));
        }
        if !(GifAnimationEncoder::MIN_SPEED..=GifAnimationEncoder::MAX_SPEED)
            .contains(&self.quantize_speed)
        {
            return Err(SpinError::config(format!(
                "quantize_speed must be in {}..={}, got {}",
                GifAnimationEncoder::MIN_SPEED,
                GifAnimationEncoder::MAX_SPEED,
                self.quantize_speed
            )));
        }
        if self.threads == Some(0) {
            return Err(SpinError::config("threads must be >= 1 when set"));
        }
        Ok(())
    }

    /// Loop directive derived from `loop_forever`.
    pub fn loop_mode(&self) -> LoopMode {
        LoopMode::from_loop_forever(self.loop_forever)
    }

    /// Per-frame delay derived from `frame_duration_ms`.
    pub fn frame_delay(&self) -> FrameDelay {
        FrameDelay(self.frame_duration_ms)
    }

    /// Render threading derived from `parallel` and `threads`.
    pub fn threading(&self) -> RenderThreading {
        RenderThreading {
            parallel: self.parallel,
            threads: self.threads,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
