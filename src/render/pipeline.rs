use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::{
    foundation::error::{SpinError, SpinResult},
    render::rotate::Rotator,
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Threading controls for multi-frame rendering.
pub struct RenderThreading {
    /// Render frames on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Rotate `src` once per angle and return the frames in angle order.
///
/// Every frame is checked to have the source's dimensions. The first failing
/// frame aborts the whole batch.
#[tracing::instrument(skip(src, angles, rotator), fields(frames = angles.len()))]
pub fn render_frames(
    src: &RgbaImage,
    angles: &[f64],
    rotator: &dyn Rotator,
    fill: Rgba<u8>,
    threading: &RenderThreading,
) -> SpinResult<Vec<RgbaImage>> {
    if angles.is_empty() {
        return Err(SpinError::config("at least one frame is required"));
    }

    let render_one = |(i, &angle): (usize, &f64)| -> SpinResult<RgbaImage> {
        tracing::debug!(frame = i, angle, "rotate");
        let frame = rotator.rotate(src, angle, fill)?;
        if frame.dimensions() != src.dimensions() {
            return Err(SpinError::render(format!(
                "frame {i} ({angle:.3}°) is {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                src.width(),
                src.height()
            )));
        }
        Ok(frame)
    };

    if !threading.parallel {
        return angles.iter().enumerate().map(render_one).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| angles.par_iter().enumerate().map(render_one).collect())
}

fn build_thread_pool(threads: Option<usize>) -> SpinResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpinError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SpinError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
