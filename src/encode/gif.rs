use gif::{DisposalMethod, Encoder, Frame, Repeat};
use image::RgbaImage;

use crate::foundation::core::{FrameDelay, LoopMode};
use crate::foundation::error::{SpinError, SpinResult};

/// Capability to turn an ordered frame list into one animated file.
pub trait AnimationEncoder {
    /// Encode `frames` in order, each shown for `delay`, repeating per `loop_mode`.
    fn encode(
        &self,
        frames: &[RgbaImage],
        delay: FrameDelay,
        loop_mode: LoopMode,
    ) -> SpinResult<Vec<u8>>;
}

/// Animated GIF output.
///
/// GIF only stores indexed colour, so every frame gets its own NeuQuant palette.
/// Alpha is reduced to on/off: fully transparent pixels map to the frame's
/// transparent index, everything else is drawn opaque. Frames are disposed to
/// background so transparent corners never show the previous frame.
#[derive(Clone, Copy, Debug)]
pub struct GifAnimationEncoder {
    /// 1 (best palette, slowest) to 30 (fastest).
    pub quantize_speed: i32,
}

impl GifAnimationEncoder {
    /// Slowest, best-quality quantization.
    pub const MIN_SPEED: i32 = 1;
    /// Fastest quantization.
    pub const MAX_SPEED: i32 = 30;
    /// Speed used when none is configured.
    pub const DEFAULT_SPEED: i32 = 10;

    /// Encoder quantizing at `quantize_speed`.
    pub fn new(quantize_speed: i32) -> Self {
        Self { quantize_speed }
    }
}

impl Default for GifAnimationEncoder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

impl AnimationEncoder for GifAnimationEncoder {
    fn encode(
        &self,
        frames: &[RgbaImage],
        delay: FrameDelay,
        loop_mode: LoopMode,
    ) -> SpinResult<Vec<u8>> {
        if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&self.quantize_speed) {
            return Err(SpinError::config(format!(
                "gif quantize speed must be in {}..={}, got {}",
                Self::MIN_SPEED,
                Self::MAX_SPEED,
                self.quantize_speed
            )));
        }
        let first = frames
            .first()
            .ok_or_else(|| SpinError::encode("no frames to encode"))?;
        let (width, height) = gif_dimensions(first)?;

        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height, &[])
                .map_err(|e| SpinError::encode(format!("gif header: {e}")))?;
            let repeat = match loop_mode.repeat_count() {
                None => Repeat::Infinite,
                Some(n) => Repeat::Finite(n),
            };
            encoder
                .set_repeat(repeat)
                .map_err(|e| SpinError::encode(format!("gif loop extension: {e}")))?;

            let delay_cs = delay.centiseconds();
            let mut scratch = Vec::with_capacity(first.as_raw().len());
            for (i, img) in frames.iter().enumerate() {
                if img.dimensions() != first.dimensions() {
                    return Err(SpinError::encode(format!(
                        "frame {i} is {}x{}, expected {width}x{height}",
                        img.width(),
                        img.height()
                    )));
                }
                scratch.clear();
                scratch.extend_from_slice(img.as_raw());
                clear_transparent_rgb(&mut scratch);
                let mut frame =
                    Frame::from_rgba_speed(width, height, &mut scratch, self.quantize_speed);
                frame.delay = delay_cs;
                frame.dispose = DisposalMethod::Background;
                encoder
                    .write_frame(&frame)
                    .map_err(|e| SpinError::encode(format!("gif frame {i}: {e}")))?;
            }
        }
        Ok(out)
    }
}

/// The quantizer keys transparency on one exact RGBA value, so every alpha-0
/// pixel must share the same colour.
fn clear_transparent_rgb(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        if px[3] == 0 {
            px.copy_from_slice(&[0, 0, 0, 0]);
        }
    }
}

fn gif_dimensions(img: &RgbaImage) -> SpinResult<(u16, u16)> {
    let to_u16 = |v: u32| u16::try_from(v).ok().filter(|v| *v > 0);
    match (to_u16(img.width()), to_u16(img.height())) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(SpinError::encode(format!(
            "gif frames must be between 1 and {} pixels per side, got {}x{}",
            u16::MAX,
            img.width(),
            img.height()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
