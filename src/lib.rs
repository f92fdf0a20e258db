//! spinloop turns a static image into a looping animated GIF of one full turn.
//!
//! The sweep follows a sinusoidal ease-in-out curve, so the image starts from
//! rest, speeds up through 180° and settles back at 360°.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode the source once into straight-alpha RGBA8
//! 2. **Time**: `n` eased angles from exactly 0° to exactly 360°
//! 3. **Render**: one canvas-preserving rotation per angle ([`Rotator`])
//! 4. **Encode**: all frames into one GIF in memory ([`AnimationEncoder`])
//! 5. **Write**: replace the output file in a single rename
//!
//! Rendering happens entirely before the output path is touched, so a failed
//! run never leaves a partial file behind.
//!
//! ```no_run
//! let cfg = spinloop::SpinConfig {
//!     n_frames: 24,
//!     ..spinloop::SpinConfig::new("icon.png", "rotating_icon.gif")
//! };
//! let summary = spinloop::generate(&cfg)?;
//! println!("{summary}");
//! # Ok::<(), spinloop::SpinError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod config;
mod encode;
mod foundation;
mod generate;
mod render;

pub use animation::angles::{FULL_TURN_DEG, angle_sequence, progress};
pub use animation::ease::{Ease, ease_in_out};
pub use assets::decode::{decode_image, load_source};
pub use config::{DEFAULT_FRAME_DURATION_MS, DEFAULT_N_FRAMES, EXAMPLE_N_FRAMES, SpinConfig};
pub use encode::gif::{AnimationEncoder, GifAnimationEncoder};
pub use encode::output::write_atomic;
pub use foundation::core::{Canvas, FrameDelay, LoopMode};
pub use foundation::error::{SpinError, SpinResult};
pub use generate::{SpinSummary, generate, generate_with};
pub use render::pipeline::{RenderThreading, render_frames};
pub use render::rotate::{CanvasRotator, Resample, Rotator, TRANSPARENT};
