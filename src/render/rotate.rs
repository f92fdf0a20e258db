//! Canvas-preserving rotation of RGBA rasters.
//!
//! Output pixels are inverse-mapped into the source around the continuous image
//! centre `(W/2, H/2)` with pixel centres at `+0.5`. Anything that maps outside
//! the source footprint receives the fill colour, so rotating never grows or
//! shrinks the canvas; corners that swing out are clipped.
//!
//! Exact quarter turns skip resampling entirely and remap pixels directly.

use image::{Rgba, RgbaImage};
use kurbo::{Affine, Point, Vec2};

use crate::foundation::error::{SpinError, SpinResult};
use crate::foundation::math::{premul_f32, unpremul_to_rgba8};

/// Fully transparent fill for pixels uncovered by a rotation.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Keys cubic convolution parameter (Catmull-Rom).
const CUBIC_A: f32 = -0.5;

/// Angles within this many degrees of a multiple of 90 use the exact remap.
const QUARTER_TURN_EPSILON: f64 = 1e-9;

/// Capability to rotate a raster about its centre without resizing it.
pub trait Rotator: Send + Sync {
    /// Rotate `src` by `angle_deg` (positive is counter-clockwise on screen).
    ///
    /// The result has exactly the dimensions of `src`; uncovered pixels are `fill`.
    fn rotate(&self, src: &RgbaImage, angle_deg: f64, fill: Rgba<u8>) -> SpinResult<RgbaImage>;
}

/// Resampling filter for non-trivial angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resample {
    /// 4x4 cubic convolution, interpolated in premultiplied alpha.
    #[default]
    Bicubic,
    /// Nearest source pixel; keeps pixel art crisp.
    Nearest,
}

/// Default [`Rotator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasRotator {
    /// Filter used for angles that are not exact quarter turns.
    pub resample: Resample,
}

impl CanvasRotator {
    /// Rotator using `resample`.
    pub fn new(resample: Resample) -> Self {
        Self { resample }
    }
}

impl Rotator for CanvasRotator {
    fn rotate(&self, src: &RgbaImage, angle_deg: f64, fill: Rgba<u8>) -> SpinResult<RgbaImage> {
        if !angle_deg.is_finite() {
            return Err(SpinError::render(format!(
                "rotation angle must be finite, got {angle_deg}"
            )));
        }
        let (w, h) = src.dimensions();
        if w == 0 || h == 0 {
            return Err(SpinError::render("cannot rotate an empty raster"));
        }

        if let Some(out) = quarter_turns(angle_deg).and_then(|k| rotate_quarter_turns(src, k)) {
            return Ok(out);
        }

        let inv = inverse_mapping(w, h, angle_deg);
        let (wf, hf) = (f64::from(w), f64::from(h));
        let mut out = RgbaImage::from_pixel(w, h, fill);
        for (x, y, px) in out.enumerate_pixels_mut() {
            let p = inv * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if !(p.x >= 0.0 && p.y >= 0.0 && p.x < wf && p.y < hf) {
                continue;
            }
            *px = match self.resample {
                Resample::Bicubic => sample_bicubic(src, p.x - 0.5, p.y - 0.5),
                Resample::Nearest => *src.get_pixel(p.x as u32, p.y as u32),
            };
        }
        Ok(out)
    }
}

/// Destination-to-source mapping for a counter-clockwise rotation.
///
/// `kurbo` rotates clockwise on a y-down canvas, so the forward transform is
/// `R(-theta)` about the centre and its inverse is `R(theta)`.
fn inverse_mapping(w: u32, h: u32, angle_deg: f64) -> Affine {
    let centre = Vec2::new(f64::from(w) / 2.0, f64::from(h) / 2.0);
    Affine::translate(centre) * Affine::rotate(angle_deg.to_radians()) * Affine::translate(-centre)
}

/// Number of counter-clockwise quarter turns if `angle_deg` is a multiple of 90.
fn quarter_turns(angle_deg: f64) -> Option<u8> {
    let r = angle_deg.rem_euclid(360.0);
    for k in 0..=4u8 {
        if (r - 90.0 * f64::from(k)).abs() < QUARTER_TURN_EPSILON {
            return Some(k % 4);
        }
    }
    None
}

/// Exact remap for quarter turns; `None` when the turn would change the canvas shape.
fn rotate_quarter_turns(src: &RgbaImage, k: u8) -> Option<RgbaImage> {
    let square = src.width() == src.height();
    match k {
        0 => Some(src.clone()),
        2 => Some(image::imageops::rotate180(src)),
        // imageops turns clockwise; one CCW quarter is three CW quarters.
        1 if square => Some(image::imageops::rotate270(src)),
        3 if square => Some(image::imageops::rotate90(src)),
        _ => None,
    }
}

fn cubic_weight(d: f32) -> f32 {
    let d = d.abs();
    if d < 1.0 {
        ((CUBIC_A + 2.0) * d - (CUBIC_A + 3.0)) * d * d + 1.0
    } else if d < 2.0 {
        ((CUBIC_A * d - 5.0 * CUBIC_A) * d + 8.0 * CUBIC_A) * d - 4.0 * CUBIC_A
    } else {
        0.0
    }
}

fn cubic_weights(t: f32) -> [f32; 4] {
    [
        cubic_weight(1.0 + t),
        cubic_weight(t),
        cubic_weight(1.0 - t),
        cubic_weight(2.0 - t),
    ]
}

/// Sample `src` at continuous pixel-index coordinates with edge-clamped taps.
fn sample_bicubic(src: &RgbaImage, sx: f64, sy: f64) -> Rgba<u8> {
    let max_x = i64::from(src.width()) - 1;
    let max_y = i64::from(src.height()) - 1;
    let x0 = sx.floor();
    let y0 = sy.floor();
    let wx = cubic_weights((sx - x0) as f32);
    let wy = cubic_weights((sy - y0) as f32);
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0.0f32; 4];
    for (j, wyj) in wy.iter().enumerate() {
        let yy = (y0 - 1 + j as i64).clamp(0, max_y) as u32;
        for (i, wxi) in wx.iter().enumerate() {
            let xx = (x0 - 1 + i as i64).clamp(0, max_x) as u32;
            let w = wxi * wyj;
            let p = premul_f32(src.get_pixel(xx, yy).0);
            for (a, v) in acc.iter_mut().zip(p) {
                *a += v * w;
            }
        }
    }
    Rgba(unpremul_to_rgba8(acc))
}

#[cfg(test)]
#[path = "../../tests/unit/render/rotate.rs"]
mod tests;
