use super::*;
use crate::render::rotate::{CanvasRotator, TRANSPARENT};

/// Encodes the angle into the red channel so ordering can be checked.
struct StampRotator;

impl Rotator for StampRotator {
    fn rotate(&self, src: &RgbaImage, angle_deg: f64, _fill: Rgba<u8>) -> SpinResult<RgbaImage> {
        Ok(RgbaImage::from_pixel(
            src.width(),
            src.height(),
            Rgba([angle_deg as u8, 0, 0, 255]),
        ))
    }
}

struct FailAt(f64);

impl Rotator for FailAt {
    fn rotate(&self, src: &RgbaImage, angle_deg: f64, _fill: Rgba<u8>) -> SpinResult<RgbaImage> {
        if angle_deg == self.0 {
            return Err(SpinError::render("out of memory"));
        }
        Ok(src.clone())
    }
}

struct Shrinks;

impl Rotator for Shrinks {
    fn rotate(&self, _src: &RgbaImage, _angle_deg: f64, _fill: Rgba<u8>) -> SpinResult<RgbaImage> {
        Ok(RgbaImage::new(1, 1))
    }
}

fn src() -> RgbaImage {
    RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]))
}

#[test]
fn sequential_and_parallel_preserve_angle_order() {
    let angles: Vec<f64> = (0..100).map(f64::from).collect();
    for threading in [
        RenderThreading::default(),
        RenderThreading {
            parallel: true,
            threads: Some(4),
        },
    ] {
        let frames = render_frames(&src(), &angles, &StampRotator, TRANSPARENT, &threading).unwrap();
        assert_eq!(frames.len(), angles.len());
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(f.get_pixel(0, 0).0[0], i as u8);
        }
    }
}

#[test]
fn parallel_matches_sequential_with_real_rotator() {
    let src = RgbaImage::from_fn(24, 24, |x, y| Rgba([(x * 9) as u8, (y * 5) as u8, 7, 255]));
    let angles = crate::animation::angles::angle_sequence(12, crate::Ease::InOutSine);
    let rot = CanvasRotator::default();
    let seq = render_frames(&src, &angles, &rot, TRANSPARENT, &RenderThreading::default()).unwrap();
    let par = render_frames(
        &src,
        &angles,
        &rot,
        TRANSPARENT,
        &RenderThreading {
            parallel: true,
            threads: None,
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    assert_eq!(seq[0], src);
    assert_eq!(seq[11], src);
}

#[test]
fn failing_frame_aborts_batch() {
    let err = render_frames(
        &src(),
        &[0.0, 10.0, 20.0],
        &FailAt(10.0),
        TRANSPARENT,
        &RenderThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, SpinError::Render(_)));
}

#[test]
fn resized_frame_is_rejected() {
    let err = render_frames(&src(), &[5.0], &Shrinks, TRANSPARENT, &RenderThreading::default())
        .unwrap_err();
    assert!(err.to_string().contains("expected 8x8"));
}

#[test]
fn zero_threads_is_a_config_error() {
    let err = render_frames(
        &src(),
        &[0.0],
        &StampRotator,
        TRANSPARENT,
        &RenderThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, SpinError::Config(_)));
}

#[test]
fn empty_angle_list_is_a_config_error() {
    let err = render_frames(&src(), &[], &StampRotator, TRANSPARENT, &RenderThreading::default())
        .unwrap_err();
    assert!(matches!(err, SpinError::Config(_)));
}
