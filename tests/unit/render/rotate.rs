use super::*;

fn opaque(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(rgba))
}

/// Distinct colour per pixel so remaps can be checked exactly.
fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| Rgba([(x * 7) as u8, (y * 11) as u8, 90, 255]))
}

#[test]
fn dimensions_never_change() {
    let rot = CanvasRotator::default();
    for src in [gradient(64, 64), gradient(40, 17), gradient(1, 1)] {
        for step in 0..36 {
            let angle = f64::from(step) * 10.0 + 0.37;
            let out = rot.rotate(&src, angle, TRANSPARENT).unwrap();
            assert_eq!(out.dimensions(), src.dimensions(), "angle {angle}");
        }
    }
}

#[test]
fn full_turns_are_pixel_identical() {
    let rot = CanvasRotator::default();
    let src = gradient(33, 20);
    for angle in [0.0, 360.0, -360.0, 720.0] {
        assert_eq!(rot.rotate(&src, angle, TRANSPARENT).unwrap(), src);
    }
}

#[test]
fn corners_are_transparent_at_45_degrees() {
    let rot = CanvasRotator::default();
    let src = opaque(64, 64, [255, 0, 0, 255]);
    let out = rot.rotate(&src, 45.0, TRANSPARENT).unwrap();

    for (cx, cy) in [(0u32, 0u32), (60, 0), (0, 60), (60, 60)] {
        for y in cy..cy + 4 {
            for x in cx..cx + 4 {
                assert_eq!(out.get_pixel(x, y).0[3], 0, "corner pixel ({x},{y})");
            }
        }
    }
    // The middle of the square stays fully covered.
    assert_eq!(out.get_pixel(32, 32).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(32, 2).0[3], 255);
}

#[test]
fn fill_colour_is_used_for_uncovered_pixels() {
    let rot = CanvasRotator::default();
    let src = opaque(16, 16, [0, 255, 0, 255]);
    let fill = Rgba([255, 0, 255, 255]);
    let out = rot.rotate(&src, 45.0, fill).unwrap();
    assert_eq!(*out.get_pixel(0, 0), fill);
}

#[test]
fn quarter_turn_is_counter_clockwise() {
    let rot = CanvasRotator::default();
    let mut src = opaque(8, 8, [0, 0, 0, 255]);
    // Mark the middle of the right edge.
    src.put_pixel(7, 3, Rgba([255, 255, 255, 255]));
    let out = rot.rotate(&src, 90.0, TRANSPARENT).unwrap();
    // Counter-clockwise: the right edge ends up on top.
    assert_eq!(out.get_pixel(3, 0).0, [255, 255, 255, 255]);
}

#[test]
fn general_path_agrees_with_quarter_turn_remap() {
    let src = gradient(12, 12);
    let exact = CanvasRotator::default().rotate(&src, 90.0, TRANSPARENT).unwrap();
    let near = CanvasRotator::new(Resample::Nearest)
        .rotate(&src, 90.0 + 1e-7, TRANSPARENT)
        .unwrap();
    assert_eq!(exact, near);
}

#[test]
fn half_turn_on_non_square_is_exact() {
    let src = gradient(9, 5);
    let out = CanvasRotator::default().rotate(&src, 180.0, TRANSPARENT).unwrap();
    assert_eq!(out.get_pixel(0, 0), src.get_pixel(8, 4));
    assert_eq!(out.get_pixel(8, 4), src.get_pixel(0, 0));
}

#[test]
fn quarter_turn_on_non_square_clips_instead_of_resizing() {
    let src = opaque(20, 10, [10, 20, 30, 255]);
    let out = CanvasRotator::default().rotate(&src, 90.0, TRANSPARENT).unwrap();
    assert_eq!(out.dimensions(), (20, 10));
    // Left and right margins were never covered by the rotated 10-wide column.
    assert_eq!(out.get_pixel(0, 5).0[3], 0);
    assert_eq!(out.get_pixel(19, 5).0[3], 0);
    assert_eq!(out.get_pixel(10, 5).0, [10, 20, 30, 255]);
}

#[test]
fn transparent_pixels_do_not_darken_neighbours() {
    // Half transparent-black, half opaque white: premultiplied filtering keeps
    // any partially covered pixel white rather than grey.
    let src = RgbaImage::from_fn(16, 16, |x, _| {
        if x < 8 {
            Rgba([0, 0, 0, 0])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let out = CanvasRotator::default().rotate(&src, 10.0, TRANSPARENT).unwrap();
    for px in out.pixels() {
        if px.0[3] > 16 {
            assert!(px.0[0] >= 250, "darkened pixel {:?}", px.0);
        }
    }
}

#[test]
fn non_finite_angle_is_a_render_error() {
    let err = CanvasRotator::default()
        .rotate(&gradient(4, 4), f64::NAN, TRANSPARENT)
        .unwrap_err();
    assert!(matches!(err, SpinError::Render(_)));
}

#[test]
fn cubic_weights_form_a_partition_of_unity() {
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let sum: f32 = cubic_weights(t).iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
    assert_eq!(cubic_weights(0.0), [0.0, 1.0, 0.0, 0.0]);
}
