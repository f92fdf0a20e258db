/// Premultiplied RGBA as f32, channels in `0..=255`.
pub(crate) fn premul_f32(px: [u8; 4]) -> [f32; 4] {
    let a = f32::from(px[3]) / 255.0;
    [
        f32::from(px[0]) * a,
        f32::from(px[1]) * a,
        f32::from(px[2]) * a,
        f32::from(px[3]),
    ]
}

/// Inverse of [`premul_f32`], rounding and clamping back to straight RGBA8.
pub(crate) fn unpremul_to_rgba8(px: [f32; 4]) -> [u8; 4] {
    let a = px[3].clamp(0.0, 255.0);
    if a < 0.5 {
        return [0, 0, 0, 0];
    }
    let inv = 255.0 / a;
    let ch = |c: f32| (c * inv).round().clamp(0.0, 255.0) as u8;
    [ch(px[0]), ch(px[1]), ch(px[2]), a.round() as u8]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
