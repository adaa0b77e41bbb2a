use crate::algebra::Vec3;

/// Clamp each channel to [0,1]; the display path is plain LDR.
pub fn clamp01(c: Vec3) -> Vec3 {
    Vec3(
        c.0.clamp(0.0, 1.0),
        c.1.clamp(0.0, 1.0),
        c.2.clamp(0.0, 1.0),
    )
}

#[inline]
pub fn to_rgb8(c: Vec3) -> [u8; 3] {
    let c = clamp01(c);
    [
        (c.0 * 255.0) as u8,
        (c.1 * 255.0) as u8,
        (c.2 * 255.0) as u8,
    ]
}
