//! Linear interpolation between scalars and color channels

/// Linear interpolation from `start` toward `end` by `amount`
///
/// `amount` is not clamped; `0.0` yields `start` and `1.0` yields `end`.
pub fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    amount.mul_add(end - start, start)
}

/// Channel-wise linear interpolation of three color components
pub fn lerp_rgb(start: [f64; 3], end: [f64; 3], amount: f64) -> [f64; 3] {
    [
        lerp(start[0], end[0], amount),
        lerp(start[1], end[1], amount),
        lerp(start[2], end[2], amount),
    ]
}

/// Round a floating color channel to the nearest representable byte
pub fn channel_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
