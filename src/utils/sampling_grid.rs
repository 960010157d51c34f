// Evenly spaced sample coordinates and fixed-precision rounding

/// `n` evenly spaced values from `min` to `max`, both ends included
///
/// The last value is `max` itself rather than `min + (n - 1) * step`, so
/// bounds compare equal to the values they were built from.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { max } else { min + step * i as f64 })
                .collect()
        }
    }
}

/// Centered coordinates `spacing * (i - (n - 1) / 2)` for `i in 0..n`
pub fn centered_axis(n: usize, spacing: f64) -> Vec<f64> {
    let half = (n as f64 - 1.0) / 2.0;
    (0..n).map(|i| spacing * (i as f64 - half)).collect()
}

/// Largest number of decimal places the rounding helpers honour
pub const MAX_DECIMALS: u32 = 15;

fn decimal_scale(decimals: u32) -> f64 {
    10f64.powi(decimals.min(MAX_DECIMALS) as i32)
}

/// Round to a fixed number of decimal places; `-0.0` comes back as `0.0`
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = decimal_scale(decimals);
    (value * scale).round() / scale + 0.0
}

/// Round to a fixed number of decimal places, moving away from `origin`
///
/// Values above `origin` round up, values below round down, a value equal
/// to `origin` rounds to nearest. The result is never closer to `origin`
/// than `value` on that side.
pub fn round_away_from(value: f64, origin: f64, decimals: u32) -> f64 {
    let scale = decimal_scale(decimals);
    let scaled = value * scale;
    let rounded = if value > origin {
        let up = scaled.ceil() / scale;
        if up < value { (scaled.ceil() + 1.0) / scale } else { up }
    } else if value < origin {
        let down = scaled.floor() / scale;
        if down > value { (scaled.floor() - 1.0) / scale } else { down }
    } else {
        scaled.round() / scale
    };
    rounded + 0.0
}
