//! Line-type colours and tick placement shared by both surfaces.

/// Neutral grey for the zero line (line type 0)
pub const ZERO_LINE_RGB: (u8, u8, u8) = (160, 160, 160);

pub const PALETTE: [(u8, u8, u8); 8] = [
    (148, 0, 211),  // Purple
    (0, 158, 115),  // Green
    (86, 180, 233), // Sky blue
    (230, 159, 0),  // Orange
    (240, 228, 66), // Yellow
    (0, 114, 178),  // Blue
    (229, 30, 16),  // Red
    (0, 0, 0),      // Black
];

/// Colour for a line-type index; indices past the palette wrap around.
pub fn line_type_rgb(line_type: usize) -> (u8, u8, u8) {
    if line_type == 0 {
        ZERO_LINE_RGB
    } else {
        PALETTE[(line_type - 1) % PALETTE.len()]
    }
}

/// Most ticks drawn on one axis
pub const MAX_TICKS: usize = 500;

/// Index range `first..=last` of the multiples of `step` inside `[min, max]`.
fn tick_span(min: f64, max: f64, step: f64) -> Option<(f64, f64)> {
    if !(step > 0.0) || !(min <= max) {
        return None;
    }
    // Small slack so 1.0 is kept when 0.1 * 10 lands at 0.9999999
    let first = (min / step - 1e-9).ceil();
    let last = (max / step + 1e-9).floor();
    (first.is_finite() && last.is_finite() && first <= last).then_some((first, last))
}

/// Number of multiples of `step` inside `[min, max]`, computed without
/// allocating. Saturates for huge spans.
pub fn tick_count(min: f64, max: f64, step: f64) -> usize {
    tick_span(min, max, step).map_or(0, |(first, last)| (last - first + 1.0) as usize)
}

/// Multiples of `step` inside `[min, max]`. Empty when there would be more
/// than [`MAX_TICKS`].
pub fn tick_positions(min: f64, max: f64, step: f64) -> Vec<f64> {
    let Some((first, last)) = tick_span(min, max, step) else {
        return Vec::new();
    };
    if last - first + 1.0 > MAX_TICKS as f64 {
        return Vec::new();
    }
    let eps = step * 1e-9;
    (first as i64..=last as i64)
        .map(|k| k as f64 * step)
        .filter(|v| *v >= min - eps && *v <= max + eps)
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect()
}

/// Fraction digits needed to show every multiple of `step` exactly.
pub fn tick_decimals(step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) {
        return 0;
    }
    (0..=12)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(12)
}

/// Label text for a tick value on an axis with interval `step`, trimmed of
/// trailing zeros.
pub fn format_tick(value: f64, step: f64) -> String {
    let formatted = format!("{:.*}", tick_decimals(step), value);
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
