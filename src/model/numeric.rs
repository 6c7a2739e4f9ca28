pub fn clip01(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

/// Rounds half away from zero for non-negative inputs (x.5 goes up).
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

pub fn round_half_up_to(x: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    round_half_up(x * scale) / scale
}

/// Percentage of `value` over `maximum`, multiplied before dividing so exact
/// integer ratios stay exact.
pub fn percent_of(value: f64, maximum: f64) -> f64 {
    value * 100.0 / maximum
}

/// Integer percentage rounded half-up, exact for integer scores.
pub fn percent_round_u32(value: u32, maximum: u32) -> u32 {
    debug_assert!(maximum > 0);
    (value * 200 + maximum) / (2 * maximum)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/numeric.rs"]
mod tests;
