use super::views::Grade;

/// Total score at which the curve crosses its midpoint.
pub const MIDPOINT: f64 = 50.0;
pub const STEEPNESS: f64 = 0.12;
/// Lowest reportable probability.
pub const FLOOR: f64 = 5.0;
pub const SCALE: f64 = 94.0;
pub const CEILING: f64 = 99.0;

fn sigmoid(total_score: f64) -> f64 {
    1.0 / (1.0 + (-STEEPNESS * (total_score - MIDPOINT)).exp())
}

/// Logistic curve value before rounding, in `[FLOOR, CEILING]`.
pub fn raw_probability(total_score: f64) -> f64 {
    (FLOOR + SCALE * sigmoid(total_score)).clamp(FLOOR, CEILING)
}

/// Maps a 0-100 total score onto the 5-99 fit probability shown to users.
pub fn probability(total_score: u8) -> u8 {
    raw_probability(f64::from(total_score)).round() as u8
}

/// Derivative of the curve at `total_score`, in probability points per score point.
pub fn slope(total_score: f64) -> f64 {
    let s = sigmoid(total_score);
    SCALE * STEEPNESS * s * (1.0 - s)
}

pub fn grade(total_score: u8) -> Grade {
    match total_score {
        85..=u8::MAX => Grade::Top,
        70..=84 => Grade::Excellent,
        55..=69 => Grade::Good,
        40..=54 => Grade::Average,
        25..=39 => Grade::Poor,
        _ => Grade::Unsuitable,
    }
}
