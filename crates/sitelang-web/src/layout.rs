//! CSS length helpers for layout reads.

/// Pixels in a computed CSS length such as `12px`; anything else reads as zero.
#[must_use]
pub fn parse_px(value: &str) -> f64 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|number| number.trim().parse::<f64>().ok())
        .filter(|px| px.is_finite())
        .unwrap_or(0.0)
}
