//! Plausibility scoring.
//!
//! Four binary-ish feature weights combined by a fixed-weight sum. The
//! weights are compile-time constants; there is no runtime tuning surface.

/// Feature weights. Sum to 1.0, so the composite spans [0, 100] after the
/// ×100 scaling.
pub const TMAG_WEIGHT: f64 = 0.58;
pub const DEPTH_WEIGHT: f64 = 0.27;
pub const PERIOD_WEIGHT: f64 = 0.08;
pub const DURATION_WEIGHT: f64 = 0.07;

/// The four numeric features of one catalog row. `None` is the
/// not-a-number sentinel from coercion; every feature treats it as its
/// "not met" branch.
#[derive(Debug, Clone, Copy, Default)]
pub struct Features {
    pub orbper: Option<f64>,
    pub trandur: Option<f64>,
    pub trandept: Option<f64>,
    pub tmag: Option<f64>,
}

/// Weighted composite score in [0, 100]. Rounding is the caller's concern.
pub fn composite(features: &Features) -> f64 {
    100.0
        * (TMAG_WEIGHT * tmag_factor(features.tmag)
            + DEPTH_WEIGHT * depth_factor(features.trandept)
            + PERIOD_WEIGHT * period_factor(features.orbper)
            + DURATION_WEIGHT * duration_factor(features.trandur))
}

/// Brighter target favored.
fn tmag_factor(tmag: Option<f64>) -> f64 {
    match tmag {
        Some(v) if v < 12.0 => 1.0,
        _ => 0.5,
    }
}

/// Deeper transit favored.
fn depth_factor(depth: Option<f64>) -> f64 {
    match depth {
        Some(v) if v > 500.0 => 1.0,
        _ => 0.3,
    }
}

/// Shorter period favored.
fn period_factor(period: Option<f64>) -> f64 {
    match period {
        Some(v) if v < 30.0 => 1.0,
        _ => 0.4,
    }
}

/// Shorter duration favored.
fn duration_factor(duration: Option<f64>) -> f64 {
    match duration {
        Some(v) if v < 10.0 => 1.0,
        _ => 0.6,
    }
}
