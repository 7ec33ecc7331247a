use std::sync::OnceLock;

/// Rotation steps the drift harness runs when none are given
pub const DEFAULT_STEPS: usize = 10;
/// Most steps the drift harness accepts
pub const MAX_STEPS: usize = 10_000;
/// Half-angle increment (radians) around X used by the drift harness
pub const DEFAULT_INCREMENT: f64 = 0.07;
/// Per-component absolute error allowed against the f64 reference
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Parse a step count in `1..=MAX_STEPS`
pub fn parse_steps(s: &str) -> Result<usize, String> {
    let steps = s
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad step count {:?}: {}", s, e))?;
    if !(1..=MAX_STEPS).contains(&steps) {
        return Err(format!("steps must be between 1 and {}, got {}", MAX_STEPS, steps));
    }
    Ok(steps)
}

/// Parse a finite, non-negative tolerance
pub fn parse_tolerance(s: &str) -> Result<f64, String> {
    let tolerance = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad tolerance {:?}: {}", s, e))?;
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(format!("tolerance must be finite and >= 0, got {}", tolerance));
    }
    Ok(tolerance)
}

/// Parse a finite increment in `-1.0..=1.0`
pub fn parse_increment(s: &str) -> Result<f64, String> {
    let increment = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad increment {:?}: {}", s, e))?;
    if !increment.is_finite() || !(-1.0..=1.0).contains(&increment) {
        return Err(format!("increment must be within -1..=1, got {}", increment));
    }
    Ok(increment)
}

static DRIFT_STEPS: OnceLock<usize> = OnceLock::new();

pub(crate) fn drift_steps() -> usize {
    *DRIFT_STEPS
        .get_or_init(|| parse_env_usize("FIXPOINT_STEPS", DEFAULT_STEPS).clamp(1, MAX_STEPS))
}

static DRIFT_INCREMENT: OnceLock<f64> = OnceLock::new();

pub(crate) fn drift_increment() -> f64 {
    *DRIFT_INCREMENT.get_or_init(|| {
        parse_env_f64("FIXPOINT_INCREMENT", DEFAULT_INCREMENT).clamp(-1.0, 1.0)
    })
}

static DRIFT_TOLERANCE: OnceLock<f64> = OnceLock::new();

pub(crate) fn drift_tolerance() -> f64 {
    *DRIFT_TOLERANCE
        .get_or_init(|| parse_env_f64("FIXPOINT_TOLERANCE", DEFAULT_TOLERANCE).abs())
}
