use crate::config::MAX_STEPS;
use crate::models::{QuatQ24, Vec3Q24};
use crate::utils::reference::{RefQuat, RefVec3, max_abs_diff};

/// Unit vector the drift check rotates by default
pub const SCENARIO_VECTOR: RefVec3 = [0.0, 0.832_050_3, 0.554_700_2];

/// One step of [`rotation_drift`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftSample {
    /// 1-based count of increments composed so far
    pub step: usize,
    /// Vector rotated by the composed Q24 quaternion
    pub fixed: RefVec3,
    /// Vector rotated by the composed f64 quaternion
    pub reference: RefVec3,
    /// Largest per-component difference between the two
    pub max_abs_error: f64,
    /// Squared norm of the composed Q24 quaternion
    pub norm_squared: f64,
}

/// Compose a small rotation `steps` times in Q24 and in f64, rotating
/// `vector` by the running composition after every step.
///
/// `increment` is the imaginary part of the rotation increment; the real
/// part comes from [`QuatQ24::from_small_rotation`] on both sides. `steps`
/// is capped at [`MAX_STEPS`].
pub fn rotation_drift(vector: RefVec3, increment: RefVec3, steps: usize) -> Vec<DriftSample> {
    let steps = steps.min(MAX_STEPS);
    let fixed_vector = Vec3Q24::from_f64(vector[0], vector[1], vector[2]);
    let fixed_inc =
        QuatQ24::from_small_rotation(Vec3Q24::from_f64(increment[0], increment[1], increment[2]));
    let ref_inc = RefQuat::from_small_rotation(increment);

    let mut fixed_rot = QuatQ24::identity();
    let mut ref_rot = RefQuat::IDENTITY;
    let mut samples = Vec::with_capacity(steps);

    for step in 1..=steps {
        fixed_rot = fixed_rot * fixed_inc;
        ref_rot = ref_rot * ref_inc;

        let fixed = fixed_rot.rotate(&fixed_vector).to_f64();
        let reference = ref_rot.rotate(&vector);
        let max_abs_error = max_abs_diff(&fixed, &reference);

        if cfg!(debug_assertions) && crate::debug::debug_enabled() {
            eprintln!(
                "DRIFT: step {} fixed={:?} reference={:?} err={:.3e}",
                step, fixed, reference, max_abs_error
            );
        }

        samples.push(DriftSample {
            step,
            fixed,
            reference,
            max_abs_error,
            norm_squared: fixed_rot.norm_squared().to_f64(),
        });
    }

    samples
}

/// Worst error over all samples (0.0 for none)
pub fn max_drift(samples: &[DriftSample]) -> f64 {
    samples
        .iter()
        .map(|s| s.max_abs_error)
        .fold(0.0f64, f64::max)
}

/// Step count from `FIXPOINT_STEPS` (default 10).
pub fn steps_from_env() -> usize {
    crate::config::drift_steps()
}

/// Increment around X from `FIXPOINT_INCREMENT` (default 0.07).
pub fn increment_from_env() -> f64 {
    crate::config::drift_increment()
}

/// Tolerance from `FIXPOINT_TOLERANCE` (default 1e-5).
pub fn tolerance_from_env() -> f64 {
    crate::config::drift_tolerance()
}
