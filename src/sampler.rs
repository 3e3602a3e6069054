// Trajectory sampling core - fixed-cadence flight path of a thrown body
use crate::constants::G_ACCEL_MPS2;
use crate::inputs::LaunchParameters;
use serde::{Deserialize, Serialize};

/// Single trajectory sample point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Lazy, finite sequence of trajectory samples
///
/// Yields samples at a fixed time step from launch until the next step would
/// drop below ground level. Restartable: clone a fresh iterator or build a new
/// one from the same parameters; identical inputs always produce the identical
/// sequence. Animation surfaces pull one element per tick; nothing here knows
/// about timing.
#[derive(Debug, Clone)]
pub struct SampleIter {
    vx: f64,
    vy: f64,
    dt: f64,
    t: f64,
}

impl SampleIter {
    /// Start a sample sequence for the given launch parameters and time step
    ///
    /// Preconditions (caller-validated, see [`LaunchParameters::validated`]):
    /// positive velocity, angle in (0, 90), `dt > 0`. The sequence itself
    /// performs no validation.
    pub fn new(params: &LaunchParameters, dt: f64) -> Self {
        let (vx, vy) = params.velocity_components();
        Self { vx, vy, dt, t: 0.0 }
    }
}

impl Iterator for SampleIter {
    type Item = TrajectorySample;

    fn next(&mut self) -> Option<TrajectorySample> {
        let t = self.t;
        let y = self.vy * t - 0.5 * G_ACCEL_MPS2 * t * t;
        if y < 0.0 {
            // First below-ground step ends the flight; nothing is emitted for it.
            return None;
        }
        self.t += self.dt;
        Some(TrajectorySample {
            time_s: t,
            x_m: self.vx * t,
            y_m: y,
        })
    }
}

/// Sample the full trajectory at a fixed time step
///
/// Emits `(t, x, y)` from `t = 0` onward while `y >= 0`; the last sample is
/// the final non-negative point at the sampling cadence. The exact ground
/// impact is deliberately not interpolated. Termination is analytic: `y` goes
/// negative once `t` exceeds `2·vy/g`.
pub fn sample_trajectory(params: &LaunchParameters, dt: f64) -> Vec<TrajectorySample> {
    SampleIter::new(params, dt).collect()
}

/// Summary figures for a sampled trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightSummary {
    pub max_range_m: f64,
    pub max_height_m: f64,
    pub time_of_flight_s: f64,
    pub samples: usize,
}

/// Reduce a sample slice to its summary figures
///
/// All values are taken from the samples themselves, so they carry the same
/// one-step granularity as the sampling cadence.
pub fn summarize(samples: &[TrajectorySample]) -> FlightSummary {
    let mut max_range_m = 0.0_f64;
    let mut max_height_m = 0.0_f64;
    let mut time_of_flight_s = 0.0_f64;
    for s in samples {
        max_range_m = max_range_m.max(s.x_m);
        max_height_m = max_height_m.max(s.y_m);
        time_of_flight_s = time_of_flight_s.max(s.time_s);
    }
    FlightSummary {
        max_range_m,
        max_height_m,
        time_of_flight_s,
        samples: samples.len(),
    }
}
