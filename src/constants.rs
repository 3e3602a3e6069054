/// Physical constants used in trajectory calculations

/// Gravitational acceleration in m/s²
///
/// Fixed at 9.81 rather than the standard-gravity 9.80665: the sampled
/// trajectories are specified against this value and it is not configurable.
pub const G_ACCEL_MPS2: f64 = 9.81;

// Numerical stability constants
/// Minimum trajectory extent (meters) below which viewport scaling degenerates
pub const MIN_EXTENT_M: f64 = 1e-9;
