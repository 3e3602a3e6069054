//! # Trajectory Engine
//!
//! Trajectory sampling for a body thrown at an angle under constant gravity,
//! with input validation and screen-space scaling helpers for presentation
//! layers (tables, plots, frame-by-frame animation).

// Re-export the main types and functions
pub use inputs::{parse_launch_inputs, InputError, LaunchParameters};
pub use sampler::{sample_trajectory, summarize, FlightSummary, SampleIter, TrajectorySample};
pub use viewport::{scale_to_viewport, Viewport};

// Module declarations
mod constants;
pub mod inputs;
pub mod sampler;
pub mod viewport;
