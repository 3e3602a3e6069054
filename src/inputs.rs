// Launch input handling - parameter type, text parsing, and range validation
use crate::constants::G_ACCEL_MPS2;
use std::error::Error;
use std::fmt;

/// Error raised by the input layer before any sampling takes place
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// A field's text is not a valid real number
    Parse { field: &'static str, value: String },
    /// A numeric value is outside its allowed range
    Range { message: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputError::Parse { field, value } => {
                write!(f, "{} is not a valid number: '{}'", field, value)
            }
            InputError::Range { message } => write!(f, "{}", message),
        }
    }
}

impl Error for InputError {}

/// Launch parameters for a body thrown at an angle
///
/// Plain data; construct directly when the values are known to be in range,
/// or go through [`LaunchParameters::validated`] / [`parse_launch_inputs`]
/// when they come from user input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParameters {
    /// Initial speed (m/s), positive
    pub initial_velocity_mps: f64,
    /// Launch angle above the horizontal (degrees), open interval (0, 90)
    pub launch_angle_deg: f64,
}

impl LaunchParameters {
    /// Range-check velocity and angle before constructing
    pub fn validated(velocity_mps: f64, angle_deg: f64) -> Result<Self, InputError> {
        if velocity_mps <= 0.0 {
            return Err(InputError::Range {
                message: format!("velocity must be positive, got {}", velocity_mps),
            });
        }
        if angle_deg <= 0.0 || angle_deg >= 90.0 {
            return Err(InputError::Range {
                message: format!(
                    "launch angle must be strictly between 0 and 90 degrees, got {}",
                    angle_deg
                ),
            });
        }
        Ok(Self {
            initial_velocity_mps: velocity_mps,
            launch_angle_deg: angle_deg,
        })
    }

    /// Horizontal and vertical velocity components (m/s)
    pub fn velocity_components(&self) -> (f64, f64) {
        let rad = self.launch_angle_deg.to_radians();
        (
            self.initial_velocity_mps * rad.cos(),
            self.initial_velocity_mps * rad.sin(),
        )
    }

    /// Analytic time of flight until return to launch height: 2·vy/g
    pub fn flight_time(&self) -> f64 {
        let (_, vy) = self.velocity_components();
        2.0 * vy / G_ACCEL_MPS2
    }

    /// Analytic apex height: vy²/(2g)
    pub fn peak_height(&self) -> f64 {
        let (_, vy) = self.velocity_components();
        vy * vy / (2.0 * G_ACCEL_MPS2)
    }

    /// Analytic horizontal range: v0²·sin(2a)/g
    pub fn horizontal_range(&self) -> f64 {
        let v0 = self.initial_velocity_mps;
        v0 * v0 * (2.0 * self.launch_angle_deg.to_radians()).sin() / G_ACCEL_MPS2
    }
}

/// Parse free-text velocity and angle fields into validated launch parameters
///
/// Intended for text front-ends; rejects non-numeric input before the range
/// check, so the sampler is never called with bad values.
pub fn parse_launch_inputs(velocity: &str, angle: &str) -> Result<LaunchParameters, InputError> {
    let velocity_mps: f64 = velocity.trim().parse().map_err(|_| InputError::Parse {
        field: "velocity",
        value: velocity.to_string(),
    })?;
    let angle_deg: f64 = angle.trim().parse().map_err(|_| InputError::Parse {
        field: "angle",
        value: angle.to_string(),
    })?;
    LaunchParameters::validated(velocity_mps, angle_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validated_accepts_in_range() {
        let params = LaunchParameters::validated(10.0, 45.0).unwrap();
        assert_eq!(params.initial_velocity_mps, 10.0);
        assert_eq!(params.launch_angle_deg, 45.0);
    }

    #[test]
    fn test_validated_rejects_bad_velocity() {
        assert!(matches!(
            LaunchParameters::validated(0.0, 45.0),
            Err(InputError::Range { .. })
        ));
        assert!(matches!(
            LaunchParameters::validated(-5.0, 45.0),
            Err(InputError::Range { .. })
        ));
    }

    #[test]
    fn test_validated_rejects_bad_angle() {
        for angle in [0.0, 90.0, -10.0, 120.0] {
            assert!(matches!(
                LaunchParameters::validated(10.0, angle),
                Err(InputError::Range { .. })
            ));
        }
    }

    #[test]
    fn test_parse_launch_inputs() {
        let params = parse_launch_inputs(" 20.5 ", "30").unwrap();
        assert_eq!(params.initial_velocity_mps, 20.5);
        assert_eq!(params.launch_angle_deg, 30.0);

        let err = parse_launch_inputs("fast", "30").unwrap_err();
        assert!(matches!(err, InputError::Parse { field: "velocity", .. }));

        let err = parse_launch_inputs("20", "steep").unwrap_err();
        assert!(matches!(err, InputError::Parse { field: "angle", .. }));
    }

    #[test]
    fn test_velocity_components() {
        let params = LaunchParameters {
            initial_velocity_mps: 20.0,
            launch_angle_deg: 30.0,
        };
        let (vx, vy) = params.velocity_components();
        assert!((vx - 17.320508).abs() < 1e-5);
        assert!((vy - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_analytic_helpers() {
        let params = LaunchParameters {
            initial_velocity_mps: 20.0,
            launch_angle_deg: 30.0,
        };
        // 2*10/9.81
        assert!((params.flight_time() - 2.038736).abs() < 1e-5);
        // 100/(2*9.81)
        assert!((params.peak_height() - 5.096840).abs() < 1e-5);
        // 400*sin(60°)/9.81
        assert!((params.horizontal_range() - 35.311944).abs() < 1e-4);
    }
}
