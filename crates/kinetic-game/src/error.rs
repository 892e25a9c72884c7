use kinetic_physics::BodyConfigError;

/// Invalid controller configuration, reported when the controller is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Body(#[from] BodyConfigError),

    #[error("{name} must be a finite, non-negative number, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must be a finite, positive number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("pitch limits are inverted: min {min} > max {max}")]
    InvertedPitchLimits { min: f32, max: f32 },
}

impl ConfigError {
    /// Require `value >= 0`
    pub(crate) fn non_negative(name: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(Self::Negative { name, value })
        }
    }

    /// Require `value > 0`
    pub(crate) fn positive(name: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(Self::NotPositive { name, value })
        }
    }
}
