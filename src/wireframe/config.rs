//! Configuration for wireframe generation.

use crate::errors::{WireframeError, WireframeResult};
use crate::float_types::Real;

/// Default squared-normal-difference threshold for merging triangles into a face.
pub const DEFAULT_PLANAR_TOLERANCE: Real = 0.3;
/// Default ribbon width, in mesh units.
pub const DEFAULT_WIRE_LINE_WIDTH: Real = 0.2;
/// Default `|denom|` below which two offset lines count as parallel.
pub const DEFAULT_CROSS_LINE_PARALLEL: Real = 0.01;
/// Default squared gap below which two closest points count as an intersection.
pub const DEFAULT_CROSS_LINE_TOLERANCE: Real = 0.001;

/// Configuration for wireframe generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeConfig {
    /// Two adjacent triangles join the same face when `|n1 - n2|^2` is below
    /// this value. `0` disables merging; `4` merges everything connected.
    pub planar_tolerance: Real,
    /// Distance between a boundary edge and its offset edge.
    pub wire_line_width: Real,
    /// Offset lines whose direction determinant is below this are parallel.
    pub cross_line_parallel: Real,
    /// Maximum squared distance between the two closest points of a corner.
    pub cross_line_tolerance: Real,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            planar_tolerance: DEFAULT_PLANAR_TOLERANCE,
            wire_line_width: DEFAULT_WIRE_LINE_WIDTH,
            cross_line_parallel: DEFAULT_CROSS_LINE_PARALLEL,
            cross_line_tolerance: DEFAULT_CROSS_LINE_TOLERANCE,
        }
    }
}

impl WireframeConfig {
    #[must_use]
    pub fn with_planar_tolerance(mut self, tolerance: Real) -> Self {
        self.planar_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_wire_line_width(mut self, width: Real) -> Self {
        self.wire_line_width = width;
        self
    }

    #[must_use]
    pub fn with_cross_line_parallel(mut self, threshold: Real) -> Self {
        self.cross_line_parallel = threshold;
        self
    }

    #[must_use]
    pub fn with_cross_line_tolerance(mut self, tolerance: Real) -> Self {
        self.cross_line_tolerance = tolerance;
        self
    }

    /// Check that every value is finite and non-negative.
    ///
    /// # Errors
    /// [`WireframeError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> WireframeResult<()> {
        let fields = [
            ("planar_tolerance", self.planar_tolerance),
            ("wire_line_width", self.wire_line_width),
            ("cross_line_parallel", self.cross_line_parallel),
            ("cross_line_tolerance", self.cross_line_tolerance),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(WireframeError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WireframeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.planar_tolerance, 0.3);
        assert_eq!(config.wire_line_width, 0.2);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = WireframeConfig::default()
            .with_planar_tolerance(0.0)
            .with_wire_line_width(1.5)
            .with_cross_line_parallel(1e-6)
            .with_cross_line_tolerance(1e-9);
        assert_eq!(config.planar_tolerance, 0.0);
        assert_eq!(config.wire_line_width, 1.5);
        assert_eq!(config.cross_line_parallel, 1e-6);
        assert_eq!(config.cross_line_tolerance, 1e-9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_width_is_rejected() {
        let err = WireframeConfig::default()
            .with_wire_line_width(-1.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("wire_line_width"));
    }

    #[test]
    fn nan_tolerance_is_rejected() {
        assert!(
            WireframeConfig::default()
                .with_planar_tolerance(Real::NAN)
                .validate()
                .is_err()
        );
    }
}
