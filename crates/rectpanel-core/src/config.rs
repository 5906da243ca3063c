#![forbid(unsafe_code)]

//! Panel construction parameters.

use crate::error::ConfigError;
use crate::geometry::{ClampBasis, Dimensions};

/// Default thickness of the resize handles.
pub const DEFAULT_HANDLE_SIZE: f64 = 2.0;

/// Construction parameters for a bounded panel.
///
/// The container is fixed for the lifetime of the panel; only
/// `max.w`/`max.h` are consulted, `max.x`/`max.y` are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Starting live rectangle (default: `{0, 0, 100, 100}`).
    pub initial: Dimensions,
    /// Container extent (default: `{0, 0, 250, 250}`).
    pub max: Dimensions,
    /// Origin used for the width/height ceiling (default: raw origin).
    pub clamp_basis: ClampBasis,
    /// Thickness of edge and corner handles (default: 2).
    pub handle_size: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial: Dimensions::DEFAULT_INITIAL,
            max: Dimensions::DEFAULT_MAX,
            clamp_basis: ClampBasis::RawOrigin,
            handle_size: DEFAULT_HANDLE_SIZE,
        }
    }
}

impl PanelConfig {
    /// Set the starting rectangle.
    #[must_use]
    pub fn initial(mut self, initial: Dimensions) -> Self {
        self.initial = initial;
        self
    }

    /// Set the container extent.
    #[must_use]
    pub fn max(mut self, max: Dimensions) -> Self {
        self.max = max;
        self
    }

    /// Set the clamp basis.
    #[must_use]
    pub fn clamp_basis(mut self, basis: ClampBasis) -> Self {
        self.clamp_basis = basis;
        self
    }

    /// Set the handle thickness.
    #[must_use]
    pub fn handle_size(mut self, size: f64) -> Self {
        self.handle_size = size;
        self
    }

    /// Check the parameters.
    ///
    /// All values must be finite and the container extent non-negative. The
    /// starting rectangle may lie partly or wholly outside the container.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("initial.x", self.initial.x),
            ("initial.y", self.initial.y),
            ("initial.w", self.initial.w),
            ("initial.h", self.initial.h),
            ("max.w", self.max.w),
            ("max.h", self.max.h),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }
        for (field, value) in [("max.w", self.max.w), ("max.h", self.max.h)] {
            if value < 0.0 {
                return Err(ConfigError::NegativeExtent { field, value });
            }
        }
        if !self.handle_size.is_finite() || self.handle_size < 0.0 {
            return Err(ConfigError::InvalidHandleSize {
                value: self.handle_size,
            });
        }
        Ok(())
    }
}
