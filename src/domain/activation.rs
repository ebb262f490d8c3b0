// SPDX-License-Identifier: MPL-2.0
//! Normalized activation progress.

/// Animation progress from the inactive (0.0) to the active (1.0) look.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within [0, 1]. NaN collapses to the inactive endpoint.
///
/// # Example
///
/// ```
/// use iced_switch_button::domain::Activation;
///
/// assert_eq!(Activation::new(1.7).value(), 1.0);
/// assert_eq!(Activation::new(-0.2), Activation::INACTIVE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Activation(f32);

impl Activation {
    /// Fully inactive appearance.
    pub const INACTIVE: Self = Self(0.0);
    /// Fully active appearance.
    pub const ACTIVE: Self = Self(1.0);

    /// Creates a new activation value, clamping to [0, 1].
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::INACTIVE;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}
