//! Response curves for conditioning analog axis values

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::conditioning::AxisConditioner;
use crate::math::{fast_pow, sign};
use crate::utils::FloatOrd;

/// A single-sided response curve mirrored about zero:
/// a deadband suppressing noise around the rest position,
/// a power curve shaping the remaining travel,
/// and a remap onto an arbitrary output interval.
///
/// Inputs whose magnitude falls below the deadband produce zero output.
/// The surviving travel `[deadband, 1]` is renormalized to `[0, 1]` before
/// the curve applies, so curve shape and output range stay independent of
/// the deadband width. The input's sign is factored out first and reapplied
/// last, making the response mirror-symmetric about zero.
///
/// Reconfiguration always goes through the setters, which sanitize their
/// arguments by clamping and keep the cached coefficients consistent.
///
/// # Examples
///
/// ```rust
/// use axis_conditioning::prelude::*;
///
/// // 20% deadband, squared response, outputs in [0.0, 1.0].
/// let curve = UniformConditioner::new(0.2, 2.0, 0.0, 1.0);
///
/// // Rest-position noise is ignored.
/// assert_eq!(curve.condition(0.15), 0.0);
/// assert_eq!(curve.condition(-0.15), 0.0);
///
/// // Full deflection reaches the top of the output range.
/// assert!((curve.condition(1.0) - 1.0).abs() <= f64::EPSILON);
/// assert!((curve.condition(-1.0) + 1.0).abs() <= f64::EPSILON);
///
/// // The squared curve concentrates resolution near the center.
/// assert!(curve.condition(0.6) < 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct UniformConditioner {
    /// The noise-rejection threshold around the rest position.
    pub(crate) deadband: f64,

    /// The shape of the response curve over the live zone; `1.0` is linear.
    pub(crate) exponent: f64,

    /// The lower bound of the output interval.
    pub(crate) output_min: f64,

    /// The upper bound of the output interval.
    pub(crate) output_max: f64,

    /// Pre-calculated reciprocal of the live zone width,
    /// preventing division during conditioning.
    pub(crate) livezone_recip: f64,

    /// Pre-calculated width of the output interval.
    pub(crate) output_range: f64,
}

impl Default for UniformConditioner {
    /// Creates a [`UniformConditioner`] with a `0.1` deadband,
    /// a linear response, and outputs in `[0.0, 1.0]`.
    #[inline]
    fn default() -> Self {
        Self::new(0.1, 1.0, 0.0, 1.0)
    }
}

impl UniformConditioner {
    /// The largest accepted deadband.
    ///
    /// Kept strictly below `1.0` so the live zone never collapses to zero
    /// width and its cached reciprocal stays finite.
    pub const DEADBAND_MAX: f64 = 0.999_999;

    /// A pass-through conditioner:
    /// no deadband, linear response, outputs in `[0.0, 1.0]`.
    ///
    /// Mirrors inputs within `[-1.0, 1.0]` unchanged.
    pub const LINEAR: Self = Self {
        deadband: 0.0,
        exponent: 1.0,
        output_min: 0.0,
        output_max: 1.0,
        livezone_recip: 1.0,
        output_range: 1.0,
    };

    /// Creates a [`UniformConditioner`] from the given configuration.
    ///
    /// All arguments are sanitized the same way the setters sanitize them:
    /// the deadband is taken absolute and clamped to [`Self::DEADBAND_MAX`],
    /// the exponent is clamped to at least `1.0`,
    /// and the output bounds are reordered so `min <= max`.
    #[inline]
    pub fn new(deadband: f64, exponent: f64, min: f64, max: f64) -> Self {
        let mut conditioner = Self::LINEAR;
        conditioner.set_deadband(deadband);
        conditioner.set_exponent(exponent);
        conditioner.set_range(min, max);
        conditioner
    }

    /// Sets the deadband, taking the absolute value
    /// and clamping to at most [`Self::DEADBAND_MAX`].
    ///
    /// Out-of-range arguments are silently sanitized, never rejected;
    /// read back [`Self::deadband`] for the effective value.
    #[inline]
    pub fn set_deadband(&mut self, deadband: f64) {
        self.deadband = deadband.abs().min(Self::DEADBAND_MAX);
        self.precompute();
    }

    /// Sets the response exponent, clamping to at least `1.0`.
    #[inline]
    pub fn set_exponent(&mut self, exponent: f64) {
        self.exponent = exponent.max(1.0);
        self.precompute();
    }

    /// Sets the output interval, reordering the bounds so `min <= max`
    /// regardless of the order supplied.
    #[inline]
    pub fn set_range(&mut self, min: f64, max: f64) {
        self.output_min = min.min(max);
        self.output_max = min.max(max);
        self.precompute();
    }

    /// Recomputes the cached coefficients after a configuration change.
    #[inline]
    fn precompute(&mut self) {
        self.livezone_recip = (1.0 - self.deadband).recip();
        self.output_range = self.output_max - self.output_min;
    }

    /// Returns the effective deadband.
    #[must_use]
    #[inline]
    pub fn deadband(&self) -> f64 {
        self.deadband
    }

    /// Returns the effective response exponent.
    #[must_use]
    #[inline]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the lower bound of the output interval.
    #[must_use]
    #[inline]
    pub fn output_min(&self) -> f64 {
        self.output_min
    }

    /// Returns the upper bound of the output interval.
    #[must_use]
    #[inline]
    pub fn output_max(&self) -> f64 {
        self.output_max
    }

    /// Returns the output interval as `(min, max)`.
    #[must_use]
    #[inline]
    pub fn output_min_max(&self) -> (f64, f64) {
        (self.output_min, self.output_max)
    }

    /// Conditions a raw axis value.
    ///
    /// Magnitudes below the deadband map to zero. Everything else is
    /// renormalized into `[0.0, 1.0]`, shaped by the power curve, scaled
    /// into the output interval, and given back the input's sign.
    ///
    /// Inputs beyond `±1.0` are not clamped, so the curve extrapolates past
    /// the output interval. Non-finite inputs are not guarded either:
    /// NaN propagates to a NaN output, and infinities follow the usual
    /// floating-point rules.
    #[must_use]
    #[inline]
    pub fn condition(&self, input_value: f64) -> f64 {
        let magnitude = input_value.abs();
        if magnitude < self.deadband {
            return 0.0;
        }

        let normalized = (magnitude - self.deadband) * self.livezone_recip;
        let curved = fast_pow(normalized, self.exponent);
        sign(input_value) * (curved * self.output_range + self.output_min)
    }
}

impl From<UniformConditioner> for AxisConditioner {
    fn from(conditioner: UniformConditioner) -> Self {
        Self::Uniform(conditioner)
    }
}

impl Eq for UniformConditioner {}

impl Hash for UniformConditioner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The cached coefficients are functions of the configuration.
        FloatOrd(self.deadband).hash(state);
        FloatOrd(self.exponent).hash(state);
        FloatOrd(self.output_min).hash(state);
        FloatOrd(self.output_max).hash(state);
    }
}

/// Two independently configured response curves on one axis,
/// one per sign of travel.
///
/// Strictly negative inputs are conditioned by the negative curve;
/// zero and positive inputs by the positive curve. The sides share no
/// state, so braking can be retuned without touching acceleration.
///
/// # Examples
///
/// ```rust
/// use axis_conditioning::prelude::*;
///
/// let axis = NonUniformConditioner::new(
///     // Braking: no finesse required.
///     UniformConditioner::new(0.05, 1.0, 0.0, 1.0),
///     // Throttle: fine control at low speed.
///     UniformConditioner::new(0.1, 3.0, 0.0, 1.0),
/// );
///
/// assert_eq!(axis.condition(-0.03), 0.0);
/// assert!(axis.condition(-0.5) < 0.0);
/// assert!(axis.condition(0.5) > 0.0);
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct NonUniformConditioner {
    /// The curve conditioning strictly negative inputs.
    pub negative: UniformConditioner,

    /// The curve conditioning zero and positive inputs.
    pub positive: UniformConditioner,
}

impl NonUniformConditioner {
    /// Creates a [`NonUniformConditioner`] from per-sign curves.
    #[inline]
    pub fn new(negative: UniformConditioner, positive: UniformConditioner) -> Self {
        Self { negative, positive }
    }

    /// Creates a [`NonUniformConditioner`] applying the same curve to both
    /// signs of travel, equivalent to the curve on its own.
    #[inline]
    pub fn symmetric(conditioner: UniformConditioner) -> Self {
        Self::new(conditioner, conditioner)
    }

    /// Conditions a raw axis value with the curve owning its sign.
    ///
    /// Zero routes to the positive curve. With a nonzero deadband either
    /// side would return zero anyway; with a zero deadband the factored-out
    /// sign still forces a zero output.
    #[must_use]
    #[inline]
    pub fn condition(&self, input_value: f64) -> f64 {
        if input_value < 0.0 {
            self.negative.condition(input_value)
        } else {
            self.positive.condition(input_value)
        }
    }
}

impl From<NonUniformConditioner> for AxisConditioner {
    fn from(conditioner: NonUniformConditioner) -> Self {
        Self::NonUniform(conditioner)
    }
}

impl Eq for NonUniformConditioner {}

impl Hash for NonUniformConditioner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.negative.hash(state);
        self.positive.hash(state);
    }
}
