//! Conditioners for analog axis values
//!
//! This module turns raw axis samples into conditioned control values.
//! The foundation is one enum:
//!
//! - [`AxisConditioner`]: handles `f64` values for a single axis.
//!
//! Need something specific? You can also create your own conditioners by
//! implementing [`CustomAxisConditioner`] for specific needs.
//!
//! # Built-in conditioners
//!
//! ## Conditioning pipelines
//!
//! Pipelines run input values sequentially through a sequence of
//! conditioners.
//!
//! To create a pipeline, you can use [`AxisConditioner::with_conditioner`]
//! or [`FromIterator<AxisConditioner>::from_iter`] methods.
//!
//! ## Inversion
//!
//! Inversion flips the sign of input values, resulting in a directional
//! reversal of control. For example, positive values become negative,
//! and up becomes down.
//!
//! - [`AxisConditioner::Inverted`]
//!
//! ## Sensitivity
//!
//! Sensitivity scales input values with a specified multiplier
//! (doubling, halving, etc.), allowing fine-tuning the responsiveness
//! of controls.
//!
//! - [`AxisConditioner::Sensitivity`]
//!
//! ## Response curves
//!
//! Response curves suppress noise around the rest position with a deadband,
//! shape the remaining travel with a power curve, and remap the result onto
//! an arbitrary output interval.
//!
//! - [`UniformConditioner`]: one curve, mirrored about zero,
//!   implemented [`Into<AxisConditioner>`].
//! - [`NonUniformConditioner`]: independent curves per sign of travel,
//!   implemented [`Into<AxisConditioner>`].

pub use self::curve::*;
pub use self::custom::*;

mod curve;
mod custom;

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::utils::FloatOrd;

/// A conditioner for single-axis input values,
/// accepting a `f64` input and producing a `f64` output.
#[must_use]
#[non_exhaustive]
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AxisConditioner {
    /// No conditioning is applied.
    #[default]
    None,

    /// Flips the sign of input values, resulting in a directional reversal of control.
    ///
    /// ```rust
    /// use axis_conditioning::prelude::*;
    ///
    /// assert_eq!(AxisConditioner::Inverted.condition(2.5), -2.5);
    /// assert_eq!(AxisConditioner::Inverted.condition(-2.5), 2.5);
    /// ```
    Inverted,

    /// Scales input values using a specified multiplier to fine-tune the responsiveness of control.
    ///
    /// ```rust
    /// use axis_conditioning::prelude::*;
    ///
    /// // Doubled!
    /// assert_eq!(AxisConditioner::Sensitivity(2.0).condition(2.0), 4.0);
    ///
    /// // Halved!
    /// assert_eq!(AxisConditioner::Sensitivity(0.5).condition(2.0), 1.0);
    ///
    /// // Negated and halved!
    /// assert_eq!(AxisConditioner::Sensitivity(-0.5).condition(2.0), -1.0);
    /// ```
    Sensitivity(f64),

    /// A wrapper around [`UniformConditioner`] to represent a response curve
    /// mirrored about zero.
    Uniform(UniformConditioner),

    /// A wrapper around [`NonUniformConditioner`] to represent independent
    /// response curves per sign of travel.
    NonUniform(NonUniformConditioner),

    /// Conditions input values sequentially through a sequence of [`AxisConditioner`]s.
    ///
    /// For a straightforward creation of a [`AxisConditioner::Pipeline`],
    /// you can use [`AxisConditioner::with_conditioner`] or
    /// [`FromIterator<AxisConditioner>::from_iter`] methods.
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use axis_conditioning::prelude::*;
    ///
    /// let expected = AxisConditioner::Pipeline(vec![
    ///     Arc::new(AxisConditioner::Inverted),
    ///     Arc::new(AxisConditioner::Sensitivity(2.0)),
    /// ]);
    ///
    /// assert_eq!(
    ///     expected,
    ///     AxisConditioner::Inverted.with_conditioner(AxisConditioner::Sensitivity(2.0))
    /// );
    ///
    /// assert_eq!(
    ///     expected,
    ///     AxisConditioner::from_iter([
    ///         AxisConditioner::Inverted,
    ///         AxisConditioner::Sensitivity(2.0),
    ///     ])
    /// );
    /// ```
    Pipeline(Vec<Arc<AxisConditioner>>),

    /// A user-defined conditioner that implements [`CustomAxisConditioner`].
    Custom(Box<dyn CustomAxisConditioner>),
}

impl AxisConditioner {
    /// Computes the result by conditioning the `input_value`.
    #[must_use]
    #[inline]
    pub fn condition(&self, input_value: f64) -> f64 {
        match self {
            Self::None => input_value,
            Self::Inverted => -input_value,
            Self::Sensitivity(sensitivity) => sensitivity * input_value,
            Self::Uniform(conditioner) => conditioner.condition(input_value),
            Self::NonUniform(conditioner) => conditioner.condition(input_value),
            Self::Pipeline(sequence) => sequence
                .iter()
                .fold(input_value, |value, next| next.condition(value)),
            Self::Custom(conditioner) => conditioner.condition(input_value),
        }
    }

    /// Appends the given `next_conditioner` as the next conditioning step.
    ///
    /// - If either conditioner is [`AxisConditioner::None`], returns the other.
    /// - If the current conditioner is [`AxisConditioner::Pipeline`], pushes the other into it.
    /// - If the given conditioner is [`AxisConditioner::Pipeline`], prepends the current one into it.
    /// - If both conditioners are [`AxisConditioner::Pipeline`], merges the two pipelines.
    /// - If neither conditioner is [`AxisConditioner::None`] nor a pipeline,
    ///     creates a new pipeline containing them.
    #[inline]
    pub fn with_conditioner(self, next_conditioner: impl Into<AxisConditioner>) -> Self {
        let other = next_conditioner.into();
        match (self.clone(), other.clone()) {
            (_, Self::None) => self,
            (Self::None, _) => other,
            (Self::Pipeline(mut self_seq), Self::Pipeline(mut next_seq)) => {
                self_seq.append(&mut next_seq);
                Self::Pipeline(self_seq)
            }
            (Self::Pipeline(mut self_seq), _) => {
                self_seq.push(Arc::new(other));
                Self::Pipeline(self_seq)
            }
            (_, Self::Pipeline(mut next_seq)) => {
                next_seq.insert(0, Arc::new(self));
                Self::Pipeline(next_seq)
            }
            (_, _) => Self::Pipeline(vec![Arc::new(self), Arc::new(other)]),
        }
    }
}

impl FromIterator<AxisConditioner> for AxisConditioner {
    fn from_iter<T: IntoIterator<Item = AxisConditioner>>(iter: T) -> Self {
        Self::Pipeline(iter.into_iter().map(Arc::new).collect())
    }
}

impl Eq for AxisConditioner {}

impl Hash for AxisConditioner {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::None => {}
            Self::Inverted => {}
            Self::Sensitivity(sensitivity) => FloatOrd(*sensitivity).hash(state),
            Self::Uniform(conditioner) => conditioner.hash(state),
            Self::NonUniform(conditioner) => conditioner.hash(state),
            Self::Pipeline(sequence) => sequence.hash(state),
            Self::Custom(conditioner) => conditioner.hash(state),
        }
    }
}
