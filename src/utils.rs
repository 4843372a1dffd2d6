//! Small utilities shared across the crate

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A wrapper for a `f64` value that implements [`Ord`], [`Eq`], and [`Hash`].
///
/// IEEE 754 leaves NaN unordered and unequal to itself, so a raw float
/// implements none of those traits. Wrapping a value breaks conformance
/// with the standard: all NaNs sort below every other number, compare equal
/// to each other, and hash alike, while `-0.0` and `0.0` compare and hash
/// as a single value.
///
/// ```rust
/// use axis_conditioning::utils::FloatOrd;
///
/// assert_eq!(FloatOrd(f64::NAN), FloatOrd(f64::NAN));
/// assert_eq!(FloatOrd(-0.0), FloatOrd(0.0));
/// assert!(FloatOrd(f64::NAN) < FloatOrd(f64::NEG_INFINITY));
/// ```
#[derive(Debug, Copy, Clone)]
pub struct FloatOrd(pub f64);

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or_else(|| {
            if self.0.is_nan() && !other.0.is_nan() {
                Ordering::Less
            } else if !self.0.is_nan() && other.0.is_nan() {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
    }
}

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl Hash for FloatOrd {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.0.is_nan() {
            // All NaN representations hash as one value, matching `cmp`.
            f64::NAN.to_bits().hash(state);
        } else if self.0 == 0.0 {
            // `-0.0 == 0.0`, so they must hash alike.
            0.0f64.to_bits().hash(state);
        } else {
            self.0.to_bits().hash(state);
        }
    }
}
