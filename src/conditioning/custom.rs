use std::fmt::Debug;
use std::sync::RwLock;

use dyn_clone::DynClone;
use dyn_eq::DynEq;
use dyn_hash::DynHash;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_flexitos::ser::require_erased_serialize_impl;
use serde_flexitos::{serialize_trait_object, Registry};

use crate::conditioning::AxisConditioner;
use crate::typetag::{InfallibleMapRegistry, RegisterTypeTag, TypeTag};

/// A trait for creating custom conditioners that handle single-axis input
/// values, accepting a `f64` input and producing a `f64` output.
///
/// # Examples
///
/// ```rust
/// use std::hash::{Hash, Hasher};
/// use serde::{Deserialize, Serialize};
/// use axis_conditioning::prelude::*;
/// use axis_conditioning::utils::FloatOrd;
///
/// /// Doubles the input, takes the absolute value,
/// /// and discards results that meet the specified condition.
/// // If your conditioner includes fields not implementing Eq and Hash,
/// // implementation is necessary as shown below.
/// // Otherwise, you can derive Eq and Hash directly.
/// #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// pub struct DoubleAbsoluteValueThenRejected(pub f64);
///
/// // Add this attribute for ensuring proper serialization and deserialization.
/// #[serde_typetag]
/// impl CustomAxisConditioner for DoubleAbsoluteValueThenRejected {
///     fn condition(&self, input_value: f64) -> f64 {
///         // Implement the logic just like you would in a normal function.
///
///         // You can use other conditioners within this function.
///         let value = AxisConditioner::Sensitivity(2.0).condition(input_value);
///
///         let value = value.abs();
///         if value == self.0 {
///             0.0
///         } else {
///             value
///         }
///     }
/// }
///
/// // Unfortunately, manual implementation is required due to the float field.
/// impl Eq for DoubleAbsoluteValueThenRejected {}
/// impl Hash for DoubleAbsoluteValueThenRejected {
///     fn hash<H: Hasher>(&self, state: &mut H) {
///         // Encapsulate the float field for hashing.
///         FloatOrd(self.0).hash(state);
///     }
/// }
///
/// // Remember to register your conditioner - it will ensure everything works smoothly!
/// register_axis_conditioner::<DoubleAbsoluteValueThenRejected>();
///
/// // Now you can use it!
/// let conditioner = DoubleAbsoluteValueThenRejected(4.0);
///
/// // Rejected!
/// assert_eq!(conditioner.condition(2.0), 0.0);
/// assert_eq!(conditioner.condition(-2.0), 0.0);
///
/// // Others are just doubled absolute value.
/// assert_eq!(conditioner.condition(6.0), 12.0);
/// assert_eq!(conditioner.condition(0.0), 0.0);
/// assert_eq!(conditioner.condition(-4.0), 8.0);
///
/// // The ways to create an AxisConditioner.
/// let axis_conditioner = AxisConditioner::Custom(Box::new(conditioner));
/// assert_eq!(axis_conditioner, AxisConditioner::from(conditioner));
/// ```
pub trait CustomAxisConditioner:
    Send + Sync + Debug + DynClone + DynEq + DynHash + TypeTag + erased_serde::Serialize
{
    /// Computes the result by conditioning the `input_value`.
    fn condition(&self, input_value: f64) -> f64;
}

impl<C: CustomAxisConditioner> From<C> for AxisConditioner {
    fn from(conditioner: C) -> Self {
        Self::Custom(Box::new(conditioner))
    }
}

dyn_clone::clone_trait_object!(CustomAxisConditioner);
dyn_eq::eq_trait_object!(CustomAxisConditioner);
dyn_hash::hash_trait_object!(CustomAxisConditioner);

impl Serialize for dyn CustomAxisConditioner + '_ {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Check that `CustomAxisConditioner` has `erased_serde::Serialize` as a super trait,
        // preventing infinite recursion at runtime.
        const fn __check_erased_serialize_super_trait<T: ?Sized + CustomAxisConditioner>() {
            require_erased_serialize_impl::<T>();
        }
        serialize_trait_object(serializer, self.type_tag(), self)
    }
}

impl<'de> Deserialize<'de> for Box<dyn CustomAxisConditioner> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let registry = CONDITIONER_REGISTRY.read().unwrap();
        registry.deserialize_trait_object(deserializer)
    }
}

/// Registry of deserializers for [`CustomAxisConditioner`]s.
static CONDITIONER_REGISTRY: Lazy<RwLock<InfallibleMapRegistry<dyn CustomAxisConditioner>>> =
    Lazy::new(|| RwLock::new(InfallibleMapRegistry::new("CustomAxisConditioner")));

/// Registers the specified [`CustomAxisConditioner`] for deserialization.
///
/// Call this once per custom conditioner type before deserializing values
/// containing it. Repeat registrations are tolerated.
pub fn register_axis_conditioner<'de, T>()
where
    T: RegisterTypeTag<'de, dyn CustomAxisConditioner>,
{
    let mut registry = CONDITIONER_REGISTRY.write().unwrap();
    T::register_typetag(&mut registry);
}
