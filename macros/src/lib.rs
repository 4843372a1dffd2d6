//! Macros for the `axis-conditioning` crate

extern crate proc_macro;

mod typetag;
mod utils;

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemImpl};

/// An attribute macro for `impl CustomAxisConditioner for T` blocks,
/// wiring the implementing type into tagged serialization.
///
/// The annotated impl is emitted unchanged, along with:
///
/// - a `TypeTag` impl whose tag is the type's name,
///   used as the map key when serializing the trait object;
/// - a `RegisterTypeTag` impl that registers a deserializer for that tag,
///   invoked through `register_axis_conditioner::<T>()`.
#[proc_macro_attribute]
pub fn serde_typetag(_args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ItemImpl);
    typetag::expand_serde_typetag(&input).into()
}
