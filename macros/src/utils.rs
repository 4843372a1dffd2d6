use proc_macro2::{Ident, Span, TokenStream};
use proc_macro_crate::{crate_name, FoundCrate};
use quote::quote;

pub fn crate_path() -> TokenStream {
    if let Ok(found_crate) = crate_name("axis-conditioning") {
        // The crate was found in the Cargo.toml
        match found_crate {
            FoundCrate::Itself => quote!(axis_conditioning),
            FoundCrate::Name(name) => {
                let ident = Ident::new(&name, Span::call_site());
                quote!(#ident)
            }
        }
    } else {
        // The crate was not found in the Cargo.toml,
        // so we assume that we are in the owning crate itself
        //
        // In order for this to play nicely with unit tests within the crate itself,
        // `use crate as axis_conditioning` at the top of each test module
        //
        // Note that doc tests, integration tests and examples want the full standard import,
        // as they are evaluated as if they were external
        quote!(axis_conditioning)
    }
}
