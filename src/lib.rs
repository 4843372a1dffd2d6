#![forbid(missing_docs)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod conditioning;
pub mod math;
pub mod typetag;
pub mod utils;

// Importing the attribute macro
pub use axis_conditioning_macros::serde_typetag;

/// Everything you need to get started
pub mod prelude {
    pub use crate::conditioning::*;
    pub use crate::math::{fast_pow, sign};
    pub use crate::serde_typetag;
}
