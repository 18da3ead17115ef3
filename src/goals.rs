//! Goal constructors beyond the primitives in [`crate::core::goal`].

pub mod combinators;
pub mod sequence;
pub mod special;
