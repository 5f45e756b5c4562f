//! Products domain module.
//!
//! This crate contains the `Product` entity: an assembly tracked like a part,
//! additionally holding an ordered collection of associated parts. Pure
//! domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::Product;
