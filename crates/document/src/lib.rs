//! # ridemap-document
//!
//! Generic tree documents (null/bool/int/float/string/array/map) and a
//! grammar-enforcing builder for constructing them.
//!
//! The builder is the point of this crate: it validates every operation
//! against its current state, so the only outcomes are a protocol-violation
//! error or a well-formed tree. Printing and parsing are delegated to
//! `serde_json` through lossless [`Node`] conversions.

pub mod builder;
pub mod node;

pub use builder::{Builder, BuilderError, Scalar};
pub use node::Node;
