//! Iograft compiler: dependency ordering, codec IR construction, and io-ts
//! emission.
//!
//! The pipeline, leaves first:
//! - `graph` - dependency ordering of schema type definitions
//! - `model` - schema definitions to codec IR
//! - `selection` - operation selection trees to minimal per-operation IR
//! - `variables` - operation variable declarations to input-object IR
//! - `emit` - codec IR to io-ts literal definitions
//! - `generate` - end-to-end facade
//!
//! Every pass is a pure function over immutable trees; the schema IR is built
//! once and shared read-only by every operation compiled against it.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod emit;
pub mod error;
pub mod generate;
pub mod graph;
pub mod model;
pub mod selection;
pub mod variables;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use error::{CompileError, Result};
pub use generate::generate;
