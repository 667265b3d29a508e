//! Core data structures for Iograft.
//!
//! Two layers:
//! - `ast` - the already-parsed input surface: schema type definitions and
//!   operation documents, as an external parser hands them over
//! - `codec` - the closed codec IR every compiler pass produces and consumes

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod codec;


pub use codec::{CodecType, FieldMap, Primitive};
