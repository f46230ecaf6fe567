//! Core definitions (error types and verification helpers), relied upon by all
//! bitrange-* crates.

pub mod error;
pub mod result;

pub use result::Result;
