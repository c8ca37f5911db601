//! Data structures shared by the reader, the validator and the emitter.
//!
//! - [`document`] - The raw input line buffer and the header information scanned
//!   out of it
//! - [`landmark`] - Landmark points and named per-subject records

pub mod document;
pub mod landmark;
