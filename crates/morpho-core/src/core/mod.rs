//! # Core Module
//!
//! Data models and file formats for landmark conversion.
//!
//! - **Landmark Representation** ([`models`]) - Input documents, parsed header
//!   information, landmark points and per-subject records
//! - **File I/O** ([`io`]) - The Morphologika reader and the per-subject output
//!   formats

pub mod io;
pub mod models;
