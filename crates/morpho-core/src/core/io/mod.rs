//! Reading Morphologika files and writing per-subject landmark files.
//!
//! The reader lives in [`morphologika`] and is split into the header scanner and
//! the section extractor. Output formats implement [`traits::LandmarkFile`] and are
//! selected at runtime through [`format::OutputFormat`].

pub mod delimited;
pub mod fcsv;
pub mod format;
pub mod morphologika;
pub mod traits;
