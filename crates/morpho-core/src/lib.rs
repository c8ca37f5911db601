//! # morphoconv Core Library
//!
//! Converts a multi-subject Morphologika landmark file into one landmark file per
//! subject.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that parsing, validation and
//! persistence can be tested in isolation.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`InputDocument`,
//!   `HeaderInfo`, `SubjectRecord`) and the file formats: the Morphologika reader
//!   with its section scanner, plus the FCSV and CSV landmark writers.
//!
//! - **[`engine`]: The Logic Core.** Validation of declared counts against the
//!   extracted data, the persistence collaborator traits (`PointStore`,
//!   `PointCollection`) and the record emitter that drives them.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the
//!   linear Scan → Extract → Validate → Emit pipeline.

pub mod core;
pub mod engine;
pub mod workflows;
