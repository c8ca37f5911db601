//! # Engine Module
//!
//! The stateful part of a conversion: checking the scanned input for integrity,
//! and handing each subject to a persistence collaborator.
//!
//! - **Configuration** ([`config`]) - Output directory and format, built with
//!   [`config::ConversionConfigBuilder`]
//! - **Validation** ([`validation`]) - Declared sizes against extracted data,
//!   coordinate parsing and subject naming, all before anything is written
//! - **Persistence** ([`store`]) - The [`store::PointStore`] and
//!   [`store::PointCollection`] collaborator traits and the file-backed store
//! - **Emission** ([`emitter`]) - Groups validated points per subject and saves
//!   them in order
//! - **Errors** ([`error`]) - [`error::ConvertError`], the single error type
//!   returned by the workflows

pub mod config;
pub mod emitter;
pub mod error;
pub mod store;
pub mod validation;
