//! # Workflows Module
//!
//! Top-level entry points that run a complete conversion.
//!
//! - **Conversion** ([`convert`]) - Scan → Extract → Validate → Emit, writing one
//!   file per subject or handing each subject to a caller-provided store.
//! - **Inspection** ([`inspect`]) - The same checks without writing anything,
//!   returning what was found and the first problem, if any.

pub mod convert;
pub mod inspect;
