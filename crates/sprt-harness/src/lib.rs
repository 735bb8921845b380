//! Verification tooling for the sprt libc layer.
//!
//! This crate provides:
//! - Layout check: compare every runtime structure with the platform's
//! - Symbol report: which functions a leaf declares, under which names
//! - Limits report: integer and floating limit tables for any leaf
//! - ABI fingerprint: a stable digest of the current leaf's layouts
//! - Structured JSONL logging with artifact indexes

#![forbid(unsafe_code)]

pub mod error;
pub mod fingerprint;
pub mod layout;
pub mod limits_report;
pub mod layout_check;
pub mod structured_log;
pub mod symbols;

pub use error::{HarnessError, Result};
pub use fingerprint::Fingerprint;
pub use layout::{FieldLayout, TypeLayout};
pub use layout_check::{Mismatch, MismatchKind, LayoutReport};
pub use symbols::SymbolReport;
