//! ABI fingerprint.
//!
//! A SHA-256 digest over the canonical JSON of the current leaf's layouts,
//! the target name and the integer widths. Two builds with the same
//! fingerprint exchange identical structures with native code.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sprt_core::Target;
use sprt_core::limits::int::{IntKind, descriptor};

use crate::layout::{TypeLayout, runtime_layouts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub target: String,
    pub types: usize,
    pub sha256: String,
}

#[derive(Serialize)]
struct Canonical<'a> {
    target: String,
    int_bits: Vec<(&'static str, u32)>,
    layouts: &'a [TypeLayout],
}

/// Lowercase hex encoding.
#[must_use]
pub fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex_lower(&Sha256::digest(bytes))
}

/// Fingerprint an explicit layout set.
pub fn fingerprint_of(target: Target, layouts: &[TypeLayout]) -> Result<Fingerprint, serde_json::Error> {
    let canonical = Canonical {
        target: target.to_string(),
        int_bits: IntKind::ALL
            .iter()
            .map(|&k| (k.c_name(), descriptor(k).bits))
            .collect(),
        layouts,
    };
    let bytes = serde_json::to_vec(&canonical)?;
    Ok(Fingerprint {
        target: canonical.target,
        types: layouts.len(),
        sha256: sha256_hex(&bytes),
    })
}

/// Fingerprint the leaf this harness was compiled for.
pub fn current() -> Result<Fingerprint, serde_json::Error> {
    fingerprint_of(Target::CURRENT, &runtime_layouts())
}
