//! `<limits.h>`, `<stdint.h>` and `<float.h>`.
//!
//! Values are computed for the target at compile time and are the same in
//! both build modes.

pub use sprt_core::limits::*;
pub use crate::sprt::{NAME_MAX, PATH_MAX};
