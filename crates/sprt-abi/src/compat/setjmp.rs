//! `<setjmp.h>` buffer types.
//!
//! Only the layouts are provided. `setjmp` returns twice, which Rust cannot
//! express, so callers that need it must reach the C function directly.

pub use crate::sprt::jmp_buf;

#[cfg(not(windows))]
pub use crate::sprt::sigjmp_buf;
