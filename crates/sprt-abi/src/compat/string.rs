//! `<string.h>` memory primitives.
//!
//! In consuming mode these are the internal surface's versions, which are
//! compiler intrinsics under `builtin-inlines` and the exported
//! `__sprt_mem*` functions otherwise.

#[cfg(all(feature = "build-runtime", unix))]
pub use crate::native::string::*;

#[cfg(not(all(feature = "build-runtime", unix)))]
pub use crate::sprt::{memchr, memcmp, memcpy, memmove, memset, strlen};
