//! `<string.h>` memory primitives.

pub use libc::{memchr, memcmp, memcpy, memmove, memset, strlen};
