//! Native declarations.
//!
//! Everything the runtime calls in the platform C library is reached through
//! this module: `libc` re-exports where the crate carries the symbol, local
//! `extern "C"` blocks where it does not. Local declarations use the
//! runtime's own layouts from `sprt_core::abi`, which match the platform
//! byte for byte.
//!
//! With `build-runtime` the compatibility headers re-export these modules,
//! so code built as part of the runtime sees the platform's declarations.

#![allow(non_camel_case_types)]

pub mod errno;

#[cfg(unix)]
pub mod dirent;
#[cfg(unix)]
pub mod dlfcn;
#[cfg(unix)]
pub mod fcntl;
#[cfg(unix)]
pub mod fenv;
#[cfg(unix)]
pub mod locale;
#[cfg(unix)]
pub mod nl_types;
#[cfg(unix)]
pub mod sched;
#[cfg(unix)]
pub mod string;
#[cfg(unix)]
pub mod sys_mman;
#[cfg(unix)]
pub mod sys_stat;
#[cfg(unix)]
pub mod sys_time;
#[cfg(unix)]
pub mod time;
#[cfg(unix)]
pub mod types;
#[cfg(unix)]
pub mod unistd;
#[cfg(unix)]
pub mod utime;
