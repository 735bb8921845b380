// Exports take raw pointers from C callers and forward them to the platform;
// the contract is the C one, so per-function safety docs would only repeat it.
#![allow(clippy::missing_safety_doc)]
//! # sprt-abi
//!
//! The callable surface of the sprt libc layer.
//!
//! Every function here is exported under an internal `__sprt_<name>` link
//! name and forwards to one native primitive, copying structures between
//! the runtime's layouts (from `sprt-core`) and the platform's.
//!
//! ```text
//! consumer -> compat::<header> -> sprt (__sprt_*) -> native C library
//! ```
//!
//! - [`sprt`] is the internal surface: types, constants and functions.
//! - [`compat`] holds one module per standard header. In the default
//!   consuming mode they alias into [`sprt`]; with `build-runtime` they
//!   re-export the platform's own declarations instead.
//!
//! Functions a platform lacks are left out unless
//! `define-unavailable-functions` is enabled, in which case they fail with
//! `ENOSYS`.

mod macros;
mod util;

pub mod native;

pub mod errno_abi;
pub mod string_abi;

// Each module exists only where it declares at least one function.
#[cfg(any(sprt_have = "dirent", feature = "define-unavailable-functions"))]
pub mod dirent_abi;
#[cfg(any(sprt_have = "dlfcn", feature = "define-unavailable-functions"))]
pub mod dlfcn_abi;
#[cfg(any(sprt_have = "fcntl", feature = "define-unavailable-functions"))]
pub mod fcntl_abi;
#[cfg(any(sprt_have = "fenv", feature = "define-unavailable-functions"))]
pub mod fenv_abi;
#[cfg(any(sprt_have = "locale", sprt_have = "xlocale", feature = "define-unavailable-functions"))]
pub mod locale_abi;
#[cfg(any(sprt_have = "mman", feature = "define-unavailable-functions"))]
pub mod mman_abi;
#[cfg(any(sprt_have = "nl_types", feature = "define-unavailable-functions"))]
pub mod nl_types_abi;
#[cfg(any(
    sprt_have = "sched_param",
    sprt_have = "sched_priority_range",
    sprt_have = "sched_rr_interval",
    sprt_have = "sched_yield",
    feature = "define-unavailable-functions",
))]
pub mod sched_abi;
#[cfg(any(
    sprt_have = "mkfifoat",
    sprt_have = "stat",
    sprt_have = "utimensat",
    feature = "define-unavailable-functions",
))]
pub mod stat_abi;
#[cfg(any(
    sprt_have = "adjtime",
    sprt_have = "futimes",
    sprt_have = "futimesat",
    sprt_have = "itimer",
    sprt_have = "lutimes",
    sprt_have = "timeofday",
    sprt_have = "utimes",
    feature = "define-unavailable-functions",
))]
pub mod sys_time_abi;
#[cfg(any(
    sprt_have = "calendar_time",
    sprt_have = "clock",
    feature = "define-unavailable-functions",
))]
pub mod time_abi;
#[cfg(any(
    sprt_have = "dup",
    sprt_have = "dup3",
    sprt_have = "file_io",
    sprt_have = "getppid",
    sprt_have = "nice",
    sprt_have = "path_ops",
    sprt_have = "process_ids",
    sprt_have = "setlogin",
    sprt_have = "sleep",
    sprt_have = "sysconf",
    feature = "define-unavailable-functions",
))]
pub mod unistd_abi;
#[cfg(any(sprt_have = "utime", feature = "define-unavailable-functions"))]
pub mod utime_abi;

pub mod compat;
pub mod sprt;

pub use util::scan_c_string;

/// The mode this crate was compiled in.
pub const BUILD_MODE: sprt_core::BuildMode = sprt_core::RuntimeConfig::CURRENT.build_mode;
