//! The internal surface.
//!
//! One flat namespace holding every runtime type, constant and function,
//! the Rust counterpart of the prefixed `__sprt_*` symbol set. Compatibility
//! headers alias into this module.

pub use sprt_core::abi::*;
pub use sprt_core::errno::*;
pub use sprt_core::limits::*;
pub use sprt_core::time::{
    timeradd, timerclear, timercmp, timerisset, timersub, timespec_to_timeval,
    timeval_to_timespec,
};

#[cfg(any(sprt_have = "dirent", feature = "define-unavailable-functions"))]
pub use crate::dirent_abi::*;
#[cfg(any(sprt_have = "dlfcn", feature = "define-unavailable-functions"))]
pub use crate::dlfcn_abi::*;
pub use crate::errno_abi::*;
#[cfg(any(sprt_have = "fcntl", feature = "define-unavailable-functions"))]
pub use crate::fcntl_abi::*;
#[cfg(any(sprt_have = "fenv", feature = "define-unavailable-functions"))]
pub use crate::fenv_abi::*;
#[cfg(any(sprt_have = "locale", sprt_have = "xlocale", feature = "define-unavailable-functions"))]
pub use crate::locale_abi::*;
#[cfg(any(sprt_have = "mman", feature = "define-unavailable-functions"))]
pub use crate::mman_abi::*;
#[cfg(any(sprt_have = "nl_types", feature = "define-unavailable-functions"))]
pub use crate::nl_types_abi::*;
#[cfg(any(
    sprt_have = "sched_param",
    sprt_have = "sched_priority_range",
    sprt_have = "sched_rr_interval",
    sprt_have = "sched_yield",
    feature = "define-unavailable-functions",
))]
pub use crate::sched_abi::*;
#[cfg(any(
    sprt_have = "mkfifoat",
    sprt_have = "stat",
    sprt_have = "utimensat",
    feature = "define-unavailable-functions",
))]
pub use crate::stat_abi::*;
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
pub use crate::sys_time_abi::*;
#[cfg(any(
    sprt_have = "calendar_time",
    sprt_have = "clock",
    feature = "define-unavailable-functions",
))]
pub use crate::time_abi::*;
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
pub use crate::unistd_abi::*;
#[cfg(any(sprt_have = "utime", feature = "define-unavailable-functions"))]
pub use crate::utime_abi::*;

#[cfg(feature = "builtin-inlines")]
pub use crate::string_abi::builtin::{memchr, memcmp, memcpy, memmove, memset, strlen};
#[cfg(not(feature = "builtin-inlines"))]
pub use crate::string_abi::{memchr, memcmp, memcpy, memmove, memset, strlen};

/// `FE_DFL_ENV`.
#[allow(non_snake_case)]
#[cfg(any(sprt_have = "fenv", feature = "define-unavailable-functions"))]
#[inline(always)]
#[must_use]
pub fn FE_DFL_ENV() -> *const fenv_t {
    // SAFETY: takes no arguments and only yields an address.
    unsafe { fe_dfl_env() }
}
