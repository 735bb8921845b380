//! `<errno.h>`

#[cfg(all(feature = "build-runtime", unix))]
pub use crate::native::errno::location as __errno_location;

#[cfg(not(all(feature = "build-runtime", unix)))]
pub use crate::sprt::__errno_location;

pub use crate::sprt::{EINVAL, ENOSYS};

/// Current thread's `errno`.
#[inline(always)]
#[must_use]
pub fn errno() -> core::ffi::c_int {
    crate::errno_abi::get_errno()
}

/// Set the current thread's `errno`.
#[inline(always)]
pub fn set_errno(value: core::ffi::c_int) {
    crate::errno_abi::set_errno(value);
}
