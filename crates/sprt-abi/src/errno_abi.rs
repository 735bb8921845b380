//! ABI layer for `<errno.h>`.
//!
//! The runtime does not keep an errno of its own: `__sprt___errno_location`
//! hands out the platform's thread-local slot, so an error set by a native
//! call made on the runtime's behalf is the error the caller observes.

use core::ffi::c_int;

use crate::macros::sprt_fn;
use crate::native;

sprt_fn! {
    /// Address of the calling thread's `errno`.
    fn __errno_location() -> *mut c_int {
        native::errno::location()
    }
}

/// Store `value` into the calling thread's `errno`.
pub fn set_errno(value: c_int) {
    // SAFETY: the native accessor always returns the current thread's slot.
    unsafe { *native::errno::location() = value };
}

/// Read the calling thread's `errno`.
pub fn get_errno() -> c_int {
    // SAFETY: as in `set_errno`.
    unsafe { *native::errno::location() }
}
