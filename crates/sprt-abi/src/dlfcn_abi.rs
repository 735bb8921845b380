//! ABI layer for `<dlfcn.h>`.
//!
//! Handles and symbol addresses are opaque pointers and pass through
//! unchanged. `Dl_info` has the same four pointer members everywhere, so
//! `dladdr` casts rather than copies.

use core::ffi::{c_char, c_int, c_void};

use sprt_core::abi::Dl_info;

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(sprt_have = "dlfcn")]
use crate::native::dlfcn as native;

sprt_fn! {
    #[cfg(sprt_have = "dlfcn")]
    fn dlopen(filename: *const c_char, flag: c_int) -> *mut c_void {
        native::dlopen(filename, flag)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dlfcn")]
    fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void {
        native::dlsym(handle, symbol)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dlfcn")]
    fn dlclose(handle: *mut c_void) -> c_int {
        native::dlclose(handle)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dlfcn")]
    fn dlerror() -> *mut c_char {
        native::dlerror()
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dlfcn")]
    fn dladdr(addr: *const c_void, info: *mut Dl_info) -> c_int {
        native::dladdr(addr, info.cast::<native::Dl_info>())
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dlfcn"))]
    fn dlopen(filename: *const c_char, flag: c_int) -> *mut c_void = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dlfcn"))]
    fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dlfcn"))]
    fn dlclose(handle: *mut c_void) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dlfcn"))]
    fn dlerror() -> *mut c_char = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dlfcn"))]
    fn dladdr(addr: *const c_void, info: *mut Dl_info) -> c_int = 0;
}

#[cfg(all(test, sprt_have = "dlfcn"))]
mod tests {
    use super::*;
    use core::ffi::CStr;

    #[test]
    fn default_handle_resolves_libc_symbol() {
        let sym = unsafe { dlsym(sprt_core::abi::RTLD_DEFAULT, c"strlen".as_ptr()) };
        assert!(!sym.is_null());
    }

    #[test]
    fn dladdr_names_the_object() {
        let sym = unsafe { dlsym(sprt_core::abi::RTLD_DEFAULT, c"strlen".as_ptr()) };
        let mut info = Dl_info {
            dli_fname: core::ptr::null(),
            dli_fbase: core::ptr::null_mut(),
            dli_sname: core::ptr::null(),
            dli_saddr: core::ptr::null_mut(),
        };
        let rc = unsafe { dladdr(sym, &mut info) };
        assert_ne!(rc, 0);
        assert!(!info.dli_fname.is_null());
        assert!(!info.dli_fbase.is_null());
    }

    #[test]
    fn missing_library_sets_dlerror() {
        let handle = unsafe { dlopen(c"libsprt-does-not-exist.so".as_ptr(), sprt_core::abi::RTLD_NOW) };
        assert!(handle.is_null());
        let msg = unsafe { dlerror() };
        assert!(!msg.is_null());
        let text = unsafe { CStr::from_ptr(msg) }.to_string_lossy();
        assert!(!text.is_empty());
    }
}
