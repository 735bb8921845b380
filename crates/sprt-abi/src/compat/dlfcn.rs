//! `<dlfcn.h>`

header!(dlfcn);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "dlfcn", feature = "define-unavailable-functions"))]
    use core::ffi::{c_char, c_int, c_void};

    pub use crate::sprt::{
        Dl_info, RTLD_DEFAULT, RTLD_GLOBAL, RTLD_LAZY, RTLD_LOCAL, RTLD_NEXT, RTLD_NODELETE,
        RTLD_NOLOAD, RTLD_NOW,
    };

    forward! { "dlfcn" =>
        fn dlopen(filename: *const c_char, flag: c_int) -> *mut c_void;
        fn dlsym(handle: *mut c_void, symbol: *const c_char) -> *mut c_void;
        fn dlclose(handle: *mut c_void) -> c_int;
        fn dlerror() -> *mut c_char;
        fn dladdr(addr: *const c_void, info: *mut Dl_info) -> c_int;
    }
}
