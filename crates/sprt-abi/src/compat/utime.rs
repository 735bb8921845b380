//! `<utime.h>`

header!(utime);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "utime", feature = "define-unavailable-functions"))]
    use core::ffi::{c_char, c_int};

    pub use crate::sprt::utimbuf;

    forward! { "utime" =>
        fn utime(path: *const c_char, times: *const utimbuf) -> c_int;
    }
}
