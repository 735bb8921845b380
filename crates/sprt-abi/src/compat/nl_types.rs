//! `<nl_types.h>`

header!(nl_types);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "nl_types", feature = "define-unavailable-functions"))]
    use core::ffi::{c_char, c_int};

    pub use crate::sprt::{NL_CAT_LOCALE, NL_SETD, nl_catd};

    forward! { "nl_types" =>
        fn catopen(name: *const c_char, oflag: c_int) -> nl_catd;
        fn catgets(catd: nl_catd, set_id: c_int, msg_id: c_int, s: *const c_char) -> *mut c_char;
        fn catclose(catd: nl_catd) -> c_int;
    }
}
