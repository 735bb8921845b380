//! ABI layer for `<nl_types.h>`.

use core::ffi::{c_char, c_int};

use sprt_core::abi::nl_catd;

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(sprt_have = "nl_types")]
use crate::native::nl_types as native;

sprt_fn! {
    #[cfg(sprt_have = "nl_types")]
    fn catopen(name: *const c_char, oflag: c_int) -> nl_catd {
        native::catopen(name, oflag)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "nl_types")]
    fn catgets(catd: nl_catd, set_id: c_int, msg_id: c_int, s: *const c_char) -> *mut c_char {
        native::catgets(catd, set_id, msg_id, s)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "nl_types")]
    fn catclose(catd: nl_catd) -> c_int {
        native::catclose(catd)
    }
}

// `(nl_catd)-1` is the documented failure value.
sprt_unavailable! {
    #[cfg(not(sprt_have = "nl_types"))]
    fn catopen(name: *const c_char, oflag: c_int) -> nl_catd = core::ptr::without_provenance_mut(usize::MAX);
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "nl_types"))]
    fn catgets(catd: nl_catd, set_id: c_int, msg_id: c_int, s: *const c_char) -> *mut c_char = s.cast_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "nl_types"))]
    fn catclose(catd: nl_catd) -> c_int = -1;
}
