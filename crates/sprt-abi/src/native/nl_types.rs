//! `<nl_types.h>`

use core::ffi::{c_char, c_int};

pub use sprt_core::abi::{NL_CAT_LOCALE, NL_SETD, nl_catd};

#[cfg(sprt_have = "nl_types")]
unsafe extern "C" {
    pub fn catopen(name: *const c_char, oflag: c_int) -> nl_catd;
    pub fn catgets(catd: nl_catd, set_id: c_int, msg_id: c_int, s: *const c_char) -> *mut c_char;
    pub fn catclose(catd: nl_catd) -> c_int;
}
