//! `<locale.h>`
//!
//! Declared locally against the runtime's `lconv` and `locale_t`, which are
//! defined per leaf to match the platform exactly.

use core::ffi::{c_char, c_int};

pub use sprt_core::abi::{
    LC_ALL, LC_ALL_MASK, LC_COLLATE, LC_COLLATE_MASK, LC_CTYPE, LC_CTYPE_MASK,
    LC_GLOBAL_LOCALE, LC_MESSAGES, LC_MESSAGES_MASK, LC_MONETARY, LC_MONETARY_MASK,
    LC_NUMERIC, LC_NUMERIC_MASK, LC_TIME, LC_TIME_MASK, lconv, locale_t,
};

#[cfg(sprt_have = "locale")]
unsafe extern "C" {
    pub fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char;
    pub fn localeconv() -> *mut lconv;
}

#[cfg(sprt_have = "xlocale")]
unsafe extern "C" {
    pub fn newlocale(category_mask: c_int, locale: *const c_char, base: locale_t) -> locale_t;
    pub fn duplocale(locobj: locale_t) -> locale_t;
    pub fn freelocale(locobj: locale_t);
    pub fn uselocale(newloc: locale_t) -> locale_t;
}
