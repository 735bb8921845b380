//! ABI layer for `<locale.h>`.
//!
//! `locale_t` is an opaque pointer to the platform's own locale object and
//! `lconv` is laid out per leaf, so values pass through unchanged.

use core::ffi::{c_char, c_int};

use sprt_core::abi::{lconv, locale_t};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(any(sprt_have = "locale", sprt_have = "xlocale"))]
use crate::native::locale as native;

sprt_fn! {
    #[cfg(sprt_have = "locale")]
    fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char {
        native::setlocale(category, locale)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "locale")]
    fn localeconv() -> *mut lconv {
        native::localeconv()
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "locale"))]
    fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "locale"))]
    fn localeconv() -> *mut lconv = core::ptr::null_mut();
}

// ---------------------------------------------------------------------------
// Per-thread locale objects
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "xlocale")]
    fn newlocale(category_mask: c_int, locale: *const c_char, base: locale_t) -> locale_t {
        native::newlocale(category_mask, locale, base)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "xlocale")]
    fn duplocale(locobj: locale_t) -> locale_t {
        native::duplocale(locobj)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "xlocale")]
    fn freelocale(locobj: locale_t) {
        native::freelocale(locobj)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "xlocale")]
    fn uselocale(newloc: locale_t) -> locale_t {
        native::uselocale(newloc)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "xlocale"))]
    fn newlocale(category_mask: c_int, locale: *const c_char, base: locale_t) -> locale_t = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "xlocale"))]
    fn duplocale(locobj: locale_t) -> locale_t = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "xlocale"))]
    fn freelocale(locobj: locale_t) -> () = ();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "xlocale"))]
    fn uselocale(newloc: locale_t) -> locale_t = core::ptr::null_mut();
}

#[cfg(all(test, sprt_have = "locale", sprt_have = "xlocale"))]
mod tests {
    use super::*;
    use core::ffi::CStr;
    use sprt_core::abi::{LC_ALL, LC_ALL_MASK, LC_GLOBAL_LOCALE, LC_NUMERIC};

    #[test]
    fn query_does_not_change_locale() {
        let first = unsafe { setlocale(LC_NUMERIC, core::ptr::null()) };
        assert!(!first.is_null());
        let name = unsafe { CStr::from_ptr(first) }.to_owned();
        let again = unsafe { setlocale(LC_NUMERIC, core::ptr::null()) };
        assert_eq!(unsafe { CStr::from_ptr(again) }, name.as_c_str());
    }

    #[test]
    fn c_locale_uses_dot() {
        let loc = unsafe { newlocale(LC_ALL_MASK, c"C".as_ptr(), core::ptr::null_mut()) };
        assert!(!loc.is_null());
        unsafe {
            let prev = uselocale(loc);
            let conv = localeconv();
            assert!(!conv.is_null());
            assert_eq!(CStr::from_ptr((*conv).decimal_point), c".");
            uselocale(prev);
            freelocale(loc);
        }
    }

    #[test]
    fn duplicate_of_global_is_usable() {
        unsafe {
            let dup = duplocale(LC_GLOBAL_LOCALE);
            assert!(!dup.is_null());
            freelocale(dup);
            assert!(!setlocale(LC_ALL, core::ptr::null()).is_null());
        }
    }
}
