//! `<locale.h>`

header!(locale);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "locale",
        sprt_have = "xlocale",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::{c_char, c_int};

    pub use crate::sprt::{
        LC_ALL, LC_ALL_MASK, LC_COLLATE, LC_COLLATE_MASK, LC_CTYPE, LC_CTYPE_MASK,
        LC_GLOBAL_LOCALE, LC_MESSAGES, LC_MESSAGES_MASK, LC_MONETARY, LC_MONETARY_MASK,
        LC_NUMERIC, LC_NUMERIC_MASK, LC_TIME, LC_TIME_MASK, lconv, locale_t,
    };

    forward! { "locale" =>
        fn setlocale(category: c_int, locale: *const c_char) -> *mut c_char;
        fn localeconv() -> *mut lconv;
    }

    forward! { "xlocale" =>
        fn newlocale(category_mask: c_int, locale: *const c_char, base: locale_t) -> locale_t;
        fn duplocale(locobj: locale_t) -> locale_t;
        fn freelocale(locobj: locale_t);
        fn uselocale(newloc: locale_t) -> locale_t;
    }
}
