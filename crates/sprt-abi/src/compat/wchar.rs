//! `<wchar.h>` types and limits.

pub use crate::sprt::{WCHAR_MAX, WCHAR_MIN, WINT_MAX, WINT_MIN, mbstate_t, wchar_t, wint_t};
