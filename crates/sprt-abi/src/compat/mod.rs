//! Public compatibility headers.
//!
//! One module per standard header, each with two mutually exclusive
//! branches:
//!
//! - consuming (default): type and constant aliases into [`crate::sprt`]
//!   plus `#[inline(always)]` forwarders with the public name, so callers
//!   link against `__sprt_*` symbols.
//! - `build-runtime`: the platform's own declarations from
//!   [`crate::native`], with no forwarding layer at all.
//!
//! Headers that only carry types (`limits`, `setjmp`, `wchar`) have no
//! native counterpart and use the runtime definitions in both modes, as do
//! all headers on Windows.

/// Emit public forwarders into `crate::sprt`.
///
/// Each forwarder exists when the platform provides the capability or the
/// unavailable policy is `Stub`; otherwise the name stays undeclared.
macro_rules! forward {
    ($cap:tt => $(fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;)*) => {$(
        #[cfg(any(sprt_have = $cap, feature = "define-unavailable-functions"))]
        #[inline(always)]
        pub unsafe fn $name($($arg: $ty),*) $(-> $ret)? {
            unsafe { crate::sprt::$name($($arg),*) }
        }
    )*};
}

/// Select the native or overlay branch of a header.
macro_rules! header {
    ($($native:ident)::+) => {
        #[cfg(all(feature = "build-runtime", unix))]
        pub use crate::native::$($native)::+::*;

        #[cfg(all(feature = "build-runtime", unix))]
        #[doc(hidden)]
        pub const OVERLAY: bool = false;

        #[cfg(not(all(feature = "build-runtime", unix)))]
        pub use self::overlay::*;

        #[cfg(not(all(feature = "build-runtime", unix)))]
        #[doc(hidden)]
        pub const OVERLAY: bool = true;
    };
}

pub mod dirent;
pub mod dlfcn;
pub mod errno;
pub mod fcntl;
pub mod fenv;
pub mod limits;
pub mod locale;
pub mod nl_types;
pub mod sched;
pub mod setjmp;
pub mod string;
pub mod sys_mman;
pub mod sys_socket;
pub mod sys_stat;
pub mod sys_time;
pub mod sys_types;
pub mod time;
pub mod unistd;
pub mod utime;
pub mod wchar;
