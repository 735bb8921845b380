//! `<fenv.h>`
//!
//! `FE_DFL_ENV` is a function here because the platforms disagree on whether
//! it is a sentinel pointer or the address of a library object.

header!(fenv);

/// `FE_DFL_ENV` from the platform.
#[cfg(all(feature = "build-runtime", unix, sprt_have = "fenv"))]
#[allow(non_snake_case)]
#[inline(always)]
#[must_use]
pub fn FE_DFL_ENV() -> *const fenv_t {
    crate::native::fenv::default_env()
}

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "fenv", feature = "define-unavailable-functions"))]
    use core::ffi::c_int;

    pub use crate::sprt::{
        FE_ALL_EXCEPT, FE_DIVBYZERO, FE_DOWNWARD, FE_INEXACT, FE_INVALID, FE_OVERFLOW,
        FE_TONEAREST, FE_TOWARDZERO, FE_UNDERFLOW, FE_UPWARD, fenv_t, fexcept_t,
    };

    #[cfg(any(sprt_have = "fenv", feature = "define-unavailable-functions"))]
    pub use crate::sprt::FE_DFL_ENV;

    forward! { "fenv" =>
        fn feclearexcept(excepts: c_int) -> c_int;
        fn fegetexceptflag(flagp: *mut fexcept_t, excepts: c_int) -> c_int;
        fn feraiseexcept(excepts: c_int) -> c_int;
        fn fesetexceptflag(flagp: *const fexcept_t, excepts: c_int) -> c_int;
        fn fetestexcept(excepts: c_int) -> c_int;
        fn fegetround() -> c_int;
        fn fesetround(round: c_int) -> c_int;
        fn fegetenv(envp: *mut fenv_t) -> c_int;
        fn feholdexcept(envp: *mut fenv_t) -> c_int;
        fn fesetenv(envp: *const fenv_t) -> c_int;
        fn feupdateenv(envp: *const fenv_t) -> c_int;
    }
}
