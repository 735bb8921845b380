//! ABI layer for `<fenv.h>`.
//!
//! `fenv_t` and `fexcept_t` are the platform's own layouts, so every
//! function is a direct call.

use core::ffi::c_int;

use sprt_core::abi::{fenv_t, fexcept_t};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(sprt_have = "fenv")]
use crate::native::fenv as native;

// ---------------------------------------------------------------------------
// Exceptions
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn feclearexcept(excepts: c_int) -> c_int {
        native::feclearexcept(excepts)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fegetexceptflag(flagp: *mut fexcept_t, excepts: c_int) -> c_int {
        native::fegetexceptflag(flagp, excepts)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn feraiseexcept(excepts: c_int) -> c_int {
        native::feraiseexcept(excepts)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fesetexceptflag(flagp: *const fexcept_t, excepts: c_int) -> c_int {
        native::fesetexceptflag(flagp, excepts)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fetestexcept(excepts: c_int) -> c_int {
        native::fetestexcept(excepts)
    }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fegetround() -> c_int {
        native::fegetround()
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fesetround(round: c_int) -> c_int {
        native::fesetround(round)
    }
}

// ---------------------------------------------------------------------------
// Whole environment
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fegetenv(envp: *mut fenv_t) -> c_int {
        native::fegetenv(envp)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn feholdexcept(envp: *mut fenv_t) -> c_int {
        native::feholdexcept(envp)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn fesetenv(envp: *const fenv_t) -> c_int {
        native::fesetenv(envp)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fenv")]
    fn feupdateenv(envp: *const fenv_t) -> c_int {
        native::feupdateenv(envp)
    }
}

sprt_fn! {
    /// Address of the default environment, usable wherever `FE_DFL_ENV` is.
    #[cfg(sprt_have = "fenv")]
    fn fe_dfl_env() -> *const fenv_t {
        native::default_env()
    }
}

macro_rules! fenv_unavailable {
    ($($name:ident($($arg:ident: $ty:ty),*);)*) => {$(
        sprt_unavailable! {
            #[cfg(not(sprt_have = "fenv"))]
            fn $name($($arg: $ty),*) -> c_int = -1;
        }
    )*};
}

fenv_unavailable! {
    feclearexcept(excepts: c_int);
    fegetexceptflag(flagp: *mut fexcept_t, excepts: c_int);
    feraiseexcept(excepts: c_int);
    fesetexceptflag(flagp: *const fexcept_t, excepts: c_int);
    fetestexcept(excepts: c_int);
    fegetround();
    fesetround(round: c_int);
    fegetenv(envp: *mut fenv_t);
    feholdexcept(envp: *mut fenv_t);
    fesetenv(envp: *const fenv_t);
    feupdateenv(envp: *const fenv_t);
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "fenv"))]
    fn fe_dfl_env() -> *const fenv_t = core::ptr::null();
}

#[cfg(all(test, sprt_have = "fenv"))]
mod tests {
    use super::*;
    use sprt_core::abi::{FE_ALL_EXCEPT, FE_DIVBYZERO, FE_INEXACT, FE_TONEAREST, FE_UPWARD};

    #[test]
    fn raise_and_test_exception() {
        unsafe {
            assert_eq!(feclearexcept(FE_ALL_EXCEPT), 0);
            assert_eq!(feraiseexcept(FE_DIVBYZERO), 0);
            assert_ne!(fetestexcept(FE_DIVBYZERO), 0);
            assert_eq!(feclearexcept(FE_DIVBYZERO), 0);
            assert_eq!(fetestexcept(FE_DIVBYZERO), 0);
        }
    }

    #[test]
    fn exception_flags_save_and_restore() {
        unsafe {
            feclearexcept(FE_ALL_EXCEPT);
            feraiseexcept(FE_INEXACT);
            let mut saved: fexcept_t = core::mem::zeroed();
            assert_eq!(fegetexceptflag(&mut saved, FE_ALL_EXCEPT), 0);
            feclearexcept(FE_ALL_EXCEPT);
            assert_eq!(fetestexcept(FE_INEXACT), 0);
            assert_eq!(fesetexceptflag(&saved, FE_ALL_EXCEPT), 0);
            assert_ne!(fetestexcept(FE_INEXACT), 0);
            feclearexcept(FE_ALL_EXCEPT);
        }
    }

    #[test]
    fn rounding_mode_round_trips() {
        unsafe {
            let before = fegetround();
            assert_eq!(fesetround(FE_UPWARD), 0);
            assert_eq!(fegetround(), FE_UPWARD);
            assert_eq!(fesetround(before), 0);
            assert_eq!(fegetround(), before);
        }
    }

    #[test]
    fn default_env_restores_nearest() {
        unsafe {
            let mut saved: fenv_t = core::mem::zeroed();
            assert_eq!(fegetenv(&mut saved), 0);
            fesetround(FE_UPWARD);
            assert_eq!(fesetenv(fe_dfl_env()), 0);
            assert_eq!(fegetround(), FE_TONEAREST);
            assert_eq!(fesetenv(&saved), 0);
        }
    }

    #[test]
    fn hold_and_update() {
        unsafe {
            feclearexcept(FE_ALL_EXCEPT);
            let mut held: fenv_t = core::mem::zeroed();
            assert_eq!(feholdexcept(&mut held), 0);
            feraiseexcept(FE_INEXACT);
            assert_eq!(feupdateenv(&held), 0);
            assert_ne!(fetestexcept(FE_INEXACT), 0);
            feclearexcept(FE_ALL_EXCEPT);
        }
    }
}
