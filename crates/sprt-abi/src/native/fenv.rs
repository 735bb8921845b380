//! `<fenv.h>`
//!
//! `libc` has no floating-point environment bindings, so they are declared
//! here against the runtime's per-leaf layouts.

use core::ffi::c_int;

pub use sprt_core::abi::{
    FE_ALL_EXCEPT, FE_DIVBYZERO, FE_DOWNWARD, FE_INEXACT, FE_INVALID, FE_OVERFLOW,
    FE_TONEAREST, FE_TOWARDZERO, FE_UNDERFLOW, FE_UPWARD, fenv_t, fexcept_t,
};

#[cfg(sprt_have = "fenv")]
#[cfg_attr(any(target_os = "linux", target_os = "android"), link(name = "m"))]
unsafe extern "C" {
    pub fn feclearexcept(excepts: c_int) -> c_int;
    pub fn fegetexceptflag(flagp: *mut fexcept_t, excepts: c_int) -> c_int;
    pub fn feraiseexcept(excepts: c_int) -> c_int;
    pub fn fesetexceptflag(flagp: *const fexcept_t, excepts: c_int) -> c_int;
    pub fn fetestexcept(excepts: c_int) -> c_int;
    pub fn fegetround() -> c_int;
    pub fn fesetround(round: c_int) -> c_int;
    pub fn fegetenv(envp: *mut fenv_t) -> c_int;
    pub fn feholdexcept(envp: *mut fenv_t) -> c_int;
    pub fn fesetenv(envp: *const fenv_t) -> c_int;
    pub fn feupdateenv(envp: *const fenv_t) -> c_int;
}

#[cfg(all(sprt_have = "fenv", target_os = "android"))]
#[link(name = "m")]
unsafe extern "C" {
    static __fe_dfl_env: fenv_t;
}

#[cfg(all(sprt_have = "fenv", target_os = "macos"))]
unsafe extern "C" {
    static _FE_DFL_ENV: fenv_t;
}

/// The platform's `FE_DFL_ENV`.
///
/// glibc encodes it as the all-ones pointer; Bionic and Apple export a
/// default environment object.
#[cfg(sprt_have = "fenv")]
#[must_use]
pub fn default_env() -> *const fenv_t {
    #[cfg(target_os = "linux")]
    {
        core::ptr::without_provenance(usize::MAX)
    }
    #[cfg(target_os = "android")]
    {
        // SAFETY: only the address is taken.
        unsafe { &raw const __fe_dfl_env }
    }
    #[cfg(target_os = "macos")]
    {
        // SAFETY: only the address is taken.
        unsafe { &raw const _FE_DFL_ENV }
    }
}
