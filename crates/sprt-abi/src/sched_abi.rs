//! ABI layer for `<sched.h>`.
//!
//! The runtime's `sched_param` carries only the priority. Native definitions
//! can be larger (macOS reserves padding), so wrappers copy the priority
//! into a zeroed native structure rather than casting pointers.

use core::ffi::c_int;
#[cfg(any(sprt_have = "sched_param", sprt_have = "sched_rr_interval"))]
use core::ptr;

use sprt_core::abi::sched_param;
#[cfg(any(
    sprt_have = "sched_param",
    sprt_have = "sched_rr_interval",
    feature = "define-unavailable-functions",
))]
use sprt_core::abi::pid_t;
#[cfg(any(sprt_have = "sched_rr_interval", feature = "define-unavailable-functions"))]
use sprt_core::abi::timespec;

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native;
#[cfg(any(sprt_have = "sched_param", sprt_have = "sched_rr_interval"))]
use crate::util::with_native_temp;

/// Copy a runtime `sched_param` into a zeroed native one.
#[cfg(unix)]
#[must_use]
pub fn param_to_native(param: &sched_param) -> native::sched::sched_param {
    // SAFETY: sched_param is a plain C struct.
    let mut out: native::sched::sched_param = unsafe { crate::util::zeroed() };
    out.sched_priority = param.sched_priority;
    out
}

/// Copy the priority out of a native `sched_param`.
#[cfg(unix)]
#[must_use]
pub fn param_from_native(param: &native::sched::sched_param) -> sched_param {
    sched_param {
        sched_priority: param.sched_priority,
    }
}

// ---------------------------------------------------------------------------
// sched_yield
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "sched_yield")]
    fn sched_yield() -> c_int {
        native::sched::sched_yield()
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_yield"))]
    fn sched_yield() -> c_int = -1;
}

// ---------------------------------------------------------------------------
// sched_get_priority_min / sched_get_priority_max
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "sched_priority_range")]
    fn sched_get_priority_min(policy: c_int) -> c_int {
        native::sched::sched_get_priority_min(policy)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sched_priority_range")]
    fn sched_get_priority_max(policy: c_int) -> c_int {
        native::sched::sched_get_priority_max(policy)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_priority_range"))]
    fn sched_get_priority_min(policy: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_priority_range"))]
    fn sched_get_priority_max(policy: c_int) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// sched_getparam / sched_setparam
// ---------------------------------------------------------------------------

sprt_fn! {
    /// A null `param` is passed through so the platform reports the error.
    #[cfg(sprt_have = "sched_param")]
    fn sched_getparam(pid: pid_t, param: *mut sched_param) -> c_int {
        if param.is_null() {
            return native::sched::sched_getparam(pid as _, ptr::null_mut());
        }
        with_native_temp(|tmp: &mut native::sched::sched_param| {
            let rc = native::sched::sched_getparam(pid as _, tmp);
            if rc == 0 {
                *param = param_from_native(tmp);
            }
            rc
        })
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sched_param")]
    fn sched_setparam(pid: pid_t, param: *const sched_param) -> c_int {
        if param.is_null() {
            return native::sched::sched_setparam(pid as _, ptr::null());
        }
        let tmp = param_to_native(&*param);
        native::sched::sched_setparam(pid as _, &tmp)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_param"))]
    fn sched_getparam(pid: pid_t, param: *mut sched_param) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_param"))]
    fn sched_setparam(pid: pid_t, param: *const sched_param) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// sched_getscheduler / sched_setscheduler
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "sched_param")]
    fn sched_getscheduler(pid: pid_t) -> c_int {
        native::sched::sched_getscheduler(pid as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sched_param")]
    fn sched_setscheduler(pid: pid_t, policy: c_int, param: *const sched_param) -> c_int {
        if param.is_null() {
            return native::sched::sched_setscheduler(pid as _, policy, ptr::null());
        }
        let tmp = param_to_native(&*param);
        native::sched::sched_setscheduler(pid as _, policy, &tmp)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_param"))]
    fn sched_getscheduler(pid: pid_t) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_param"))]
    fn sched_setscheduler(pid: pid_t, policy: c_int, param: *const sched_param) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// sched_rr_get_interval
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "sched_rr_interval")]
    fn sched_rr_get_interval(pid: pid_t, interval: *mut timespec) -> c_int {
        if interval.is_null() {
            return native::sched::sched_rr_get_interval(pid as _, ptr::null_mut());
        }
        with_native_temp(|tmp: &mut native::sched::timespec| {
            let rc = native::sched::sched_rr_get_interval(pid as _, tmp);
            if rc == 0 {
                (*interval).tv_sec = tmp.tv_sec as _;
                (*interval).tv_nsec = tmp.tv_nsec as _;
            }
            rc
        })
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sched_rr_interval"))]
    fn sched_rr_get_interval(pid: pid_t, interval: *mut timespec) -> c_int = -1;
}

#[cfg(all(test, sprt_have = "sched_param"))]
mod tests {
    use super::*;

    #[test]
    fn param_round_trips_through_native() {
        for prio in [0, 1, 50, 99] {
            let ours = sched_param { sched_priority: prio };
            assert_eq!(param_from_native(&param_to_native(&ours)), ours);
        }
    }

    #[test]
    fn getparam_matches_native() {
        let mut ours = sched_param::default();
        let rc = unsafe { sched_getparam(0, &mut ours) };
        assert_eq!(rc, 0);
        let mut theirs: libc::sched_param = unsafe { core::mem::zeroed() };
        assert_eq!(unsafe { libc::sched_getparam(0, &mut theirs) }, 0);
        assert_eq!(ours.sched_priority, theirs.sched_priority);
    }

    #[test]
    fn getscheduler_matches_native() {
        let ours = unsafe { sched_getscheduler(0) };
        let theirs = unsafe { libc::sched_getscheduler(0) };
        assert_eq!(ours, theirs);
    }
}
