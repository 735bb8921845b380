//! ABI layer for `<time.h>`.
//!
//! `timespec` and `struct tm` are copied member by member through zeroed
//! native temporaries. The runtime `tm` always carries `tm_gmtoff` and
//! `tm_zone`; both are filled from the platform's result.
//!
//! `mktime` writes the normalized fields back, as POSIX requires. The
//! reentrant conversions return null, without touching `errno`, when either
//! pointer is null.

use core::ffi::{c_double, c_int};

use sprt_core::abi::{clock_t, clockid_t, time_t, timespec, tm};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::time as native;
#[cfg(any(sprt_have = "clock", sprt_have = "calendar_time"))]
use crate::util::with_native_temp;

// ---------------------------------------------------------------------------
// Marshaling
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[must_use]
pub fn timespec_to_native(ts: &timespec) -> native::timespec {
    // SAFETY: timespec is a plain C struct.
    let mut out: native::timespec = unsafe { crate::util::zeroed() };
    out.tv_sec = ts.tv_sec as _;
    out.tv_nsec = ts.tv_nsec as _;
    out
}

#[cfg(unix)]
#[must_use]
pub fn timespec_from_native(ts: &native::timespec) -> timespec {
    timespec {
        tv_sec: ts.tv_sec as _,
        tv_nsec: ts.tv_nsec as _,
    }
}

#[cfg(unix)]
#[must_use]
pub fn tm_to_native(t: &tm) -> native::tm {
    // SAFETY: tm is a plain C struct; a null tm_zone is valid.
    let mut out: native::tm = unsafe { crate::util::zeroed() };
    out.tm_sec = t.tm_sec;
    out.tm_min = t.tm_min;
    out.tm_hour = t.tm_hour;
    out.tm_mday = t.tm_mday;
    out.tm_mon = t.tm_mon;
    out.tm_year = t.tm_year;
    out.tm_wday = t.tm_wday;
    out.tm_yday = t.tm_yday;
    out.tm_isdst = t.tm_isdst;
    out.tm_gmtoff = t.tm_gmtoff as _;
    out.tm_zone = t.tm_zone as _;
    out
}

#[cfg(unix)]
#[must_use]
pub fn tm_from_native(t: &native::tm) -> tm {
    tm {
        tm_sec: t.tm_sec,
        tm_min: t.tm_min,
        tm_hour: t.tm_hour,
        tm_mday: t.tm_mday,
        tm_mon: t.tm_mon,
        tm_year: t.tm_year,
        tm_wday: t.tm_wday,
        tm_yday: t.tm_yday,
        tm_isdst: t.tm_isdst,
        tm_gmtoff: t.tm_gmtoff as _,
        tm_zone: t.tm_zone as _,
    }
}

// ---------------------------------------------------------------------------
// Clocks
// ---------------------------------------------------------------------------

/// Shared body of `clock_gettime` and `clock_getres`: a null `out` is
/// passed through as null.
#[cfg(sprt_have = "clock")]
unsafe fn clock_query(
    out: *mut timespec,
    call: impl FnOnce(*mut native::timespec) -> c_int,
) -> c_int {
    if out.is_null() {
        return call(core::ptr::null_mut());
    }
    // SAFETY: timespec is a plain C struct; `out` is non-null and writable.
    unsafe {
        with_native_temp(|tmp: &mut native::timespec| {
            let rc = call(&raw mut *tmp);
            if rc == 0 {
                *out = timespec_from_native(tmp);
            }
            rc
        })
    }
}

sprt_fn! {
    #[cfg(sprt_have = "clock")]
    fn clock_gettime(clk: clockid_t, tp: *mut timespec) -> c_int {
        clock_query(tp, |tmp| native::clock_gettime(clk as _, tmp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "clock")]
    fn clock_getres(clk: clockid_t, res: *mut timespec) -> c_int {
        clock_query(res, |tmp| native::clock_getres(clk as _, tmp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "clock")]
    fn nanosleep(req: *const timespec, rem: *mut timespec) -> c_int {
        if req.is_null() {
            return native::nanosleep(core::ptr::null(), core::ptr::null_mut());
        }
        let nreq = timespec_to_native(&*req);
        if rem.is_null() {
            return native::nanosleep(&nreq, core::ptr::null_mut());
        }
        with_native_temp(|left: &mut native::timespec| {
            let rc = native::nanosleep(&nreq, left);
            if rc != 0 {
                *rem = timespec_from_native(left);
            }
            rc
        })
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "clock"))]
    fn clock_gettime(clk: clockid_t, tp: *mut timespec) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "clock"))]
    fn clock_getres(clk: clockid_t, res: *mut timespec) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "clock"))]
    fn nanosleep(req: *const timespec, rem: *mut timespec) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// Calendar time
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn time(t: *mut time_t) -> time_t {
        let now = native::time(core::ptr::null_mut()) as time_t;
        if !t.is_null() && now != -1 {
            *t = now;
        }
        now
    }
}

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn clock() -> clock_t {
        native::clock() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn difftime(end: time_t, start: time_t) -> c_double {
        (i128::from(end) - i128::from(start)) as c_double
    }
}

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn mktime(t: *mut tm) -> time_t {
        if t.is_null() {
            crate::errno_abi::set_errno(sprt_core::errno::EINVAL);
            return -1;
        }
        let mut ntm = tm_to_native(&*t);
        let rc = native::mktime(&mut ntm);
        if rc != -1 {
            *t = tm_from_native(&ntm);
        }
        rc as _
    }
}

/// Shared body of `gmtime_r` and `localtime_r`.
#[cfg(sprt_have = "calendar_time")]
unsafe fn broken_down(
    t: *const time_t,
    out: *mut tm,
    call: impl FnOnce(*const native::time_t, *mut native::tm) -> *mut native::tm,
) -> *mut tm {
    if t.is_null() || out.is_null() {
        return core::ptr::null_mut();
    }
    // SAFETY: both pointers are non-null; tm is a plain C struct.
    unsafe {
        let secs = *t as native::time_t;
        with_native_temp(|ntm: &mut native::tm| {
            if call(&secs, &raw mut *ntm).is_null() {
                return core::ptr::null_mut();
            }
            *out = tm_from_native(ntm);
            out
        })
    }
}

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn gmtime_r(t: *const time_t, out: *mut tm) -> *mut tm {
        broken_down(t, out, |secs, ntm| native::gmtime_r(secs, ntm))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "calendar_time")]
    fn localtime_r(t: *const time_t, out: *mut tm) -> *mut tm {
        broken_down(t, out, |secs, ntm| native::localtime_r(secs, ntm))
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn time(t: *mut time_t) -> time_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn clock() -> clock_t = -1i32 as clock_t;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn difftime(end: time_t, start: time_t) -> c_double = 0.0;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn mktime(t: *mut tm) -> time_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn gmtime_r(t: *const time_t, out: *mut tm) -> *mut tm = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "calendar_time"))]
    fn localtime_r(t: *const time_t, out: *mut tm) -> *mut tm = core::ptr::null_mut();
}
