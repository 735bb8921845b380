//! ABI layer for `<sys/time.h>`.
//!
//! Runtime `timeval`, `timezone` and `itimerval` are copied member by member
//! into zeroed native temporaries. A null `times` argument keeps its meaning
//! of "now" and is passed through as null.

use core::ffi::{c_char, c_int};

use sprt_core::abi::{itimerval, timeval, timezone};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::sys_time as native;
#[cfg(any(sprt_have = "timeofday", sprt_have = "itimer", sprt_have = "adjtime"))]
use crate::util::with_native_temp;

// ---------------------------------------------------------------------------
// Marshaling
// ---------------------------------------------------------------------------

#[cfg(unix)]
#[must_use]
pub fn timeval_to_native(tv: &timeval) -> native::timeval {
    // SAFETY: timeval is a plain C struct.
    let mut out: native::timeval = unsafe { crate::util::zeroed() };
    out.tv_sec = tv.tv_sec as _;
    out.tv_usec = tv.tv_usec as _;
    out
}

#[cfg(unix)]
#[must_use]
pub fn timeval_from_native(tv: &native::timeval) -> timeval {
    timeval {
        tv_sec: tv.tv_sec as _,
        tv_usec: tv.tv_usec as _,
    }
}

#[cfg(unix)]
#[must_use]
pub fn itimerval_to_native(it: &itimerval) -> native::itimerval {
    // SAFETY: itimerval is a plain C struct.
    let mut out: native::itimerval = unsafe { crate::util::zeroed() };
    out.it_interval = timeval_to_native(&it.it_interval);
    out.it_value = timeval_to_native(&it.it_value);
    out
}

#[cfg(unix)]
#[must_use]
pub fn itimerval_from_native(it: &native::itimerval) -> itimerval {
    itimerval {
        it_interval: timeval_from_native(&it.it_interval),
        it_value: timeval_from_native(&it.it_value),
    }
}

/// Copy an optional `timeval[2]` for the `*utimes` family.
///
/// # Safety
///
/// A non-null `times` must point to two readable `timeval`s.
#[cfg(unix)]
unsafe fn times_to_native(times: *const timeval) -> Option<[native::timeval; 2]> {
    if times.is_null() {
        return None;
    }
    // SAFETY: caller guarantees two elements.
    let pair = unsafe { &*times.cast::<[timeval; 2]>() };
    Some([timeval_to_native(&pair[0]), timeval_to_native(&pair[1])])
}

#[cfg(unix)]
fn native_times_ptr(times: &Option<[native::timeval; 2]>) -> *const native::timeval {
    match times {
        Some(pair) => pair.as_ptr(),
        None => core::ptr::null(),
    }
}

// ---------------------------------------------------------------------------
// gettimeofday / settimeofday
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "timeofday")]
    fn gettimeofday(tv: *mut timeval, tz: *mut timezone) -> c_int {
        with_native_temp(|ntv: &mut native::timeval| {
            with_native_temp(|ntz: &mut native::timezone| {
                let tv_arg: *mut native::timeval = if tv.is_null() { core::ptr::null_mut() } else { &raw mut *ntv };
                let tz_arg: *mut native::timezone = if tz.is_null() { core::ptr::null_mut() } else { &raw mut *ntz };
                let rc = native::gettimeofday(tv_arg, tz_arg.cast());
                if rc == 0 {
                    if !tv.is_null() {
                        *tv = timeval_from_native(ntv);
                    }
                    if !tz.is_null() {
                        (*tz).tz_minuteswest = ntz.tz_minuteswest;
                        (*tz).tz_dsttime = ntz.tz_dsttime;
                    }
                }
                rc
            })
        })
    }
}

sprt_fn! {
    #[cfg(sprt_have = "timeofday")]
    fn settimeofday(tv: *const timeval, tz: *const timezone) -> c_int {
        let ntv = (!tv.is_null()).then(|| timeval_to_native(&*tv));
        let ntz = (!tz.is_null()).then(|| native::timezone {
            tz_minuteswest: (*tz).tz_minuteswest,
            tz_dsttime: (*tz).tz_dsttime,
        });
        native::settimeofday(
            ntv.as_ref().map_or(core::ptr::null(), core::ptr::from_ref),
            ntz.as_ref().map_or(core::ptr::null(), core::ptr::from_ref),
        )
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "timeofday"))]
    fn gettimeofday(tv: *mut timeval, tz: *mut timezone) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "timeofday"))]
    fn settimeofday(tv: *const timeval, tz: *const timezone) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// Interval timers
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "itimer")]
    fn getitimer(which: c_int, curr_value: *mut itimerval) -> c_int {
        if curr_value.is_null() {
            return native::getitimer(which, core::ptr::null_mut());
        }
        with_native_temp(|tmp: &mut native::itimerval| {
            let rc = native::getitimer(which, tmp);
            if rc == 0 {
                *curr_value = itimerval_from_native(tmp);
            }
            rc
        })
    }
}

sprt_fn! {
    #[cfg(sprt_have = "itimer")]
    fn setitimer(which: c_int, new_value: *const itimerval, old_value: *mut itimerval) -> c_int {
        let new = (!new_value.is_null()).then(|| itimerval_to_native(&*new_value));
        let new_ptr = new.as_ref().map_or(core::ptr::null(), core::ptr::from_ref);
        if old_value.is_null() {
            return native::setitimer(which, new_ptr, core::ptr::null_mut());
        }
        with_native_temp(|old: &mut native::itimerval| {
            let rc = native::setitimer(which, new_ptr, old);
            if rc == 0 {
                *old_value = itimerval_from_native(old);
            }
            rc
        })
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "itimer"))]
    fn getitimer(which: c_int, curr_value: *mut itimerval) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "itimer"))]
    fn setitimer(which: c_int, new_value: *const itimerval, old_value: *mut itimerval) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// utimes family
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "utimes")]
    fn utimes(path: *const c_char, times: *const timeval) -> c_int {
        let ntimes = times_to_native(times);
        native::utimes(path, native_times_ptr(&ntimes))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "futimes")]
    fn futimes(fd: c_int, times: *const timeval) -> c_int {
        let ntimes = times_to_native(times);
        native::futimes(fd, native_times_ptr(&ntimes))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "lutimes")]
    fn lutimes(path: *const c_char, times: *const timeval) -> c_int {
        let ntimes = times_to_native(times);
        native::lutimes(path, native_times_ptr(&ntimes))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "futimesat")]
    fn futimesat(dirfd: c_int, path: *const c_char, times: *const timeval) -> c_int {
        let ntimes = times_to_native(times);
        native::futimesat(dirfd, path, native_times_ptr(&ntimes))
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "utimes"))]
    fn utimes(path: *const c_char, times: *const timeval) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "futimes"))]
    fn futimes(fd: c_int, times: *const timeval) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "lutimes"))]
    fn lutimes(path: *const c_char, times: *const timeval) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "futimesat"))]
    fn futimesat(dirfd: c_int, path: *const c_char, times: *const timeval) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// adjtime
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "adjtime")]
    fn adjtime(delta: *const timeval, olddelta: *mut timeval) -> c_int {
        let ndelta = (!delta.is_null()).then(|| timeval_to_native(&*delta));
        let delta_ptr = ndelta.as_ref().map_or(core::ptr::null(), core::ptr::from_ref);
        if olddelta.is_null() {
            return native::adjtime(delta_ptr, core::ptr::null_mut());
        }
        with_native_temp(|old: &mut native::timeval| {
            let rc = native::adjtime(delta_ptr, old);
            if rc == 0 {
                *olddelta = timeval_from_native(old);
            }
            rc
        })
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "adjtime"))]
    fn adjtime(delta: *const timeval, olddelta: *mut timeval) -> c_int = -1;
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use sprt_core::abi::ITIMER_REAL;

    #[test]
    fn timeval_copies_both_members() {
        let tv = timeval { tv_sec: 1_700_000_000, tv_usec: 999_999 };
        assert_eq!(timeval_from_native(&timeval_to_native(&tv)), tv);
    }

    #[test]
    fn null_times_stay_null() {
        let ntimes = unsafe { times_to_native(core::ptr::null()) };
        assert!(native_times_ptr(&ntimes).is_null());
    }

    #[cfg(sprt_have = "timeofday")]
    #[test]
    fn gettimeofday_tracks_native_clock() {
        let mut ours = timeval::default();
        assert_eq!(unsafe { gettimeofday(&mut ours, core::ptr::null_mut()) }, 0);
        let mut theirs: libc::timeval = unsafe { core::mem::zeroed() };
        assert_eq!(unsafe { libc::gettimeofday(&mut theirs, core::ptr::null_mut()) }, 0);
        assert!((theirs.tv_sec as i64 - ours.tv_sec as i64).abs() <= 1);
        assert!((0..1_000_000).contains(&(ours.tv_usec as i64)));
    }

    #[cfg(sprt_have = "timeofday")]
    #[test]
    fn gettimeofday_accepts_timezone_only() {
        let mut tz = timezone::default();
        assert_eq!(unsafe { gettimeofday(core::ptr::null_mut(), &mut tz) }, 0);
    }

    #[cfg(sprt_have = "itimer")]
    #[test]
    fn disarmed_real_timer_reads_zero() {
        let mut cur = itimerval {
            it_interval: timeval { tv_sec: 5, tv_usec: 5 },
            it_value: timeval { tv_sec: 5, tv_usec: 5 },
        };
        assert_eq!(unsafe { getitimer(ITIMER_REAL, &mut cur) }, 0);
        assert_eq!(cur.it_value, timeval::default());
    }

    #[cfg(sprt_have = "utimes")]
    #[test]
    fn utimes_sets_explicit_times() {
        use std::os::unix::ffi::OsStrExt;
        use std::os::unix::fs::MetadataExt;

        let dir = std::env::temp_dir().join(format!("sprt-utimes-{}", std::process::id()));
        std::fs::write(&dir, b"x").unwrap();
        let mut path = dir.as_os_str().as_bytes().to_vec();
        path.push(0);
        let times = [
            timeval { tv_sec: 1_000_000, tv_usec: 0 },
            timeval { tv_sec: 2_000_000, tv_usec: 0 },
        ];
        let rc = unsafe { utimes(path.as_ptr().cast(), times.as_ptr()) };
        assert_eq!(rc, 0);
        let meta = std::fs::metadata(&dir).unwrap();
        assert_eq!(meta.atime(), 1_000_000);
        assert_eq!(meta.mtime(), 2_000_000);
        std::fs::remove_file(&dir).unwrap();
    }
}
