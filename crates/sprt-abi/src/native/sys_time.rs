//! `<sys/time.h>`

use core::ffi::{c_char, c_int};

pub use libc::{ITIMER_PROF, ITIMER_REAL, ITIMER_VIRTUAL, itimerval, timeval};

/// Native `struct timezone`; `libc` only exposes it as an opaque type.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct timezone {
    pub tz_minuteswest: c_int,
    pub tz_dsttime: c_int,
}

#[cfg(sprt_have = "timeofday")]
pub use libc::gettimeofday;

#[cfg(sprt_have = "timeofday")]
unsafe extern "C" {
    pub fn settimeofday(tv: *const timeval, tz: *const timezone) -> c_int;
}

#[cfg(sprt_have = "itimer")]
unsafe extern "C" {
    pub fn getitimer(which: c_int, curr_value: *mut itimerval) -> c_int;
    pub fn setitimer(which: c_int, new_value: *const itimerval, old_value: *mut itimerval) -> c_int;
}

#[cfg(sprt_have = "utimes")]
pub use libc::utimes;

#[cfg(sprt_have = "futimes")]
unsafe extern "C" {
    pub fn futimes(fd: c_int, times: *const timeval) -> c_int;
}

#[cfg(sprt_have = "lutimes")]
unsafe extern "C" {
    pub fn lutimes(path: *const c_char, times: *const timeval) -> c_int;
}

#[cfg(sprt_have = "futimesat")]
unsafe extern "C" {
    pub fn futimesat(dirfd: c_int, path: *const c_char, times: *const timeval) -> c_int;
}

#[cfg(sprt_have = "adjtime")]
unsafe extern "C" {
    pub fn adjtime(delta: *const timeval, olddelta: *mut timeval) -> c_int;
}
