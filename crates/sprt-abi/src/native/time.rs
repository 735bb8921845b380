//! `<time.h>`

pub use libc::{
    CLOCK_MONOTONIC, CLOCK_PROCESS_CPUTIME_ID, CLOCK_REALTIME, CLOCK_THREAD_CPUTIME_ID, clock_t,
    clockid_t, time_t, timespec, tm,
};

#[cfg(sprt_have = "clock")]
pub use libc::{clock_getres, clock_gettime, nanosleep};

#[cfg(sprt_have = "calendar_time")]
pub use libc::{gmtime_r, localtime_r, mktime, time};

#[cfg(sprt_have = "calendar_time")]
unsafe extern "C" {
    pub fn clock() -> clock_t;
}
