//! `<time.h>`

header!(time);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "calendar_time",
        sprt_have = "clock",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::{c_double, c_int};

    pub use crate::sprt::{
        CLOCK_MONOTONIC, CLOCK_PROCESS_CPUTIME_ID, CLOCK_REALTIME, CLOCK_THREAD_CPUTIME_ID,
        CLOCKS_PER_SEC, clock_t, clockid_t, time_t, timespec, tm,
    };

    forward! { "clock" =>
        fn clock_gettime(clk: clockid_t, tp: *mut timespec) -> c_int;
        fn clock_getres(clk: clockid_t, res: *mut timespec) -> c_int;
        fn nanosleep(req: *const timespec, rem: *mut timespec) -> c_int;
    }

    forward! { "calendar_time" =>
        fn time(t: *mut time_t) -> time_t;
        fn clock() -> clock_t;
        fn difftime(end: time_t, start: time_t) -> c_double;
        fn mktime(t: *mut tm) -> time_t;
        fn gmtime_r(t: *const time_t, out: *mut tm) -> *mut tm;
        fn localtime_r(t: *const time_t, out: *mut tm) -> *mut tm;
    }
}
