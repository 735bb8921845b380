//! `<sys/time.h>`
//!
//! The `timer*` helpers are offered only over the runtime's `timeval`; in
//! `build-runtime` mode the native structure has no such helpers.

header!(sys_time);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "adjtime",
        sprt_have = "futimes",
        sprt_have = "futimesat",
        sprt_have = "itimer",
        sprt_have = "lutimes",
        sprt_have = "timeofday",
        sprt_have = "utimes",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::{c_char, c_int};

    pub use crate::sprt::{
        ITIMER_PROF, ITIMER_REAL, ITIMER_VIRTUAL, itimerval, timeradd, timerclear, timercmp,
        timerisset, timersub, timespec_to_timeval, timeval, timeval_to_timespec, timezone,
    };

    forward! { "timeofday" =>
        fn gettimeofday(tv: *mut timeval, tz: *mut timezone) -> c_int;
        fn settimeofday(tv: *const timeval, tz: *const timezone) -> c_int;
    }

    forward! { "itimer" =>
        fn getitimer(which: c_int, curr_value: *mut itimerval) -> c_int;
        fn setitimer(which: c_int, new_value: *const itimerval, old_value: *mut itimerval) -> c_int;
    }

    forward! { "utimes" =>
        fn utimes(path: *const c_char, times: *const timeval) -> c_int;
    }

    forward! { "futimes" =>
        fn futimes(fd: c_int, times: *const timeval) -> c_int;
    }

    forward! { "lutimes" =>
        fn lutimes(path: *const c_char, times: *const timeval) -> c_int;
    }

    forward! { "futimesat" =>
        fn futimesat(dirfd: c_int, path: *const c_char, times: *const timeval) -> c_int;
    }

    forward! { "adjtime" =>
        fn adjtime(delta: *const timeval, olddelta: *mut timeval) -> c_int;
    }
}
