//! `<sched.h>`

header!(sched);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "sched_param",
        sprt_have = "sched_priority_range",
        sprt_have = "sched_rr_interval",
        sprt_have = "sched_yield",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::c_int;

    pub use crate::sprt::{SCHED_FIFO, SCHED_OTHER, SCHED_RR, pid_t, sched_param, timespec};

    forward! { "sched_yield" =>
        fn sched_yield() -> c_int;
    }

    forward! { "sched_priority_range" =>
        fn sched_get_priority_min(policy: c_int) -> c_int;
        fn sched_get_priority_max(policy: c_int) -> c_int;
    }

    forward! { "sched_param" =>
        fn sched_getparam(pid: pid_t, param: *mut sched_param) -> c_int;
        fn sched_setparam(pid: pid_t, param: *const sched_param) -> c_int;
        fn sched_getscheduler(pid: pid_t) -> c_int;
        fn sched_setscheduler(pid: pid_t, policy: c_int, param: *const sched_param) -> c_int;
    }

    forward! { "sched_rr_interval" =>
        fn sched_rr_get_interval(pid: pid_t, interval: *mut timespec) -> c_int;
    }
}
