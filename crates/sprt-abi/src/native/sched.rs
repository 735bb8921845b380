//! `<sched.h>`

pub use libc::{SCHED_FIFO, SCHED_OTHER, SCHED_RR, pid_t, sched_param, timespec};

#[cfg(sprt_have = "sched_yield")]
pub use libc::sched_yield;

#[cfg(sprt_have = "sched_priority_range")]
pub use libc::{sched_get_priority_max, sched_get_priority_min};

#[cfg(sprt_have = "sched_param")]
pub use libc::{sched_getparam, sched_getscheduler, sched_setparam, sched_setscheduler};

#[cfg(sprt_have = "sched_rr_interval")]
pub use libc::sched_rr_get_interval;
