//! `sched_param` marshaling over every priority a policy accepts, set and
//! read back through the scheduling wrappers, and the wrappers against
//! their native counterparts.
//!
//! Linux applies `pid 0` to the calling thread, so each test only changes
//! the scheduling of its own test thread.

#![cfg(target_os = "linux")]

use sprt_abi::errno_abi::{get_errno, set_errno};
use sprt_abi::sched_abi::{self, param_from_native, param_to_native};
use sprt_abi::sprt::{SCHED_FIFO, SCHED_OTHER, SCHED_RR, sched_param};

#[test]
fn full_priority_range_round_trips() {
    for policy in [SCHED_OTHER, SCHED_FIFO, SCHED_RR] {
        let min = unsafe { sched_abi::sched_get_priority_min(policy) };
        let max = unsafe { sched_abi::sched_get_priority_max(policy) };
        assert!(min <= max, "policy {policy}: {min}..={max}");
        for prio in min..=max {
            let ours = sched_param { sched_priority: prio };
            let native = param_to_native(&ours);
            assert_eq!(native.sched_priority, prio);
            assert_eq!(param_from_native(&native), ours);
        }
    }
}

#[test]
fn priority_range_matches_native() {
    for policy in [SCHED_OTHER, SCHED_FIFO, SCHED_RR] {
        unsafe {
            assert_eq!(
                sched_abi::sched_get_priority_min(policy),
                libc::sched_get_priority_min(policy)
            );
            assert_eq!(
                sched_abi::sched_get_priority_max(policy),
                libc::sched_get_priority_max(policy)
            );
        }
    }
}

#[test]
fn sched_yield_matches_native() {
    let ours = unsafe { sched_abi::sched_yield() };
    let theirs = unsafe { libc::sched_yield() };
    assert_eq!(ours, 0);
    assert_eq!(ours, theirs);
}

#[test]
fn setparam_with_current_policy_is_accepted() {
    let mut current = sched_param::default();
    unsafe {
        assert_eq!(sched_abi::sched_getparam(0, &mut current), 0);
        assert_eq!(sched_abi::sched_setparam(0, &current), 0);
        let policy = sched_abi::sched_getscheduler(0);
        assert_eq!(sched_abi::sched_setscheduler(0, policy, &current), 0);
    }
}

#[test]
fn invalid_policy_passes_errno_through() {
    let rc = unsafe { sched_abi::sched_get_priority_max(-12345) };
    assert_eq!(rc, -1);
    assert_eq!(sprt_abi::errno_abi::get_errno(), libc::EINVAL);
}

#[test]
fn rr_interval_is_filled() {
    let mut ts = sprt_abi::sprt::timespec { tv_sec: -1, tv_nsec: -1 };
    let rc = unsafe { sched_abi::sched_rr_get_interval(0, &mut ts) };
    assert_eq!(rc, 0);
    assert!(ts.tv_sec >= 0);
    assert!((0..1_000_000_000).contains(&ts.tv_nsec));
}

#[test]
fn other_policy_range_round_trips_through_wrappers() {
    unsafe {
        let min = sched_abi::sched_get_priority_min(SCHED_OTHER);
        let max = sched_abi::sched_get_priority_max(SCHED_OTHER);
        for prio in min..=max {
            let param = sched_param { sched_priority: prio };
            assert_eq!(sched_abi::sched_setscheduler(0, SCHED_OTHER, &param), 0);
            assert_eq!(sched_abi::sched_getscheduler(0), SCHED_OTHER);

            let mut back = sched_param { sched_priority: -1 };
            assert_eq!(sched_abi::sched_getparam(0, &mut back), 0);
            assert_eq!(back, param);

            assert_eq!(sched_abi::sched_setparam(0, &param), 0);
            back.sched_priority = -1;
            assert_eq!(sched_abi::sched_getparam(0, &mut back), 0);
            assert_eq!(back, param);

            let mut native: libc::sched_param = std::mem::zeroed();
            assert_eq!(libc::sched_getparam(0, &mut native), 0);
            assert_eq!(native.sched_priority, prio);
        }
    }
}

#[test]
fn out_of_range_priority_matches_native_errno() {
    let max = unsafe { sched_abi::sched_get_priority_max(SCHED_OTHER) };
    let param = sched_param { sched_priority: max + 1 };
    set_errno(0);
    let ours = unsafe { sched_abi::sched_setscheduler(0, SCHED_OTHER, &param) };
    let ours_errno = get_errno();

    let native = param_to_native(&param);
    set_errno(0);
    let theirs = unsafe { libc::sched_setscheduler(0, SCHED_OTHER, &native) };
    assert_eq!((ours, ours_errno), (theirs, get_errno()));
    assert_eq!(ours, -1);
    assert_eq!(ours_errno, libc::EINVAL);
}

#[test]
fn realtime_policies_round_trip_or_pass_eperm_through() {
    for policy in [SCHED_FIFO, SCHED_RR] {
        unsafe {
            let prio = sched_abi::sched_get_priority_min(policy);
            let param = sched_param { sched_priority: prio };
            set_errno(0);
            let ours = sched_abi::sched_setscheduler(0, policy, &param);
            let ours_errno = get_errno();

            if ours == 0 {
                assert_eq!(sched_abi::sched_getscheduler(0), policy);
                let mut back = sched_param { sched_priority: -1 };
                assert_eq!(sched_abi::sched_getparam(0, &mut back), 0);
                assert_eq!(back, param);
                let other = sched_param { sched_priority: 0 };
                assert_eq!(sched_abi::sched_setscheduler(0, SCHED_OTHER, &other), 0);
                continue;
            }

            // Unprivileged: the native refusal must come back untouched.
            assert_eq!(ours, -1, "policy {policy}");
            assert_eq!(ours_errno, libc::EPERM, "policy {policy}");
            let native = param_to_native(&param);
            set_errno(0);
            assert_eq!(libc::sched_setscheduler(0, policy, &native), -1);
            assert_eq!(get_errno(), ours_errno);
            assert_eq!(sched_abi::sched_getscheduler(0), SCHED_OTHER);
        }
    }
}
