//! `<sys/time.h>` timer arithmetic.
//!
//! Pure helpers over the leaf's `timeval` and `timespec`. The calls that
//! reach the clock live in the ABI crate.

use core::cmp::Ordering;

use crate::abi::{timespec, timeval};

pub const USEC_PER_SEC: i64 = 1_000_000;
pub const NSEC_PER_USEC: i64 = 1_000;

/// `timerisset`
#[must_use]
pub fn timerisset(tv: &timeval) -> bool {
    tv.tv_sec != 0 || tv.tv_usec != 0
}

/// `timerclear`
pub fn timerclear(tv: &mut timeval) {
    tv.tv_sec = 0;
    tv.tv_usec = 0;
}

/// `timercmp`, as a total order on normalized values.
#[must_use]
pub fn timercmp(a: &timeval, b: &timeval) -> Ordering {
    (a.tv_sec, a.tv_usec).cmp(&(b.tv_sec, b.tv_usec))
}

/// `timeradd`; the result's microseconds are normalized into `[0, 1s)`.
#[must_use]
pub fn timeradd(a: &timeval, b: &timeval) -> timeval {
    normalize(
        i64::from(a.tv_sec) + i64::from(b.tv_sec),
        i64::from(a.tv_usec) + i64::from(b.tv_usec),
    )
}

/// `timersub`; the result's microseconds are normalized into `[0, 1s)`.
#[must_use]
pub fn timersub(a: &timeval, b: &timeval) -> timeval {
    normalize(
        i64::from(a.tv_sec) - i64::from(b.tv_sec),
        i64::from(a.tv_usec) - i64::from(b.tv_usec),
    )
}

fn normalize(mut sec: i64, mut usec: i64) -> timeval {
    sec += usec.div_euclid(USEC_PER_SEC);
    usec = usec.rem_euclid(USEC_PER_SEC);
    timeval {
        tv_sec: sec as _,
        tv_usec: usec as _,
    }
}

/// `TIMEVAL_TO_TIMESPEC`
#[must_use]
pub fn timeval_to_timespec(tv: &timeval) -> timespec {
    timespec {
        tv_sec: tv.tv_sec as _,
        tv_nsec: (i64::from(tv.tv_usec) * NSEC_PER_USEC) as _,
    }
}

/// `TIMESPEC_TO_TIMEVAL`; sub-microsecond precision is truncated.
#[must_use]
pub fn timespec_to_timeval(ts: &timespec) -> timeval {
    timeval {
        tv_sec: ts.tv_sec as _,
        tv_usec: (i64::from(ts.tv_nsec) / NSEC_PER_USEC) as _,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tv(sec: i64, usec: i64) -> timeval {
        timeval {
            tv_sec: sec as _,
            tv_usec: usec as _,
        }
    }

    #[test]
    fn add_carries_microseconds() {
        assert_eq!(timeradd(&tv(1, 600_000), &tv(2, 700_000)), tv(4, 300_000));
    }

    #[test]
    fn sub_borrows_microseconds() {
        assert_eq!(timersub(&tv(3, 100_000), &tv(1, 200_000)), tv(1, 900_000));
        assert_eq!(timersub(&tv(0, 0), &tv(0, 1)), tv(-1, 999_999));
    }

    #[test]
    fn isset_and_clear() {
        let mut t = tv(0, 5);
        assert!(timerisset(&t));
        timerclear(&mut t);
        assert!(!timerisset(&t));
    }

    #[test]
    fn cmp_orders_by_seconds_then_micros() {
        assert_eq!(timercmp(&tv(1, 0), &tv(0, 999_999)), Ordering::Greater);
        assert_eq!(timercmp(&tv(1, 5), &tv(1, 6)), Ordering::Less);
        assert_eq!(timercmp(&tv(2, 2), &tv(2, 2)), Ordering::Equal);
    }

    #[test]
    fn timespec_conversions() {
        let ts = timeval_to_timespec(&tv(7, 250));
        assert_eq!(ts.tv_sec as i64, 7);
        assert_eq!(ts.tv_nsec as i64, 250_000);
        let back = timespec_to_timeval(&timespec { tv_sec: 7, tv_nsec: 250_999 });
        assert_eq!(back, tv(7, 250));
    }
}
