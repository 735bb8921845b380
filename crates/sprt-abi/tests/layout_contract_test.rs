//! Runtime structure layouts and constants against the native `libc`
//! definitions on glibc hosts.

#![cfg(all(target_os = "linux", target_env = "gnu"))]

use std::mem::{offset_of, size_of, size_of_val};

use sprt_abi::sprt;

macro_rules! assert_same_layout {
    ($ours:ty, $theirs:ty { $($field:ident $(=> $native_field:ident)?),* $(,)? }) => {{
        assert_eq!(
            size_of::<$ours>(),
            size_of::<$theirs>(),
            concat!("size of ", stringify!($ours))
        );
        assert_eq!(
            std::mem::align_of::<$ours>(),
            std::mem::align_of::<$theirs>(),
            concat!("align of ", stringify!($ours))
        );
        $(
            assert_same_layout!(@field $ours, $theirs, $field $(=> $native_field)?);
        )*
    }};
    (@field $ours:ty, $theirs:ty, $field:ident) => {
        assert_eq!(
            offset_of!($ours, $field),
            offset_of!($theirs, $field),
            concat!(stringify!($ours), ".", stringify!($field))
        );
    };
    (@field $ours:ty, $theirs:ty, $field:ident => $native_field:ident) => {
        assert_eq!(
            offset_of!($ours, $field),
            offset_of!($theirs, $native_field),
            concat!(stringify!($ours), ".", stringify!($field))
        );
    };
}

#[test]
fn stat_matches_stat64() {
    assert_same_layout!(sprt::stat, libc::stat64 {
        st_dev, st_ino, st_nlink, st_mode, st_uid, st_gid, st_rdev, st_size, st_blksize,
        st_blocks, st_atim => st_atime, st_mtim => st_mtime, st_ctim => st_ctime,
    });
}

#[test]
fn dirent_matches_dirent64() {
    assert_same_layout!(sprt::dirent, libc::dirent64 {
        d_ino, d_off, d_reclen, d_type, d_name,
    });
    let ent: sprt::dirent = unsafe { std::mem::zeroed() };
    assert_eq!(size_of_val(&ent.d_name), 256);
    assert_eq!(ent.d_fileno(), ent.d_ino);
}

#[test]
fn time_structures_match() {
    assert_same_layout!(sprt::timespec, libc::timespec { tv_sec, tv_nsec });
    assert_same_layout!(sprt::timeval, libc::timeval { tv_sec, tv_usec });
    assert_same_layout!(sprt::itimerval, libc::itimerval { it_interval, it_value });
    assert_same_layout!(sprt::utimbuf, libc::utimbuf { actime, modtime });
    assert_same_layout!(sprt::tm, libc::tm {
        tm_sec, tm_min, tm_hour, tm_mday, tm_mon, tm_year, tm_wday, tm_yday, tm_isdst,
        tm_gmtoff, tm_zone,
    });
}

#[test]
fn socket_structures_match() {
    assert_same_layout!(sprt::sockaddr, libc::sockaddr { sa_family, sa_data });
    assert_same_layout!(sprt::sockaddr_storage, libc::sockaddr_storage { ss_family });
}

#[test]
fn misc_structures_match() {
    assert_same_layout!(sprt::sched_param, libc::sched_param { sched_priority });
    assert_same_layout!(sprt::Dl_info, libc::Dl_info {
        dli_fname, dli_fbase, dli_sname, dli_saddr,
    });
    assert_eq!(size_of::<sprt::mbstate_t>(), 8);
    assert_same_layout!(sprt::lconv, libc::lconv {
        decimal_point, thousands_sep, grouping, int_curr_symbol, currency_symbol,
        int_frac_digits, int_p_cs_precedes, int_n_sign_posn,
    });
}

#[test]
fn scalar_types_match() {
    assert_eq!(size_of::<sprt::time_t>(), size_of::<libc::time_t>());
    assert_eq!(size_of::<sprt::off_t>(), size_of::<libc::off64_t>());
    assert_eq!(size_of::<sprt::ino_t>(), size_of::<libc::ino64_t>());
    assert_eq!(size_of::<sprt::dev_t>(), size_of::<libc::dev_t>());
    assert_eq!(size_of::<sprt::mode_t>(), size_of::<libc::mode_t>());
    assert_eq!(size_of::<sprt::nlink_t>(), size_of::<libc::nlink_t>());
    assert_eq!(size_of::<sprt::pid_t>(), size_of::<libc::pid_t>());
    assert_eq!(size_of::<sprt::uid_t>(), size_of::<libc::uid_t>());
    assert_eq!(size_of::<sprt::suseconds_t>(), size_of::<libc::suseconds_t>());
    assert_eq!(size_of::<sprt::socklen_t>(), size_of::<libc::socklen_t>());
    assert_eq!(size_of::<sprt::wchar_t>(), size_of::<libc::wchar_t>());
    assert_eq!(size_of::<sprt::clock_t>(), size_of::<libc::clock_t>());
    assert_eq!(size_of::<sprt::clockid_t>(), size_of::<libc::clockid_t>());
    assert_eq!(size_of::<sprt::ssize_t>(), size_of::<libc::ssize_t>());
}

#[test]
fn thread_without_uselocale_reports_global_locale() {
    // A fresh test thread has never called uselocale, so the query form
    // hands back the global sentinel.
    let current = std::thread::spawn(|| unsafe { libc::uselocale(std::ptr::null_mut()) }.addr())
        .join()
        .unwrap();
    assert_eq!(current, sprt::LC_GLOBAL_LOCALE.addr());
}

#[test]
fn constants_match() {
    assert_eq!(sprt::DT_DIR, 4);
    assert_eq!(sprt::DT_DIR, libc::DT_DIR);
    assert_eq!(sprt::DT_REG, libc::DT_REG);
    assert_eq!(sprt::DT_LNK, libc::DT_LNK);

    assert_eq!(sprt::SCHED_OTHER, libc::SCHED_OTHER);
    assert_eq!(sprt::SCHED_FIFO, libc::SCHED_FIFO);
    assert_eq!(sprt::SCHED_RR, libc::SCHED_RR);

    assert_eq!(sprt::RTLD_LAZY, libc::RTLD_LAZY);
    assert_eq!(sprt::RTLD_NOW, libc::RTLD_NOW);
    assert_eq!(sprt::RTLD_GLOBAL, libc::RTLD_GLOBAL);
    assert_eq!(sprt::RTLD_LOCAL, libc::RTLD_LOCAL);
    assert_eq!(sprt::RTLD_DEFAULT, libc::RTLD_DEFAULT);
    assert_eq!(sprt::RTLD_NEXT, libc::RTLD_NEXT);

    assert_eq!(sprt::LC_CTYPE, libc::LC_CTYPE);
    assert_eq!(sprt::LC_ALL, libc::LC_ALL);
    assert_eq!(sprt::LC_ALL_MASK, libc::LC_ALL_MASK);
    // glibc spells it `(locale_t) -1`; the `libc` crate does not export it.
    assert_eq!(sprt::LC_GLOBAL_LOCALE.addr(), usize::MAX);

    assert_eq!(sprt::AF_UNIX, libc::AF_UNIX);
    assert_eq!(sprt::AF_INET6, libc::AF_INET6);
    assert_eq!(sprt::PATH_MAX, libc::PATH_MAX);
    assert_eq!(sprt::UTIME_NOW, libc::UTIME_NOW);
    assert_eq!(sprt::UTIME_OMIT, libc::UTIME_OMIT);
    assert_eq!(sprt::AT_FDCWD, libc::AT_FDCWD);
    assert_eq!(sprt::AT_SYMLINK_NOFOLLOW, libc::AT_SYMLINK_NOFOLLOW);
    assert_eq!(sprt::ITIMER_PROF, libc::ITIMER_PROF);

    assert_eq!(sprt::S_IFMT, libc::S_IFMT);
    assert_eq!(sprt::S_IFDIR, libc::S_IFDIR);
    assert_eq!(sprt::S_IRWXU, libc::S_IRWXU);
    assert_eq!(sprt::ENOSYS, libc::ENOSYS);

    assert_eq!(sprt::O_CREAT, libc::O_CREAT);
    assert_eq!(sprt::O_DIRECTORY, libc::O_DIRECTORY);
    assert_eq!(sprt::O_TMPFILE, libc::O_TMPFILE);
    assert_eq!(sprt::O_SYNC, libc::O_SYNC);
    assert_eq!(sprt::F_DUPFD_CLOEXEC, libc::F_DUPFD_CLOEXEC);
    assert_eq!(sprt::MAP_ANONYMOUS, libc::MAP_ANONYMOUS);
    assert_eq!(sprt::MAP_FIXED, libc::MAP_FIXED);
    assert_eq!(sprt::MS_INVALIDATE, libc::MS_INVALIDATE);
    assert_eq!(sprt::MADV_SEQUENTIAL, libc::MADV_SEQUENTIAL);
    assert_eq!(sprt::MAP_FAILED, libc::MAP_FAILED);
    assert_eq!(sprt::CLOCK_BOOTTIME, libc::CLOCK_BOOTTIME);
    assert_eq!(sprt::CLOCK_MONOTONIC_RAW, libc::CLOCK_MONOTONIC_RAW);
    assert_eq!(sprt::_SC_CLK_TCK, libc::_SC_CLK_TCK);
    assert_eq!(sprt::_SC_NPROCESSORS_CONF, libc::_SC_NPROCESSORS_CONF);
    assert_eq!(sprt::STDERR_FILENO, libc::STDERR_FILENO);
    assert_eq!(sprt::X_OK, libc::X_OK);
    assert_eq!(sprt::SEEK_END, libc::SEEK_END);
}
