//! Universal CRT on Windows.
//!
//! The CRT exports none of the POSIX functions the runtime wraps, so this
//! leaf provides layouts and constants only. Where the CRT has no definition
//! at all (`dirent`, `sched_param`, the `LC_*_MASK` family) the runtime's own
//! definition is used.

use core::ffi::{c_char, c_int, c_long, c_short, c_uint, c_ulong, c_ushort, c_void};
use core::mem::{offset_of, size_of};

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("sprt: no Windows ABI leaf for this architecture");

pub type time_t = i64;
pub type suseconds_t = c_long;
pub type off_t = c_long;
pub type ino_t = c_ushort;
pub type dev_t = c_uint;
pub type nlink_t = c_short;
pub type mode_t = c_ushort;
pub type blksize_t = i64;
pub type blkcnt_t = i64;
pub type pid_t = c_int;
pub type uid_t = c_uint;
pub type gid_t = c_uint;
pub type id_t = c_uint;
pub type useconds_t = c_uint;
pub type clockid_t = c_int;
pub type ssize_t = isize;
pub type wchar_t = u16;
pub type wint_t = u16;
pub type sa_family_t = c_ushort;
pub type socklen_t = c_int;
pub type nl_catd = *mut c_void;

/// Winsock `timeval`: both members are `long`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct timeval {
    pub tv_sec: c_long,
    pub tv_usec: c_long,
}

/// `struct _stat64`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: dev_t,
    pub st_ino: ino_t,
    pub st_mode: mode_t,
    pub st_nlink: nlink_t,
    pub st_uid: c_short,
    pub st_gid: c_short,
    pub st_rdev: dev_t,
    pub st_size: i64,
    pub st_atime: time_t,
    pub st_mtime: time_t,
    pub st_ctime: time_t,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct dirent {
    pub d_ino: u64,
    pub d_off: i64,
    pub d_reclen: c_ushort,
    pub d_type: u8,
    pub d_name: [c_char; 256],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sockaddr {
    pub sa_family: sa_family_t,
    pub sa_data: [c_char; 14],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sockaddr_storage {
    pub ss_family: sa_family_t,
    pub __ss_pad1: [c_char; 6],
    pub __ss_align: i64,
    pub __ss_pad2: [c_char; 112],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(non_snake_case)]
pub struct mbstate_t {
    pub _Wchar: c_ulong,
    pub _Byte: c_ushort,
    pub _State: c_ushort,
}

pub enum __crt_locale_pointers {}
pub type locale_t = *mut __crt_locale_pointers;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[allow(non_snake_case)]
pub struct lconv {
    pub decimal_point: *mut c_char,
    pub thousands_sep: *mut c_char,
    pub grouping: *mut c_char,
    pub int_curr_symbol: *mut c_char,
    pub currency_symbol: *mut c_char,
    pub mon_decimal_point: *mut c_char,
    pub mon_thousands_sep: *mut c_char,
    pub mon_grouping: *mut c_char,
    pub positive_sign: *mut c_char,
    pub negative_sign: *mut c_char,
    pub int_frac_digits: c_char,
    pub frac_digits: c_char,
    pub p_cs_precedes: c_char,
    pub p_sep_by_space: c_char,
    pub n_cs_precedes: c_char,
    pub n_sep_by_space: c_char,
    pub p_sign_posn: c_char,
    pub n_sign_posn: c_char,
    pub _W_decimal_point: *mut wchar_t,
    pub _W_thousands_sep: *mut wchar_t,
    pub _W_int_curr_symbol: *mut wchar_t,
    pub _W_currency_symbol: *mut wchar_t,
    pub _W_mon_decimal_point: *mut wchar_t,
    pub _W_mon_thousands_sep: *mut wchar_t,
    pub _W_positive_sign: *mut wchar_t,
    pub _W_negative_sign: *mut wchar_t,
}

pub const LC_ALL: c_int = 0;
pub const LC_COLLATE: c_int = 1;
pub const LC_CTYPE: c_int = 2;
pub const LC_MONETARY: c_int = 3;
pub const LC_NUMERIC: c_int = 4;
pub const LC_TIME: c_int = 5;
pub const LC_MESSAGES: c_int = 6;

pub const LC_COLLATE_MASK: c_int = 1 << LC_COLLATE;
pub const LC_CTYPE_MASK: c_int = 1 << LC_CTYPE;
pub const LC_MONETARY_MASK: c_int = 1 << LC_MONETARY;
pub const LC_NUMERIC_MASK: c_int = 1 << LC_NUMERIC;
pub const LC_TIME_MASK: c_int = 1 << LC_TIME;
pub const LC_MESSAGES_MASK: c_int = 1 << LC_MESSAGES;
pub const LC_ALL_MASK: c_int = LC_COLLATE_MASK
    | LC_CTYPE_MASK
    | LC_MONETARY_MASK
    | LC_NUMERIC_MASK
    | LC_TIME_MASK
    | LC_MESSAGES_MASK;

pub const RTLD_LAZY: c_int = 0x00001;
pub const RTLD_NOW: c_int = 0x00002;
pub const RTLD_NOLOAD: c_int = 0x00004;
pub const RTLD_GLOBAL: c_int = 0x00100;
pub const RTLD_LOCAL: c_int = 0;
pub const RTLD_NODELETE: c_int = 0x01000;
pub const RTLD_DEFAULT: *mut c_void = core::ptr::null_mut();
pub const RTLD_NEXT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX);

pub const SCHED_OTHER: c_int = 0;
pub const SCHED_FIFO: c_int = 1;
pub const SCHED_RR: c_int = 2;

pub const AF_INET6: c_int = 23;

pub const PATH_MAX: c_int = 260;

pub const UTIME_NOW: c_long = (1 << 30) - 1;
pub const UTIME_OMIT: c_long = (1 << 30) - 2;

pub const AT_FDCWD: c_int = -100;
pub const AT_SYMLINK_NOFOLLOW: c_int = 0x100;

// `_O_*` from the CRT; the POSIX-only bits take values the CRT leaves unused.
pub const O_APPEND: c_int = 0x0008;
pub const O_CLOEXEC: c_int = 0x0080;
pub const O_CREAT: c_int = 0x0100;
pub const O_TRUNC: c_int = 0x0200;
pub const O_EXCL: c_int = 0x0400;
pub const O_NONBLOCK: c_int = 0x10_0000;
pub const O_NOCTTY: c_int = 0x20_0000;
pub const O_DIRECTORY: c_int = 0x40_0000;
pub const O_NOFOLLOW: c_int = 0x80_0000;

pub const F_DUPFD_CLOEXEC: c_int = 1030;

pub const MAP_ANONYMOUS: c_int = 0x20;
pub const MAP_ANON: c_int = MAP_ANONYMOUS;

pub const MS_ASYNC: c_int = 1;
pub const MS_INVALIDATE: c_int = 2;
pub const MS_SYNC: c_int = 4;

pub const CLOCK_MONOTONIC: clockid_t = 1;
pub const CLOCK_PROCESS_CPUTIME_ID: clockid_t = 2;
pub const CLOCK_THREAD_CPUTIME_ID: clockid_t = 3;

pub type clock_t = c_long;
pub const CLOCKS_PER_SEC: clock_t = 1000;

pub const _SC_ARG_MAX: c_int = 0;
pub const _SC_CHILD_MAX: c_int = 1;
pub const _SC_CLK_TCK: c_int = 2;
pub const _SC_NGROUPS_MAX: c_int = 3;
pub const _SC_OPEN_MAX: c_int = 4;
pub const _SC_PAGESIZE: c_int = 30;
pub const _SC_PAGE_SIZE: c_int = _SC_PAGESIZE;
pub const _SC_NPROCESSORS_CONF: c_int = 83;
pub const _SC_NPROCESSORS_ONLN: c_int = 84;

/// `_FPCSR`-style control and status words.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(non_snake_case)]
pub struct fenv_t {
    pub _Fe_ctl: c_ulong,
    pub _Fe_stat: c_ulong,
}

pub type fexcept_t = c_ulong;

pub const FE_INEXACT: c_int = 0x01;
pub const FE_UNDERFLOW: c_int = 0x02;
pub const FE_OVERFLOW: c_int = 0x04;
pub const FE_DIVBYZERO: c_int = 0x08;
pub const FE_INVALID: c_int = 0x10;
pub const FE_ALL_EXCEPT: c_int =
    FE_DIVBYZERO | FE_INEXACT | FE_INVALID | FE_OVERFLOW | FE_UNDERFLOW;

pub const FE_TONEAREST: c_int = 0x0000;
pub const FE_UPWARD: c_int = 0x0200;
pub const FE_DOWNWARD: c_int = 0x0100;
pub const FE_TOWARDZERO: c_int = 0x0300;

const _: () = {
    assert!(size_of::<stat>() == 56);
    assert!(offset_of!(stat, st_rdev) == 16);
    assert!(offset_of!(stat, st_size) == 24);
    assert!(offset_of!(stat, st_ctime) == 48);
    assert!(size_of::<dirent>() == 280);
    assert!(size_of::<sockaddr>() == 16);
    assert!(size_of::<sockaddr_storage>() == 128);
    assert!(size_of::<mbstate_t>() == 8);
    assert!(size_of::<timeval>() == 8);
    assert!(size_of::<fenv_t>() == 8);
};
