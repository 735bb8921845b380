//! Apple libSystem on macOS.

use core::ffi::{c_char, c_int, c_long, c_uint, c_ulong, c_void};
use core::mem::{offset_of, size_of};

use crate::abi::timespec;

#[cfg(target_arch = "x86_64")]
mod x86_64;
#[cfg(target_arch = "x86_64")]
pub use x86_64::*;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "aarch64")]
pub use aarch64::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
compile_error!("sprt: no macOS ABI leaf for this architecture");

pub type time_t = c_long;
pub type suseconds_t = i32;
pub type off_t = i64;
pub type ino_t = u64;
pub type dev_t = i32;
pub type nlink_t = u16;
pub type mode_t = u16;
pub type blksize_t = i32;
pub type blkcnt_t = i64;
pub type pid_t = c_int;
pub type uid_t = u32;
pub type gid_t = u32;
pub type id_t = u32;
pub type useconds_t = u32;
pub type clockid_t = c_uint;
pub type ssize_t = isize;
pub type wchar_t = i32;
pub type wint_t = i32;
pub type sa_family_t = u8;
pub type socklen_t = u32;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct timeval {
    pub tv_sec: time_t,
    pub tv_usec: suseconds_t,
}

/// 64-bit inode `struct stat`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: dev_t,
    pub st_mode: mode_t,
    pub st_nlink: nlink_t,
    pub st_ino: ino_t,
    pub st_uid: uid_t,
    pub st_gid: gid_t,
    pub st_rdev: dev_t,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub st_birthtim: timespec,
    pub st_size: off_t,
    pub st_blocks: blkcnt_t,
    pub st_blksize: blksize_t,
    pub st_flags: u32,
    pub st_gen: u32,
    pub st_lspare: i32,
    pub st_qspare: [i64; 2],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct dirent {
    pub d_ino: u64,
    pub d_seekoff: u64,
    pub d_reclen: u16,
    pub d_namlen: u16,
    pub d_type: u8,
    pub d_name: [c_char; 1024],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sockaddr {
    pub sa_len: u8,
    pub sa_family: sa_family_t,
    pub sa_data: [c_char; 14],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct sockaddr_storage {
    pub ss_len: u8,
    pub ss_family: sa_family_t,
    pub __ss_pad1: [c_char; 6],
    pub __ss_align: i64,
    pub __ss_pad2: [c_char; 112],
}

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(non_snake_case)]
pub union mbstate_t {
    pub __mbstate8: [c_char; 128],
    pub _mbstateL: i64,
}

pub enum _xlocale {}
pub type locale_t = *mut _xlocale;

pub enum __nl_cat_d {}
pub type nl_catd = *mut __nl_cat_d;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
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
    pub int_p_cs_precedes: c_char,
    pub int_n_cs_precedes: c_char,
    pub int_p_sep_by_space: c_char,
    pub int_n_sep_by_space: c_char,
    pub int_p_sign_posn: c_char,
    pub int_n_sign_posn: c_char,
}

pub const LC_ALL: c_int = 0;
pub const LC_COLLATE: c_int = 1;
pub const LC_CTYPE: c_int = 2;
pub const LC_MONETARY: c_int = 3;
pub const LC_NUMERIC: c_int = 4;
pub const LC_TIME: c_int = 5;
pub const LC_MESSAGES: c_int = 6;

pub const LC_COLLATE_MASK: c_int = 1 << 0;
pub const LC_CTYPE_MASK: c_int = 1 << 1;
pub const LC_MESSAGES_MASK: c_int = 1 << 2;
pub const LC_MONETARY_MASK: c_int = 1 << 3;
pub const LC_NUMERIC_MASK: c_int = 1 << 4;
pub const LC_TIME_MASK: c_int = 1 << 5;
pub const LC_ALL_MASK: c_int = LC_COLLATE_MASK
    | LC_CTYPE_MASK
    | LC_MESSAGES_MASK
    | LC_MONETARY_MASK
    | LC_NUMERIC_MASK
    | LC_TIME_MASK;

pub const RTLD_LAZY: c_int = 0x1;
pub const RTLD_NOW: c_int = 0x2;
pub const RTLD_LOCAL: c_int = 0x4;
pub const RTLD_GLOBAL: c_int = 0x8;
pub const RTLD_NOLOAD: c_int = 0x10;
pub const RTLD_NODELETE: c_int = 0x80;
pub const RTLD_FIRST: c_int = 0x100;
pub const RTLD_NEXT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX);
pub const RTLD_DEFAULT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX - 1);
pub const RTLD_SELF: *mut c_void = core::ptr::without_provenance_mut(usize::MAX - 2);
pub const RTLD_MAIN_ONLY: *mut c_void = core::ptr::without_provenance_mut(usize::MAX - 4);

pub const SCHED_OTHER: c_int = 1;
pub const SCHED_RR: c_int = 2;
pub const SCHED_FIFO: c_int = 4;

pub const AF_INET6: c_int = 30;

pub const PATH_MAX: c_int = 1024;

pub const UTIME_NOW: c_long = -1;
pub const UTIME_OMIT: c_long = -2;

pub const AT_FDCWD: c_int = -2;
pub const AT_SYMLINK_NOFOLLOW: c_int = 0x20;

pub const O_NONBLOCK: c_int = 0x0004;
pub const O_APPEND: c_int = 0x0008;
pub const O_SYNC: c_int = 0x0080;
pub const O_NOFOLLOW: c_int = 0x0100;
pub const O_CREAT: c_int = 0x0200;
pub const O_TRUNC: c_int = 0x0400;
pub const O_EXCL: c_int = 0x0800;
pub const O_NOCTTY: c_int = 0x2_0000;
pub const O_DIRECTORY: c_int = 0x10_0000;
pub const O_DSYNC: c_int = 0x40_0000;
pub const O_CLOEXEC: c_int = 0x100_0000;

pub const F_DUPFD_CLOEXEC: c_int = 67;

pub const MAP_ANONYMOUS: c_int = 0x1000;
pub const MAP_ANON: c_int = MAP_ANONYMOUS;

pub const MS_ASYNC: c_int = 0x01;
pub const MS_INVALIDATE: c_int = 0x02;
pub const MS_SYNC: c_int = 0x10;

pub const CLOCK_MONOTONIC_RAW: clockid_t = 4;
pub const CLOCK_MONOTONIC: clockid_t = 6;
pub const CLOCK_PROCESS_CPUTIME_ID: clockid_t = 12;
pub const CLOCK_THREAD_CPUTIME_ID: clockid_t = 16;

pub type clock_t = c_ulong;
pub const CLOCKS_PER_SEC: clock_t = 1_000_000;

pub const _SC_ARG_MAX: c_int = 1;
pub const _SC_CHILD_MAX: c_int = 2;
pub const _SC_CLK_TCK: c_int = 3;
pub const _SC_NGROUPS_MAX: c_int = 4;
pub const _SC_OPEN_MAX: c_int = 5;
pub const _SC_PAGESIZE: c_int = 29;
pub const _SC_PAGE_SIZE: c_int = _SC_PAGESIZE;
pub const _SC_NPROCESSORS_CONF: c_int = 57;
pub const _SC_NPROCESSORS_ONLN: c_int = 58;

const _: () = {
    assert!(size_of::<stat>() == 144);
    assert!(offset_of!(stat, st_ino) == 8);
    assert!(offset_of!(stat, st_atim) == 32);
    assert!(offset_of!(stat, st_birthtim) == 80);
    assert!(offset_of!(stat, st_size) == 96);
    assert!(offset_of!(stat, st_blksize) == 112);
    assert!(offset_of!(stat, st_qspare) == 128);
    assert!(size_of::<dirent>() == 1048);
    assert!(offset_of!(dirent, d_name) == 21);
    assert!(size_of::<sockaddr>() == 16);
    assert!(size_of::<sockaddr_storage>() == 128);
    assert!(size_of::<mbstate_t>() == 128);
    assert!(size_of::<timeval>() == 16);
};
