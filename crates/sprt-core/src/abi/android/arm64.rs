//! Bionic, arm64 (asm-generic `stat`).

use core::ffi::{c_int, c_long, c_uint, c_ulong, c_void};
use core::mem::{offset_of, size_of};

use super::dev_t;
use crate::abi::timespec;

pub type time_t = i64;
pub type suseconds_t = i64;
pub type off_t = i64;
pub type ino_t = c_ulong;
pub type nlink_t = u32;
pub type mode_t = u32;
pub type blksize_t = i32;
pub type blkcnt_t = i64;
pub type wchar_t = u32;
pub type wint_t = u32;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: dev_t,
    pub st_ino: ino_t,
    pub st_mode: mode_t,
    pub st_nlink: nlink_t,
    pub st_uid: c_uint,
    pub st_gid: c_uint,
    pub st_rdev: dev_t,
    pub __pad1: c_ulong,
    pub st_size: off_t,
    pub st_blksize: c_int,
    pub __pad2: c_int,
    pub st_blocks: c_long,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub __unused4: c_uint,
    pub __unused5: c_uint,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __control: u32,
    pub __status: u32,
}

pub type fexcept_t = u32;

pub const FE_INVALID: c_int = 0x01;
pub const FE_DIVBYZERO: c_int = 0x02;
pub const FE_OVERFLOW: c_int = 0x04;
pub const FE_UNDERFLOW: c_int = 0x08;
pub const FE_INEXACT: c_int = 0x10;
pub const FE_ALL_EXCEPT: c_int =
    FE_DIVBYZERO | FE_INEXACT | FE_INVALID | FE_OVERFLOW | FE_UNDERFLOW;

pub const FE_TONEAREST: c_int = 0x0;
pub const FE_UPWARD: c_int = 0x1;
pub const FE_DOWNWARD: c_int = 0x2;
pub const FE_TOWARDZERO: c_int = 0x3;

pub type jmp_buf = [c_long; 32];
pub type sigjmp_buf = [c_long; 33];

pub const RTLD_NOW: c_int = 0x00002;
pub const RTLD_GLOBAL: c_int = 0x00100;
pub const RTLD_DEFAULT: *mut c_void = core::ptr::null_mut();
pub const RTLD_NEXT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX);

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct mbstate_t {
    pub __seq: [u8; 4],
    pub __reserved: [u8; 4],
}

pub const O_DIRECTORY: c_int = 0o40000;
pub const O_NOFOLLOW: c_int = 0o100000;
pub const O_TMPFILE: c_int = 0o20000000 | O_DIRECTORY;

const _: () = {
    assert!(size_of::<stat>() == 128);
    assert!(offset_of!(stat, st_size) == 48);
    assert!(offset_of!(stat, st_blocks) == 64);
    assert!(offset_of!(stat, st_atim) == 72);
    assert!(size_of::<fenv_t>() == 8);
    assert!(size_of::<jmp_buf>() == 256);
    assert!(size_of::<super::dirent>() == 280);
};
