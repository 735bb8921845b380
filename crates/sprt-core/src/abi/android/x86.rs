//! Bionic, x86 (32-bit).

use core::ffi::{c_char, c_int, c_long, c_uint, c_ulong, c_ulonglong, c_void};
use core::mem::{offset_of, size_of};

use crate::abi::timespec;

pub type time_t = i32;
pub type suseconds_t = i32;
pub type off_t = i32;
pub type ino_t = c_ulong;
pub type nlink_t = u32;
pub type mode_t = u16;
pub type blksize_t = c_ulong;
pub type blkcnt_t = c_ulonglong;
pub type wchar_t = i32;
pub type wint_t = u32;

/// `__STAT64_BODY` for 32-bit kernels: the real inode number trails the
/// structure, `__st_ino` is its truncated copy.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: c_ulonglong,
    pub __pad0: [u8; 4],
    pub __st_ino: c_ulong,
    pub st_mode: c_uint,
    pub st_nlink: nlink_t,
    pub st_uid: c_uint,
    pub st_gid: c_uint,
    pub st_rdev: c_ulonglong,
    pub __pad3: [u8; 4],
    pub st_size: i64,
    pub st_blksize: c_ulong,
    pub st_blocks: c_ulonglong,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub st_ino: c_ulonglong,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __control: u16,
    pub __mxcsr_hi: u16,
    pub __status: u16,
    pub __mxcsr_lo: u16,
    pub __tag: u32,
    pub __other: [c_char; 16],
}

pub type fexcept_t = u16;

pub const FE_INVALID: c_int = 0x01;
pub const FE_DENORMAL: c_int = 0x02;
pub const FE_DIVBYZERO: c_int = 0x04;
pub const FE_OVERFLOW: c_int = 0x08;
pub const FE_UNDERFLOW: c_int = 0x10;
pub const FE_INEXACT: c_int = 0x20;
pub const FE_ALL_EXCEPT: c_int =
    FE_DIVBYZERO | FE_DENORMAL | FE_INEXACT | FE_INVALID | FE_OVERFLOW | FE_UNDERFLOW;

pub const FE_TONEAREST: c_int = 0x000;
pub const FE_DOWNWARD: c_int = 0x400;
pub const FE_UPWARD: c_int = 0x800;
pub const FE_TOWARDZERO: c_int = 0xc00;

pub type jmp_buf = [c_long; 10];
pub type sigjmp_buf = [c_long; 11];

pub const RTLD_NOW: c_int = 0;
pub const RTLD_GLOBAL: c_int = 2;
pub const RTLD_DEFAULT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX);
pub const RTLD_NEXT: *mut c_void = core::ptr::without_provenance_mut(usize::MAX - 1);

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct mbstate_t {
    pub __seq: [u8; 4],
}

pub const O_DIRECTORY: c_int = 0o200000;
pub const O_NOFOLLOW: c_int = 0o400000;
pub const O_TMPFILE: c_int = 0o20000000 | O_DIRECTORY;

const _: () = {
    assert!(size_of::<stat>() == 96);
    assert!(offset_of!(stat, st_size) == 44);
    assert!(offset_of!(stat, st_atim) == 64);
    assert!(offset_of!(stat, st_ino) == 88);
    assert!(size_of::<fenv_t>() == 28);
    assert!(size_of::<jmp_buf>() == 40);
    assert!(size_of::<super::dirent>() == 276);
};
