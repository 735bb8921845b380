//! Bionic, x86_64.

use core::ffi::{c_int, c_long, c_uint, c_ulong, c_void};
use core::mem::{offset_of, size_of};

use crate::abi::timespec;

pub type time_t = i64;
pub type suseconds_t = i64;
pub type off_t = i64;
pub type ino_t = u64;
pub type nlink_t = u32;
pub type mode_t = u32;
pub type blksize_t = i64;
pub type blkcnt_t = i64;
pub type wchar_t = i32;
pub type wint_t = u32;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: c_ulong,
    pub st_ino: c_ulong,
    pub st_nlink: c_ulong,
    pub st_mode: c_uint,
    pub st_uid: c_uint,
    pub st_gid: c_uint,
    pub __pad0: c_uint,
    pub st_rdev: c_ulong,
    pub st_size: c_long,
    pub st_blksize: c_long,
    pub st_blocks: c_long,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub __pad3: [c_long; 3],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct __x87_state {
    pub __control: u32,
    pub __status: u32,
    pub __tag: u32,
    pub __others: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __x87: __x87_state,
    pub __mxcsr: u32,
}

pub type fexcept_t = u32;

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

pub type jmp_buf = [c_long; 11];
pub type sigjmp_buf = [c_long; 12];

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

pub const O_DIRECTORY: c_int = 0o200000;
pub const O_NOFOLLOW: c_int = 0o400000;
pub const O_TMPFILE: c_int = 0o20000000 | O_DIRECTORY;

const _: () = {
    assert!(size_of::<stat>() == 144);
    assert!(offset_of!(stat, st_mode) == 24);
    assert!(offset_of!(stat, st_size) == 48);
    assert!(offset_of!(stat, st_atim) == 72);
    assert!(size_of::<fenv_t>() == 32);
    assert!(size_of::<jmp_buf>() == 88);
    assert!(size_of::<super::dirent>() == 280);
};
