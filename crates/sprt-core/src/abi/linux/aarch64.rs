//! glibc, aarch64 (asm-generic `stat`).

use core::ffi::{c_int, c_uint, c_ulonglong};
use core::mem::{offset_of, size_of};

use super::__sigset_t;
use crate::abi::timespec;

pub type time_t = i64;
pub type suseconds_t = i64;
pub type off_t = i64;
pub type ino_t = u64;
pub type dev_t = u64;
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
    pub __pad1: dev_t,
    pub st_size: off_t,
    pub st_blksize: blksize_t,
    pub __pad2: c_int,
    pub st_blocks: blkcnt_t,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub __unused: [c_int; 2],
}

/// `fpcr` / `fpsr` pair.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __fpcr: c_uint,
    pub __fpsr: c_uint,
}

pub type fexcept_t = c_uint;

pub const FE_INVALID: c_int = 1;
pub const FE_DIVBYZERO: c_int = 2;
pub const FE_OVERFLOW: c_int = 4;
pub const FE_UNDERFLOW: c_int = 8;
pub const FE_INEXACT: c_int = 16;
pub const FE_ALL_EXCEPT: c_int =
    FE_INEXACT | FE_DIVBYZERO | FE_UNDERFLOW | FE_OVERFLOW | FE_INVALID;

pub const FE_TONEAREST: c_int = 0;
pub const FE_UPWARD: c_int = 0x0040_0000;
pub const FE_DOWNWARD: c_int = 0x0080_0000;
pub const FE_TOWARDZERO: c_int = 0x00c0_0000;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct __jmp_buf_tag {
    pub __jmpbuf: [c_ulonglong; 22],
    pub __mask_was_saved: c_int,
    pub __saved_mask: __sigset_t,
}

pub type jmp_buf = [__jmp_buf_tag; 1];
pub type sigjmp_buf = [__jmp_buf_tag; 1];

pub const O_DIRECTORY: c_int = 0o40000;
pub const O_NOFOLLOW: c_int = 0o100000;
pub const O_TMPFILE: c_int = 0o20000000 | O_DIRECTORY;

const _: () = {
    assert!(size_of::<stat>() == 128);
    assert!(offset_of!(stat, st_mode) == 16);
    assert!(offset_of!(stat, st_size) == 48);
    assert!(offset_of!(stat, st_blksize) == 56);
    assert!(offset_of!(stat, st_blocks) == 64);
    assert!(offset_of!(stat, st_atim) == 72);
    assert!(size_of::<fenv_t>() == 8);
    assert!(size_of::<jmp_buf>() == 312);
};
