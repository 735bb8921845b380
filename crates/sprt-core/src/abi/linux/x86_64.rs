//! glibc, x86_64.

use core::ffi::{c_int, c_long, c_uint, c_ushort};
use core::mem::{offset_of, size_of};

use super::__sigset_t;
use crate::abi::timespec;

pub type time_t = i64;
pub type suseconds_t = i64;
pub type off_t = i64;
pub type ino_t = u64;
pub type dev_t = u64;
pub type nlink_t = u64;
pub type mode_t = u32;
pub type blksize_t = i64;
pub type blkcnt_t = i64;
pub type wchar_t = i32;
pub type wint_t = u32;

/// `struct stat64`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct stat {
    pub st_dev: dev_t,
    pub st_ino: ino_t,
    pub st_nlink: nlink_t,
    pub st_mode: mode_t,
    pub st_uid: c_uint,
    pub st_gid: c_uint,
    pub __pad0: c_int,
    pub st_rdev: dev_t,
    pub st_size: off_t,
    pub st_blksize: blksize_t,
    pub st_blocks: blkcnt_t,
    pub st_atim: timespec,
    pub st_mtim: timespec,
    pub st_ctim: timespec,
    pub __unused: [c_long; 3],
}

/// x87 control/status words followed by SSE `mxcsr`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __control_word: c_ushort,
    pub __glibc_reserved1: c_ushort,
    pub __status_word: c_ushort,
    pub __glibc_reserved2: c_ushort,
    pub __tags: c_ushort,
    pub __glibc_reserved3: c_ushort,
    pub __eip: c_uint,
    pub __cs_selector: c_ushort,
    pub __opcode: c_ushort,
    pub __data_offset: c_uint,
    pub __data_selector: c_ushort,
    pub __glibc_reserved5: c_ushort,
    pub __mxcsr: c_uint,
}

pub type fexcept_t = c_ushort;

pub const FE_INVALID: c_int = 0x01;
pub const __FE_DENORM: c_int = 0x02;
pub const FE_DIVBYZERO: c_int = 0x04;
pub const FE_OVERFLOW: c_int = 0x08;
pub const FE_UNDERFLOW: c_int = 0x10;
pub const FE_INEXACT: c_int = 0x20;
pub const FE_ALL_EXCEPT: c_int =
    FE_INEXACT | FE_DIVBYZERO | FE_UNDERFLOW | FE_OVERFLOW | FE_INVALID;

pub const FE_TONEAREST: c_int = 0;
pub const FE_DOWNWARD: c_int = 0x400;
pub const FE_UPWARD: c_int = 0x800;
pub const FE_TOWARDZERO: c_int = 0xc00;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct __jmp_buf_tag {
    pub __jmpbuf: [c_long; 8],
    pub __mask_was_saved: c_int,
    pub __saved_mask: __sigset_t,
}

pub type jmp_buf = [__jmp_buf_tag; 1];
pub type sigjmp_buf = [__jmp_buf_tag; 1];

pub const O_DIRECTORY: c_int = 0o200000;
pub const O_NOFOLLOW: c_int = 0o400000;
pub const O_TMPFILE: c_int = 0o20000000 | O_DIRECTORY;

const _: () = {
    assert!(size_of::<stat>() == 144);
    assert!(offset_of!(stat, st_mode) == 24);
    assert!(offset_of!(stat, st_rdev) == 40);
    assert!(offset_of!(stat, st_size) == 48);
    assert!(offset_of!(stat, st_atim) == 72);
    assert!(offset_of!(stat, st_ctim) == 104);
    assert!(size_of::<fenv_t>() == 28 + 4);
    assert!(offset_of!(fenv_t, __mxcsr) == 28);
    assert!(size_of::<jmp_buf>() == 200);
};
