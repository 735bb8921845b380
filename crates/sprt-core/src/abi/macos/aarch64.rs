//! macOS, arm64.

use core::ffi::c_int;
use core::mem::size_of;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __fpsr: u64,
    pub __fpcr: u64,
}

pub type fexcept_t = u16;

pub const FE_INVALID: c_int = 0x01;
pub const FE_DIVBYZERO: c_int = 0x02;
pub const FE_OVERFLOW: c_int = 0x04;
pub const FE_UNDERFLOW: c_int = 0x08;
pub const FE_INEXACT: c_int = 0x10;
pub const FE_FLUSHTOZERO: c_int = 0x80;
pub const FE_ALL_EXCEPT: c_int =
    FE_DIVBYZERO | FE_INEXACT | FE_INVALID | FE_OVERFLOW | FE_UNDERFLOW | FE_FLUSHTOZERO;

pub const FE_TONEAREST: c_int = 0x0000_0000;
pub const FE_UPWARD: c_int = 0x0040_0000;
pub const FE_DOWNWARD: c_int = 0x0080_0000;
pub const FE_TOWARDZERO: c_int = 0x00c0_0000;

pub type jmp_buf = [c_int; (14 + 8 + 2) * 2];
pub type sigjmp_buf = [c_int; (14 + 8 + 2) * 2 + 1];

const _: () = {
    assert!(size_of::<fenv_t>() == 16);
    assert!(size_of::<jmp_buf>() == 192);
};
