//! macOS, x86_64.

use core::ffi::{c_char, c_int};
use core::mem::size_of;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct fenv_t {
    pub __control: u16,
    pub __status: u16,
    pub __mxcsr: u32,
    pub __reserved: [c_char; 8],
}

pub type fexcept_t = u16;

pub const FE_INVALID: c_int = 0x01;
pub const FE_DENORMALOPERAND: c_int = 0x02;
pub const FE_DIVBYZERO: c_int = 0x04;
pub const FE_OVERFLOW: c_int = 0x08;
pub const FE_UNDERFLOW: c_int = 0x10;
pub const FE_INEXACT: c_int = 0x20;
pub const FE_ALL_EXCEPT: c_int =
    FE_INEXACT | FE_DIVBYZERO | FE_UNDERFLOW | FE_OVERFLOW | FE_INVALID | FE_DENORMALOPERAND;

pub const FE_TONEAREST: c_int = 0x0000;
pub const FE_DOWNWARD: c_int = 0x0400;
pub const FE_UPWARD: c_int = 0x0800;
pub const FE_TOWARDZERO: c_int = 0x0c00;

pub type jmp_buf = [c_int; (9 * 2) + 3 + 16];
pub type sigjmp_buf = [c_int; (9 * 2) + 3 + 16 + 1];

const _: () = {
    assert!(size_of::<fenv_t>() == 16);
    assert!(size_of::<jmp_buf>() == 148);
};
