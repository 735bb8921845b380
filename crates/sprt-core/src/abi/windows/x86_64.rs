//! Windows, x64.

use core::mem::{align_of, size_of};

/// One 16-byte, 16-aligned register slot.
#[repr(C, align(16))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(non_snake_case)]
pub struct SETJMP_FLOAT128 {
    pub Part: [u64; 2],
}

pub type jmp_buf = [SETJMP_FLOAT128; 16];

const _: () = {
    assert!(size_of::<jmp_buf>() == 256);
    assert!(align_of::<jmp_buf>() == 16);
};
