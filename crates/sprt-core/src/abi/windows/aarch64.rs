//! Windows, arm64.

use core::mem::size_of;

pub type jmp_buf = [u64; 24];

const _: () = assert!(size_of::<jmp_buf>() == 192);
