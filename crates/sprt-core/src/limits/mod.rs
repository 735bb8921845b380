//! `<limits.h>`, `<stdint.h>` and `<float.h>` values.
//!
//! Integer limits are computed at compile time from [`int::descriptor`], so
//! switching the `compiler-assisted-ints` feature changes how they are derived
//! but never what they are.

#![allow(non_camel_case_types)]

pub mod float;
pub mod int;

use core::ffi::{c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong, c_ulonglong, c_ushort};

use crate::abi::{wchar_t, wint_t};
use crate::target::{Os, Target};

pub use float::*;
pub use int::{IntDescriptor, IntKind, descriptor};

macro_rules! signed_limits {
    ($($kind:ident: $ty:ty => $min:ident, $max:ident, $width:ident;)*) => {$(
        pub const $min: $ty = descriptor(IntKind::$kind).min as $ty;
        pub const $max: $ty = descriptor(IntKind::$kind).max as $ty;
        pub const $width: u32 = descriptor(IntKind::$kind).bits;
    )*};
}

macro_rules! unsigned_limits {
    ($($kind:ident: $ty:ty => $max:ident, $width:ident;)*) => {$(
        pub const $max: $ty = descriptor(IntKind::$kind).max as $ty;
        pub const $width: u32 = descriptor(IntKind::$kind).bits;
    )*};
}

pub const CHAR_BIT: u32 = 8;

/// Longest multibyte character the C library will produce.
pub const MB_LEN_MAX: c_int = match Target::CURRENT.os() {
    Os::Linux => 16,
    Os::Android => 4,
    Os::MacOs => 6,
    Os::Windows => 5,
};

signed_limits! {
    Int8: i8 => INT8_MIN, INT8_MAX, INT8_WIDTH;
    Int16: i16 => INT16_MIN, INT16_MAX, INT16_WIDTH;
    Int32: i32 => INT32_MIN, INT32_MAX, INT32_WIDTH;
    Int64: i64 => INT64_MIN, INT64_MAX, INT64_WIDTH;
    Char: c_char => CHAR_MIN, CHAR_MAX, CHAR_WIDTH;
    Schar: c_schar => SCHAR_MIN, SCHAR_MAX, SCHAR_WIDTH;
    Short: c_short => SHRT_MIN, SHRT_MAX, SHRT_WIDTH;
    Int: c_int => INT_MIN, INT_MAX, INT_WIDTH;
    Long: c_long => LONG_MIN, LONG_MAX, LONG_WIDTH;
    LongLong: c_longlong => LLONG_MIN, LLONG_MAX, LLONG_WIDTH;
    Intptr: isize => INTPTR_MIN, INTPTR_MAX, INTPTR_WIDTH;
    Ptrdiff: isize => PTRDIFF_MIN, PTRDIFF_MAX, PTRDIFF_WIDTH;
    Ssize: isize => SSIZE_MIN, SSIZE_MAX, SSIZE_WIDTH;
    Intmax: i64 => INTMAX_MIN, INTMAX_MAX, INTMAX_WIDTH;
    Wchar: wchar_t => WCHAR_MIN, WCHAR_MAX, WCHAR_WIDTH;
    Wint: wint_t => WINT_MIN, WINT_MAX, WINT_WIDTH;
}

unsigned_limits! {
    Uint8: u8 => UINT8_MAX, UINT8_WIDTH;
    Uint16: u16 => UINT16_MAX, UINT16_WIDTH;
    Uint32: u32 => UINT32_MAX, UINT32_WIDTH;
    Uint64: u64 => UINT64_MAX, UINT64_WIDTH;
    Uchar: c_uchar => UCHAR_MAX, UCHAR_WIDTH;
    Ushort: c_ushort => USHRT_MAX, USHRT_WIDTH;
    Uint: c_uint => UINT_MAX, UINT_WIDTH;
    Ulong: c_ulong => ULONG_MAX, ULONG_WIDTH;
    UlongLong: c_ulonglong => ULLONG_MAX, ULLONG_WIDTH;
    Uintptr: usize => UINTPTR_MAX, UINTPTR_WIDTH;
    Size: usize => SIZE_MAX, SIZE_WIDTH;
    Uintmax: u64 => UINTMAX_MAX, UINTMAX_WIDTH;
}

pub const SIZE_MIN: usize = 0;

/// Bounds-checked size type.
pub type rsize_t = usize;
pub const RSIZE_MAX: rsize_t = SIZE_MAX;

/// Every leaf evaluates floating expressions in their own type.
pub const FLT_EVAL_METHOD: c_int = 0;
pub type float_t = f32;
pub type double_t = f64;
