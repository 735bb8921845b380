//! Integer type descriptors.
//!
//! A descriptor records which C keyword type backs a fixed or
//! platform-dependent integer type, its width and range, and the `printf`
//! length modifier and literal suffix that go with it.
//!
//! Two derivations exist. The data-model fallback works for any leaf and is
//! keyed on the data model plus a few OS/arch quirks. The compiler-assisted
//! path asks the compiler for widths and ranges of the types it knows
//! (`i64`, `c_long`, `usize`, ...); it is only available for the leaf being
//! compiled and never covers `intmax_t`, `wchar_t`, `wint_t` or `time_t`.

use core::ffi::{
    c_char, c_int, c_long, c_longlong, c_schar, c_short, c_uchar, c_uint, c_ulong,
    c_ulonglong, c_ushort,
};

use crate::config::COMPILER_ASSISTED_INTS;
use crate::target::{Arch, DataModel, Os, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Char,
    Schar,
    Uchar,
    Short,
    Ushort,
    Int,
    Uint,
    Long,
    Ulong,
    LongLong,
    UlongLong,
    Intptr,
    Uintptr,
    Ptrdiff,
    Size,
    Ssize,
    Intmax,
    Uintmax,
    Wchar,
    Wint,
    Time,
}

impl IntKind {
    pub const ALL: [IntKind; 29] = [
        IntKind::Int8,
        IntKind::Int16,
        IntKind::Int32,
        IntKind::Int64,
        IntKind::Uint8,
        IntKind::Uint16,
        IntKind::Uint32,
        IntKind::Uint64,
        IntKind::Char,
        IntKind::Schar,
        IntKind::Uchar,
        IntKind::Short,
        IntKind::Ushort,
        IntKind::Int,
        IntKind::Uint,
        IntKind::Long,
        IntKind::Ulong,
        IntKind::LongLong,
        IntKind::UlongLong,
        IntKind::Intptr,
        IntKind::Uintptr,
        IntKind::Ptrdiff,
        IntKind::Size,
        IntKind::Ssize,
        IntKind::Intmax,
        IntKind::Uintmax,
        IntKind::Wchar,
        IntKind::Wint,
        IntKind::Time,
    ];

    /// C spelling of the type.
    #[must_use]
    pub const fn c_name(self) -> &'static str {
        match self {
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::Uint8 => "uint8_t",
            Self::Uint16 => "uint16_t",
            Self::Uint32 => "uint32_t",
            Self::Uint64 => "uint64_t",
            Self::Char => "char",
            Self::Schar => "signed char",
            Self::Uchar => "unsigned char",
            Self::Short => "short",
            Self::Ushort => "unsigned short",
            Self::Int => "int",
            Self::Uint => "unsigned int",
            Self::Long => "long",
            Self::Ulong => "unsigned long",
            Self::LongLong => "long long",
            Self::UlongLong => "unsigned long long",
            Self::Intptr => "intptr_t",
            Self::Uintptr => "uintptr_t",
            Self::Ptrdiff => "ptrdiff_t",
            Self::Size => "size_t",
            Self::Ssize => "ssize_t",
            Self::Intmax => "intmax_t",
            Self::Uintmax => "uintmax_t",
            Self::Wchar => "wchar_t",
            Self::Wint => "wint_t",
            Self::Time => "time_t",
        }
    }
}

/// C keyword type that stores a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    SignedChar,
    UnsignedChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
}

impl CType {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::SignedChar => "signed char",
            Self::UnsignedChar => "unsigned char",
            Self::Short => "short",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
        }
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::SignedChar | Self::Short | Self::Int | Self::Long | Self::LongLong
        )
    }

    #[must_use]
    pub const fn bits(self, model: DataModel) -> u32 {
        match self {
            Self::SignedChar | Self::UnsignedChar => 8,
            Self::Short | Self::UnsignedShort => 16,
            Self::Int | Self::UnsignedInt => 32,
            Self::Long | Self::UnsignedLong => model.long_bits(),
            Self::LongLong | Self::UnsignedLongLong => 64,
        }
    }

    /// `printf` length modifier.
    #[must_use]
    pub const fn length_modifier(self) -> &'static str {
        match self {
            Self::SignedChar | Self::UnsignedChar => "hh",
            Self::Short | Self::UnsignedShort => "h",
            Self::Int | Self::UnsignedInt => "",
            Self::Long | Self::UnsignedLong => "l",
            Self::LongLong | Self::UnsignedLongLong => "ll",
        }
    }

    /// Integer literal suffix used by the `*_C` constant macros.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::SignedChar | Self::UnsignedChar | Self::Short | Self::UnsignedShort => "",
            Self::Int => "",
            Self::UnsignedInt => "U",
            Self::Long => "L",
            Self::UnsignedLong => "UL",
            Self::LongLong => "LL",
            Self::UnsignedLongLong => "ULL",
        }
    }
}

/// How a descriptor's width and range were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Derivation {
    CompilerAssisted,
    DataModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntDescriptor {
    pub kind: IntKind,
    pub storage: CType,
    pub bits: u32,
    pub signed: bool,
    pub min: i128,
    pub max: u128,
    pub derivation: Derivation,
}

impl IntDescriptor {
    #[must_use]
    pub const fn length_modifier(&self) -> &'static str {
        self.storage.length_modifier()
    }

    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        self.storage.suffix()
    }

    /// `printf` conversion for `conv`, e.g. `"ld"` for `PRId64` on LP64 Linux.
    ///
    /// Signed types accept `d` and `i`; unsigned types accept `o`, `u`, `x`
    /// and `X`.
    #[must_use]
    pub fn pri(&self, conv: char) -> Option<String> {
        let ok = if self.signed {
            matches!(conv, 'd' | 'i')
        } else {
            matches!(conv, 'o' | 'u' | 'x' | 'X')
        };
        ok.then(|| format!("{}{conv}", self.length_modifier()))
    }

    /// Whether two descriptors agree on width and range.
    #[must_use]
    pub const fn same_limits(&self, other: &Self) -> bool {
        self.bits == other.bits
            && self.signed == other.signed
            && self.min == other.min
            && self.max == other.max
    }
}

const fn char_is_signed(target: Target) -> bool {
    match (target.os(), target.arch()) {
        (Os::MacOs | Os::Windows, _) => true,
        (_, Arch::X86_64 | Arch::X86) => true,
        (_, Arch::Aarch64 | Arch::Arm | Arch::RiscV64) => false,
    }
}

const fn storage_for(kind: IntKind, target: Target) -> CType {
    let model = target.data_model();
    let os = target.os();
    let int64_is_long = matches!(model, DataModel::Lp64) && !matches!(os, Os::MacOs);
    match kind {
        IntKind::Int8 | IntKind::Schar => CType::SignedChar,
        IntKind::Uint8 | IntKind::Uchar => CType::UnsignedChar,
        IntKind::Int16 | IntKind::Short => CType::Short,
        IntKind::Uint16 | IntKind::Ushort => CType::UnsignedShort,
        IntKind::Int32 | IntKind::Int => CType::Int,
        IntKind::Uint32 | IntKind::Uint => CType::UnsignedInt,
        IntKind::Int64 if int64_is_long => CType::Long,
        IntKind::Int64 => CType::LongLong,
        IntKind::Uint64 if int64_is_long => CType::UnsignedLong,
        IntKind::Uint64 => CType::UnsignedLongLong,
        IntKind::Char if char_is_signed(target) => CType::SignedChar,
        IntKind::Char => CType::UnsignedChar,
        IntKind::Long => CType::Long,
        IntKind::Ulong => CType::UnsignedLong,
        IntKind::LongLong => CType::LongLong,
        IntKind::UlongLong => CType::UnsignedLongLong,
        IntKind::Intptr | IntKind::Ptrdiff | IntKind::Ssize => match model {
            DataModel::Lp64 => CType::Long,
            DataModel::Llp64 => CType::LongLong,
            DataModel::Ilp32 => CType::Int,
        },
        IntKind::Uintptr | IntKind::Size => match model {
            DataModel::Lp64 => CType::UnsignedLong,
            DataModel::Llp64 => CType::UnsignedLongLong,
            DataModel::Ilp32 => CType::UnsignedInt,
        },
        IntKind::Intmax => match model {
            DataModel::Lp64 => CType::Long,
            DataModel::Llp64 | DataModel::Ilp32 => CType::LongLong,
        },
        IntKind::Uintmax => match model {
            DataModel::Lp64 => CType::UnsignedLong,
            DataModel::Llp64 | DataModel::Ilp32 => CType::UnsignedLongLong,
        },
        IntKind::Wchar => match (os, target.arch()) {
            (Os::Windows, _) => CType::UnsignedShort,
            (Os::Linux | Os::Android, Arch::Aarch64 | Arch::Arm) => CType::UnsignedInt,
            _ => CType::Int,
        },
        IntKind::Wint => match os {
            Os::Windows => CType::UnsignedShort,
            Os::MacOs => CType::Int,
            Os::Linux | Os::Android => CType::UnsignedInt,
        },
        IntKind::Time => match os {
            Os::Windows => CType::LongLong,
            _ => CType::Long,
        },
    }
}

const fn bounds(bits: u32, signed: bool) -> (i128, u128) {
    if signed {
        (-(1i128 << (bits - 1)), (1u128 << (bits - 1)) - 1)
    } else {
        (0, (1u128 << bits) - 1)
    }
}

/// Data-model derivation for any leaf.
#[must_use]
pub const fn fallback(kind: IntKind, target: Target) -> IntDescriptor {
    let storage = storage_for(kind, target);
    let bits = storage.bits(target.data_model());
    let signed = storage.is_signed();
    let (min, max) = bounds(bits, signed);
    IntDescriptor {
        kind,
        storage,
        bits,
        signed,
        min,
        max,
        derivation: Derivation::DataModel,
    }
}

struct Builtin {
    bits: u32,
    min: i128,
    max: u128,
}

macro_rules! builtin {
    ($t:ty) => {
        Some(Builtin {
            bits: <$t>::BITS,
            min: <$t>::MIN as i128,
            max: <$t>::MAX as u128,
        })
    };
}

const fn builtin_limits(kind: IntKind) -> Option<Builtin> {
    match kind {
        IntKind::Int8 => builtin!(i8),
        IntKind::Int16 => builtin!(i16),
        IntKind::Int32 => builtin!(i32),
        IntKind::Int64 => builtin!(i64),
        IntKind::Uint8 => builtin!(u8),
        IntKind::Uint16 => builtin!(u16),
        IntKind::Uint32 => builtin!(u32),
        IntKind::Uint64 => builtin!(u64),
        IntKind::Char => builtin!(c_char),
        IntKind::Schar => builtin!(c_schar),
        IntKind::Uchar => builtin!(c_uchar),
        IntKind::Short => builtin!(c_short),
        IntKind::Ushort => builtin!(c_ushort),
        IntKind::Int => builtin!(c_int),
        IntKind::Uint => builtin!(c_uint),
        IntKind::Long => builtin!(c_long),
        IntKind::Ulong => builtin!(c_ulong),
        IntKind::LongLong => builtin!(c_longlong),
        IntKind::UlongLong => builtin!(c_ulonglong),
        IntKind::Intptr | IntKind::Ptrdiff | IntKind::Ssize => builtin!(isize),
        IntKind::Uintptr | IntKind::Size => builtin!(usize),
        IntKind::Intmax | IntKind::Uintmax | IntKind::Wchar | IntKind::Wint | IntKind::Time => {
            None
        }
    }
}

/// Compiler-assisted derivation for the leaf being compiled, if the compiler
/// knows the type.
#[must_use]
pub const fn assisted(kind: IntKind) -> Option<IntDescriptor> {
    let base = fallback(kind, Target::CURRENT);
    match builtin_limits(kind) {
        Some(b) => Some(IntDescriptor {
            bits: b.bits,
            signed: b.min < 0,
            min: b.min,
            max: b.max,
            derivation: Derivation::CompilerAssisted,
            ..base
        }),
        None => None,
    }
}

/// Descriptor for the leaf being compiled, honoring `compiler-assisted-ints`.
#[must_use]
pub const fn descriptor(kind: IntKind) -> IntDescriptor {
    if COMPILER_ASSISTED_INTS {
        if let Some(d) = assisted(kind) {
            return d;
        }
    }
    fallback(kind, Target::CURRENT)
}
