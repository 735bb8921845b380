//! Floating-point limits.
//!
//! Each property is resolved on its own: when the compiler exposes it for
//! `f32`/`f64` that value wins, otherwise a hard-coded IEEE-754 value for the
//! format is used. Half precision and `long double` always come from the
//! fallback table since Rust has no native type for them.

use crate::target::{Arch, Os, Target};

/// Binary layout of a floating type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatFormat {
    Binary16,
    Binary32,
    Binary64,
    /// 80-bit x87 extended precision.
    X87Extended,
    Binary128,
}

impl FloatFormat {
    /// Format of `long double` on `target`.
    #[must_use]
    pub const fn long_double(target: Target) -> Self {
        match (target.os(), target.arch()) {
            (Os::Windows | Os::MacOs, _) => Self::Binary64,
            (Os::Android, Arch::X86 | Arch::Arm) => Self::Binary64,
            (Os::Linux, Arch::X86_64) => Self::X87Extended,
            (Os::Linux | Os::Android, _) => Self::Binary128,
        }
    }
}

/// Where a property's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Compiler,
    Fallback,
}

/// A value that may not be representable in any Rust float type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatValue {
    Single(f32),
    Double(f64),
    /// Decimal literal as C would spell it, including any `F`/`L` suffix.
    Literal(&'static str),
}

impl FloatValue {
    /// Best `f64` approximation. Literals beyond `f64` range saturate to
    /// infinity or zero the way `str::parse` does.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Single(v) => f64::from(v),
            Self::Double(v) => v,
            Self::Literal(text) => text
                .trim_end_matches(['F', 'f', 'L', 'l'])
                .parse()
                .unwrap_or(f64::NAN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop<T> {
    pub value: T,
    pub source: Source,
}

const fn compiler<T>(value: T) -> Prop<T> {
    Prop { value, source: Source::Compiler }
}

const fn fallback<T>(value: T) -> Prop<T> {
    Prop { value, source: Source::Fallback }
}

/// The `<float.h>` property set for one format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLimits {
    pub format: FloatFormat,
    pub radix: Prop<u32>,
    pub decimal_dig: Prop<u32>,
    pub dig: Prop<u32>,
    pub mant_dig: Prop<u32>,
    pub min_exp: Prop<i32>,
    pub max_exp: Prop<i32>,
    pub min_10_exp: Prop<i32>,
    pub max_10_exp: Prop<i32>,
    pub epsilon: Prop<FloatValue>,
    pub min: Prop<FloatValue>,
    pub max: Prop<FloatValue>,
    pub norm_max: Prop<FloatValue>,
    pub denorm_min: Prop<FloatValue>,
    pub has_denorm: Prop<bool>,
    pub has_infinity: Prop<bool>,
    pub has_quiet_nan: Prop<bool>,
}

/// Literal table used when the compiler has nothing to offer.
struct Table {
    decimal_dig: u32,
    dig: u32,
    mant_dig: u32,
    min_exp: i32,
    max_exp: i32,
    min_10_exp: i32,
    max_10_exp: i32,
    epsilon: &'static str,
    min: &'static str,
    max: &'static str,
    denorm_min: &'static str,
}

const fn table(format: FloatFormat) -> Table {
    match format {
        FloatFormat::Binary16 => Table {
            decimal_dig: 5,
            dig: 3,
            mant_dig: 11,
            min_exp: -13,
            max_exp: 16,
            min_10_exp: -4,
            max_10_exp: 4,
            epsilon: "9.765625e-4",
            min: "6.103515625e-5",
            max: "65504.0",
            denorm_min: "5.9604644775390625e-8",
        },
        FloatFormat::Binary32 => Table {
            decimal_dig: 9,
            dig: 6,
            mant_dig: 24,
            min_exp: -125,
            max_exp: 128,
            min_10_exp: -37,
            max_10_exp: 38,
            epsilon: "1.19209290e-7F",
            min: "1.17549435e-38F",
            max: "3.40282347e+38F",
            denorm_min: "1.40129846e-45F",
        },
        FloatFormat::Binary64 => Table {
            decimal_dig: 17,
            dig: 15,
            mant_dig: 53,
            min_exp: -1021,
            max_exp: 1024,
            min_10_exp: -307,
            max_10_exp: 308,
            epsilon: "2.2204460492503131e-16",
            min: "2.2250738585072014e-308",
            max: "1.7976931348623157e+308",
            denorm_min: "4.9406564584124654e-324",
        },
        FloatFormat::X87Extended => Table {
            decimal_dig: 21,
            dig: 18,
            mant_dig: 64,
            min_exp: -16381,
            max_exp: 16384,
            min_10_exp: -4931,
            max_10_exp: 4932,
            epsilon: "1.08420217248550443401e-19L",
            min: "3.36210314311209350626e-4932L",
            max: "1.18973149535723176502e+4932L",
            denorm_min: "3.64519953188247460253e-4951L",
        },
        FloatFormat::Binary128 => Table {
            decimal_dig: 36,
            dig: 33,
            mant_dig: 113,
            min_exp: -16381,
            max_exp: 16384,
            min_10_exp: -4931,
            max_10_exp: 4932,
            epsilon: "1.92592994438723585305597794258492732e-34L",
            min: "3.36210314311209350626267781732175260e-4932L",
            max: "1.18973149535723176508575932662800702e+4932L",
            denorm_min: "6.47517511943802511092443895822764655e-4966L",
        },
    }
}

/// Limits resolved purely from the literal table.
#[must_use]
pub const fn fallback_limits(format: FloatFormat) -> FloatLimits {
    let t = table(format);
    FloatLimits {
        format,
        radix: fallback(2),
        decimal_dig: fallback(t.decimal_dig),
        dig: fallback(t.dig),
        mant_dig: fallback(t.mant_dig),
        min_exp: fallback(t.min_exp),
        max_exp: fallback(t.max_exp),
        min_10_exp: fallback(t.min_10_exp),
        max_10_exp: fallback(t.max_10_exp),
        epsilon: fallback(FloatValue::Literal(t.epsilon)),
        min: fallback(FloatValue::Literal(t.min)),
        max: fallback(FloatValue::Literal(t.max)),
        norm_max: fallback(FloatValue::Literal(t.max)),
        denorm_min: fallback(FloatValue::Literal(t.denorm_min)),
        has_denorm: fallback(true),
        has_infinity: fallback(true),
        has_quiet_nan: fallback(true),
    }
}

macro_rules! compiler_limits {
    ($format:expr, $t:ident, $wrap:ident) => {{
        let base = fallback_limits($format);
        FloatLimits {
            radix: compiler($t::RADIX),
            dig: compiler($t::DIGITS),
            mant_dig: compiler($t::MANTISSA_DIGITS),
            min_exp: compiler($t::MIN_EXP),
            max_exp: compiler($t::MAX_EXP),
            min_10_exp: compiler($t::MIN_10_EXP),
            max_10_exp: compiler($t::MAX_10_EXP),
            epsilon: compiler(FloatValue::$wrap($t::EPSILON)),
            min: compiler(FloatValue::$wrap($t::MIN_POSITIVE)),
            max: compiler(FloatValue::$wrap($t::MAX)),
            norm_max: compiler(FloatValue::$wrap($t::MAX)),
            denorm_min: compiler(FloatValue::$wrap($t::from_bits(1))),
            ..base
        }
    }};
}

/// `FLT_*` limits.
pub const FLT: FloatLimits = compiler_limits!(FloatFormat::Binary32, f32, Single);
/// `DBL_*` limits.
pub const DBL: FloatLimits = compiler_limits!(FloatFormat::Binary64, f64, Double);
/// `LDBL_*` limits for the leaf being compiled.
pub const LDBL: FloatLimits = fallback_limits(FloatFormat::long_double(Target::CURRENT));
/// Half-precision limits.
pub const HALF: FloatLimits = fallback_limits(FloatFormat::Binary16);

/// `FLT_RADIX`
pub const FLT_RADIX: u32 = FLT.radix.value;
/// `DECIMAL_DIG`: digits needed to round-trip the widest type.
pub const DECIMAL_DIG: u32 = LDBL.decimal_dig.value;
pub const FLT_DECIMAL_DIG: u32 = FLT.decimal_dig.value;
pub const DBL_DECIMAL_DIG: u32 = DBL.decimal_dig.value;
pub const LDBL_DECIMAL_DIG: u32 = LDBL.decimal_dig.value;
pub const FLT_DIG: u32 = FLT.dig.value;
pub const DBL_DIG: u32 = DBL.dig.value;
pub const LDBL_DIG: u32 = LDBL.dig.value;
pub const FLT_MANT_DIG: u32 = FLT.mant_dig.value;
pub const DBL_MANT_DIG: u32 = DBL.mant_dig.value;
pub const LDBL_MANT_DIG: u32 = LDBL.mant_dig.value;
pub const FLT_EPSILON: f32 = f32::EPSILON;
pub const DBL_EPSILON: f64 = f64::EPSILON;
pub const FLT_MIN: f32 = f32::MIN_POSITIVE;
pub const DBL_MIN: f64 = f64::MIN_POSITIVE;
pub const FLT_MAX: f32 = f32::MAX;
pub const DBL_MAX: f64 = f64::MAX;
pub const FLT_TRUE_MIN: f32 = f32::from_bits(1);
pub const DBL_TRUE_MIN: f64 = f64::from_bits(1);
