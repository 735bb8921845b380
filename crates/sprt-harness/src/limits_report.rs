//! Integer and floating limit tables for any leaf.
//!
//! For the leaf the harness was compiled for, each integer row shows the
//! effective descriptor and whether the compiler-assisted and data-model
//! derivations agree. Other leaves only have the data-model derivation.

use serde::{Deserialize, Serialize};
use sprt_core::Target;
use sprt_core::limits::float::{self, FloatFormat, FloatLimits, FloatValue, Source};
use sprt_core::limits::int::{self, Derivation, IntDescriptor, IntKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRow {
    pub name: String,
    pub storage: String,
    pub bits: u32,
    pub signed: bool,
    /// Decimal text; `i128`/`u128` do not survive every JSON reader.
    pub min: String,
    pub max: String,
    pub derivation: String,
    pub pri_decimal: String,
    pub pri_hex: Option<String>,
    pub suffix: String,
    /// `Some` only for the compiled leaf with a compiler-assisted value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derivations_agree: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatRow {
    pub name: String,
    pub format: String,
    pub mant_dig: u32,
    pub dig: u32,
    pub decimal_dig: u32,
    pub min_exp: i32,
    pub max_exp: i32,
    pub epsilon: String,
    pub max: String,
    pub compiler_props: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsReport {
    pub target: String,
    pub data_model: String,
    pub current: bool,
    pub ints: Vec<IntRow>,
    pub floats: Vec<FloatRow>,
}

fn derivation_name(d: Derivation) -> &'static str {
    match d {
        Derivation::CompilerAssisted => "compiler-assisted",
        Derivation::DataModel => "data-model",
    }
}

fn format_name(f: FloatFormat) -> &'static str {
    match f {
        FloatFormat::Binary16 => "binary16",
        FloatFormat::Binary32 => "binary32",
        FloatFormat::Binary64 => "binary64",
        FloatFormat::X87Extended => "x87-extended",
        FloatFormat::Binary128 => "binary128",
    }
}

fn value_text(v: FloatValue) -> String {
    match v {
        FloatValue::Single(x) => format!("{x:e}"),
        FloatValue::Double(x) => format!("{x:e}"),
        FloatValue::Literal(text) => text.to_owned(),
    }
}

fn int_row(d: &IntDescriptor, agree: Option<bool>) -> IntRow {
    IntRow {
        name: d.kind.c_name().to_owned(),
        storage: d.storage.keyword().to_owned(),
        bits: d.bits,
        signed: d.signed,
        min: d.min.to_string(),
        max: d.max.to_string(),
        derivation: derivation_name(d.derivation).to_owned(),
        pri_decimal: d.pri(if d.signed { 'd' } else { 'u' }).unwrap_or_default(),
        pri_hex: d.pri('x'),
        suffix: d.suffix().to_owned(),
        derivations_agree: agree,
    }
}

fn float_row(name: &str, l: &FloatLimits) -> FloatRow {
    let sources = [
        l.radix.source,
        l.decimal_dig.source,
        l.dig.source,
        l.mant_dig.source,
        l.min_exp.source,
        l.max_exp.source,
        l.min_10_exp.source,
        l.max_10_exp.source,
        l.epsilon.source,
        l.min.source,
        l.max.source,
        l.norm_max.source,
        l.denorm_min.source,
        l.has_denorm.source,
        l.has_infinity.source,
        l.has_quiet_nan.source,
    ];
    FloatRow {
        name: name.to_owned(),
        format: format_name(l.format).to_owned(),
        mant_dig: l.mant_dig.value,
        dig: l.dig.value,
        decimal_dig: l.decimal_dig.value,
        min_exp: l.min_exp.value,
        max_exp: l.max_exp.value,
        epsilon: value_text(l.epsilon.value),
        max: value_text(l.max.value),
        compiler_props: sources.iter().filter(|s| **s == Source::Compiler).count(),
    }
}

#[must_use]
pub fn report(target: Target) -> LimitsReport {
    let current = target == Target::CURRENT;
    let ints = IntKind::ALL
        .iter()
        .map(|&kind| {
            if current {
                let fallback = int::fallback(kind, target);
                let agree = int::assisted(kind).map(|a| a.same_limits(&fallback));
                int_row(&int::descriptor(kind), agree)
            } else {
                int_row(&int::fallback(kind, target), None)
            }
        })
        .collect();

    let floats = if current {
        vec![
            float_row("half", &float::HALF),
            float_row("float", &float::FLT),
            float_row("double", &float::DBL),
            float_row("long double", &float::LDBL),
        ]
    } else {
        vec![
            float_row("half", &float::fallback_limits(FloatFormat::Binary16)),
            float_row("float", &float::fallback_limits(FloatFormat::Binary32)),
            float_row("double", &float::fallback_limits(FloatFormat::Binary64)),
            float_row(
                "long double",
                &float::fallback_limits(FloatFormat::long_double(target)),
            ),
        ]
    };

    LimitsReport {
        target: target.to_string(),
        data_model: target.data_model().as_str().to_owned(),
        current,
        ints,
        floats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprt_core::{Arch, Os};

    fn row<'a>(r: &'a LimitsReport, name: &str) -> &'a IntRow {
        r.ints.iter().find(|i| i.name == name).unwrap()
    }

    #[test]
    fn current_leaf_derivations_agree() {
        let r = report(Target::CURRENT);
        assert!(r.current);
        assert_eq!(r.ints.len(), IntKind::ALL.len());
        for i in &r.ints {
            assert_ne!(i.derivations_agree, Some(false), "{}", i.name);
        }
    }

    #[test]
    fn windows_long_is_32_bits() {
        let r = report(Target::new(Os::Windows, Arch::X86_64).unwrap());
        let long = row(&r, "long");
        assert_eq!(long.bits, 32);
        assert_eq!(long.max, "2147483647");
        assert_eq!(r.data_model, "LLP64");
        assert_eq!(row(&r, "int64_t").pri_decimal, "lld");
    }

    #[test]
    fn long_double_format_follows_leaf() {
        let r = report(Target::new(Os::Linux, Arch::Aarch64).unwrap());
        let ld = r.floats.iter().find(|f| f.name == "long double").unwrap();
        if !r.current {
            assert_eq!(ld.format, "binary128");
            assert_eq!(ld.mant_dig, 113);
            assert_eq!(ld.compiler_props, 0);
        }
    }

    #[test]
    fn float_and_double_come_from_the_compiler_on_this_leaf() {
        let r = report(Target::CURRENT);
        let dbl = r.floats.iter().find(|f| f.name == "double").unwrap();
        assert!(dbl.compiler_props > 0);
        assert_eq!(dbl.mant_dig, 53);
    }
}
