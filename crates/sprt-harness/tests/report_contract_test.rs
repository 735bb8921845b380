//! Integration test: harness reports over every leaf.
//!
//! Validates that:
//! 1. Symbol reports agree with the capability table for every leaf.
//! 2. Limits reports are complete and self-consistent for every leaf.
//! 3. The layout check and fingerprint are usable on the compiled leaf.
//!
//! Run: cargo test -p sprt-harness --test report_contract_test

use sprt_core::config::UnavailablePolicy;
use sprt_core::limits::int::IntKind;
use sprt_core::namespace::BINDINGS;
use sprt_core::{BuildMode, Capability, Target};
use sprt_harness::{fingerprint, layout_check, limits_report, symbols};

#[test]
fn symbol_report_matches_capabilities_on_every_leaf() {
    for target in Target::LEAVES {
        let missing: Vec<Capability> = target.missing().collect();
        let r = symbols::report(target, UnavailablePolicy::Omit, BuildMode::ConsumingRuntime);
        assert_eq!(r.symbols.len(), BINDINGS.len());
        for row in &r.symbols {
            let cap = row.capability.as_deref().and_then(Capability::from_cfg_name);
            let expect = cap.is_none_or(|c| !missing.contains(&c));
            assert_eq!(row.available, expect, "{target} {}", row.public);
            assert_eq!(row.declared, expect, "{target} {}", row.public);
        }
        assert_eq!(r.declared + r.omitted, r.symbols.len());
    }
}

#[test]
fn internal_names_carry_the_prefix() {
    let r = symbols::report(Target::CURRENT, UnavailablePolicy::Stub, BuildMode::ConsumingRuntime);
    for row in &r.symbols {
        assert_eq!(row.internal, format!("__sprt_{}", row.public));
        assert_eq!(row.link_symbol.as_deref(), Some(row.internal.as_str()));
    }
}

#[test]
fn limits_report_is_complete_for_every_leaf() {
    for target in Target::LEAVES {
        let r = limits_report::report(target);
        assert_eq!(r.ints.len(), IntKind::ALL.len(), "{target}");
        assert_eq!(r.floats.len(), 4);
        for row in &r.ints {
            let max: u128 = row.max.parse().unwrap();
            let min: i128 = row.min.parse().unwrap();
            if row.signed {
                assert_eq!(max, (1u128 << (row.bits - 1)) - 1, "{target} {}", row.name);
                assert_eq!(min, -(1i128 << (row.bits - 1)));
                assert!(row.pri_hex.is_none());
            } else {
                assert_eq!(min, 0);
                assert!(row.pri_hex.is_some());
            }
        }
        let size = r.ints.iter().find(|i| i.name == "size_t").unwrap();
        assert_eq!(size.bits, target.data_model().pointer_bits());
    }
}

#[test]
fn limits_targets_parse_from_their_display_form() {
    for target in Target::LEAVES {
        let r = limits_report::report(target);
        assert_eq!(r.target.parse::<Target>().unwrap(), target);
    }
}

#[test]
fn layout_report_names_the_compiled_leaf() {
    let r = layout_check::check_layouts();
    assert_eq!(r.target, Target::CURRENT.to_string());
    assert!(r.types_compared >= 10);
}

#[test]
fn fingerprint_serializes() {
    let fp = fingerprint::current().unwrap();
    let v = serde_json::to_value(&fp).unwrap();
    assert_eq!(v["target"], Target::CURRENT.to_string());
    assert!(v["sha256"].as_str().unwrap().chars().all(|c| c.is_ascii_hexdigit()));
}
