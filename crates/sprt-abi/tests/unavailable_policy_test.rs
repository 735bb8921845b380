//! Functions a platform lacks: undeclared under the default policy, `ENOSYS`
//! stubs with `define-unavailable-functions`.
//!
//! Linux lacks `setlogin`, which makes it the host-side witness. The stubs
//! themselves are exercised by `unavailable_stub_test`, which only builds
//! with the feature on (`cargo test-stubs`).

use sprt_core::config::UnavailablePolicy;
use sprt_core::namespace::find_binding;
use sprt_core::{Capability, RuntimeConfig, Target};

#[test]
fn policy_follows_feature() {
    let expected = if cfg!(feature = "define-unavailable-functions") {
        UnavailablePolicy::Stub
    } else {
        UnavailablePolicy::Omit
    };
    assert_eq!(RuntimeConfig::CURRENT.unavailable_policy, expected);
}

#[cfg(target_os = "linux")]
#[test]
fn setlogin_is_the_only_gap_on_linux() {
    let missing: Vec<Capability> = Target::CURRENT.missing().collect();
    assert_eq!(missing, vec![Capability::Setlogin]);

    let binding = find_binding("setlogin").unwrap();
    assert!(!binding.available_on(Target::CURRENT));
    assert!(!binding.declared_on(Target::CURRENT, UnavailablePolicy::Omit));
    assert!(binding.declared_on(Target::CURRENT, UnavailablePolicy::Stub));
}

#[test]
fn available_functions_are_declared_under_either_policy() {
    let binding = find_binding("__errno_location").unwrap();
    for policy in [UnavailablePolicy::Omit, UnavailablePolicy::Stub] {
        assert!(binding.declared_on(Target::CURRENT, policy));
    }
}

#[cfg(all(target_os = "linux", not(feature = "define-unavailable-functions")))]
#[test]
fn default_build_omits_setlogin() {
    let policy = RuntimeConfig::CURRENT.unavailable_policy;
    assert_eq!(policy, UnavailablePolicy::Omit);
    let binding = find_binding("setlogin").unwrap();
    assert!(!binding.declared_on(Target::CURRENT, policy));
    assert!(find_binding("dup").unwrap().declared_on(Target::CURRENT, policy));
}
