//! Symbol availability report.
//!
//! Lists every runtime function with the name a caller links against and
//! whether it is declared, for any leaf and any combination of switches.

use serde::{Deserialize, Serialize};
use sprt_core::config::UnavailablePolicy;
use sprt_core::namespace::BINDINGS;
use sprt_core::{BuildMode, Target};

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRow {
    pub header: String,
    pub public: String,
    pub internal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability: Option<String>,
    pub available: bool,
    pub declared: bool,
    /// Present only when the function is declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolReport {
    pub target: String,
    pub policy: String,
    pub mode: String,
    pub declared: usize,
    pub stubbed: usize,
    pub omitted: usize,
    pub symbols: Vec<SymbolRow>,
}

pub fn parse_policy(s: &str) -> Result<UnavailablePolicy> {
    UnavailablePolicy::from_str_loose(s).ok_or_else(|| HarnessError::UnknownPolicy(s.to_owned()))
}

pub fn parse_mode(s: &str) -> Result<BuildMode> {
    match s.to_ascii_lowercase().as_str() {
        "building" | "build" => Ok(BuildMode::BuildingRuntime),
        "consuming" | "consume" => Ok(BuildMode::ConsumingRuntime),
        _ => Err(HarnessError::UnknownMode(s.to_owned())),
    }
}

#[must_use]
pub fn report(target: Target, policy: UnavailablePolicy, mode: BuildMode) -> SymbolReport {
    let symbols: Vec<SymbolRow> = BINDINGS
        .iter()
        .map(|b| {
            let declared = b.declared_on(target, policy);
            SymbolRow {
                header: b.header.path().to_owned(),
                public: b.public.to_owned(),
                internal: b.internal.to_owned(),
                capability: b.capability.map(|c| c.cfg_name().to_owned()),
                available: b.available_on(target),
                declared,
                link_symbol: declared.then(|| b.link_symbol(mode).to_owned()),
            }
        })
        .collect();

    let declared = symbols.iter().filter(|s| s.declared).count();
    let stubbed = symbols.iter().filter(|s| s.declared && !s.available).count();
    SymbolReport {
        target: target.to_string(),
        policy: policy.as_str().to_owned(),
        mode: mode.as_str().to_owned(),
        declared,
        stubbed,
        omitted: symbols.len() - declared,
        symbols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprt_core::{Arch, Os};

    fn linux() -> Target {
        Target::new(Os::Linux, Arch::X86_64).unwrap()
    }

    #[test]
    fn linux_omits_only_setlogin() {
        let r = report(linux(), UnavailablePolicy::Omit, BuildMode::ConsumingRuntime);
        assert_eq!(r.omitted, 1);
        assert_eq!(r.stubbed, 0);
        let setlogin = r.symbols.iter().find(|s| s.public == "setlogin").unwrap();
        assert!(!setlogin.declared);
        assert_eq!(setlogin.link_symbol, None);
    }

    #[test]
    fn stub_policy_declares_everything() {
        let r = report(linux(), UnavailablePolicy::Stub, BuildMode::ConsumingRuntime);
        assert_eq!(r.omitted, 0);
        assert_eq!(r.stubbed, 1);
        assert_eq!(r.declared, r.symbols.len());
    }

    #[test]
    fn link_symbol_follows_mode() {
        let consuming = report(linux(), UnavailablePolicy::Omit, BuildMode::ConsumingRuntime);
        let building = report(linux(), UnavailablePolicy::Omit, BuildMode::BuildingRuntime);
        let pick = |r: &SymbolReport| {
            r.symbols
                .iter()
                .find(|s| s.public == "sched_yield")
                .and_then(|s| s.link_symbol.clone())
        };
        assert_eq!(pick(&consuming).as_deref(), Some("__sprt_sched_yield"));
        assert_eq!(pick(&building).as_deref(), Some("sched_yield"));
    }

    #[test]
    fn windows_declares_only_unconditional_functions() {
        let win = Target::new(Os::Windows, Arch::X86_64).unwrap();
        let r = report(win, UnavailablePolicy::Omit, BuildMode::ConsumingRuntime);
        assert!(r.symbols.iter().filter(|s| s.declared).all(|s| s.capability.is_none()));
    }

    #[test]
    fn parsers_reject_garbage() {
        assert!(parse_policy("STUB").is_ok());
        assert!(matches!(parse_policy("maybe"), Err(HarnessError::UnknownPolicy(_))));
        assert_eq!(parse_mode("Building").unwrap(), BuildMode::BuildingRuntime);
        assert!(matches!(parse_mode("linking"), Err(HarnessError::UnknownMode(_))));
    }
}
