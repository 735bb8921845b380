//! Target selection.
//!
//! A target is an (operating system, architecture) pair. Only pairs with an
//! ABI leaf under [`crate::abi`] are supported; anything else is rejected at
//! compile time for the crate being built and as a [`TargetError`] when a
//! pair is constructed from strings (build scripts, the harness).

use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Os {
    Linux,
    Android,
    MacOs,
    Windows,
}

impl Os {
    pub const ALL: [Os; 4] = [Os::Linux, Os::Android, Os::MacOs, Os::Windows];

    /// Parse a `target_os` cfg value.
    pub fn from_cfg(s: &str) -> Result<Self, TargetError> {
        match s {
            "linux" => Ok(Self::Linux),
            "android" => Ok(Self::Android),
            "macos" => Ok(Self::MacOs),
            "windows" => Ok(Self::Windows),
            other => Err(TargetError::UnknownOs(other.to_owned())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Android => "android",
            Self::MacOs => "macos",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Arch {
    X86_64,
    Aarch64,
    X86,
    Arm,
    /// Recognised, but no OS has a leaf for it yet.
    RiscV64,
}

impl Arch {
    pub const ALL: [Arch; 5] = [Arch::X86_64, Arch::Aarch64, Arch::X86, Arch::Arm, Arch::RiscV64];

    /// Parse a `target_arch` cfg value.
    pub fn from_cfg(s: &str) -> Result<Self, TargetError> {
        match s {
            "x86_64" => Ok(Self::X86_64),
            "aarch64" => Ok(Self::Aarch64),
            "x86" => Ok(Self::X86),
            "arm" => Ok(Self::Arm),
            "riscv64" => Ok(Self::RiscV64),
            other => Err(TargetError::UnknownArch(other.to_owned())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::X86 => "x86",
            Self::Arm => "arm",
            Self::RiscV64 => "riscv64",
        }
    }

    #[must_use]
    pub const fn pointer_width(self) -> u32 {
        match self {
            Self::X86_64 | Self::Aarch64 | Self::RiscV64 => 64,
            Self::X86 | Self::Arm => 32,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the runtime is being compiled or consumed.
///
/// While building, the compatibility headers expose the platform's own
/// declarations so runtime sources see the real native types. Consumers see
/// the runtime's overlay instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildMode {
    BuildingRuntime,
    #[default]
    ConsumingRuntime,
}

/// Widths of `int`, `long` and pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataModel {
    /// 32-bit `int`, 64-bit `long` and pointers.
    Lp64,
    /// 32-bit `int` and `long`, 64-bit pointers (Windows x64).
    Llp64,
    /// 32-bit `int`, `long` and pointers.
    Ilp32,
}

impl BuildMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BuildingRuntime => "building",
            Self::ConsumingRuntime => "consuming",
        }
    }
}

impl DataModel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lp64 => "LP64",
            Self::Llp64 => "LLP64",
            Self::Ilp32 => "ILP32",
        }
    }

    #[must_use]
    pub const fn long_bits(self) -> u32 {
        match self {
            Self::Lp64 => 64,
            Self::Llp64 | Self::Ilp32 => 32,
        }
    }

    #[must_use]
    pub const fn pointer_bits(self) -> u32 {
        match self {
            Self::Lp64 | Self::Llp64 => 64,
            Self::Ilp32 => 32,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("unsupported operating system `{0}`")]
    UnknownOs(String),
    #[error("unsupported architecture `{0}`")]
    UnknownArch(String),
    #[error("no ABI leaf for {os} on {arch}")]
    NoLeaf { os: Os, arch: Arch },
    #[error("expected `<os>-<arch>`, got `{0}`")]
    Malformed(String),
}

/// A supported (OS, architecture) leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target {
    os: Os,
    arch: Arch,
}

impl Target {
    /// Every leaf with an ABI module.
    pub const LEAVES: [Target; 10] = [
        Target { os: Os::Linux, arch: Arch::X86_64 },
        Target { os: Os::Linux, arch: Arch::Aarch64 },
        Target { os: Os::Android, arch: Arch::X86_64 },
        Target { os: Os::Android, arch: Arch::X86 },
        Target { os: Os::Android, arch: Arch::Aarch64 },
        Target { os: Os::Android, arch: Arch::Arm },
        Target { os: Os::MacOs, arch: Arch::X86_64 },
        Target { os: Os::MacOs, arch: Arch::Aarch64 },
        Target { os: Os::Windows, arch: Arch::X86_64 },
        Target { os: Os::Windows, arch: Arch::Aarch64 },
    ];

    /// The leaf this crate is being compiled for.
    pub const CURRENT: Target = Target { os: CURRENT_OS, arch: CURRENT_ARCH };

    pub const fn new(os: Os, arch: Arch) -> Result<Self, TargetError> {
        if has_leaf(os, arch) {
            Ok(Self { os, arch })
        } else {
            Err(TargetError::NoLeaf { os, arch })
        }
    }

    /// Resolve a leaf from `CARGO_CFG_TARGET_OS` / `CARGO_CFG_TARGET_ARCH` style values.
    pub fn from_cfg(os: &str, arch: &str) -> Result<Self, TargetError> {
        Self::new(Os::from_cfg(os)?, Arch::from_cfg(arch)?)
    }

    #[must_use]
    pub const fn os(self) -> Os {
        self.os
    }

    #[must_use]
    pub const fn arch(self) -> Arch {
        self.arch
    }

    #[must_use]
    pub const fn data_model(self) -> DataModel {
        match (self.os, self.arch.pointer_width()) {
            (Os::Windows, 64) => DataModel::Llp64,
            (_, 32) => DataModel::Ilp32,
            _ => DataModel::Lp64,
        }
    }

    /// Error number the platform uses for "function not implemented".
    #[must_use]
    pub const fn enosys(self) -> i32 {
        match self.os {
            Os::Linux | Os::Android => 38,
            Os::MacOs => 78,
            Os::Windows => 40,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl core::str::FromStr for Target {
    type Err = TargetError;

    /// Parse the `os-arch` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (os, arch) = s
            .split_once('-')
            .ok_or_else(|| TargetError::Malformed(s.to_string()))?;
        Self::from_cfg(os, arch)
    }
}

const fn has_leaf(os: Os, arch: Arch) -> bool {
    match os {
        Os::Linux | Os::MacOs | Os::Windows => matches!(arch, Arch::X86_64 | Arch::Aarch64),
        Os::Android => !matches!(arch, Arch::RiscV64),
    }
}

#[cfg(target_os = "linux")]
const CURRENT_OS: Os = Os::Linux;
#[cfg(target_os = "android")]
const CURRENT_OS: Os = Os::Android;
#[cfg(target_os = "macos")]
const CURRENT_OS: Os = Os::MacOs;
#[cfg(target_os = "windows")]
const CURRENT_OS: Os = Os::Windows;
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "windows"
)))]
compile_error!("sprt: unsupported target operating system");

#[cfg(target_arch = "x86_64")]
const CURRENT_ARCH: Arch = Arch::X86_64;
#[cfg(target_arch = "aarch64")]
const CURRENT_ARCH: Arch = Arch::Aarch64;
#[cfg(target_arch = "x86")]
const CURRENT_ARCH: Arch = Arch::X86;
#[cfg(target_arch = "arm")]
const CURRENT_ARCH: Arch = Arch::Arm;
#[cfg(target_arch = "riscv64")]
const CURRENT_ARCH: Arch = Arch::RiscV64;
#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    target_arch = "x86",
    target_arch = "arm",
    target_arch = "riscv64"
)))]
compile_error!("sprt: unsupported target architecture");

const _: () = assert!(has_leaf(CURRENT_OS, CURRENT_ARCH), "sprt: no ABI leaf for this target");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_model_follows_os_and_width() {
        let win = Target::new(Os::Windows, Arch::X86_64).unwrap();
        assert_eq!(win.data_model(), DataModel::Llp64);
        let linux = Target::new(Os::Linux, Arch::Aarch64).unwrap();
        assert_eq!(linux.data_model(), DataModel::Lp64);
        let arm = Target::new(Os::Android, Arch::Arm).unwrap();
        assert_eq!(arm.data_model(), DataModel::Ilp32);
        assert_eq!(arm.data_model().long_bits(), 32);
    }

    #[test]
    fn unknown_pairs_are_rejected() {
        assert_eq!(
            Target::new(Os::Linux, Arch::Arm),
            Err(TargetError::NoLeaf { os: Os::Linux, arch: Arch::Arm })
        );
        assert!(matches!(
            Target::from_cfg("freebsd", "x86_64"),
            Err(TargetError::UnknownOs(_))
        ));
        assert!(matches!(
            Target::from_cfg("linux", "mips"),
            Err(TargetError::UnknownArch(_))
        ));
        assert_eq!(
            Target::from_cfg("linux", "riscv64"),
            Err(TargetError::NoLeaf { os: Os::Linux, arch: Arch::RiscV64 })
        );
    }

    #[test]
    fn display_form_parses_back() {
        for leaf in Target::LEAVES {
            assert_eq!(leaf.to_string().parse::<Target>(), Ok(leaf));
        }
        assert_eq!(
            "linux".parse::<Target>(),
            Err(TargetError::Malformed("linux".to_string()))
        );
    }

    #[test]
    fn every_leaf_round_trips_through_cfg_strings() {
        for leaf in Target::LEAVES {
            let parsed = Target::from_cfg(leaf.os().as_str(), leaf.arch().as_str()).unwrap();
            assert_eq!(parsed, leaf);
        }
    }

    #[test]
    fn current_matches_pointer_width() {
        assert_eq!(
            Target::CURRENT.data_model().pointer_bits() as usize,
            core::mem::size_of::<usize>() * 8
        );
    }

    #[test]
    fn display_is_os_dash_arch() {
        assert_eq!(Target::new(Os::MacOs, Arch::Aarch64).unwrap().to_string(), "macos-aarch64");
    }
}
