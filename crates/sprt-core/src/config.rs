//! Build configuration.
//!
//! Every switch is a Cargo feature resolved at compile time; nothing is read
//! from the environment at run time. `sprt-abi` forwards its features here so
//! that both crates observe one configuration.
//!
//! - `compiler-assisted-ints` (default): integer limits come from the
//!   compiler's own types when it knows them.
//! - `alloca-temporaries` (default): native structures used while marshaling
//!   live on the stack. Without it they are heap allocated.
//! - `builtin-inlines` (default): `memcpy` and friends lower to compiler
//!   intrinsics instead of out-of-line runtime functions.
//! - `define-unavailable-functions`: functions the platform lacks are still
//!   declared and fail with `ENOSYS`.
//! - `build-runtime`: the crate is compiled as the runtime itself and the
//!   compatibility headers expose the native declarations.

use crate::target::BuildMode;

/// What happens to a function the current platform does not provide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnavailablePolicy {
    /// The function is not declared. Calling it fails to compile.
    #[default]
    Omit,
    /// The function is declared and always fails with `ENOSYS`.
    Stub,
}

impl UnavailablePolicy {
    /// Parse from string (case-insensitive).
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "omit" | "absent" | "none" => Some(Self::Omit),
            "stub" | "enosys" | "define" => Some(Self::Stub),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Omit => "omit",
            Self::Stub => "stub",
        }
    }
}

/// Snapshot of every build switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuntimeConfig {
    pub compiler_assisted_ints: bool,
    pub alloca_temporaries: bool,
    pub builtin_inlines: bool,
    pub unavailable_policy: UnavailablePolicy,
    pub build_mode: BuildMode,
}

impl RuntimeConfig {
    /// The configuration this crate was compiled with.
    pub const CURRENT: Self = Self {
        compiler_assisted_ints: cfg!(feature = "compiler-assisted-ints"),
        alloca_temporaries: cfg!(feature = "alloca-temporaries"),
        builtin_inlines: cfg!(feature = "builtin-inlines"),
        unavailable_policy: if cfg!(feature = "define-unavailable-functions") {
            UnavailablePolicy::Stub
        } else {
            UnavailablePolicy::Omit
        },
        build_mode: if cfg!(feature = "build-runtime") {
            BuildMode::BuildingRuntime
        } else {
            BuildMode::ConsumingRuntime
        },
    };

    /// Same as [`Self::CURRENT`], for call sites that prefer a function.
    #[must_use]
    pub const fn current() -> Self {
        Self::CURRENT
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// Shorthand for `RuntimeConfig::CURRENT.compiler_assisted_ints`.
pub const COMPILER_ASSISTED_INTS: bool = RuntimeConfig::CURRENT.compiler_assisted_ints;
