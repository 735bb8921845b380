//! # sprt-core
//!
//! Target knowledge for the sprt libc layer.
//!
//! This crate answers every question about the target that can be answered
//! without calling into the platform C library: which OS/architecture leaf is
//! being compiled, which capabilities that leaf offers, the bit widths and
//! limits of the primitive integer and floating types, and the exact memory
//! layout of every structure the runtime exchanges with native code.
//!
//! The ABI crate (`sprt-abi`) builds the callable surface on top of this.
//! No `unsafe` code is permitted here.

#![deny(unsafe_code)]

pub mod abi;
pub mod availability;
pub mod config;
pub mod errno;
pub mod limits;
pub mod namespace;
pub mod string;
pub mod target;
pub mod time;

pub use availability::Capability;
pub use config::RuntimeConfig;
pub use namespace::{SymbolBinding, make_internal};
pub use target::{Arch, BuildMode, DataModel, Os, Target, TargetError};
