//! `<sys/mman.h>`

pub use libc::{
    MADV_DONTNEED, MADV_NORMAL, MADV_RANDOM, MADV_SEQUENTIAL, MADV_WILLNEED, MAP_ANON,
    MAP_FAILED, MAP_FIXED, MAP_PRIVATE, MAP_SHARED, MS_ASYNC, MS_INVALIDATE, MS_SYNC, PROT_EXEC,
    PROT_NONE, PROT_READ, PROT_WRITE,
};

/// `MAP_ANON` under its POSIX name.
pub const MAP_ANONYMOUS: core::ffi::c_int = MAP_ANON;

#[cfg(all(sprt_have = "mman", target_os = "linux", target_env = "gnu"))]
pub use libc::mmap64 as mmap;

#[cfg(all(sprt_have = "mman", not(all(target_os = "linux", target_env = "gnu"))))]
pub use libc::mmap;

#[cfg(sprt_have = "mman")]
pub use libc::{madvise, mlock, mprotect, msync, munlock, munmap};
