//! `<fcntl.h>`
//!
//! On glibc the `*64` entry points are used so descriptors opened through
//! the runtime are always large-file capable.

pub use libc::{
    AT_FDCWD, F_DUPFD, F_DUPFD_CLOEXEC, F_GETFD, F_GETFL, F_SETFD, F_SETFL, FD_CLOEXEC,
    O_ACCMODE, O_APPEND, O_CLOEXEC, O_CREAT, O_DIRECTORY, O_EXCL, O_NOCTTY, O_NOFOLLOW,
    O_NONBLOCK, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY, mode_t, off_t,
};

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use libc::O_TMPFILE;

#[cfg(all(sprt_have = "fcntl", target_os = "linux", target_env = "gnu"))]
pub use libc::{creat64 as creat, open64 as open, openat64 as openat};

#[cfg(all(sprt_have = "fcntl", not(all(target_os = "linux", target_env = "gnu"))))]
pub use libc::{creat, open, openat};

#[cfg(sprt_have = "fcntl")]
pub use libc::fcntl;
