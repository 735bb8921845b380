//! `<fcntl.h>`
//!
//! The overlay forwarders take the mode or argument that C passes through
//! `...` as a fixed last parameter.

header!(fcntl);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "fcntl", feature = "define-unavailable-functions"))]
    use core::ffi::{c_char, c_int, c_uint, c_ulong};

    pub use crate::sprt::{
        AT_FDCWD, F_DUPFD, F_DUPFD_CLOEXEC, F_GETFD, F_GETFL, F_SETFD, F_SETFL, FD_CLOEXEC,
        O_ACCMODE, O_APPEND, O_CLOEXEC, O_CREAT, O_DIRECTORY, O_EXCL, O_NOCTTY, O_NOFOLLOW,
        O_NONBLOCK, O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY, mode_t, off_t,
    };

    forward! { "fcntl" =>
        fn open(path: *const c_char, flags: c_int, mode: c_uint) -> c_int;
        fn openat(dirfd: c_int, path: *const c_char, flags: c_int, mode: c_uint) -> c_int;
        fn creat(path: *const c_char, mode: mode_t) -> c_int;
        fn fcntl(fd: c_int, cmd: c_int, arg: c_ulong) -> c_int;
    }
}
