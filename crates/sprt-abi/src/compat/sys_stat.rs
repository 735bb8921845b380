//! `<sys/stat.h>`

header!(sys_stat);

/// The `S_IS*` predicates have no native declarations and are always the
/// runtime's.
pub use crate::sprt::{S_ISBLK, S_ISCHR, S_ISDIR, S_ISFIFO, S_ISLNK, S_ISREG, S_ISSOCK};

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "mkfifoat",
        sprt_have = "stat",
        sprt_have = "utimensat",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::{c_char, c_int};

    pub use crate::sprt::{
        AT_FDCWD, AT_SYMLINK_NOFOLLOW, S_IFBLK, S_IFCHR, S_IFDIR, S_IFIFO, S_IFLNK, S_IFMT,
        S_IFREG, S_IFSOCK, S_IRGRP, S_IROTH, S_IRUSR, S_IRWXG, S_IRWXO, S_IRWXU, S_ISGID,
        S_ISUID, S_ISVTX, S_IWGRP, S_IWOTH, S_IWUSR, S_IXGRP, S_IXOTH, S_IXUSR, UTIME_NOW,
        UTIME_OMIT, dev_t, mode_t, timespec,
    };
    // `crate::sprt::stat` names the function too, which would clash with
    // the forwarder below.
    pub use sprt_core::abi::stat;

    forward! { "stat" =>
        fn stat(path: *const c_char, buf: *mut stat) -> c_int;
        fn fstat(fd: c_int, buf: *mut stat) -> c_int;
        fn lstat(path: *const c_char, buf: *mut stat) -> c_int;
        fn fstatat(dirfd: c_int, path: *const c_char, buf: *mut stat, flags: c_int) -> c_int;
        fn chmod(path: *const c_char, mode: mode_t) -> c_int;
        fn fchmod(fd: c_int, mode: mode_t) -> c_int;
        fn fchmodat(dirfd: c_int, path: *const c_char, mode: mode_t, flags: c_int) -> c_int;
        fn umask(mask: mode_t) -> mode_t;
        fn mkdir(path: *const c_char, mode: mode_t) -> c_int;
        fn mkdirat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int;
        fn mkfifo(path: *const c_char, mode: mode_t) -> c_int;
        fn mknod(path: *const c_char, mode: mode_t, dev: dev_t) -> c_int;
    }

    forward! { "mkfifoat" =>
        fn mkfifoat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int;
    }

    forward! { "utimensat" =>
        fn futimens(fd: c_int, times: *const timespec) -> c_int;
        fn utimensat(dirfd: c_int, path: *const c_char, times: *const timespec, flags: c_int) -> c_int;
    }
}
