//! `<sys/stat.h>`
//!
//! On glibc the large-file `stat64` family is used so the runtime always
//! sees 64-bit sizes and inode numbers.

#[cfg(all(sprt_have = "stat", target_os = "linux", target_env = "gnu"))]
pub use libc::{fstat64 as fstat, fstatat64 as fstatat, lstat64 as lstat, stat64 as stat};

#[cfg(all(sprt_have = "stat", not(all(target_os = "linux", target_env = "gnu"))))]
pub use libc::{fstat, fstatat, lstat, stat};

pub use libc::{
    S_IFBLK, S_IFCHR, S_IFDIR, S_IFIFO, S_IFLNK, S_IFMT, S_IFREG, S_IFSOCK, S_IRGRP, S_IROTH,
    S_IRUSR, S_IRWXG, S_IRWXO, S_IRWXU, S_ISGID, S_ISUID, S_ISVTX, S_IWGRP, S_IWOTH, S_IWUSR,
    S_IXGRP, S_IXOTH, S_IXUSR,
};

pub use libc::{AT_FDCWD, AT_SYMLINK_NOFOLLOW, UTIME_NOW, UTIME_OMIT, dev_t, mode_t, timespec};

#[cfg(sprt_have = "stat")]
pub use libc::{chmod, fchmod, fchmodat, mkdir, mkdirat, mkfifo, mknod, umask};

#[cfg(sprt_have = "utimensat")]
pub use libc::{futimens, utimensat};

#[cfg(sprt_have = "mkfifoat")]
pub use libc::mkfifoat;
