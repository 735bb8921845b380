//! `<unistd.h>` subset.
//!
//! As in `<fcntl.h>`, glibc's `*64` offset functions stand in for the
//! plain names.

pub use libc::{
    _SC_ARG_MAX, _SC_CHILD_MAX, _SC_CLK_TCK, _SC_NGROUPS_MAX, _SC_NPROCESSORS_CONF,
    _SC_NPROCESSORS_ONLN, _SC_OPEN_MAX, _SC_PAGE_SIZE, _SC_PAGESIZE, F_OK, R_OK, SEEK_CUR,
    SEEK_END, SEEK_SET, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO, W_OK, X_OK, gid_t, off_t,
    pid_t, ssize_t, uid_t, useconds_t,
};

#[cfg(sprt_have = "dup")]
pub use libc::{dup, dup2};

#[cfg(sprt_have = "dup3")]
pub use libc::dup3;

#[cfg(sprt_have = "nice")]
pub use libc::nice;

#[cfg(sprt_have = "getppid")]
pub use libc::getppid;

#[cfg(sprt_have = "setlogin")]
unsafe extern "C" {
    pub fn setlogin(name: *const core::ffi::c_char) -> core::ffi::c_int;
}

#[cfg(all(sprt_have = "file_io", target_os = "linux", target_env = "gnu"))]
pub use libc::{ftruncate64 as ftruncate, lseek64 as lseek, pread64 as pread, pwrite64 as pwrite};

#[cfg(all(sprt_have = "file_io", not(all(target_os = "linux", target_env = "gnu"))))]
pub use libc::{ftruncate, lseek, pread, pwrite};

#[cfg(sprt_have = "file_io")]
pub use libc::{close, fsync, read, write};

#[cfg(sprt_have = "path_ops")]
pub use libc::{access, chdir, fchdir, getcwd, link, readlink, rmdir, symlink, unlink};

#[cfg(sprt_have = "process_ids")]
pub use libc::{getegid, geteuid, getgid, getpid, getuid};

#[cfg(sprt_have = "sysconf")]
pub use libc::{isatty, sysconf};

#[cfg(sprt_have = "sleep")]
pub use libc::{sleep, usleep};
