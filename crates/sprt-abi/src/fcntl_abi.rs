//! ABI layer for `<fcntl.h>`.
//!
//! C declares `open`, `openat` and `fcntl` variadic. The exports take the
//! optional argument as a fixed trailing parameter instead: `mode` is
//! forwarded only when the flags make `open` read it (`O_CREAT`, or a full
//! `O_TMPFILE` where the platform has one) and is zero otherwise, and the
//! `fcntl` argument travels as `unsigned long` like the native one does.
//! Flag and command values are the leaf's, which are the platform's.

use core::ffi::{c_char, c_int, c_uint, c_ulong};

use sprt_core::abi::{O_CREAT, mode_t};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::fcntl as native;

#[cfg(any(target_os = "linux", target_os = "android"))]
const TMPFILE: c_int = sprt_core::abi::O_TMPFILE;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const TMPFILE: c_int = 0;

/// Whether `flags` make `open`/`openat` consume their mode argument.
#[must_use]
pub const fn open_takes_mode(flags: c_int) -> bool {
    flags & O_CREAT != 0 || (TMPFILE != 0 && flags & TMPFILE == TMPFILE)
}

#[cfg(sprt_have = "fcntl")]
const fn effective_mode(flags: c_int, mode: c_uint) -> c_uint {
    if open_takes_mode(flags) { mode } else { 0 }
}

sprt_fn! {
    #[cfg(sprt_have = "fcntl")]
    fn open(path: *const c_char, flags: c_int, mode: c_uint) -> c_int {
        native::open(path, flags, effective_mode(flags, mode))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fcntl")]
    fn openat(dirfd: c_int, path: *const c_char, flags: c_int, mode: c_uint) -> c_int {
        native::openat(dirfd, path, flags, effective_mode(flags, mode))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fcntl")]
    fn creat(path: *const c_char, mode: mode_t) -> c_int {
        native::creat(path, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "fcntl")]
    fn fcntl(fd: c_int, cmd: c_int, arg: c_ulong) -> c_int {
        native::fcntl(fd, cmd, arg)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "fcntl"))]
    fn open(path: *const c_char, flags: c_int, mode: c_uint) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "fcntl"))]
    fn openat(dirfd: c_int, path: *const c_char, flags: c_int, mode: c_uint) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "fcntl"))]
    fn creat(path: *const c_char, mode: mode_t) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "fcntl"))]
    fn fcntl(fd: c_int, cmd: c_int, arg: c_ulong) -> c_int = -1;
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use sprt_core::abi::{
        AT_FDCWD, F_GETFD, F_GETFL, F_SETFL, FD_CLOEXEC, O_ACCMODE, O_CLOEXEC, O_EXCL, O_NONBLOCK,
        O_RDONLY, O_RDWR, O_TRUNC, O_WRONLY,
    };

    use crate::errno_abi::{get_errno, set_errno};

    fn scratch(tag: &str) -> (std::path::PathBuf, Vec<u8>) {
        use std::os::unix::ffi::OsStrExt;
        let path = std::env::temp_dir().join(format!("sprt-fcntl-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut c = path.as_os_str().as_bytes().to_vec();
        c.push(0);
        (path, c)
    }

    #[test]
    fn flag_values_are_the_platforms() {
        assert_eq!(
            [O_RDONLY, O_WRONLY, O_RDWR, O_ACCMODE, O_CREAT, O_EXCL, O_TRUNC, O_NONBLOCK, O_CLOEXEC],
            [
                libc::O_RDONLY,
                libc::O_WRONLY,
                libc::O_RDWR,
                libc::O_ACCMODE,
                libc::O_CREAT,
                libc::O_EXCL,
                libc::O_TRUNC,
                libc::O_NONBLOCK,
                libc::O_CLOEXEC,
            ]
        );
        assert_eq!(sprt_core::abi::O_DIRECTORY, libc::O_DIRECTORY);
        assert_eq!(sprt_core::abi::O_NOFOLLOW, libc::O_NOFOLLOW);
        assert_eq!(sprt_core::abi::F_DUPFD_CLOEXEC, libc::F_DUPFD_CLOEXEC);
        assert_eq!([F_GETFD, F_GETFL, F_SETFL, FD_CLOEXEC], [
            libc::F_GETFD,
            libc::F_GETFL,
            libc::F_SETFL,
            libc::FD_CLOEXEC
        ]);
    }

    #[test]
    fn mode_is_read_only_for_creating_flags() {
        assert!(open_takes_mode(O_WRONLY | O_CREAT));
        assert!(!open_takes_mode(O_RDWR | O_TRUNC));
        #[cfg(any(target_os = "linux", target_os = "android"))]
        {
            assert!(open_takes_mode(O_RDWR | sprt_core::abi::O_TMPFILE));
            // O_DIRECTORY alone shares bits with O_TMPFILE but is not it.
            assert!(!open_takes_mode(sprt_core::abi::O_DIRECTORY));
        }
    }

    #[test]
    fn create_applies_mode_and_excl_reports_eexist() {
        use std::os::unix::fs::PermissionsExt;

        let (path, c) = scratch("create");
        unsafe {
            let fd = open(c.as_ptr().cast(), O_WRONLY | O_CREAT | O_EXCL, 0o600);
            assert!(fd >= 0);
            assert_eq!(libc::close(fd), 0);

            set_errno(0);
            assert_eq!(open(c.as_ptr().cast(), O_WRONLY | O_CREAT | O_EXCL, 0o600), -1);
            assert_eq!(get_errno(), libc::EEXIST);
        }
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_without_create_is_enoent() {
        let (_path, c) = scratch("missing");
        set_errno(0);
        assert_eq!(unsafe { open(c.as_ptr().cast(), O_RDONLY, 0o777) }, -1);
        assert_eq!(get_errno(), libc::ENOENT);
    }

    #[test]
    fn openat_and_creat_share_the_file() {
        let (path, c) = scratch("openat");
        unsafe {
            let fd = creat(c.as_ptr().cast(), 0o644);
            assert!(fd >= 0);
            assert_eq!(libc::write(fd, b"abc".as_ptr().cast(), 3), 3);
            assert_eq!(libc::close(fd), 0);

            let fd = openat(AT_FDCWD, c.as_ptr().cast(), O_RDONLY, 0);
            assert!(fd >= 0);
            let mut buf = [0u8; 8];
            assert_eq!(libc::read(fd, buf.as_mut_ptr().cast(), buf.len()), 3);
            assert_eq!(&buf[..3], b"abc");
            assert_eq!(libc::close(fd), 0);
        }
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn fcntl_reads_and_sets_descriptor_flags() {
        let (path, c) = scratch("flags");
        unsafe {
            let fd = open(c.as_ptr().cast(), O_RDWR | O_CREAT | O_CLOEXEC, 0o600);
            assert!(fd >= 0);
            assert_eq!(fcntl(fd, F_GETFD, 0) & FD_CLOEXEC, FD_CLOEXEC);

            let fl = fcntl(fd, F_GETFL, 0);
            assert_eq!(fl & O_ACCMODE, O_RDWR);
            assert_eq!(fcntl(fd, F_SETFL, (fl | O_NONBLOCK) as c_ulong), 0);
            assert_ne!(fcntl(fd, F_GETFL, 0) & O_NONBLOCK, 0);
            assert_eq!(libc::close(fd), 0);

            set_errno(0);
            assert_eq!(fcntl(fd, F_GETFD, 0), -1);
            assert_eq!(get_errno(), libc::EBADF);
        }
        std::fs::remove_file(&path).unwrap();
    }
}
