//! ABI layer for the `<unistd.h>` functions the runtime carries.
//!
//! Descriptors, offsets and ids are scalars and pass straight through;
//! only their widths are adjusted to the leaf's typedefs. `getpagesize` is
//! `sysconf(_SC_PAGESIZE)` narrowed to `int`.
//!
//! `setlogin` is BSD-only; on Linux it is the one function the platform
//! lacks, so its `ENOSYS` stub is what exercises the unavailable policy.

use core::ffi::{c_char, c_int, c_long, c_uint, c_void};

use sprt_core::abi::{gid_t, off_t, pid_t, ssize_t, uid_t, useconds_t};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::unistd as native;

// ---------------------------------------------------------------------------
// Descriptor duplication, process attributes
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "dup")]
    fn dup(fd: c_int) -> c_int {
        native::dup(fd)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dup")]
    fn dup2(fd: c_int, fd2: c_int) -> c_int {
        native::dup2(fd, fd2)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dup3")]
    fn dup3(fd: c_int, fd2: c_int, flags: c_int) -> c_int {
        native::dup3(fd, fd2, flags)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "nice")]
    fn nice(inc: c_int) -> c_int {
        native::nice(inc)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "getppid")]
    fn getppid() -> pid_t {
        native::getppid() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "setlogin")]
    fn setlogin(name: *const c_char) -> c_int {
        native::setlogin(name)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dup"))]
    fn dup(fd: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dup"))]
    fn dup2(fd: c_int, fd2: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dup3"))]
    fn dup3(fd: c_int, fd2: c_int, flags: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "nice"))]
    fn nice(inc: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "getppid"))]
    fn getppid() -> pid_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "setlogin"))]
    fn setlogin(name: *const c_char) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn read(fd: c_int, buf: *mut c_void, count: usize) -> ssize_t {
        native::read(fd, buf, count) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn write(fd: c_int, buf: *const c_void, count: usize) -> ssize_t {
        native::write(fd, buf, count) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn close(fd: c_int) -> c_int {
        native::close(fd)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t {
        native::lseek(fd, offset as _, whence) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn pread(fd: c_int, buf: *mut c_void, count: usize, offset: off_t) -> ssize_t {
        native::pread(fd, buf, count, offset as _) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn pwrite(fd: c_int, buf: *const c_void, count: usize, offset: off_t) -> ssize_t {
        native::pwrite(fd, buf, count, offset as _) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn fsync(fd: c_int) -> c_int {
        native::fsync(fd)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "file_io")]
    fn ftruncate(fd: c_int, length: off_t) -> c_int {
        native::ftruncate(fd, length as _)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn read(fd: c_int, buf: *mut c_void, count: usize) -> ssize_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn write(fd: c_int, buf: *const c_void, count: usize) -> ssize_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn close(fd: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn pread(fd: c_int, buf: *mut c_void, count: usize, offset: off_t) -> ssize_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn pwrite(fd: c_int, buf: *const c_void, count: usize, offset: off_t) -> ssize_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn fsync(fd: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "file_io"))]
    fn ftruncate(fd: c_int, length: off_t) -> c_int = -1;
}

// ---------------------------------------------------------------------------
// Paths and the working directory
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn access(path: *const c_char, mode: c_int) -> c_int {
        native::access(path, mode)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn getcwd(buf: *mut c_char, size: usize) -> *mut c_char {
        native::getcwd(buf, size)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn chdir(path: *const c_char) -> c_int {
        native::chdir(path)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn fchdir(fd: c_int) -> c_int {
        native::fchdir(fd)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn unlink(path: *const c_char) -> c_int {
        native::unlink(path)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn rmdir(path: *const c_char) -> c_int {
        native::rmdir(path)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn link(target: *const c_char, path: *const c_char) -> c_int {
        native::link(target, path)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn symlink(target: *const c_char, path: *const c_char) -> c_int {
        native::symlink(target, path)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "path_ops")]
    fn readlink(path: *const c_char, buf: *mut c_char, size: usize) -> ssize_t {
        native::readlink(path, buf, size) as _
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn access(path: *const c_char, mode: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn getcwd(buf: *mut c_char, size: usize) -> *mut c_char = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn chdir(path: *const c_char) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn fchdir(fd: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn unlink(path: *const c_char) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn rmdir(path: *const c_char) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn link(target: *const c_char, path: *const c_char) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn symlink(target: *const c_char, path: *const c_char) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "path_ops"))]
    fn readlink(path: *const c_char, buf: *mut c_char, size: usize) -> ssize_t = -1;
}

// ---------------------------------------------------------------------------
// Process ids
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "process_ids")]
    fn getpid() -> pid_t {
        native::getpid() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "process_ids")]
    fn getuid() -> uid_t {
        native::getuid() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "process_ids")]
    fn geteuid() -> uid_t {
        native::geteuid() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "process_ids")]
    fn getgid() -> gid_t {
        native::getgid() as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "process_ids")]
    fn getegid() -> gid_t {
        native::getegid() as _
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "process_ids"))]
    fn getpid() -> pid_t = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "process_ids"))]
    fn getuid() -> uid_t = uid_t::MAX;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "process_ids"))]
    fn geteuid() -> uid_t = uid_t::MAX;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "process_ids"))]
    fn getgid() -> gid_t = gid_t::MAX;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "process_ids"))]
    fn getegid() -> gid_t = gid_t::MAX;
}

// ---------------------------------------------------------------------------
// System configuration, terminals, sleeping
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "sysconf")]
    fn sysconf(name: c_int) -> c_long {
        native::sysconf(name) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sysconf")]
    fn getpagesize() -> c_int {
        c_int::try_from(native::sysconf(sprt_core::abi::_SC_PAGESIZE)).unwrap_or(-1)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sysconf")]
    fn isatty(fd: c_int) -> c_int {
        native::isatty(fd)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sleep")]
    fn sleep(seconds: c_uint) -> c_uint {
        native::sleep(seconds)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "sleep")]
    fn usleep(usec: useconds_t) -> c_int {
        native::usleep(usec as _)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sysconf"))]
    fn sysconf(name: c_int) -> c_long = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sysconf"))]
    fn getpagesize() -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sysconf"))]
    fn isatty(fd: c_int) -> c_int = 0;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sleep"))]
    fn sleep(seconds: c_uint) -> c_uint = seconds;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "sleep"))]
    fn usleep(usec: useconds_t) -> c_int = -1;
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn getppid_matches_native() {
        assert_eq!(unsafe { getppid() }, unsafe { libc::getppid() });
    }

    #[test]
    fn dup_and_dup2_share_file() {
        unsafe {
            let fd = dup(1);
            assert!(fd >= 0);
            let target = fd + 10;
            assert_eq!(dup2(fd, target), target);
            assert_eq!(libc::close(target), 0);
            assert_eq!(libc::close(fd), 0);
        }
    }

    #[test]
    fn bad_descriptor_sets_ebadf() {
        assert_eq!(unsafe { dup(-1) }, -1);
        assert_eq!(crate::errno_abi::get_errno(), libc::EBADF);
    }

    fn scratch(tag: &str) -> (std::path::PathBuf, Vec<u8>) {
        use std::os::unix::ffi::OsStrExt;
        let path = std::env::temp_dir().join(format!("sprt-unistd-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let mut c = path.as_os_str().as_bytes().to_vec();
        c.push(0);
        (path, c)
    }

    #[test]
    fn pipe_round_trip_through_read_and_write() {
        let mut fds = [0 as c_int; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0);
        let mut buf = [0u8; 8];
        unsafe {
            assert_eq!(write(fds[1], b"ping".as_ptr().cast(), 4), 4);
            assert_eq!(read(fds[0], buf.as_mut_ptr().cast(), buf.len()), 4);
            assert_eq!(isatty(fds[0]), 0);
            assert_eq!(close(fds[1]), 0);
            assert_eq!(read(fds[0], buf.as_mut_ptr().cast(), buf.len()), 0);
            assert_eq!(close(fds[0]), 0);

            crate::errno_abi::set_errno(0);
            assert_eq!(close(fds[0]), -1);
            assert_eq!(crate::errno_abi::get_errno(), libc::EBADF);
        }
        assert_eq!(&buf[..4], b"ping");
    }

    #[test]
    fn positioned_io_leaves_the_offset_alone() {
        use sprt_core::abi::{SEEK_CUR, SEEK_END, SEEK_SET};

        let (path, c) = scratch("pio");
        unsafe {
            let fd = libc::open(c.as_ptr().cast(), libc::O_RDWR | libc::O_CREAT, 0o600 as c_uint);
            assert!(fd >= 0);
            assert_eq!(write(fd, b"0123456789".as_ptr().cast(), 10), 10);
            assert_eq!(lseek(fd, 2, SEEK_SET), 2);
            assert_eq!(pwrite(fd, b"AB".as_ptr().cast(), 2, 7), 2);
            let mut buf = [0u8; 3];
            assert_eq!(pread(fd, buf.as_mut_ptr().cast(), 3, 6), 3);
            assert_eq!(&buf, b"6AB");
            assert_eq!(lseek(fd, 0, SEEK_CUR), 2);

            assert_eq!(ftruncate(fd, 4), 0);
            assert_eq!(lseek(fd, 0, SEEK_END), 4);
            assert_eq!(fsync(fd), 0);
            assert_eq!(close(fd), 0);
        }
        assert_eq!(std::fs::read(&path).unwrap(), b"0123");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn access_reports_missing_paths() {
        use sprt_core::abi::{F_OK, R_OK};

        let (path, c) = scratch("access");
        crate::errno_abi::set_errno(0);
        assert_eq!(unsafe { access(c.as_ptr().cast(), F_OK) }, -1);
        assert_eq!(crate::errno_abi::get_errno(), libc::ENOENT);
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(unsafe { access(c.as_ptr().cast(), R_OK) }, 0);
        assert_eq!(unsafe { unlink(c.as_ptr().cast()) }, 0);
        assert!(!path.exists());
    }

    #[test]
    fn links_resolve_and_unlink() {
        let (target, tc) = scratch("link-target");
        let (hard, hc) = scratch("link-hard");
        let (soft, sc) = scratch("link-soft");
        std::fs::write(&target, b"x").unwrap();
        unsafe {
            assert_eq!(link(tc.as_ptr().cast(), hc.as_ptr().cast()), 0);
            assert_eq!(symlink(tc.as_ptr().cast(), sc.as_ptr().cast()), 0);
            let mut buf = [0 as c_char; 512];
            let n = readlink(sc.as_ptr().cast(), buf.as_mut_ptr(), buf.len());
            assert_eq!(n as usize, tc.len() - 1);
            let got: Vec<u8> = buf[..n as usize].iter().map(|&b| b as u8).collect();
            assert_eq!(got, &tc[..tc.len() - 1]);
            for c in [&sc, &hc, &tc] {
                assert_eq!(unlink(c.as_ptr().cast()), 0);
            }
        }
        assert!(!hard.exists() && !soft.exists() && !target.exists());
    }

    #[test]
    fn working_directory_moves_and_returns() {
        use std::os::unix::ffi::OsStrExt;

        let before = std::env::current_dir().unwrap();
        let dir = std::env::temp_dir().join(format!("sprt-unistd-cwd-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let dir = dir.canonicalize().unwrap();
        let mut dc = dir.as_os_str().as_bytes().to_vec();
        dc.push(0);

        unsafe {
            let home = libc::open(c".".as_ptr(), libc::O_RDONLY);
            assert!(home >= 0);
            assert_eq!(chdir(dc.as_ptr().cast()), 0);

            let mut buf = [0 as c_char; 4096];
            assert_eq!(getcwd(buf.as_mut_ptr(), buf.len()), buf.as_mut_ptr());
            let cwd = core::ffi::CStr::from_ptr(buf.as_ptr());
            assert_eq!(cwd.to_bytes(), dir.as_os_str().as_bytes());

            crate::errno_abi::set_errno(0);
            let mut tiny = [0 as c_char; 1];
            assert!(getcwd(tiny.as_mut_ptr(), tiny.len()).is_null());
            assert_eq!(crate::errno_abi::get_errno(), libc::ERANGE);

            assert_eq!(fchdir(home), 0);
            assert_eq!(libc::close(home), 0);
            assert_eq!(rmdir(dc.as_ptr().cast()), 0);
        }
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn ids_match_native() {
        unsafe {
            assert_eq!(getpid(), libc::getpid());
            assert_eq!(getuid(), libc::getuid());
            assert_eq!(geteuid(), libc::geteuid());
            assert_eq!(getgid(), libc::getgid());
            assert_eq!(getegid(), libc::getegid());
        }
        assert_eq!(unsafe { getpid() } as u32, std::process::id());
    }

    #[test]
    fn sysconf_names_are_the_platforms() {
        use sprt_core::abi::{_SC_NPROCESSORS_ONLN, _SC_OPEN_MAX, _SC_PAGESIZE};

        assert_eq!(
            [_SC_PAGESIZE, _SC_OPEN_MAX, _SC_NPROCESSORS_ONLN],
            [libc::_SC_PAGESIZE, libc::_SC_OPEN_MAX, libc::_SC_NPROCESSORS_ONLN]
        );
        let page = unsafe { sysconf(_SC_PAGESIZE) };
        assert_eq!(page, unsafe { libc::sysconf(libc::_SC_PAGESIZE) });
        assert_eq!(unsafe { getpagesize() } as c_long, page);
        assert!(unsafe { sysconf(_SC_NPROCESSORS_ONLN) } >= 1);

        crate::errno_abi::set_errno(0);
        assert_eq!(unsafe { sysconf(-1) }, -1);
        assert_eq!(crate::errno_abi::get_errno(), libc::EINVAL);
    }

    #[test]
    fn zero_sleeps_return_immediately() {
        assert_eq!(unsafe { sleep(0) }, 0);
        assert_eq!(unsafe { usleep(0) }, 0);
    }

    // The block-level glob import shadows each fallback constant only when
    // the module declares a function of that name.
    #[allow(non_upper_case_globals, dead_code)]
    #[test]
    fn unavailable_functions_follow_policy() {
        const dup: () = ();
        const getppid: () = ();
        const setlogin: () = ();
        let [dup_declared, getppid_declared, setlogin_declared] = {
            #[allow(unused_imports)]
            use crate::unistd_abi::*;
            [
                core::any::type_name_of_val(&dup) != "()",
                core::any::type_name_of_val(&getppid) != "()",
                core::any::type_name_of_val(&setlogin) != "()",
            ]
        };
        assert!(dup_declared);
        assert!(getppid_declared);
        let stubbed = cfg!(feature = "define-unavailable-functions");
        assert_eq!(setlogin_declared, cfg!(sprt_have = "setlogin") || stubbed);
        #[cfg(target_os = "linux")]
        assert!(!cfg!(sprt_have = "setlogin"));
    }

    #[cfg(all(not(sprt_have = "setlogin"), feature = "define-unavailable-functions"))]
    #[test]
    fn setlogin_stub_reports_enosys() {
        crate::errno_abi::set_errno(0);
        assert_eq!(unsafe { setlogin(c"nobody".as_ptr()) }, -1);
        assert_eq!(crate::errno_abi::get_errno(), sprt_core::errno::ENOSYS);
    }
}
