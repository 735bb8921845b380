//! `<unistd.h>`

header!(unistd);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(
        sprt_have = "dup",
        sprt_have = "dup3",
        sprt_have = "file_io",
        sprt_have = "getppid",
        sprt_have = "nice",
        sprt_have = "path_ops",
        sprt_have = "process_ids",
        sprt_have = "setlogin",
        sprt_have = "sleep",
        sprt_have = "sysconf",
        feature = "define-unavailable-functions",
    ))]
    use core::ffi::{c_char, c_int, c_long, c_uint, c_void};

    pub use crate::sprt::{
        _SC_ARG_MAX, _SC_CHILD_MAX, _SC_CLK_TCK, _SC_NGROUPS_MAX, _SC_NPROCESSORS_CONF,
        _SC_NPROCESSORS_ONLN, _SC_OPEN_MAX, _SC_PAGE_SIZE, _SC_PAGESIZE, F_OK, R_OK, SEEK_CUR,
        SEEK_END, SEEK_SET, STDERR_FILENO, STDIN_FILENO, STDOUT_FILENO, W_OK, X_OK, gid_t, off_t,
        pid_t, ssize_t, uid_t, useconds_t,
    };

    forward! { "dup" =>
        fn dup(fd: c_int) -> c_int;
        fn dup2(fd: c_int, fd2: c_int) -> c_int;
    }

    forward! { "dup3" =>
        fn dup3(fd: c_int, fd2: c_int, flags: c_int) -> c_int;
    }

    forward! { "nice" =>
        fn nice(inc: c_int) -> c_int;
    }

    forward! { "getppid" =>
        fn getppid() -> pid_t;
    }

    forward! { "setlogin" =>
        fn setlogin(name: *const c_char) -> c_int;
    }

    forward! { "file_io" =>
        fn read(fd: c_int, buf: *mut c_void, count: usize) -> ssize_t;
        fn write(fd: c_int, buf: *const c_void, count: usize) -> ssize_t;
        fn close(fd: c_int) -> c_int;
        fn lseek(fd: c_int, offset: off_t, whence: c_int) -> off_t;
        fn pread(fd: c_int, buf: *mut c_void, count: usize, offset: off_t) -> ssize_t;
        fn pwrite(fd: c_int, buf: *const c_void, count: usize, offset: off_t) -> ssize_t;
        fn fsync(fd: c_int) -> c_int;
        fn ftruncate(fd: c_int, length: off_t) -> c_int;
    }

    forward! { "path_ops" =>
        fn access(path: *const c_char, mode: c_int) -> c_int;
        fn getcwd(buf: *mut c_char, size: usize) -> *mut c_char;
        fn chdir(path: *const c_char) -> c_int;
        fn fchdir(fd: c_int) -> c_int;
        fn unlink(path: *const c_char) -> c_int;
        fn rmdir(path: *const c_char) -> c_int;
        fn link(target: *const c_char, path: *const c_char) -> c_int;
        fn symlink(target: *const c_char, path: *const c_char) -> c_int;
        fn readlink(path: *const c_char, buf: *mut c_char, size: usize) -> ssize_t;
    }

    forward! { "process_ids" =>
        fn getpid() -> pid_t;
        fn getuid() -> uid_t;
        fn geteuid() -> uid_t;
        fn getgid() -> gid_t;
        fn getegid() -> gid_t;
    }

    forward! { "sysconf" =>
        fn sysconf(name: c_int) -> c_long;
        fn getpagesize() -> c_int;
        fn isatty(fd: c_int) -> c_int;
    }

    forward! { "sleep" =>
        fn sleep(seconds: c_uint) -> c_uint;
        fn usleep(usec: useconds_t) -> c_int;
    }
}
