//! ABI layer for `<sys/stat.h>`.
//!
//! Status results come back through a zeroed native `stat` and are copied
//! member by member into the runtime layout, which keeps the platform's
//! reserved words zero. `timespec[2]` arguments are copied the same way;
//! `UTIME_NOW` and `UTIME_OMIT` carry the native values and need no mapping.

use core::ffi::{c_char, c_int};

use sprt_core::abi::{dev_t, mode_t, stat, timespec};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::sys_stat as native;
#[cfg(sprt_have = "utimensat")]
use crate::time_abi::timespec_to_native;
#[cfg(sprt_have = "stat")]
use crate::util::with_native_temp;

// ---------------------------------------------------------------------------
// Marshaling
// ---------------------------------------------------------------------------

/// Copy a native status record into the runtime layout.
#[cfg(unix)]
#[must_use]
pub fn stat_from_native(st: &native::stat) -> stat {
    // SAFETY: stat is a plain C struct.
    let mut out: stat = unsafe { crate::util::zeroed() };
    out.st_dev = st.st_dev as _;
    out.st_ino = st.st_ino as _;
    out.st_mode = st.st_mode as _;
    out.st_nlink = st.st_nlink as _;
    out.st_uid = st.st_uid as _;
    out.st_gid = st.st_gid as _;
    out.st_rdev = st.st_rdev as _;
    out.st_size = st.st_size as _;
    out.st_blksize = st.st_blksize as _;
    out.st_blocks = st.st_blocks as _;
    out.st_atim = timespec { tv_sec: st.st_atime as _, tv_nsec: st.st_atime_nsec as _ };
    out.st_mtim = timespec { tv_sec: st.st_mtime as _, tv_nsec: st.st_mtime_nsec as _ };
    out.st_ctim = timespec { tv_sec: st.st_ctime as _, tv_nsec: st.st_ctime_nsec as _ };
    #[cfg(target_os = "macos")]
    {
        out.st_birthtim = timespec {
            tv_sec: st.st_birthtime as _,
            tv_nsec: st.st_birthtime_nsec as _,
        };
        out.st_flags = st.st_flags as _;
        out.st_gen = st.st_gen as _;
    }
    out
}

/// # Safety
///
/// A non-null `times` must point to two readable `timespec`s.
#[cfg(sprt_have = "utimensat")]
unsafe fn timespecs_to_native(times: *const timespec) -> Option<[native::timespec; 2]> {
    if times.is_null() {
        return None;
    }
    // SAFETY: caller guarantees two elements.
    let pair = unsafe { &*times.cast::<[timespec; 2]>() };
    Some([timespec_to_native(&pair[0]), timespec_to_native(&pair[1])])
}

/// Run a native status call into a temporary and copy the result out.
///
/// # Safety
///
/// `buf` must be null or writable.
#[cfg(sprt_have = "stat")]
unsafe fn stat_into(buf: *mut stat, call: impl FnOnce(*mut native::stat) -> c_int) -> c_int {
    if buf.is_null() {
        return call(core::ptr::null_mut());
    }
    // SAFETY: all-zero is a valid native stat.
    unsafe {
        with_native_temp(|tmp: &mut native::stat| {
            let rc = call(&raw mut *tmp);
            if rc == 0 {
                *buf = stat_from_native(tmp);
            }
            rc
        })
    }
}

// ---------------------------------------------------------------------------
// stat family
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn stat(path: *const c_char, buf: *mut stat) -> c_int {
        stat_into(buf, |tmp| native::stat(path, tmp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn fstat(fd: c_int, buf: *mut stat) -> c_int {
        stat_into(buf, |tmp| native::fstat(fd, tmp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn lstat(path: *const c_char, buf: *mut stat) -> c_int {
        stat_into(buf, |tmp| native::lstat(path, tmp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn fstatat(dirfd: c_int, path: *const c_char, buf: *mut stat, flags: c_int) -> c_int {
        stat_into(buf, |tmp| native::fstatat(dirfd, path, tmp, flags))
    }
}

// ---------------------------------------------------------------------------
// Permissions and node creation
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn chmod(path: *const c_char, mode: mode_t) -> c_int {
        native::chmod(path, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn fchmod(fd: c_int, mode: mode_t) -> c_int {
        native::fchmod(fd, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn fchmodat(dirfd: c_int, path: *const c_char, mode: mode_t, flags: c_int) -> c_int {
        native::fchmodat(dirfd, path, mode as _, flags)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn umask(mask: mode_t) -> mode_t {
        native::umask(mask as _) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn mkdir(path: *const c_char, mode: mode_t) -> c_int {
        native::mkdir(path, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn mkdirat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int {
        native::mkdirat(dirfd, path, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn mkfifo(path: *const c_char, mode: mode_t) -> c_int {
        native::mkfifo(path, mode as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "stat")]
    fn mknod(path: *const c_char, mode: mode_t, dev: dev_t) -> c_int {
        native::mknod(path, mode as _, dev as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mkfifoat")]
    fn mkfifoat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int {
        native::mkfifoat(dirfd, path, mode as _)
    }
}

// ---------------------------------------------------------------------------
// Nanosecond timestamps
// ---------------------------------------------------------------------------

sprt_fn! {
    #[cfg(sprt_have = "utimensat")]
    fn futimens(fd: c_int, times: *const timespec) -> c_int {
        let ntimes = timespecs_to_native(times);
        native::futimens(fd, ntimes.as_ref().map_or(core::ptr::null(), |t| t.as_ptr()))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "utimensat")]
    fn utimensat(dirfd: c_int, path: *const c_char, times: *const timespec, flags: c_int) -> c_int {
        let ntimes = timespecs_to_native(times);
        native::utimensat(dirfd, path, ntimes.as_ref().map_or(core::ptr::null(), |t| t.as_ptr()), flags)
    }
}

// ---------------------------------------------------------------------------
// Unavailable
// ---------------------------------------------------------------------------

macro_rules! stat_unavailable {
    ($cap:tt => $($name:ident($($arg:ident: $ty:ty),*) -> $ret:ty = $fail:expr;)*) => {$(
        sprt_unavailable! {
            #[cfg(not(sprt_have = $cap))]
            fn $name($($arg: $ty),*) -> $ret = $fail;
        }
    )*};
}

stat_unavailable! { "stat" =>
    stat(path: *const c_char, buf: *mut stat) -> c_int = -1;
    fstat(fd: c_int, buf: *mut stat) -> c_int = -1;
    lstat(path: *const c_char, buf: *mut stat) -> c_int = -1;
    fstatat(dirfd: c_int, path: *const c_char, buf: *mut stat, flags: c_int) -> c_int = -1;
    chmod(path: *const c_char, mode: mode_t) -> c_int = -1;
    fchmod(fd: c_int, mode: mode_t) -> c_int = -1;
    fchmodat(dirfd: c_int, path: *const c_char, mode: mode_t, flags: c_int) -> c_int = -1;
    umask(mask: mode_t) -> mode_t = 0;
    mkdir(path: *const c_char, mode: mode_t) -> c_int = -1;
    mkdirat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int = -1;
    mkfifo(path: *const c_char, mode: mode_t) -> c_int = -1;
    mknod(path: *const c_char, mode: mode_t, dev: dev_t) -> c_int = -1;
}

stat_unavailable! { "mkfifoat" =>
    mkfifoat(dirfd: c_int, path: *const c_char, mode: mode_t) -> c_int = -1;
}

stat_unavailable! { "utimensat" =>
    futimens(fd: c_int, times: *const timespec) -> c_int = -1;
    utimensat(dirfd: c_int, path: *const c_char, times: *const timespec, flags: c_int) -> c_int = -1;
}
