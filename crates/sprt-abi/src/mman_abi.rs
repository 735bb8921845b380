//! ABI layer for `<sys/mman.h>`.
//!
//! Mappings are forwarded unchanged: protection, flag and advice values are
//! the platform's, and a failed `mmap` returns `MAP_FAILED`, never null.

use core::ffi::{c_int, c_void};

use sprt_core::abi::off_t;
#[cfg(all(not(sprt_have = "mman"), feature = "define-unavailable-functions"))]
use sprt_core::abi::MAP_FAILED;

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::sys_mman as native;

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn mmap(addr: *mut c_void, len: usize, prot: c_int, flags: c_int, fd: c_int, offset: off_t) -> *mut c_void {
        native::mmap(addr, len, prot, flags, fd, offset as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn munmap(addr: *mut c_void, len: usize) -> c_int {
        native::munmap(addr, len)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn mprotect(addr: *mut c_void, len: usize, prot: c_int) -> c_int {
        native::mprotect(addr, len, prot)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn msync(addr: *mut c_void, len: usize, flags: c_int) -> c_int {
        native::msync(addr, len, flags)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn madvise(addr: *mut c_void, len: usize, advice: c_int) -> c_int {
        native::madvise(addr, len, advice)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn mlock(addr: *const c_void, len: usize) -> c_int {
        native::mlock(addr, len)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "mman")]
    fn munlock(addr: *const c_void, len: usize) -> c_int {
        native::munlock(addr, len)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn mmap(addr: *mut c_void, len: usize, prot: c_int, flags: c_int, fd: c_int, offset: off_t) -> *mut c_void = MAP_FAILED;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn munmap(addr: *mut c_void, len: usize) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn mprotect(addr: *mut c_void, len: usize, prot: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn msync(addr: *mut c_void, len: usize, flags: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn madvise(addr: *mut c_void, len: usize, advice: c_int) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn mlock(addr: *const c_void, len: usize) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "mman"))]
    fn munlock(addr: *const c_void, len: usize) -> c_int = -1;
}
