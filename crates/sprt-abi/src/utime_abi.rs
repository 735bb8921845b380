//! ABI layer for `<utime.h>`.

use core::ffi::{c_char, c_int};

use sprt_core::abi::utimbuf;

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(unix)]
use crate::native::utime as native;

#[cfg(unix)]
#[must_use]
pub fn utimbuf_to_native(times: &utimbuf) -> native::utimbuf {
    // SAFETY: utimbuf is a plain C struct.
    let mut out: native::utimbuf = unsafe { crate::util::zeroed() };
    out.actime = times.actime as _;
    out.modtime = times.modtime as _;
    out
}

sprt_fn! {
    /// A null `times` sets both timestamps to now.
    #[cfg(sprt_have = "utime")]
    fn utime(path: *const c_char, times: *const utimbuf) -> c_int {
        if times.is_null() {
            return native::utime(path, core::ptr::null());
        }
        let tmp = utimbuf_to_native(&*times);
        native::utime(path, &tmp)
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "utime"))]
    fn utime(path: *const c_char, times: *const utimbuf) -> c_int = -1;
}

#[cfg(all(test, sprt_have = "utime"))]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::fs::MetadataExt;

    #[test]
    fn explicit_times_are_applied() {
        let path = std::env::temp_dir().join(format!("sprt-utime-{}", std::process::id()));
        std::fs::write(&path, b"").unwrap();
        let c = CString::new(path.as_os_str().as_bytes()).unwrap();
        let times = utimbuf { actime: 111_111, modtime: 222_222 };
        assert_eq!(unsafe { utime(c.as_ptr(), &times) }, 0);
        let meta = std::fs::metadata(&path).unwrap();
        assert_eq!(meta.atime(), 111_111);
        assert_eq!(meta.mtime(), 222_222);
        assert_eq!(unsafe { utime(c.as_ptr(), core::ptr::null()) }, 0);
        assert!(std::fs::metadata(&path).unwrap().mtime() > 222_222);
        std::fs::remove_file(&path).unwrap();
    }
}
