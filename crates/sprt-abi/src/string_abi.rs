//! ABI layer for the `<string.h>` memory primitives.
//!
//! The exported `__sprt_mem*` functions are out-of-line implementations over
//! the byte routines in `sprt_core::string`, except `memmove`, which copies
//! through raw pointers because its ranges may alias. With `builtin-inlines` the
//! internal surface uses [`builtin`] instead, which lowers straight to
//! compiler intrinsics.

use core::ffi::{c_char, c_int, c_void};
use core::ptr;
use core::slice;

use sprt_core::string as bytes;

use crate::macros::sprt_fn;
use crate::util::scan_c_string;

sprt_fn! {
    fn memcpy(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        if n != 0 {
            let d = slice::from_raw_parts_mut(dest.cast::<u8>(), n);
            let s = slice::from_raw_parts(src.cast::<u8>(), n);
            bytes::copy_bytes(d, s, n);
        }
        dest
    }
}

sprt_fn! {
    fn memmove(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        // The ranges may alias, so no slice is formed over either.
        if n != 0 {
            ptr::copy(src.cast::<u8>(), dest.cast::<u8>(), n);
        }
        dest
    }
}

sprt_fn! {
    fn memset(dest: *mut c_void, c: c_int, n: usize) -> *mut c_void {
        if n != 0 {
            bytes::fill(slice::from_raw_parts_mut(dest.cast::<u8>(), n), c as u8, n);
        }
        dest
    }
}

sprt_fn! {
    fn memcmp(a: *const c_void, b: *const c_void, n: usize) -> c_int {
        if n == 0 {
            return 0;
        }
        let a = slice::from_raw_parts(a.cast::<u8>(), n);
        let b = slice::from_raw_parts(b.cast::<u8>(), n);
        bytes::compare(a, b, n)
    }
}

sprt_fn! {
    fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
        if n == 0 {
            return ptr::null_mut();
        }
        let hay = slice::from_raw_parts(s.cast::<u8>(), n);
        match bytes::find_byte(hay, c as u8, n) {
            Some(i) => s.cast::<u8>().add(i).cast_mut().cast(),
            None => ptr::null_mut(),
        }
    }
}

sprt_fn! {
    fn strlen(s: *const c_char) -> usize {
        scan_c_string(s, None).0
    }
}

/// Intrinsic-backed forms used by the internal surface under
/// `builtin-inlines`. Signatures match the exported functions.
pub mod builtin {
    use core::ffi::{CStr, c_char, c_int, c_void};
    use core::slice;

    /// # Safety
    /// As for C `memcpy`.
    #[inline(always)]
    pub unsafe fn memcpy(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        unsafe { core::ptr::copy_nonoverlapping(src.cast::<u8>(), dest.cast::<u8>(), n) };
        dest
    }

    /// # Safety
    /// As for C `memmove`.
    #[inline(always)]
    pub unsafe fn memmove(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
        unsafe { core::ptr::copy(src.cast::<u8>(), dest.cast::<u8>(), n) };
        dest
    }

    /// # Safety
    /// As for C `memset`.
    #[inline(always)]
    pub unsafe fn memset(dest: *mut c_void, c: c_int, n: usize) -> *mut c_void {
        unsafe { core::ptr::write_bytes(dest.cast::<u8>(), c as u8, n) };
        dest
    }

    /// # Safety
    /// As for C `memcmp`.
    #[inline(always)]
    pub unsafe fn memcmp(a: *const c_void, b: *const c_void, n: usize) -> c_int {
        if n == 0 {
            return 0;
        }
        let (a, b) = unsafe {
            (
                slice::from_raw_parts(a.cast::<u8>(), n),
                slice::from_raw_parts(b.cast::<u8>(), n),
            )
        };
        a.iter()
            .zip(b)
            .find(|(x, y)| x != y)
            .map_or(0, |(x, y)| c_int::from(*x) - c_int::from(*y))
    }

    /// # Safety
    /// As for C `memchr`.
    #[inline(always)]
    pub unsafe fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
        if n == 0 {
            return core::ptr::null_mut();
        }
        let hay = unsafe { slice::from_raw_parts(s.cast::<u8>(), n) };
        match hay.iter().position(|&b| b == c as u8) {
            Some(i) => unsafe { s.cast::<u8>().add(i) }.cast_mut().cast(),
            None => core::ptr::null_mut(),
        }
    }

    /// # Safety
    /// As for C `strlen`.
    #[inline(always)]
    pub unsafe fn strlen(s: *const c_char) -> usize {
        unsafe { CStr::from_ptr(s) }.count_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both<R: PartialEq + core::fmt::Debug>(
        out_of_line: impl Fn() -> R,
        inline: impl Fn() -> R,
    ) -> R {
        let a = out_of_line();
        let b = inline();
        assert_eq!(a, b);
        a
    }

    #[test]
    fn memcpy_copies_and_returns_dest() {
        let src = *b"abcdef";
        let mut dst = [0u8; 6];
        let ret = unsafe { memcpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), 6) };
        assert_eq!(ret.cast::<u8>(), dst.as_mut_ptr());
        assert_eq!(&dst, b"abcdef");
    }

    #[test]
    fn memmove_handles_both_overlap_directions() {
        let mut buf = *b"0123456789";
        let p = buf.as_mut_ptr();
        unsafe { memmove(p.add(2).cast(), p.cast(), 5) };
        assert_eq!(&buf, b"0101234789");

        let mut buf = *b"0123456789";
        let p = buf.as_mut_ptr();
        unsafe { memmove(p.cast(), p.add(3).cast(), 5) };
        assert_eq!(&buf, b"3456756789");
    }

    #[test]
    fn memmove_survives_identical_and_adjacent_ranges() {
        let mut buf = *b"abcdefgh";
        let p = buf.as_mut_ptr();
        let ret = unsafe { memmove(p.cast(), p.cast(), 8) };
        assert_eq!(ret.cast::<u8>(), p);
        assert_eq!(&buf, b"abcdefgh");

        unsafe { memmove(p.add(1).cast(), p.cast(), 7) };
        assert_eq!(&buf, b"aabcdefg");
        unsafe { memmove(p.cast(), p.add(1).cast(), 7) };
        assert_eq!(&buf, b"abcdefgg");

        unsafe { memmove(p.add(4).cast(), p.cast(), 4) };
        assert_eq!(&buf, b"abcdabcd");
        assert_eq!(unsafe { memmove(p.cast(), ptr::null(), 0) }.cast::<u8>(), p);
    }

    #[test]
    fn memmove_matches_builtin() {
        let run = |f: unsafe fn(*mut c_void, *const c_void, usize) -> *mut c_void| {
            let mut buf = *b"abcdefghij";
            let p = buf.as_mut_ptr();
            unsafe { f(p.add(1).cast(), p.cast(), 7) };
            buf
        };
        both(|| run(|d, s, n| unsafe { memmove(d, s, n) }), || run(builtin::memmove));
    }

    #[test]
    fn memset_fills_low_byte() {
        let mut buf = [0u8; 4];
        unsafe { memset(buf.as_mut_ptr().cast(), 0x1ff, 3) };
        assert_eq!(buf, [0xff, 0xff, 0xff, 0]);
    }

    #[test]
    fn memcmp_sign_agrees_with_builtin() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"abc", b"abc"),
            (b"abc", b"abd"),
            (b"b", b"a"),
            (b"\x00\xff", b"\x00\x01"),
        ];
        for (a, b) in cases {
            let n = a.len();
            both(
                || unsafe { memcmp(a.as_ptr().cast(), b.as_ptr().cast(), n) }.signum(),
                || unsafe { builtin::memcmp(a.as_ptr().cast(), b.as_ptr().cast(), n) }.signum(),
            );
        }
    }

    #[test]
    fn memchr_finds_first_match() {
        let hay = b"hello";
        let hit = both(
            || unsafe { memchr(hay.as_ptr().cast(), c_int::from(b'l'), 5) },
            || unsafe { builtin::memchr(hay.as_ptr().cast(), c_int::from(b'l'), 5) },
        );
        assert_eq!(hit.cast::<u8>().cast_const(), unsafe { hay.as_ptr().add(2) });
        assert!(unsafe { memchr(hay.as_ptr().cast(), c_int::from(b'z'), 5) }.is_null());
    }

    #[test]
    fn strlen_agrees_with_builtin() {
        for s in [c"", c"a", c"sprt runtime"] {
            both(
                || unsafe { strlen(s.as_ptr()) },
                || unsafe { builtin::strlen(s.as_ptr()) },
            );
        }
    }
}
