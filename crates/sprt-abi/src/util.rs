//! Shared internal utilities for ABI adapters.

use core::ffi::c_char;

/// Run `f` with a zero-initialized native temporary.
///
/// With `alloca-temporaries` the temporary lives in the caller's frame;
/// otherwise it is heap allocated for the duration of the call. Zeroing
/// keeps platform padding and reserved members from carrying stack garbage
/// into the C library.
///
/// # Safety
///
/// The all-zero bit pattern must be a valid `T` (true for every plain C
/// structure used here).
#[inline(always)]
pub(crate) unsafe fn with_native_temp<T, R>(f: impl FnOnce(&mut T) -> R) -> R {
    #[cfg(feature = "alloca-temporaries")]
    {
        // SAFETY: caller guarantees all-zero is a valid `T`.
        let mut temp: T = unsafe { core::mem::zeroed() };
        f(&mut temp)
    }
    #[cfg(not(feature = "alloca-temporaries"))]
    {
        // SAFETY: caller guarantees all-zero is a valid `T`.
        let mut temp: Box<T> = unsafe { Box::<T>::new_zeroed().assume_init() };
        f(&mut temp)
    }
}

/// A zero-initialized native value, for wrappers that fill one field by field.
///
/// # Safety
///
/// As for [`with_native_temp`].
#[inline(always)]
pub(crate) unsafe fn zeroed<T>() -> T {
    // SAFETY: forwarded to the caller.
    unsafe { core::mem::zeroed() }
}

/// Scan a C string with an optional hard bound.
///
/// Returns `(len, terminated)` where:
/// - `len` is the byte length before the first NUL or before the bound.
/// - `terminated` indicates whether a NUL byte was observed.
///
/// # Safety
///
/// `ptr` must be valid to read up to the discovered length (and bound when given).
pub unsafe fn scan_c_string(ptr: *const c_char, bound: Option<usize>) -> (usize, bool) {
    match bound {
        Some(limit) => {
            for i in 0..limit {
                if unsafe { *ptr.add(i) } == 0 {
                    return (i, true);
                }
            }
            (limit, false)
        }
        None => {
            let mut i = 0usize;
            while unsafe { *ptr.add(i) } != 0 {
                i += 1;
            }
            (i, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    struct Padded {
        a: u8,
        b: u64,
    }

    #[test]
    fn temp_is_zeroed() {
        let (a, b) = unsafe { with_native_temp(|p: &mut Padded| (p.a, p.b)) };
        assert_eq!((a, b), (0, 0));
    }

    #[test]
    fn temp_result_is_returned() {
        let out = unsafe {
            with_native_temp(|p: &mut Padded| {
                p.b = 9;
                p.b * 2
            })
        };
        assert_eq!(out, 18);
    }

    #[test]
    fn scan_bounded_and_unbounded() {
        let s = c"hello";
        assert_eq!(unsafe { scan_c_string(s.as_ptr(), None) }, (5, true));
        assert_eq!(unsafe { scan_c_string(s.as_ptr(), Some(3)) }, (3, false));
        assert_eq!(unsafe { scan_c_string(s.as_ptr(), Some(10)) }, (5, true));
    }
}
