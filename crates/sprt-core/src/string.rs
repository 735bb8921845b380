//! Byte-slice kernels behind the out-of-line `<string.h>` functions.
//!
//! The ABI crate's exported `__sprt_memcpy` and friends reinterpret their
//! raw arguments as slices and land here.

/// Copies `min(n, src.len(), dest.len())` bytes and returns the count.
///
/// The slices cannot overlap.
pub fn copy_bytes(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len()).min(src.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Fills the first `n` bytes of `dest` with `value`.
pub fn fill(dest: &mut [u8], value: u8, n: usize) -> usize {
    let count = n.min(dest.len());
    dest[..count].fill(value);
    count
}

/// C-style comparison of the first `n` bytes.
///
/// Returns the difference of the first mismatching bytes (as unsigned
/// values), or zero when the compared prefixes are equal.
pub fn compare(a: &[u8], b: &[u8], n: usize) -> i32 {
    let count = n.min(a.len()).min(b.len());
    a[..count]
        .iter()
        .zip(&b[..count])
        .find(|(x, y)| x != y)
        .map_or(0, |(&x, &y)| i32::from(x) - i32::from(y))
}

/// Index of the first `needle` within the first `n` bytes.
pub fn find_byte(haystack: &[u8], needle: u8, n: usize) -> Option<usize> {
    let count = n.min(haystack.len());
    haystack[..count].iter().position(|&b| b == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_clamps_to_shorter_slice() {
        let mut dest = [0u8; 5];
        assert_eq!(copy_bytes(&mut dest, b"hello world", 11), 5);
        assert_eq!(&dest, b"hello");
    }

    #[test]
    fn fill_partial() {
        let mut buf = [0u8; 8];
        assert_eq!(fill(&mut buf, b'X', 3), 3);
        assert_eq!(&buf, b"XXX\0\0\0\0\0");
    }

    #[test]
    fn compare_reports_byte_difference() {
        assert_eq!(compare(b"abc", b"abc", 3), 0);
        assert!(compare(b"abc", b"abd", 3) < 0);
        assert!(compare(b"abd", b"abc", 3) > 0);
        assert!(compare(b"\xff", b"\x01", 1) > 0);
        assert_eq!(compare(b"abX", b"abY", 2), 0);
    }

    #[test]
    fn find_first_match() {
        assert_eq!(find_byte(b"hello", b'l', 5), Some(2));
        assert_eq!(find_byte(b"hello", b'o', 4), None);
    }
}
