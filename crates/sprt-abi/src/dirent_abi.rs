//! ABI layer for `<dirent.h>`.
//!
//! Directory streams are the platform's own objects behind the runtime's
//! opaque `DIR`. Entries returned by `readdir` already have the runtime
//! `dirent` layout (64-bit entries on glibc), so the pointer is cast.

use core::ffi::{c_char, c_int, c_long};

use sprt_core::abi::{DIR, dirent};

use crate::macros::{sprt_fn, sprt_unavailable};
#[cfg(sprt_have = "dirent")]
use crate::native::dirent as native;

#[cfg(sprt_have = "dirent")]
const _: () = {
    assert!(size_of::<dirent>() == size_of::<native::dirent>());
    assert!(core::mem::offset_of!(dirent, d_name) == core::mem::offset_of!(native::dirent, d_name));
    assert!(core::mem::offset_of!(dirent, d_type) == core::mem::offset_of!(native::dirent, d_type));
};

#[cfg(sprt_have = "dirent")]
#[inline(always)]
fn to_native(dirp: *mut DIR) -> *mut native::DIR {
    dirp.cast()
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn opendir(name: *const c_char) -> *mut DIR {
        native::opendir(name).cast()
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn fdopendir(fd: c_int) -> *mut DIR {
        native::fdopendir(fd).cast()
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn readdir(dirp: *mut DIR) -> *mut dirent {
        native::readdir(to_native(dirp)).cast()
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn closedir(dirp: *mut DIR) -> c_int {
        native::closedir(to_native(dirp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn rewinddir(dirp: *mut DIR) {
        native::rewinddir(to_native(dirp))
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn seekdir(dirp: *mut DIR, loc: c_long) {
        native::seekdir(to_native(dirp), loc as _)
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn telldir(dirp: *mut DIR) -> c_long {
        native::telldir(to_native(dirp)) as _
    }
}

sprt_fn! {
    #[cfg(sprt_have = "dirent")]
    fn dirfd(dirp: *mut DIR) -> c_int {
        native::dirfd(to_native(dirp))
    }
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn opendir(name: *const c_char) -> *mut DIR = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn fdopendir(fd: c_int) -> *mut DIR = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn readdir(dirp: *mut DIR) -> *mut dirent = core::ptr::null_mut();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn closedir(dirp: *mut DIR) -> c_int = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn rewinddir(dirp: *mut DIR) -> () = ();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn seekdir(dirp: *mut DIR, loc: c_long) -> () = ();
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn telldir(dirp: *mut DIR) -> c_long = -1;
}

sprt_unavailable! {
    #[cfg(not(sprt_have = "dirent"))]
    fn dirfd(dirp: *mut DIR) -> c_int = -1;
}

#[cfg(all(test, sprt_have = "dirent"))]
mod tests {
    use super::*;
    use sprt_core::abi::{DT_DIR, DT_REG};
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    fn read_all(dirp: *mut DIR) -> Vec<(Vec<u8>, u8)> {
        let mut out = Vec::new();
        loop {
            let ent = unsafe { readdir(dirp) };
            if ent.is_null() {
                break;
            }
            let ent = unsafe { &*ent };
            out.push((ent.name_bytes(), ent.d_type));
        }
        out.sort();
        out
    }

    #[test]
    fn lists_entries_with_types() {
        let root = std::env::temp_dir().join(format!("sprt-dirent-{}", std::process::id()));
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("file.txt"), b"x").unwrap();
        let c = CString::new(root.as_os_str().as_bytes()).unwrap();

        let dirp = unsafe { opendir(c.as_ptr()) };
        assert!(!dirp.is_null());
        assert!(unsafe { dirfd(dirp) } >= 0);

        let entries = read_all(dirp);
        let names: Vec<&[u8]> = entries.iter().map(|(n, _)| n.as_slice()).collect();
        assert!(names.contains(&b"file.txt".as_slice()));
        assert!(names.contains(&b"sub".as_slice()));
        for (name, ty) in &entries {
            match name.as_slice() {
                b"file.txt" => assert_eq!(*ty, DT_REG),
                b"sub" | b"." | b".." => assert_eq!(*ty, DT_DIR),
                _ => {}
            }
        }

        unsafe { rewinddir(dirp) };
        assert_eq!(read_all(dirp), entries);
        assert_eq!(unsafe { closedir(dirp) }, 0);
        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn telldir_seekdir_revisit_position() {
        let c = CString::new(std::env::temp_dir().as_os_str().as_bytes()).unwrap();
        let dirp = unsafe { opendir(c.as_ptr()) };
        assert!(!dirp.is_null());
        let pos = unsafe { telldir(dirp) };
        let first = unsafe { readdir(dirp) };
        assert!(!first.is_null());
        let first_name = unsafe { (*first).name_bytes() };
        unsafe { seekdir(dirp, pos) };
        let again = unsafe { readdir(dirp) };
        assert_eq!(unsafe { (*again).name_bytes() }, first_name);
        unsafe { closedir(dirp) };
    }

    #[test]
    fn missing_directory_is_null() {
        let dirp = unsafe { opendir(c"/sprt/no/such/dir".as_ptr()) };
        assert!(dirp.is_null());
    }
}
