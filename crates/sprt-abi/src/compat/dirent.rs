//! `<dirent.h>`

header!(dirent);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    #[cfg(any(sprt_have = "dirent", feature = "define-unavailable-functions"))]
    use core::ffi::{c_char, c_int, c_long};

    pub use crate::sprt::{
        DIR, DT_BLK, DT_CHR, DT_DIR, DT_FIFO, DT_LNK, DT_REG, DT_SOCK, DT_UNKNOWN, NAME_MAX,
        dirent,
    };

    forward! { "dirent" =>
        fn opendir(name: *const c_char) -> *mut DIR;
        fn fdopendir(fd: c_int) -> *mut DIR;
        fn readdir(dirp: *mut DIR) -> *mut dirent;
        fn closedir(dirp: *mut DIR) -> c_int;
        fn rewinddir(dirp: *mut DIR);
        fn seekdir(dirp: *mut DIR, loc: c_long);
        fn telldir(dirp: *mut DIR) -> c_long;
        fn dirfd(dirp: *mut DIR) -> c_int;
    }
}
