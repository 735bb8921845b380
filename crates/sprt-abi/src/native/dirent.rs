//! `<dirent.h>`

#[cfg(sprt_have = "dirent")]
pub use libc::{DIR, closedir, dirfd, fdopendir, opendir, rewinddir, seekdir, telldir};

#[cfg(all(sprt_have = "dirent", target_os = "linux", target_env = "gnu"))]
pub use libc::{dirent64 as dirent, readdir64 as readdir};

#[cfg(all(sprt_have = "dirent", not(all(target_os = "linux", target_env = "gnu"))))]
pub use libc::{dirent, readdir};

pub use libc::{DT_BLK, DT_CHR, DT_DIR, DT_FIFO, DT_LNK, DT_REG, DT_SOCK, DT_UNKNOWN};
