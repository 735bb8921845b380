//! `<sys/types.h>`

header!(types);

#[cfg(not(all(feature = "build-runtime", unix)))]
mod overlay {
    pub use crate::sprt::{
        blkcnt_t, blksize_t, clockid_t, dev_t, gid_t, id_t, ino_t, mode_t, nlink_t, off_t, pid_t,
        ssize_t, suseconds_t, time_t, uid_t, useconds_t,
    };
}
