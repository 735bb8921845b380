//! `<utime.h>`

pub use libc::utimbuf;

#[cfg(sprt_have = "utime")]
pub use libc::utime;
