//! Platform scalar typedefs and plain structures with no functions attached.

pub use libc::{
    AF_INET, AF_INET6, AF_UNIX, AF_UNSPEC, PATH_MAX, blkcnt_t, blksize_t, clockid_t, dev_t,
    gid_t, id_t, ino_t, mode_t, nlink_t, off_t, pid_t, sa_family_t, sockaddr,
    sockaddr_storage, socklen_t, ssize_t, suseconds_t, time_t, uid_t, useconds_t, wchar_t,
};
