//! File mode bits.
//!
//! The traditional octal encoding is shared by every supported leaf; on
//! Windows the CRT's `_S_IF*` values coincide with the POSIX ones it defines.

#![allow(non_snake_case)]

use super::mode_t;

pub const S_IFMT: mode_t = 0o170000;
pub const S_IFSOCK: mode_t = 0o140000;
pub const S_IFLNK: mode_t = 0o120000;
pub const S_IFREG: mode_t = 0o100000;
pub const S_IFBLK: mode_t = 0o060000;
pub const S_IFDIR: mode_t = 0o040000;
pub const S_IFCHR: mode_t = 0o020000;
pub const S_IFIFO: mode_t = 0o010000;

pub const S_ISUID: mode_t = 0o4000;
pub const S_ISGID: mode_t = 0o2000;
pub const S_ISVTX: mode_t = 0o1000;

pub const S_IRWXU: mode_t = 0o700;
pub const S_IRUSR: mode_t = 0o400;
pub const S_IWUSR: mode_t = 0o200;
pub const S_IXUSR: mode_t = 0o100;
pub const S_IRWXG: mode_t = 0o070;
pub const S_IRGRP: mode_t = 0o040;
pub const S_IWGRP: mode_t = 0o020;
pub const S_IXGRP: mode_t = 0o010;
pub const S_IRWXO: mode_t = 0o007;
pub const S_IROTH: mode_t = 0o004;
pub const S_IWOTH: mode_t = 0o002;
pub const S_IXOTH: mode_t = 0o001;

pub const fn S_ISDIR(m: mode_t) -> bool {
    m & S_IFMT == S_IFDIR
}

pub const fn S_ISREG(m: mode_t) -> bool {
    m & S_IFMT == S_IFREG
}

pub const fn S_ISLNK(m: mode_t) -> bool {
    m & S_IFMT == S_IFLNK
}

pub const fn S_ISCHR(m: mode_t) -> bool {
    m & S_IFMT == S_IFCHR
}

pub const fn S_ISBLK(m: mode_t) -> bool {
    m & S_IFMT == S_IFBLK
}

pub const fn S_ISFIFO(m: mode_t) -> bool {
    m & S_IFMT == S_IFIFO
}

pub const fn S_ISSOCK(m: mode_t) -> bool {
    m & S_IFMT == S_IFSOCK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_predicates_are_exclusive() {
        let kinds = [S_IFSOCK, S_IFLNK, S_IFREG, S_IFBLK, S_IFDIR, S_IFCHR, S_IFIFO];
        for kind in kinds {
            let m = kind | 0o644;
            let hits = [
                S_ISSOCK(m),
                S_ISLNK(m),
                S_ISREG(m),
                S_ISBLK(m),
                S_ISDIR(m),
                S_ISCHR(m),
                S_ISFIFO(m),
            ];
            assert_eq!(hits.iter().filter(|&&h| h).count(), 1, "mode {m:o}");
        }
    }

    #[test]
    fn permission_groups_compose() {
        assert_eq!(S_IRUSR | S_IWUSR | S_IXUSR, S_IRWXU);
        assert_eq!(S_IRGRP | S_IWGRP | S_IXGRP, S_IRWXG);
        assert_eq!(S_IROTH | S_IWOTH | S_IXOTH, S_IRWXO);
    }
}
