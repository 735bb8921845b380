//! Error numbers the runtime itself produces.
//!
//! Wrappers never remap errors coming back from native calls; these values
//! are only used for failures the runtime originates.

use crate::target::Target;

/// Function not implemented on this platform.
pub const ENOSYS: i32 = Target::CURRENT.enosys();

/// Invalid argument (identical on every supported leaf).
pub const EINVAL: i32 = 22;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enosys_matches_libc() {
        #[cfg(unix)]
        assert_eq!(ENOSYS, libc::ENOSYS);
        assert!(ENOSYS > 0);
    }

    #[test]
    fn einval_matches_libc() {
        #[cfg(unix)]
        assert_eq!(EINVAL, libc::EINVAL);
    }
}
