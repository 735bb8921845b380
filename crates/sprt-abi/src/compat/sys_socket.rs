//! `<sys/socket.h>` address types.

#[cfg(all(feature = "build-runtime", unix))]
pub use crate::native::types::{
    AF_INET, AF_INET6, AF_UNIX, AF_UNSPEC, sa_family_t, sockaddr, sockaddr_storage, socklen_t,
};

#[cfg(not(all(feature = "build-runtime", unix)))]
pub use crate::sprt::{
    AF_INET, AF_INET6, AF_UNIX, AF_UNSPEC, sa_family_t, sockaddr, sockaddr_storage, socklen_t,
};
