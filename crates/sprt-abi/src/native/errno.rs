//! Thread-local `errno` accessor.

#[cfg(target_os = "linux")]
pub use libc::__errno_location as location;

#[cfg(target_os = "android")]
pub use libc::__errno as location;

#[cfg(target_os = "macos")]
pub use libc::__error as location;

#[cfg(windows)]
unsafe extern "C" {
    #[link_name = "_errno"]
    pub fn location() -> *mut core::ffi::c_int;
}
