//! Helper macros for ABI function generation.
//!
//! `sprt_fn!` emits a `pub unsafe extern "C" fn` whose link name is the
//! internal `__sprt_<name>` symbol, so the runtime can sit next to the
//! platform C library without shadowing it. `sprt_unavailable!` emits the
//! `ENOSYS` stand-in for a function the platform lacks, but only when the
//! `define-unavailable-functions` policy is on.

/// Generate an internal-namespace `extern "C"` function.
///
/// ```ignore
/// sprt_fn! {
///     #[cfg(sprt_have = "sched_yield")]
///     fn sched_yield() -> c_int {
///         libc::sched_yield()
///     }
/// }
/// ```
macro_rules! sprt_fn {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(export_name = ::sprt_core::sprt_id!($name))]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            unsafe { $body }
        }
    };

    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? )
        $body:block
    ) => {
        $(#[$meta])*
        #[unsafe(export_name = ::sprt_core::sprt_id!($name))]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) {
            unsafe { $body }
        }
    };
}

/// Generate the `ENOSYS` stub for a function the platform does not provide.
///
/// The stub sets `errno` and returns `$fail`. Without the
/// `define-unavailable-functions` feature nothing is emitted and the name
/// stays undeclared.
macro_rules! sprt_unavailable {
    (
        $(#[$meta:meta])*
        fn $name:ident( $($arg:ident : $argty:ty),* $(,)? ) -> $ret:ty = $fail:expr;
    ) => {
        $(#[$meta])*
        #[cfg(feature = "define-unavailable-functions")]
        #[unsafe(export_name = ::sprt_core::sprt_id!($name))]
        pub unsafe extern "C" fn $name( $($arg : $argty),* ) -> $ret {
            $( let _ = $arg; )*
            $crate::errno_abi::set_errno(::sprt_core::errno::ENOSYS);
            $fail
        }
    };
}

pub(crate) use {sprt_fn, sprt_unavailable};
