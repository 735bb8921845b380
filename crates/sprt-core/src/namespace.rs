//! Internal symbol namespace.
//!
//! Every runtime function, type and constant exists under an internal name
//! that cannot collide with the platform C library: the public name prefixed
//! with `__sprt_`. The transformation is purely lexical and idempotent, so it
//! can run inside macros ([`sprt_id!`]) as well as at run time
//! ([`make_internal`]).

use std::borrow::Cow;

use crate::availability::Capability;
use crate::config::UnavailablePolicy;
use crate::target::{BuildMode, Target};

/// Prefix carried by every internal symbol.
pub const INTERNAL_PREFIX: &str = "__sprt_";

/// Expands to the internal link name of `name` as a string literal.
///
/// ```
/// assert_eq!(sprt_core::sprt_id!(sched_yield), "__sprt_sched_yield");
/// ```
#[macro_export]
macro_rules! sprt_id {
    ($name:ident) => {
        concat!("__sprt_", stringify!($name))
    };
}

/// Map a public name to its internal name. Already-internal names are
/// returned unchanged.
#[must_use]
pub fn make_internal(name: &str) -> Cow<'_, str> {
    if is_internal(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{INTERNAL_PREFIX}{name}"))
    }
}

#[must_use]
pub fn is_internal(name: &str) -> bool {
    name.starts_with(INTERNAL_PREFIX)
}

/// Strip the internal prefix, if present.
#[must_use]
pub fn public_name(name: &str) -> &str {
    name.strip_prefix(INTERNAL_PREFIX).unwrap_or(name)
}

/// Header a symbol is surfaced through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Header {
    Dirent,
    Dlfcn,
    Errno,
    Fcntl,
    Fenv,
    Limits,
    Locale,
    NlTypes,
    Sched,
    Setjmp,
    SysSocket,
    SysMman,
    SysStat,
    SysTime,
    String,
    SysTypes,
    Time,
    Unistd,
    Utime,
    Wchar,
}

impl Header {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dirent => "dirent.h",
            Self::Dlfcn => "dlfcn.h",
            Self::Errno => "errno.h",
            Self::Fcntl => "fcntl.h",
            Self::Fenv => "fenv.h",
            Self::Limits => "limits.h",
            Self::Locale => "locale.h",
            Self::NlTypes => "nl_types.h",
            Self::Sched => "sched.h",
            Self::Setjmp => "setjmp.h",
            Self::SysSocket => "sys/socket.h",
            Self::SysMman => "sys/mman.h",
            Self::SysStat => "sys/stat.h",
            Self::SysTime => "sys/time.h",
            Self::String => "string.h",
            Self::SysTypes => "sys/types.h",
            Self::Time => "time.h",
            Self::Unistd => "unistd.h",
            Self::Utime => "utime.h",
            Self::Wchar => "wchar.h",
        }
    }
}

/// One exported runtime function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolBinding {
    pub header: Header,
    pub public: &'static str,
    pub internal: &'static str,
    /// `None` for functions every leaf provides.
    pub capability: Option<Capability>,
}

impl SymbolBinding {
    /// The symbol a caller links against.
    ///
    /// Consumers reach the runtime through the internal name. While the
    /// runtime itself is being built the native symbol is the one in scope.
    #[must_use]
    pub const fn link_symbol(&self, mode: BuildMode) -> &'static str {
        match mode {
            BuildMode::ConsumingRuntime => self.internal,
            BuildMode::BuildingRuntime => self.public,
        }
    }

    #[must_use]
    pub const fn available_on(&self, target: Target) -> bool {
        match self.capability {
            Some(cap) => target.has(cap),
            None => true,
        }
    }

    /// Whether the runtime declares this function on `target`.
    #[must_use]
    pub const fn declared_on(&self, target: Target, policy: UnavailablePolicy) -> bool {
        self.available_on(target) || matches!(policy, UnavailablePolicy::Stub)
    }
}

macro_rules! bindings {
    ($($header:ident { $($name:ident $(: $cap:ident)?),* $(,)? })*) => {
        &[$($(
            SymbolBinding {
                header: Header::$header,
                public: stringify!($name),
                internal: sprt_id!($name),
                capability: bindings!(@cap $($cap)?),
            },
        )*)*]
    };
    (@cap) => { None };
    (@cap $cap:ident) => { Some(Capability::$cap) };
}

/// Every function the ABI crate exports.
pub static BINDINGS: &[SymbolBinding] = bindings! {
    Errno {
        __errno_location,
    }
    Sched {
        sched_yield: SchedYield,
        sched_get_priority_min: SchedPriorityRange,
        sched_get_priority_max: SchedPriorityRange,
        sched_getparam: SchedParam,
        sched_setparam: SchedParam,
        sched_getscheduler: SchedParam,
        sched_setscheduler: SchedParam,
        sched_rr_get_interval: SchedRrInterval,
    }
    Dlfcn {
        dlopen: DynamicLoading,
        dlsym: DynamicLoading,
        dlclose: DynamicLoading,
        dlerror: DynamicLoading,
        dladdr: DynamicLoading,
    }
    Fenv {
        feclearexcept: FloatEnv,
        fegetexceptflag: FloatEnv,
        feraiseexcept: FloatEnv,
        fesetexceptflag: FloatEnv,
        fetestexcept: FloatEnv,
        fegetround: FloatEnv,
        fesetround: FloatEnv,
        fegetenv: FloatEnv,
        feholdexcept: FloatEnv,
        fesetenv: FloatEnv,
        feupdateenv: FloatEnv,
        fe_dfl_env: FloatEnv,
    }
    Locale {
        setlocale: Locale,
        localeconv: Locale,
        newlocale: ExtendedLocale,
        duplocale: ExtendedLocale,
        freelocale: ExtendedLocale,
        uselocale: ExtendedLocale,
    }
    NlTypes {
        catopen: MessageCatalog,
        catgets: MessageCatalog,
        catclose: MessageCatalog,
    }
    SysTime {
        gettimeofday: TimeOfDay,
        settimeofday: TimeOfDay,
        getitimer: IntervalTimer,
        setitimer: IntervalTimer,
        utimes: Utimes,
        futimes: Futimes,
        lutimes: Lutimes,
        futimesat: Futimesat,
        adjtime: Adjtime,
    }
    SysStat {
        stat: FileStatus,
        fstat: FileStatus,
        lstat: FileStatus,
        fstatat: FileStatus,
        chmod: FileStatus,
        fchmod: FileStatus,
        fchmodat: FileStatus,
        mkdir: FileStatus,
        mkdirat: FileStatus,
        mkfifo: FileStatus,
        mknod: FileStatus,
        umask: FileStatus,
        futimens: FileTimesNs,
        utimensat: FileTimesNs,
        mkfifoat: Mkfifoat,
    }
    Dirent {
        opendir: DirectoryStream,
        fdopendir: DirectoryStream,
        readdir: DirectoryStream,
        closedir: DirectoryStream,
        rewinddir: DirectoryStream,
        seekdir: DirectoryStream,
        telldir: DirectoryStream,
        dirfd: DirectoryStream,
    }
    Utime {
        utime: Utime,
    }
    String {
        memcpy,
        memmove,
        memset,
        memcmp,
        memchr,
        strlen,
    }
    Unistd {
        dup: Dup,
        dup2: Dup,
        dup3: Dup3,
        nice: Nice,
        getppid: Getppid,
        setlogin: Setlogin,
        read: FileIo,
        write: FileIo,
        close: FileIo,
        lseek: FileIo,
        pread: FileIo,
        pwrite: FileIo,
        fsync: FileIo,
        ftruncate: FileIo,
        access: PathOps,
        getcwd: PathOps,
        chdir: PathOps,
        fchdir: PathOps,
        unlink: PathOps,
        rmdir: PathOps,
        link: PathOps,
        symlink: PathOps,
        readlink: PathOps,
        getpid: ProcessIds,
        getuid: ProcessIds,
        geteuid: ProcessIds,
        getgid: ProcessIds,
        getegid: ProcessIds,
        sysconf: SystemConfig,
        getpagesize: SystemConfig,
        isatty: SystemConfig,
        sleep: Sleep,
        usleep: Sleep,
    }
    Fcntl {
        open: FileControl,
        openat: FileControl,
        creat: FileControl,
        fcntl: FileControl,
    }
    SysMman {
        mmap: MemoryMap,
        munmap: MemoryMap,
        mprotect: MemoryMap,
        msync: MemoryMap,
        madvise: MemoryMap,
        mlock: MemoryMap,
        munlock: MemoryMap,
    }
    Time {
        clock_gettime: Clock,
        clock_getres: Clock,
        nanosleep: Clock,
        time: CalendarTime,
        clock: CalendarTime,
        difftime: CalendarTime,
        mktime: CalendarTime,
        gmtime_r: CalendarTime,
        localtime_r: CalendarTime,
    }
};

/// Look a binding up by public or internal name.
pub fn find_binding(name: &str) -> Option<&'static SymbolBinding> {
    let public = public_name(name);
    BINDINGS.iter().find(|b| b.public == public)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{Arch, Os};

    #[test]
    fn make_internal_prefixes_once() {
        assert_eq!(make_internal("sched_yield"), "__sprt_sched_yield");
        assert_eq!(make_internal("__sprt_sched_yield"), "__sprt_sched_yield");
        assert_eq!(make_internal("__errno_location"), "__sprt___errno_location");
    }

    #[test]
    fn public_name_inverts_make_internal() {
        for name in ["stat", "dlopen", "__errno_location"] {
            assert_eq!(public_name(&make_internal(name)), name);
        }
        assert_eq!(public_name("plain"), "plain");
    }

    #[test]
    fn macro_and_runtime_transform_agree() {
        for binding in BINDINGS {
            assert_eq!(binding.internal, make_internal(binding.public));
        }
    }

    #[test]
    fn binding_names_are_unique() {
        let mut names: Vec<_> = BINDINGS.iter().map(|b| b.public).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn link_symbol_depends_on_mode() {
        let b = find_binding("__sprt_dlopen").unwrap();
        assert_eq!(b.link_symbol(BuildMode::ConsumingRuntime), "__sprt_dlopen");
        assert_eq!(b.link_symbol(BuildMode::BuildingRuntime), "dlopen");
    }

    #[test]
    fn stub_policy_declares_missing_functions() {
        let mac = Target::new(Os::MacOs, Arch::X86_64).unwrap();
        let b = find_binding("sched_getparam").unwrap();
        assert!(!b.declared_on(mac, UnavailablePolicy::Omit));
        assert!(b.declared_on(mac, UnavailablePolicy::Stub));
        let errno = find_binding("__errno_location").unwrap();
        let win = Target::new(Os::Windows, Arch::Aarch64).unwrap();
        assert!(errno.declared_on(win, UnavailablePolicy::Omit));
    }

    #[test]
    fn file_and_memory_primitives_are_bound() {
        let linux = Target::new(Os::Linux, Arch::Aarch64).unwrap();
        let win = Target::new(Os::Windows, Arch::X86_64).unwrap();
        for (name, header) in [
            ("open", Header::Fcntl),
            ("fcntl", Header::Fcntl),
            ("read", Header::Unistd),
            ("close", Header::Unistd),
            ("mmap", Header::SysMman),
            ("clock_gettime", Header::Time),
            ("localtime_r", Header::Time),
        ] {
            let b = find_binding(name).unwrap();
            assert_eq!(b.header, header, "{name}");
            assert!(b.available_on(linux), "{name}");
            assert!(!b.available_on(win), "{name}");
        }
        assert_eq!(Header::SysMman.path(), "sys/mman.h");
    }
}
