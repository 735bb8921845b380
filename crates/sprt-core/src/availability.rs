//! Per-leaf function availability.
//!
//! Each [`Capability`] names a group of functions that a platform either
//! provides as a whole or not at all. The ABI crate's build script turns this
//! table into `sprt_have = "<name>"` cfgs, and the function declarations are
//! gated on them.

use crate::target::{Os, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// `sched_yield`
    SchedYield,
    /// `sched_get_priority_min`, `sched_get_priority_max`
    SchedPriorityRange,
    /// `sched_getparam`, `sched_setparam`, `sched_getscheduler`, `sched_setscheduler`
    SchedParam,
    /// `sched_rr_get_interval`
    SchedRrInterval,
    /// `dlopen`, `dlsym`, `dlclose`, `dlerror`, `dladdr`
    DynamicLoading,
    /// The `<fenv.h>` family.
    FloatEnv,
    /// `setlocale`, `localeconv`
    Locale,
    /// `newlocale`, `duplocale`, `freelocale`, `uselocale`
    ExtendedLocale,
    /// `catopen`, `catgets`, `catclose`
    MessageCatalog,
    /// `gettimeofday`, `settimeofday`
    TimeOfDay,
    /// `getitimer`, `setitimer`
    IntervalTimer,
    Utimes,
    Futimes,
    Lutimes,
    Futimesat,
    Adjtime,
    /// `stat`, `fstat`, `lstat`, `fstatat` and the mode/node setters.
    FileStatus,
    /// `futimens`, `utimensat`
    FileTimesNs,
    Mkfifoat,
    /// `opendir`, `readdir` and the rest of `<dirent.h>`.
    DirectoryStream,
    Utime,
    /// `dup`, `dup2`
    Dup,
    Dup3,
    Nice,
    Getppid,
    Setlogin,
    /// `open`, `openat`, `creat`, `fcntl`
    FileControl,
    /// `mmap`, `munmap`, `mprotect`, `msync`, `madvise`, `mlock`, `munlock`
    MemoryMap,
    /// `clock_gettime`, `clock_getres`, `nanosleep`
    Clock,
    /// `time`, `clock`, `difftime`, `mktime`, `gmtime_r`, `localtime_r`
    CalendarTime,
    /// `read`, `write`, `close`, `lseek`, `pread`, `pwrite`, `fsync`, `ftruncate`
    FileIo,
    /// `access`, `getcwd`, `chdir`, `fchdir`, `unlink`, `rmdir`, `link`,
    /// `symlink`, `readlink`
    PathOps,
    /// `getpid` and the real/effective user and group ids.
    ProcessIds,
    /// `sysconf`, `getpagesize`, `isatty`
    SystemConfig,
    /// `sleep`, `usleep`
    Sleep,
}

impl Capability {
    pub const ALL: [Capability; 35] = [
        Capability::SchedYield,
        Capability::SchedPriorityRange,
        Capability::SchedParam,
        Capability::SchedRrInterval,
        Capability::DynamicLoading,
        Capability::FloatEnv,
        Capability::Locale,
        Capability::ExtendedLocale,
        Capability::MessageCatalog,
        Capability::TimeOfDay,
        Capability::IntervalTimer,
        Capability::Utimes,
        Capability::Futimes,
        Capability::Lutimes,
        Capability::Futimesat,
        Capability::Adjtime,
        Capability::FileStatus,
        Capability::FileTimesNs,
        Capability::Mkfifoat,
        Capability::DirectoryStream,
        Capability::Utime,
        Capability::Dup,
        Capability::Dup3,
        Capability::Nice,
        Capability::Getppid,
        Capability::Setlogin,
        Capability::FileControl,
        Capability::MemoryMap,
        Capability::Clock,
        Capability::CalendarTime,
        Capability::FileIo,
        Capability::PathOps,
        Capability::ProcessIds,
        Capability::SystemConfig,
        Capability::Sleep,
    ];

    /// Value used in `cfg(sprt_have = "...")`.
    #[must_use]
    pub const fn cfg_name(self) -> &'static str {
        match self {
            Self::SchedYield => "sched_yield",
            Self::SchedPriorityRange => "sched_priority_range",
            Self::SchedParam => "sched_param",
            Self::SchedRrInterval => "sched_rr_interval",
            Self::DynamicLoading => "dlfcn",
            Self::FloatEnv => "fenv",
            Self::Locale => "locale",
            Self::ExtendedLocale => "xlocale",
            Self::MessageCatalog => "nl_types",
            Self::TimeOfDay => "timeofday",
            Self::IntervalTimer => "itimer",
            Self::Utimes => "utimes",
            Self::Futimes => "futimes",
            Self::Lutimes => "lutimes",
            Self::Futimesat => "futimesat",
            Self::Adjtime => "adjtime",
            Self::FileStatus => "stat",
            Self::FileTimesNs => "utimensat",
            Self::Mkfifoat => "mkfifoat",
            Self::DirectoryStream => "dirent",
            Self::Utime => "utime",
            Self::Dup => "dup",
            Self::Dup3 => "dup3",
            Self::Nice => "nice",
            Self::Getppid => "getppid",
            Self::Setlogin => "setlogin",
            Self::FileControl => "fcntl",
            Self::MemoryMap => "mman",
            Self::Clock => "clock",
            Self::CalendarTime => "calendar_time",
            Self::FileIo => "file_io",
            Self::PathOps => "path_ops",
            Self::ProcessIds => "process_ids",
            Self::SystemConfig => "sysconf",
            Self::Sleep => "sleep",
        }
    }

    pub fn from_cfg_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cap| cap.cfg_name() == name)
    }
}

impl Target {
    /// Whether this leaf's C library provides `cap`.
    #[must_use]
    pub const fn has(self, cap: Capability) -> bool {
        use Capability::*;
        match self.os() {
            Os::Linux => !matches!(cap, Setlogin),
            Os::Android => !matches!(
                cap,
                MessageCatalog | Futimes | Lutimes | Futimesat | Adjtime | Mkfifoat | Setlogin
            ),
            Os::MacOs => !matches!(
                cap,
                SchedParam | SchedRrInterval | Futimesat | Mkfifoat | Dup3
            ),
            // The Windows leaf supplies layouts and constants only.
            Os::Windows => false,
        }
    }

    /// Capabilities this leaf lacks.
    pub fn missing(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |cap| !self.has(*cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Arch;

    fn leaf(os: Os, arch: Arch) -> Target {
        Target::new(os, arch).unwrap()
    }

    #[test]
    fn cfg_names_are_unique_and_parse_back() {
        for cap in Capability::ALL {
            assert_eq!(Capability::from_cfg_name(cap.cfg_name()), Some(cap));
        }
        let mut names: Vec<_> = Capability::ALL.iter().map(|c| c.cfg_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Capability::ALL.len());
    }

    #[test]
    fn macos_lacks_sched_param_but_yields() {
        let mac = leaf(Os::MacOs, Arch::Aarch64);
        assert!(mac.has(Capability::SchedYield));
        assert!(mac.has(Capability::SchedPriorityRange));
        assert!(!mac.has(Capability::SchedParam));
        assert!(!mac.has(Capability::SchedRrInterval));
        assert!(!mac.has(Capability::Futimesat));
        assert!(mac.has(Capability::Setlogin));
    }

    #[test]
    fn android_lacks_bsd_time_setters() {
        let droid = leaf(Os::Android, Arch::Arm);
        assert!(!droid.has(Capability::Futimes));
        assert!(!droid.has(Capability::Lutimes));
        assert!(!droid.has(Capability::Adjtime));
        assert!(!droid.has(Capability::MessageCatalog));
        assert!(droid.has(Capability::Utimes));
    }

    #[test]
    fn windows_has_no_functions() {
        let win = leaf(Os::Windows, Arch::X86_64);
        assert_eq!(win.missing().count(), Capability::ALL.len());
    }

    #[test]
    fn linux_lacks_only_setlogin() {
        let linux = leaf(Os::Linux, Arch::X86_64);
        assert_eq!(linux.missing().collect::<Vec<_>>(), vec![Capability::Setlogin]);
    }

    #[test]
    fn posix_core_is_on_every_unix_leaf() {
        let core = [
            Capability::FileControl,
            Capability::MemoryMap,
            Capability::Clock,
            Capability::CalendarTime,
            Capability::FileIo,
            Capability::PathOps,
            Capability::ProcessIds,
            Capability::SystemConfig,
            Capability::Sleep,
        ];
        for target in Target::LEAVES.iter().filter(|t| t.os() != Os::Windows) {
            for cap in core {
                assert!(target.has(cap), "{target} lacks {cap:?}");
            }
        }
    }
}
