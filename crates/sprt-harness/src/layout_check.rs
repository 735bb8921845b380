//! Layout check against the platform C library.
//!
//! The `libc` crate's declarations stand in for the native headers. Each
//! runtime structure is compared field by field; any difference in size,
//! alignment, offset or field width is a [`Mismatch`].

use serde::{Deserialize, Serialize};
use sprt_core::{RuntimeConfig, Target};

use crate::layout::{FieldLayout, TypeLayout, runtime_layouts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchKind {
    Size,
    Align,
    Offset,
    FieldSize,
    MissingField,
    MissingType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub kind: MismatchKind,
    pub runtime: usize,
    pub native: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    pub target: String,
    pub mode: String,
    pub types_compared: usize,
    pub mismatches: Vec<Mismatch>,
}

impl LayoutReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare one runtime layout against its native counterpart.
#[must_use]
pub fn compare(runtime: &TypeLayout, native: &TypeLayout) -> Vec<Mismatch> {
    let mut out = Vec::new();
    let mut push = |field: Option<&str>, kind, r: usize, n: usize| {
        out.push(Mismatch {
            type_name: runtime.name.clone(),
            field: field.map(str::to_owned),
            kind,
            runtime: r,
            native: n,
        });
    };

    if runtime.size != native.size {
        push(None, MismatchKind::Size, runtime.size, native.size);
    }
    if runtime.align != native.align {
        push(None, MismatchKind::Align, runtime.align, native.align);
    }
    for field in &runtime.fields {
        let Some(other) = native.field(&field.name) else {
            push(Some(&field.name), MismatchKind::MissingField, field.offset, 0);
            continue;
        };
        if field.offset != other.offset {
            push(Some(&field.name), MismatchKind::Offset, field.offset, other.offset);
        }
        if field.size != other.size {
            push(Some(&field.name), MismatchKind::FieldSize, field.size, other.size);
        }
    }
    out
}

/// Compare every runtime layout with the native set.
#[must_use]
pub fn compare_all(runtime: &[TypeLayout], native: &[TypeLayout]) -> Vec<Mismatch> {
    runtime
        .iter()
        .flat_map(|r| match native.iter().find(|n| n.name == r.name) {
            Some(n) => compare(r, n),
            None => vec![Mismatch {
                type_name: r.name.clone(),
                field: None,
                kind: MismatchKind::MissingType,
                runtime: r.size,
                native: 0,
            }],
        })
        .collect()
}

/// Check the leaf this harness was compiled for.
#[must_use]
pub fn check_layouts() -> LayoutReport {
    let runtime = runtime_layouts();
    let native = native_layouts();
    LayoutReport {
        target: Target::CURRENT.to_string(),
        mode: RuntimeConfig::current().build_mode.as_str().to_owned(),
        types_compared: runtime.len(),
        mismatches: compare_all(&runtime, &native),
    }
}

/// Replace the fields `first..=last` with one field named `alias` that spans
/// them. Native headers spell `struct timespec st_atim` as two scalars.
fn join(layout: &mut TypeLayout, first: &str, last: &str, alias: &str) {
    let (Some(a), Some(b)) = (layout.field(first).cloned(), layout.field(last).cloned()) else {
        return;
    };
    layout.fields.retain(|f| f.name != first && f.name != last);
    layout.fields.push(FieldLayout {
        name: alias.to_owned(),
        offset: a.offset,
        size: b.offset + b.size - a.offset,
    });
}

#[cfg(unix)]
#[must_use]
pub fn native_layouts() -> Vec<TypeLayout> {
    use crate::type_layout;

    let mut out = vec![
        type_layout!("timespec", libc::timespec { tv_sec, tv_nsec }),
        type_layout!("timeval", libc::timeval { tv_sec, tv_usec }),
        type_layout!("itimerval", libc::itimerval { it_interval, it_value }),
        type_layout!("utimbuf", libc::utimbuf { actime, modtime }),
        type_layout!("sched_param", libc::sched_param { sched_priority }),
        type_layout!("Dl_info", libc::Dl_info { dli_fname, dli_fbase, dli_sname, dli_saddr }),
        type_layout!("sockaddr", libc::sockaddr { sa_family, sa_data }),
        type_layout!("tm", libc::tm {
            tm_sec, tm_min, tm_hour, tm_mday, tm_mon, tm_year, tm_wday, tm_yday,
            tm_isdst, tm_gmtoff, tm_zone,
        }),
        type_layout!("sockaddr_storage", libc::sockaddr_storage { ss_family }),
        type_layout!("lconv", libc::lconv {
            decimal_point, thousands_sep, grouping, int_curr_symbol, currency_symbol,
            mon_decimal_point, mon_thousands_sep, mon_grouping, positive_sign,
            negative_sign, int_frac_digits, frac_digits,
        }),
        native_dirent(),
    ];

    let mut stat = native_stat();
    join(&mut stat, "st_atime", "st_atime_nsec", "st_atim");
    join(&mut stat, "st_mtime", "st_mtime_nsec", "st_mtim");
    join(&mut stat, "st_ctime", "st_ctime_nsec", "st_ctim");
    out.push(stat);

    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

#[cfg(not(unix))]
#[must_use]
pub fn native_layouts() -> Vec<TypeLayout> {
    Vec::new()
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn native_stat() -> TypeLayout {
    crate::type_layout!("stat", libc::stat64 {
        st_dev, st_ino, st_mode, st_nlink, st_uid, st_gid, st_rdev, st_size,
        st_blksize, st_blocks, st_atime, st_atime_nsec, st_mtime, st_mtime_nsec,
        st_ctime, st_ctime_nsec,
    })
}

#[cfg(all(unix, not(all(target_os = "linux", target_env = "gnu"))))]
fn native_stat() -> TypeLayout {
    crate::type_layout!("stat", libc::stat {
        st_dev, st_ino, st_mode, st_nlink, st_uid, st_gid, st_rdev, st_size,
        st_blksize, st_blocks, st_atime, st_atime_nsec, st_mtime, st_mtime_nsec,
        st_ctime, st_ctime_nsec,
    })
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn native_dirent() -> TypeLayout {
    crate::type_layout!("dirent", libc::dirent64 { d_ino, d_reclen, d_type, d_name })
}

#[cfg(all(unix, not(all(target_os = "linux", target_env = "gnu"))))]
fn native_dirent() -> TypeLayout {
    crate::type_layout!("dirent", libc::dirent { d_ino, d_reclen, d_type, d_name })
}
