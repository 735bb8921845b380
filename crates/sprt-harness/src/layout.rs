//! Serializable layout descriptions of the runtime's C structures.
//!
//! Only layout is recorded (size, alignment and per-field offset and size).
//! Field names follow the runtime's spelling; the layout check maps native names
//! onto them before comparing.

use serde::{Deserialize, Serialize};
use sprt_core::abi;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub name: String,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeLayout {
    pub name: String,
    pub size: usize,
    pub align: usize,
    pub fields: Vec<FieldLayout>,
}

impl TypeLayout {
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[doc(hidden)]
pub fn field_size<S, F>(_: impl Fn(&S) -> &F) -> usize {
    size_of::<F>()
}

/// Describe a struct: `type_layout!("name", Type { field, native => alias })`.
///
/// `native => alias` reads `Type::native` and records it as `alias`.
#[macro_export]
macro_rules! type_layout {
    ($name:expr, $ty:ty { $($field:ident $(=> $alias:ident)?),* $(,)? }) => {
        $crate::layout::TypeLayout {
            name: ::std::string::String::from($name),
            size: ::core::mem::size_of::<$ty>(),
            align: ::core::mem::align_of::<$ty>(),
            fields: ::std::vec![$(
                $crate::layout::FieldLayout {
                    name: $crate::type_layout!(@name $field $(=> $alias)?),
                    offset: ::core::mem::offset_of!($ty, $field),
                    size: $crate::layout::field_size(|s: &$ty| &s.$field),
                },
            )*],
        }
    };
    (@name $field:ident) => { ::std::string::String::from(stringify!($field)) };
    (@name $field:ident => $alias:ident) => { ::std::string::String::from(stringify!($alias)) };
}

/// Layouts of every structure the runtime exchanges with native code, as
/// compiled for the current leaf.
#[must_use]
pub fn runtime_layouts() -> Vec<TypeLayout> {
    let mut out = vec![
        type_layout!("timespec", abi::timespec { tv_sec, tv_nsec }),
        type_layout!("timeval", abi::timeval { tv_sec, tv_usec }),
        type_layout!("itimerval", abi::itimerval { it_interval, it_value }),
        type_layout!("utimbuf", abi::utimbuf { actime, modtime }),
        type_layout!("sched_param", abi::sched_param { sched_priority }),
        type_layout!("Dl_info", abi::Dl_info { dli_fname, dli_fbase, dli_sname, dli_saddr }),
        type_layout!("sockaddr", abi::sockaddr { sa_family, sa_data }),
        type_layout!("tm", abi::tm {
            tm_sec, tm_min, tm_hour, tm_mday, tm_mon, tm_year, tm_wday, tm_yday,
            tm_isdst, tm_gmtoff, tm_zone,
        }),
        type_layout!("sockaddr_storage", abi::sockaddr_storage { ss_family }),
        type_layout!("dirent", abi::dirent { d_ino, d_reclen, d_type, d_name }),
        type_layout!("lconv", abi::lconv {
            decimal_point, thousands_sep, grouping, int_curr_symbol, currency_symbol,
            mon_decimal_point, mon_thousands_sep, mon_grouping, positive_sign,
            negative_sign, int_frac_digits, frac_digits,
        }),
    ];
    out.push(stat_layout());
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

#[cfg(not(windows))]
fn stat_layout() -> TypeLayout {
    type_layout!("stat", abi::stat {
        st_dev, st_ino, st_mode, st_nlink, st_uid, st_gid, st_rdev, st_size,
        st_blksize, st_blocks, st_atim, st_mtim, st_ctim,
    })
}

#[cfg(windows)]
fn stat_layout() -> TypeLayout {
    type_layout!("stat", abi::stat {
        st_dev, st_ino, st_mode, st_nlink, st_uid, st_gid, st_rdev, st_size,
        st_atime, st_mtime, st_ctime,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[repr(C)]
    struct Pair {
        a: u8,
        b: u32,
    }

    #[test]
    fn macro_records_offsets_and_sizes() {
        let l = type_layout!("pair", Pair { a, b => second });
        assert_eq!(l.size, 8);
        assert_eq!(l.align, 4);
        assert_eq!(l.field("a"), Some(&FieldLayout { name: "a".into(), offset: 0, size: 1 }));
        assert_eq!(l.field("second").map(|f| f.offset), Some(4));
        assert!(l.field("b").is_none());
    }

    #[test]
    fn runtime_layouts_are_sorted_and_complete() {
        let layouts = runtime_layouts();
        let names: Vec<&str> = layouts.iter().map(|l| l.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        for expected in ["stat", "dirent", "timespec", "sched_param", "lconv", "tm"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn fields_fit_inside_their_struct() {
        for l in runtime_layouts() {
            for f in &l.fields {
                assert!(f.offset + f.size <= l.size, "{}.{} overflows", l.name, f.name);
            }
        }
    }
}
