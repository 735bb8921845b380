//! `<dlfcn.h>`

#[cfg(sprt_have = "dlfcn")]
pub use libc::{
    Dl_info, RTLD_DEFAULT, RTLD_GLOBAL, RTLD_LAZY, RTLD_LOCAL, RTLD_NEXT, RTLD_NOW, dladdr,
    dlclose, dlerror, dlopen, dlsym,
};
