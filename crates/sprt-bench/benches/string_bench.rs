//! Memory primitive benchmarks: out-of-line `__sprt_*` exports against
//! the inline builtins and the platform C library.

use core::ffi::c_void;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sprt_abi::string_abi;

fn bench_memcpy_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096, 65536];
    let mut group = c.benchmark_group("memcpy");

    for &size in sizes {
        let src = vec![0xABu8; size];
        let mut dst = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("exported", size), &size, |b, &sz| {
            b.iter(|| unsafe {
                string_abi::memcpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), sz);
                black_box(dst.as_ptr());
            });
        });
        group.bench_with_input(BenchmarkId::new("builtin", size), &size, |b, &sz| {
            b.iter(|| unsafe {
                string_abi::builtin::memcpy(dst.as_mut_ptr().cast(), src.as_ptr().cast(), sz);
                black_box(dst.as_ptr());
            });
        });
        #[cfg(unix)]
        group.bench_with_input(BenchmarkId::new("native", size), &size, |b, &sz| {
            b.iter(|| unsafe {
                libc::memcpy(dst.as_mut_ptr().cast::<c_void>(), src.as_ptr().cast(), sz);
                black_box(dst.as_ptr());
            });
        });
    }
    group.finish();
}

fn bench_strlen(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096];
    let mut group = c.benchmark_group("strlen");

    for &size in sizes {
        let mut s = vec![b'A'; size];
        s.push(0);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("exported", size), &size, |b, _| {
            b.iter(|| black_box(unsafe { string_abi::strlen(s.as_ptr().cast()) }));
        });
        group.bench_with_input(BenchmarkId::new("builtin", size), &size, |b, _| {
            b.iter(|| black_box(unsafe { string_abi::builtin::strlen(s.as_ptr().cast()) }));
        });
        #[cfg(unix)]
        group.bench_with_input(BenchmarkId::new("native", size), &size, |b, _| {
            b.iter(|| black_box(unsafe { libc::strlen(s.as_ptr().cast()) }));
        });
    }
    group.finish();
}

fn bench_memchr(c: &mut Criterion) {
    let size = 4096;
    let mut hay = vec![0u8; size];
    hay[size - 1] = b'x';
    let mut group = c.benchmark_group("memchr");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("exported", |b| {
        b.iter(|| black_box(unsafe { string_abi::memchr(hay.as_ptr().cast(), i32::from(b'x'), size) }));
    });
    group.bench_function("builtin", |b| {
        b.iter(|| {
            black_box(unsafe { string_abi::builtin::memchr(hay.as_ptr().cast(), i32::from(b'x'), size) })
        });
    });
    group.finish();
}

criterion_group!(benches, bench_memcpy_sizes, bench_strlen, bench_memchr);
criterion_main!(benches);
