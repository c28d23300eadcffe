//! Benchmarks for walking, filtering and zipping a project tree.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::fs;
use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;
use std::path::PathBuf;
use tempfile::TempDir;
use zipproject_core::creation::filters::filter_entries;
use zipproject_core::creation::ignore::IgnoreList;
use zipproject_core::creation::ignore::IgnorePattern;
use zipproject_core::creation::walker::enumerate_entries;
use zipproject_core::creation::zip::write_archive_to;

/// Creates `dirs` directories of `files_per_dir` 1 KB files, plus some
/// `.log` and `.o` files for the ignore list to drop.
fn create_project(temp: &TempDir, dirs: usize, files_per_dir: usize) -> PathBuf {
    let root = temp.path().join("project");
    let content = "x".repeat(1024);

    for d in 0..dirs {
        let dir = root.join(format!("module_{d:03}"));
        fs::create_dir_all(&dir).unwrap();
        for f in 0..files_per_dir {
            fs::write(dir.join(format!("file_{f:04}.rs")), &content).unwrap();
        }
        fs::write(dir.join("build.log"), "log").unwrap();
        fs::write(dir.join("obj.o"), "obj").unwrap();
    }

    root
}

fn ignore_list() -> IgnoreList {
    IgnoreList::from_patterns(["*.log", "*.o", "target/", "Thumbs.db", ".zipignore"])
}

fn benchmark_pattern_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_matching");
    let path = "project/module_042/deeply/nested/file_0001.rs";

    for raw in ["*.rs", "target/", "file_0001.rs", "nomatch"] {
        let pattern = IgnorePattern::new(raw);
        group.bench_with_input(BenchmarkId::from_parameter(raw), &pattern, |b, p| {
            b.iter(|| p.matches(black_box(path), black_box(Some("file_0001.rs")), false));
        });
    }

    group.finish();
}

fn benchmark_walk_and_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_and_filter");

    for (dirs, files) in [(10, 10), (20, 50)] {
        let temp = TempDir::new().unwrap();
        let root = create_project(&temp, dirs, files);
        let ignore = ignore_list();

        group.throughput(Throughput::Elements((dirs * (files + 2)) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{dirs}x{files}")),
            &root,
            |b, root| {
                b.iter(|| {
                    let entries = enumerate_entries(black_box(root)).unwrap();
                    filter_entries(&entries, &ignore).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_write_archive(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let root = create_project(&temp, 10, 10);
    let entries = filter_entries(&enumerate_entries(&root).unwrap(), &ignore_list()).unwrap();

    let mut group = c.benchmark_group("write_archive");
    group.throughput(Throughput::Bytes(entries.len() as u64 * 1024));
    group.bench_function("deflate_100_files", |b| {
        b.iter(|| {
            let mut out = Cursor::new(Vec::new());
            write_archive_to(&mut out, black_box(&entries), Path::new(&root)).unwrap()
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_pattern_matching,
    benchmark_walk_and_filter,
    benchmark_write_archive
);
criterion_main!(benches);
