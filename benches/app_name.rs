use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pivot::normalize::app_name;

fn bench_app_name(c: &mut Criterion) {
    let folder_names = vec![
        "AIMP-5.40.2655",
        "Proxmark3GUI V0.2.8-win64-rrg_other-v4.16717",
        "FastCopy5.8.1_x64",
        "mpv-x86_64-v3-20250404-git-0757185",
        "Everything",
    ];

    c.bench_function("app_name", |b| {
        b.iter(|| {
            for name in &folder_names {
                let _ = app_name(black_box(name));
            }
        })
    });
}

fn bench_app_name_worst_case(c: &mut Criterion) {
    // No detector ever matches, so every position is scanned
    let name = "a".repeat(256);

    c.bench_function("app_name no match", |b| {
        b.iter(|| app_name(black_box(&name)))
    });
}

criterion_group!(benches, bench_app_name, bench_app_name_worst_case);
criterion_main!(benches);
