use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_engine::{
    compute_stats, find_conflicts, DateWindow, School, TeachingDay, WeeklySchedule,
};

fn roster(n: usize) -> Vec<School> {
    (0..n)
        .map(|i| {
            let month = 3 + (i % 8) as u32;
            let windows = vec![
                DateWindow::parse(&format!("{month:02}.01~{month:02}.28"), 2026).unwrap(),
                DateWindow::parse("11.02~11.27", 2026).unwrap(),
            ];
            let schedule = WeeklySchedule::new()
                .with_day(TeachingDay::ALL[i % 5], "1,2교시")
                .with_day(TeachingDay::ALL[(i + 2) % 5], "3,4교시");
            School::new(format!("school-{i}"), windows, schedule).with_sessions(12)
        })
        .collect()
}

fn bench_find_conflicts(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_conflicts");
    for n in [5, 20, 80] {
        let schools = roster(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &schools, |b, schools| {
            b.iter(|| black_box(find_conflicts(black_box(schools))));
        });
    }
    group.finish();
}

fn bench_compute_stats(c: &mut Criterion) {
    let schools = roster(80);
    c.bench_function("compute_stats/80", |b| {
        b.iter(|| black_box(compute_stats(black_box(&schools))));
    });
}

criterion_group!(benches, bench_find_conflicts, bench_compute_stats);
criterion_main!(benches);
