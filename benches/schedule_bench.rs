use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use meeting_deadlines::prelude::*;

fn anchors() -> Vec<NaiveDate> {
    vec![
        NaiveDate::from_ymd_opt(2024, 4, 27).unwrap(),
        NaiveDate::from_ymd_opt(2023, 3, 31).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    ]
}

fn build_all(anchors: &[NaiveDate]) {
    for anchor in anchors {
        let res = Schedule::build(*anchor, true);
        assert!(res.is_ok());
    }
}

fn render_all(schedules: &[Schedule]) {
    for schedule in schedules {
        let text = to_text(schedule);
        assert!(!text.is_empty());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let schedules: Vec<Schedule> = anchors()
        .into_iter()
        .map(|anchor| Schedule::new(anchor).unwrap())
        .collect();

    c.bench_function("build", |b| b.iter(|| build_all(black_box(&anchors()))));
    c.bench_function("render", |b| b.iter(|| render_all(black_box(&schedules))));
    c.bench_function("apply_offset", |b| {
        b.iter(|| {
            for anchor in anchors() {
                for offset in [Offset::Months(-2), Offset::Weeks(-4), Offset::Days(-14)] {
                    let _ = black_box(apply_offset(black_box(anchor), offset));
                }
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
