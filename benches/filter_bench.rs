//! Benchmarks for the course filter
//!
//! Run with: cargo bench

use classscope::catalog::{Catalog, CourseRecord};
use classscope::filter::filter_courses;
use classscope::models::SearchTerm;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const SUBJECTS: [&str; 8] = ["AAAD", "BIOL", "CHEM", "COMP", "ECON", "HIST", "MATH", "PSYC"];

fn create_catalog(per_subject: u32) -> Catalog {
    let mut catalog = Catalog::new();
    for (s, subject) in SUBJECTS.iter().enumerate() {
        for n in 0..per_subject {
            let id = s as u32 * per_subject + n;
            catalog.insert(
                "bench",
                CourseRecord {
                    id,
                    title: format!("{} {}", subject, 100 + n),
                    code: format!("Course number {} of {}", n, subject),
                    professor: None,
                    rating: 4.0,
                    difficulty: 3.0,
                    workload: 3.0,
                    usefulness: None,
                    fun: None,
                    description: String::new(),
                    review_count: n,
                },
            );
        }
    }
    catalog
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for per_subject in [10, 100, 1000] {
        let catalog = create_catalog(per_subject);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        let exact = SearchTerm::new("COMP", "");
        group.bench_function(format!("exact_subject_{}", per_subject), |b| {
            b.iter(|| filter_courses(black_box(&catalog), "bench", black_box(&exact)))
        });

        // Matches nothing, so every course is scanned.
        let miss = SearchTerm::new("", "no such course");
        group.bench_function(format!("full_scan_{}", per_subject), |b| {
            b.iter(|| filter_courses(black_box(&catalog), "bench", black_box(&miss)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
