use crate::vector::Vector2;
use std::hint::black_box;
use vecmath_profiling::benchmark::Benchmarker;

pub fn add_in_place(benchmarker: impl Benchmarker) {
    let mut a = create_vector2();
    let b = create_vector2();
    benchmarker.benchmark(&mut || *a.add(&b));
}

pub fn sum(benchmarker: impl Benchmarker) {
    let a = create_vector2();
    let b = create_vector2();
    benchmarker.benchmark(&mut || Vector2::sum(&a, &b));
}

pub fn dot(benchmarker: impl Benchmarker) {
    let a = create_vector2();
    let b = create_vector2();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn normalize(benchmarker: impl Benchmarker) {
    let a = create_vector2();
    benchmarker.benchmark(&mut || *black_box(a).normalize());
}

fn create_vector2() -> Vector2 {
    Vector2::new(black_box(1.5), black_box(-2.25))
}
