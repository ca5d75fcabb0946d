use crate::vector::Vector3;
use std::hint::black_box;
use vecmath_profiling::benchmark::Benchmarker;

pub fn add_in_place(benchmarker: impl Benchmarker) {
    let mut a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || *a.add(&b));
}

pub fn sum(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || Vector3::sum(&a, &b));
}

pub fn dot(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3();
    benchmarker.benchmark(&mut || a.dot(&b));
}

pub fn cross_in_place(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3_alt();
    benchmarker.benchmark(&mut || *black_box(a).cross(&b));
}

pub fn cross_product(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    let b = create_vector3_alt();
    benchmarker.benchmark(&mut || Vector3::cross_product(&a, &b));
}

pub fn normalize(benchmarker: impl Benchmarker) {
    let a = create_vector3();
    benchmarker.benchmark(&mut || *black_box(a).normalize());
}

fn create_vector3() -> Vector3 {
    Vector3::new(black_box(1.5), black_box(-2.25), black_box(0.75))
}

fn create_vector3_alt() -> Vector3 {
    Vector3::new(black_box(-0.5), black_box(3.0), black_box(2.5))
}
