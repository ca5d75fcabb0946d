//! Benchmark targets for the vector operations.

pub mod benchmarks;

use std::time::Instant;
use vecmath_log::{info, with_timing_info_logging, with_trace_logging};
use vecmath_profiling::benchmark::{RunReport, run_timed};

vecmath_profiling::define_target_enum! {
    Target,
    crate::benchmark::benchmarks,
    vector2 => {
        add_in_place,
        sum,
        dot,
        normalize,
    },
    vector3 => {
        add_in_place,
        sum,
        dot,
        cross_in_place,
        cross_product,
        normalize,
    },
}

/// Runs the given target over and over for `duration` seconds, starting no
/// earlier than `delay` seconds after `program_start`, and logs the time per
/// iteration.
pub fn benchmark(target: Target, program_start: Instant, duration: f64, delay: f64) -> RunReport {
    let report = with_timing_info_logging!("Benchmarking {}", target.name(); {
        run_timed(
            |benchmarker| {
                with_trace_logging!("Running {}", target.name(); target.execute(benchmarker))
            },
            program_start,
            duration,
            delay,
        )
    });
    info!(
        "{}: {} iterations at {:.2} ns each",
        target.name(),
        report.iterations,
        report.nanos_per_iteration()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_names_follow_module_paths() {
        assert_eq!(Target::Vector2AddInPlace.name(), "vector2::add_in_place");
        assert_eq!(Target::Vector3CrossProduct.name(), "vector3::cross_product");
    }

    #[test]
    fn benchmarking_target_runs_it_at_least_once() {
        let report = benchmark(Target::Vector3CrossInPlace, Instant::now(), 0.0, 0.0);
        assert!(report.iterations >= 1);
    }
}
