//! Running benchmark targets under `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;

/// Defines a `criterion` bench function that runs the benchmark function of
/// the same name in the given module. An optional third argument overrides
/// the sample count.
#[macro_export]
macro_rules! define_criterion_target {
    ($module:ident, $name:ident $(, $sample_count:expr)?) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            #[allow(unused_mut, unused_assignments)]
            let mut sample_count = None;
            $(sample_count = Some($sample_count);)?
            $module::$name($crate::benchmark::criterion::CriterionBenchmarker::new(
                c,
                concat!(stringify!($module), "::", stringify!($name)),
                sample_count,
            ));
        }
    };
}

/// Adapts a [`Criterion`] instance to the [`Benchmarker`] interface by
/// measuring the closure as a single-function benchmark group.
#[allow(missing_debug_implementations)]
pub struct CriterionBenchmarker<'a> {
    criterion: &'a mut Criterion,
    id: &'static str,
    sample_count: Option<usize>,
}

impl<'a> CriterionBenchmarker<'a> {
    pub fn new(criterion: &'a mut Criterion, id: &'static str, sample_count: Option<usize>) -> Self {
        Self {
            criterion,
            id,
            sample_count,
        }
    }
}

impl Benchmarker for CriterionBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        let mut group = self.criterion.benchmark_group(self.id);

        if let Some(sample_count) = self.sample_count {
            group.sample_size(sample_count);
        }

        group.bench_function(self.id, |bencher| bencher.iter(&mut *f));
        group.finish();
    }
}

/// The `criterion` configuration shared by all vecmath bench targets.
pub fn config() -> Criterion {
    Criterion::default().noise_threshold(0.03)
}
