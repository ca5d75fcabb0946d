//! Time-boxed benchmarking of individual targets.

#[cfg(feature = "criterion")]
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

/// Something that can repeatedly run a closure for measurement.
pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs a closure over and over until its time budget is spent, recording
/// how many iterations it got through. The closure always runs at least once.
#[derive(Debug)]
pub struct TimedBenchmarker<'a> {
    budget: Duration,
    gate: StartGate,
    report: &'a mut RunReport,
}

/// Holds back the start of a run until a minimum time has passed since the
/// program started, so that an external profiler has time to attach.
#[derive(Clone, Copy, Debug)]
pub struct StartGate {
    program_start: Instant,
    delay: Duration,
}

/// What a [`TimedBenchmarker`] measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub iterations: u64,
    pub elapsed: Duration,
}

impl<'a> TimedBenchmarker<'a> {
    pub fn new(budget: Duration, gate: StartGate, report: &'a mut RunReport) -> Self {
        Self {
            budget,
            gate,
            report,
        }
    }
}

impl Benchmarker for TimedBenchmarker<'_> {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.gate.wait();

        let start = Instant::now();
        let mut iterations = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.budget {
                break;
            }
        }

        *self.report = RunReport {
            iterations,
            elapsed: start.elapsed(),
        };
    }
}

impl StartGate {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

impl RunReport {
    /// Average wall time of one iteration in nanoseconds, or zero if nothing
    /// ran.
    pub fn nanos_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.elapsed.as_secs_f64() * 1e9 / self.iterations as f64
        }
    }
}

/// Defines an enum with one variant per benchmark function, named by joining
/// the module and function names in camel case. The generated `execute`
/// method runs the function for a variant and `name` gives its
/// `module::function` path.
///
/// The invoking crate must depend on `pastey`, and on `clap` if it has a
/// `cli` feature.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    ::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            pub fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => concat!(stringify!($module), "::", stringify!($func)), )*
                    )*
                }
            }
        }
    }};
}

/// Runs a benchmark under a [`TimedBenchmarker`] with the given budget in
/// seconds, and returns what it measured. The run does not start until
/// `delay_seconds` have passed since `program_start`.
pub fn run_timed(
    execute: impl FnOnce(TimedBenchmarker<'_>),
    program_start: Instant,
    budget_seconds: f64,
    delay_seconds: f64,
) -> RunReport {
    let gate = StartGate::new(program_start, delay_seconds);
    let mut report = RunReport::default();

    execute(TimedBenchmarker::new(
        Duration::from_secs_f64(budget_seconds),
        gate,
        &mut report,
    ));

    report
}
