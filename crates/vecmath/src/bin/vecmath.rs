use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use std::time::Instant;
    use vecmath::{Vector2, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "Planar and spatial vector math", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the length and direction of a 2- or 3-component vector
        Inspect {
            /// The vector components
            #[arg(required = true, num_args = 2..=3, allow_negative_numbers = true)]
            components: Vec<f32>,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: vecmath::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from program start until the target is run
            /// (gives a profiler time to attach)
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        let program_start = Instant::now();

        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Inspect { components } => inspect(&components),
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                vecmath::benchmark::benchmark(target, program_start, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

    fn inspect(components: &[f32]) -> Result<()> {
        if components.len() == 2 {
            let vector = Vector2::try_from(components)?;
            println!("vector:     {vector}");
            println!("length:     {}", vector.length());
            println!("normalized: {}", vector.normalized());
        } else {
            let vector = Vector3::try_from(components)?;
            println!("vector:     {vector}");
            println!("length:     {}", vector.length());
            println!("normalized: {}", vector.normalized());
        }
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
