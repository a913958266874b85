use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lut3d::{Layout, Rgb};
use lutbench::benchmark::{simulate_pixel, Benchmark, SIMULATE_SIZE};
use lutbench::models::{BenchConfig, Overrides};
use lutbench::report::{self, ReportFormat};

#[derive(Parser)]
#[command(name = "lutbench")]
#[command(about = "Throughput benchmark for dense and flattened 3D LUT layouts")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Benchmark options when no subcommand is given (same as `compare`)
    #[command(flatten)]
    bench: BenchArgs,
}

#[derive(Args)]
struct BenchArgs {
    /// YAML config file (falls back to $LUTBENCH_CONFIG); fields it omits
    /// keep the subcommand's defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid points per axis of the table
    #[arg(long)]
    size: Option<usize>,

    /// Number of random pixels per batch
    #[arg(long)]
    pixels: Option<usize>,

    /// Seed for the random pixel batch
    #[arg(long)]
    seed: Option<u64>,

    /// Apply each batch on the rayon thread pool
    #[arg(long)]
    parallel: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
}

impl BenchArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            size: self.size,
            pixels: self.pixels,
            seed: self.seed,
            parallel: self.parallel,
            format: self.format,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the dense table against every configured layout (default)
    Compare(BenchArgs),
    /// Dense vs. row-major flat table (33³ by default)
    RowMajor(BenchArgs),
    /// Dense vs. level-ordered "spatially local" flat table (65³ by default)
    LevelOrdered(BenchArgs),
    /// Look up a single pixel and print the result (17³ by default)
    Simulate {
        /// Input pixel channels
        #[arg(num_args = 3, value_names = ["R", "G", "B"], allow_negative_numbers = true)]
        pixel: Vec<f32>,

        /// Grid points per axis of the table
        #[arg(long, default_value_t = SIMULATE_SIZE)]
        size: usize,

        /// Table to read: "dense", "row-major", "level-ordered" or "morton"
        #[arg(long, default_value = "level-ordered")]
        layout: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lutbench=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Simulate {
            pixel,
            size,
            layout,
        }) => run_simulate_command(size, &pixel, &layout),
        Some(Commands::RowMajor(args)) => run_bench_command(&args, BenchConfig::row_major(), true),
        Some(Commands::LevelOrdered(args)) => {
            run_bench_command(&args, BenchConfig::level_ordered(), true)
        }
        Some(Commands::Compare(args)) => run_bench_command(&args, BenchConfig::default(), false),
        None => run_bench_command(&cli.bench, BenchConfig::default(), false),
    }
}

/// Run a throughput benchmark and print its report
fn run_bench_command(
    args: &BenchArgs,
    preset: BenchConfig,
    pin_layouts: bool,
) -> anyhow::Result<()> {
    let config = preset.resolve(args.config.clone(), &args.overrides(), pin_layouts)?;
    let format = config.format;
    tracing::debug!(?config, "Resolved benchmark config");

    let report = Benchmark::new(config)?.run()?;
    print!("{}", report::render(&report, format)?);
    if format == ReportFormat::Json {
        println!();
    }

    Ok(())
}

/// Look up one pixel and print input and output
fn run_simulate_command(size: usize, pixel: &[f32], layout: &str) -> anyhow::Result<()> {
    let input = match pixel {
        [r, g, b] => Rgb::new(*r, *g, *b),
        _ => Rgb::new(0.5, 0.25, 0.75),
    };
    let layout = match layout {
        "dense" => None,
        name => Some(name.parse::<Layout>()?),
    };

    let output = simulate_pixel(size, layout, input)?;
    let table_name = layout.map_or("dense", Layout::name);

    println!("Input RGB: {input}");
    println!("Output RGB after {table_name} LUT: {output}");

    Ok(())
}
