//! Command-line front end: load or generate a job list, run every policy,
//! and print the tables (or JSON).

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_jobsched::dispatching::Policy;
use u_jobsched::models::JobRepository;
use u_jobsched::report::{JobTable, PassTable, SummaryTable};
use u_jobsched::scheduler::Simulation;
use u_jobsched::workload::WorkloadGenerator;
use u_jobsched::SimulationConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Debug, Parser)]
#[command(about = "Compare FCFS, SJF, HPF and HRRF on a job list")]
struct Args {
    /// Job list: one `id arrival service priority` record per line.
    jobs: Option<PathBuf>,

    /// Generate N random jobs instead of reading a file.
    #[arg(long, value_name = "N", conflicts_with = "jobs")]
    generate: Option<usize>,

    /// Seed for --generate.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// JSON config file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of jobs.
    #[arg(long)]
    capacity: Option<usize>,

    /// Tolerance for response-ratio ties.
    #[arg(long)]
    epsilon: Option<f64>,

    /// Policy to run (repeatable, in order). Defaults to all four.
    #[arg(long = "policy", value_name = "POLICY")]
    policies: Vec<Policy>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let simulation = Simulation::new(build_config(&args)?);
    let (repository, report) = match (&args.jobs, args.generate) {
        (Some(path), _) => simulation
            .run_file(path)
            .with_context(|| format!("simulating {}", path.display()))?,
        (None, Some(count)) => {
            let mut repository = generate_repository(count, args.seed, simulation.config())?;
            let report = simulation
                .run(&mut repository)
                .context("simulation failed")?;
            (repository, report)
        }
        (None, None) => bail!("pass a job list file or --generate N"),
    };

    match args.format {
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Table => {
            println!("{}", JobTable(&repository));
            for pass in &report.passes {
                println!("{}", PassTable(pass));
            }
            print!("{}", SummaryTable(&report.passes));
        }
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(capacity) = args.capacity {
        config = config.with_capacity(capacity);
    }
    if let Some(epsilon) = args.epsilon {
        config = config.with_ratio_epsilon(epsilon)?;
    }
    if !args.policies.is_empty() {
        config = config.with_policies(args.policies.iter().copied());
    }
    config.validate()?;
    Ok(config)
}

fn generate_repository(count: usize, seed: u64, config: &SimulationConfig) -> Result<JobRepository> {
    let mut rng = StdRng::seed_from_u64(seed);
    let specs = WorkloadGenerator::new(count).generate(&mut rng);
    let mut repository = JobRepository::with_capacity(config.capacity);
    repository
        .load(specs)
        .context("generated workload rejected")?;
    Ok(repository)
}
