//! Euclidean TSP Solver - Command Line Interface
//!
//! Reads a city file, runs nearest-neighbor construction followed by 2-opt
//! improvement, and appends the result to `<input>.tour`.

use clap::Parser;
use tsp_solver::error::SolverResult;
use tsp_solver::instance::TspInstance;
use tsp_solver::pipeline;

use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tsp-solver")]
#[command(version = "1.0")]
#[command(about = "A Euclidean TSP heuristic solver (nearest-neighbor + 2-opt)")]
struct Cli {
    /// Input file with one `id x y` city record per line
    input: PathBuf,

    /// Print instance statistics and the full tour
    #[arg(short, long)]
    verbose: bool,

    /// Also write the solution as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SolverResult<()> {
    let instance = TspInstance::from_file(&cli.input)?;

    if cli.verbose {
        println!("{}", instance.statistics());
    }

    let solution = pipeline::solve(&instance)?;
    let tour_path = solution.append_tour_file(&instance, &cli.input)?;

    println!("========== Results ==========");
    println!("Algorithm: {}", solution.algorithm);
    println!("Tour cost: {}", solution.cost);
    println!("Accepted moves: {}", solution.iterations.unwrap_or(0));
    println!("Time: {:.4}s", solution.computation_time);
    println!("Tour appended to {:?}", tour_path);

    if cli.verbose {
        println!("Tour: {:?}", solution.city_ids(&instance));
    }

    if let Some(json_path) = &cli.json {
        let json = serde_json::to_string_pretty(&solution)
            .expect("solution serialization does not fail");
        std::fs::write(json_path, json)?;
        println!("Solution saved to {:?}", json_path);
    }

    Ok(())
}
