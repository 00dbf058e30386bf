use std::process::ExitCode;

use kth_largest::harness::{
    default_cases, run_cases, sink, Benchmark, BenchmarkConfig, GroupEvent,
};
use log::error;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    run_correctness();

    let config = BenchmarkConfig::default();
    match run_benchmark(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run_correctness() {
    println!("Test Results (Rust):");
    println!("{}", "=".repeat(50));

    let mut rng = ChaCha20Rng::from_entropy();
    let reports = run_cases(&default_cases(), &mut rng);
    for report in &reports {
        println!("{}", report);
    }
    let passed = reports.iter().filter(|r| r.passed()).count();
    println!("{}/{} cases passed by every algorithm\n", passed, reports.len());
}

fn run_benchmark(config: BenchmarkConfig) -> kth_largest::Result<()> {
    println!("Rust Performance Analysis");
    println!("{}", "=".repeat(70));

    let mut bench = Benchmark::new(config);
    let mut current_size = None;
    let report = bench.run(|event| {
        if current_size != Some(event.size()) {
            current_size = Some(event.size());
            println!("\nInput size: {}", event.size());
            println!("{}", "=".repeat(50));
        }
        match event {
            GroupEvent::Finished(record) => println!("\n{}", record),
            GroupEvent::Aborted(failure) => println!(
                "\n{}: aborted ({})",
                failure.position, failure.error
            ),
        }
    });

    let output = &bench.config().output;
    sink::write_json(&report.records, output)?;
    println!("\n\nJSON results written to {}", output.display());
    println!("{}", sink::to_json(&report.records)?);
    Ok(())
}
