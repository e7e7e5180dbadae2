//! Generate the synthetic workload datasets.

use std::env;
use std::process::ExitCode;

use branchsim::trace::{save_csv, Workload};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let size = match args.get(1).map(|s| s.parse::<usize>()) {
        None => 2000,
        Some(Ok(n)) if n > 0 => n,
        _ => {
            eprintln!("usage: {} [samples-per-dataset]", args[0]);
            return ExitCode::FAILURE;
        }
    };

    println!("[*] Generating branch prediction datasets ({size} samples each)");
    let mut rng = rand::thread_rng();
    for workload in Workload::ALL {
        let trace = workload.generate(size, &mut rng);
        if let Err(err) = save_csv(workload.filename(), &trace) {
            eprintln!("[!] Failed to save {}: {err}", workload.filename());
            return ExitCode::FAILURE;
        }
        println!(
            "[*] Saved {} samples to {}",
            trace.len(),
            workload.filename()
        );
    }
    ExitCode::SUCCESS
}
