//! Compare every predictor across the synthetic workload datasets.
//!
//! With no arguments the three default datasets from `datagen` are
//! used; any arguments are read as paths to custom CSV datasets.

use std::env;
use std::error::Error;
use std::path::Path;
use std::process::exit;

use branchsim::predictor::all_predictors;
use branchsim::report::{self, WorkloadResults};
use branchsim::sim::evaluate_with_stats;
use branchsim::trace::{load_csv, Workload};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let datasets: Vec<(String, String)> = if args.len() > 1 {
        args[1..].iter().map(|p| (p.clone(), p.clone())).collect()
    } else {
        Workload::ALL
            .iter()
            .map(|w| (w.name().to_string(), w.filename().to_string()))
            .collect()
    };

    let mut all = Vec::new();
    for (name, file) in &datasets {
        let trace = match load_csv(file) {
            Ok(trace) => trace,
            Err(err) => {
                eprintln!("[!] Could not load {file}: {err}");
                eprintln!("    Run the `datagen` binary first to create the default datasets.");
                exit(1);
            }
        };

        let mut results = Vec::new();
        let mut workload_stats = None;
        for predictor in all_predictors()?.iter_mut() {
            let (ev, stats) = evaluate_with_stats(predictor.as_mut(), &trace);
            println!(
                "[*] {name}: {:<20} {:>8.2}% correct",
                ev.name,
                ev.accuracy * 100.0
            );
            results.push(ev);
            if workload_stats.is_none() {
                workload_stats = Some(stats);
            }
        }

        // The outcome mix is a property of the trace, so any predictor's
        // per-branch stats describe it.
        if let Some(stats) = workload_stats {
            println!(
                "[*] {name}: {} records, {} unique branches ({} always taken, {} never taken)",
                trace.len(),
                stats.num_unique_branches(),
                stats.num_always_taken(),
                stats.num_never_taken(),
            );
        }
        println!();

        let results = WorkloadResults {
            workload: name.clone(),
            results,
        };
        report::print_results(&results);
        all.push((file.clone(), results));
    }

    let workload_results: Vec<WorkloadResults> = all.iter().map(|(_, wr)| wr.clone()).collect();
    report::print_summary(&workload_results);

    std::fs::create_dir_all("results")?;
    report::export_summary_csv("results/summary.csv", &workload_results)?;
    println!("[*] Exported summary to results/summary.csv");

    for (file, results) in &all {
        let stem = Path::new(file)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("dataset");
        let detail = format!("results/{stem}_detailed.csv");
        report::export_detail_csv(&detail, results)?;
        println!("[*] Exported details to {detail}");

        let svg = format!("results/accuracy_{stem}.svg");
        if let Err(err) = branchsim::chart::render_accuracy_chart(&svg, results) {
            eprintln!("[!] Could not render {svg}: {err}");
        } else {
            println!("[*] Rendered chart to {svg}");
        }
    }

    Ok(())
}
