//! Formatted result tables and CSV export.

use std::path::Path;

use itertools::Itertools;

use crate::error::TraceError;
use crate::sim::Evaluation;

/// Results for every predictor over a single workload dataset.
#[derive(Clone, Debug)]
pub struct WorkloadResults {
    /// Workload display name.
    pub workload: String,
    /// One evaluation per predictor.
    pub results: Vec<Evaluation>,
}

/// Print the per-dataset comparison table, best predictor first.
pub fn print_results(results: &WorkloadResults) {
    let sep = "=".repeat(72);
    println!("{sep}");
    println!(
        "BRANCH PREDICTOR COMPARISON - {}",
        results.workload.to_uppercase()
    );
    println!("{sep}");
    println!(
        "{:<20} {:>10} {:>12} {:>16}",
        "Predictor", "Accuracy", "Time (ms)", "Mispredictions"
    );
    println!("{}", "-".repeat(72));
    for ev in results
        .results
        .iter()
        .sorted_by(|a, b| b.accuracy.total_cmp(&a.accuracy))
    {
        println!(
            "{:<20} {:>9.2}% {:>12.2} {:>15.2}%",
            ev.name,
            ev.accuracy * 100.0,
            ev.elapsed.as_secs_f64() * 1000.0,
            (1.0 - ev.accuracy) * 100.0,
        );
    }
    println!("{sep}");
    println!();
}

/// Print the cross-dataset summary: the best predictor per workload,
/// then the average-accuracy ranking.
pub fn print_summary(all: &[WorkloadResults]) {
    let sep = "=".repeat(72);
    println!("{sep}");
    println!("OVERALL SUMMARY");
    println!("{sep}");
    for wr in all {
        if let Some(best) = wr
            .results
            .iter()
            .max_by(|a, b| a.accuracy.total_cmp(&b.accuracy))
        {
            println!(
                "Best for {}: {} ({:.2}% accuracy)",
                wr.workload,
                best.name,
                best.accuracy * 100.0
            );
        }
    }
    println!();
    println!("Average accuracy across all datasets:");
    println!("{}", "-".repeat(72));
    for (name, avg) in average_accuracies(all) {
        println!("{:<20} {:>9.2}%", name, avg * 100.0);
    }
    println!("{sep}");
    println!();
}

/// Average accuracy per predictor across datasets, best first.
pub fn average_accuracies(all: &[WorkloadResults]) -> Vec<(&'static str, f64)> {
    let Some(first) = all.first() else {
        return Vec::new();
    };
    first
        .results
        .iter()
        .map(|ev| ev.name)
        .map(|name| {
            let sum: f64 = all
                .iter()
                .filter_map(|wr| wr.results.iter().find(|ev| ev.name == name))
                .map(|ev| ev.accuracy)
                .sum();
            (name, sum / all.len() as f64)
        })
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .collect()
}

/// Export the accuracy summary matrix: one row per dataset, one column
/// per predictor.
pub fn export_summary_csv(
    path: impl AsRef<Path>,
    all: &[WorkloadResults],
) -> Result<(), TraceError> {
    let mut writer = csv::Writer::from_path(path)?;

    let names: Vec<&str> = all
        .first()
        .map(|wr| wr.results.iter().map(|ev| ev.name).collect())
        .unwrap_or_default();
    let mut header = vec!["Dataset"];
    header.extend(names.iter().copied());
    writer.write_record(&header)?;

    for wr in all {
        let mut row = vec![wr.workload.clone()];
        for name in &names {
            let accuracy = wr
                .results
                .iter()
                .find(|ev| ev.name == *name)
                .map(|ev| ev.accuracy)
                .unwrap_or(0.0);
            row.push(format!("{:.6}", accuracy));
        }
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export per-predictor detail rows for one dataset.
pub fn export_detail_csv(
    path: impl AsRef<Path>,
    results: &WorkloadResults,
) -> Result<(), TraceError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Predictor",
        "Accuracy",
        "Correct",
        "Total",
        "Mispredictions",
        "Time (ms)",
    ])?;
    for ev in &results.results {
        writer.write_record([
            ev.name.to_string(),
            format!("{:.6}", ev.accuracy),
            ev.correct.to_string(),
            ev.total.to_string(),
            (ev.total - ev.correct).to_string(),
            format!("{:.3}", ev.elapsed.as_secs_f64() * 1000.0),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
