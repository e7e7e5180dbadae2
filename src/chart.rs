//! Accuracy chart rendering.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::report::WorkloadResults;

/// Render a per-predictor accuracy bar chart for one workload as SVG.
pub fn render_accuracy_chart(
    path: impl AsRef<Path>,
    results: &WorkloadResults,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let root = SVGBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!("Prediction accuracy: {}", results.workload);
    let n = results.results.len().max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title.as_str(), ("sans-serif", 32).into_font())
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(48)
        .build_cartesian_2d(0f64..n as f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_desc("Accuracy")
        .draw()?;

    for (i, ev) in results.results.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, ev.accuracy)],
                color.filled(),
            )))?
            .label(format!("{} ({:.2}%)", ev.name, ev.accuracy * 100.0))
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sim::Evaluation;
    use std::time::Duration;

    #[test]
    fn renders_an_svg_file() {
        let path = std::env::temp_dir().join("branchsim_chart.svg");
        let results = WorkloadResults {
            workload: "ML App".to_string(),
            results: vec![
                Evaluation {
                    name: "Bimodal",
                    correct: 80,
                    total: 100,
                    accuracy: 0.8,
                    elapsed: Duration::from_millis(1),
                },
                Evaluation {
                    name: "TAGE",
                    correct: 90,
                    total: 100,
                    accuracy: 0.9,
                    elapsed: Duration::from_millis(1),
                },
            ],
        };

        render_accuracy_chart(&path, &results).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(text.contains("<svg"));
        assert!(text.contains("Bimodal"));
    }
}
