//! Rendering recommendations as a text table, JSON, or a Plotters bar chart

use crate::ranking::RankedCandidate;
use log::info;
use plotters::prelude::*;

const HEADERS: [&str; 7] = [
    "business_type",
    "count_in_area",
    "count_elsewhere",
    "avg_rating",
    "avg_reviews",
    "profitability_score",
    "final_score",
];

fn fmt_opt(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.*}", precision, v))
}

/// Render results as a fixed-width table, missing values shown as `-`
pub fn render_table(results: &[RankedCandidate]) -> String {
    let rows: Vec<[String; 7]> = results
        .iter()
        .map(|r| {
            [
                r.business_type().to_string(),
                r.scored.gap.count_in_area.to_string(),
                r.scored.gap.count_elsewhere.to_string(),
                fmt_opt(r.scored.avg_rating, 2),
                fmt_opt(r.scored.avg_reviews, 1),
                fmt_opt(r.scored.profitability_score, 3),
                fmt_opt(r.final_score, 3),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell)
                } else {
                    format!("{:>width$}", cell)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };

    out.push_str(&line(&HEADERS));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&line(&cells));
        out.push('\n');
    }
    out
}

/// Serialize results as pretty JSON, missing values as `null`
pub fn render_json(results: &[RankedCandidate]) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

/// Corners of the horizontal bar for the `rank`-th of `n` results.
///
/// Bars extend along the score axis; rank 0 occupies the top row.
fn bar_corners(rank: usize, n: usize, score: f64) -> [(f64, SegmentValue<usize>); 2] {
    let row = n - 1 - rank;
    [
        (0.0, SegmentValue::Exact(row)),
        (score, SegmentValue::Exact(row + 1)),
    ]
}

/// Create a horizontal bar chart of final scores per recommended category
///
/// # Arguments
/// * `results` - Ranked recommendations, best drawn at the top
/// * `area_name` - Area shown in the chart title
/// * `output_path` - Path to save the PNG plot
pub fn create_score_chart(
    results: &[RankedCandidate],
    area_name: &str,
    output_path: &str,
) -> crate::Result<()> {
    if results.is_empty() {
        anyhow::bail!("No recommendations to plot for '{}'", area_name);
    }

    let names: Vec<String> = results.iter().map(|r| r.business_type().to_string()).collect();
    let n = results.len();

    let root = BitMapBackend::new(output_path, (900, 100 + 50 * n as u32)).into_drawing_area();
    root.fill(&WHITE)?;

    let title = format!("Business opportunities in {}", area_name);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(160)
        .build_cartesian_2d(0f64..1.1, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Final score")
        .y_desc("Business type")
        .axis_desc_style(("sans-serif", 15))
        .y_label_formatter(&|v| match v {
            SegmentValue::CenterOf(row) => names.get(n - 1 - *row).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(results.iter().enumerate().map(|(rank, r)| {
        let score = r.final_score.unwrap_or(0.0);
        let color = if r.final_score.is_some() { BLUE } else { RED };
        let mut bar = Rectangle::new(bar_corners(rank, n, score), color.filled());
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    root.present()?;
    info!("Score chart saved to: {}", output_path);

    Ok(())
}
