use anyhow::Result;
use plotters::prelude::*;
use polars::prelude::*;
use std::fs;
use std::path::Path;

use crate::report::MONTH_NAMES;
use crate::{genre_runtime, monthly, tags, top, yearly};

const CHART_SIZE: (u32, u32) = (1280, 720);
const RUNTIME_BIN_MINUTES: i64 = 20;

/// Renders every chart of the analysis as a PNG under `out_dir`.
pub fn render_all(df: &DataFrame, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let runtimes: Vec<i64> = df.column("runtime")?.i64()?.into_iter().flatten().collect();
    let bins = runtime_bins(&runtimes, RUNTIME_BIN_MINUTES);
    bar_chart(
        &out_dir.join("runtime_distribution.png"),
        "Runtime distribution of all movies",
        "Runtime (minutes)",
        "Number of movies",
        &bins.iter().map(|((lo, hi), _)| format!("{lo}-{hi}")).collect::<Vec<_>>(),
        &bins.iter().map(|&(_, n)| n as f64).collect::<Vec<_>>(),
    )?;

    let per_year = yearly::profit_by_year(df)?;
    line_chart(
        &out_dir.join("profit_by_year.png"),
        "Total profit per release year",
        "Release year",
        "Total profit (USD)",
        &per_year
            .totals
            .iter()
            .map(|&(year, total)| (year, total as f64))
            .collect::<Vec<_>>(),
    )?;

    let trend = yearly::production_trend(df)?;
    line_chart(
        &out_dir.join("production_trend.png"),
        "Movie production trend over the years",
        "Year",
        "Number of movies released",
        &trend
            .counts
            .iter()
            .map(|&(year, count)| (year, count as f64))
            .collect::<Vec<_>>(),
    )?;

    let month_labels: Vec<String> = MONTH_NAMES.iter().map(|m| m.to_string()).collect();
    let counts = monthly::releases_by_month(df)?;
    bar_chart(
        &out_dir.join("releases_by_month.png"),
        "Movies released in each month",
        "Month",
        "Number of movies",
        &month_labels,
        &counts.iter().map(|&n| n as f64).collect::<Vec<_>>(),
    )?;

    let totals = monthly::profit_by_month(df)?;
    bar_chart(
        &out_dir.join("profit_by_month.png"),
        "Profit made by movies in their release months",
        "Month",
        "Total profit (USD)",
        &month_labels,
        &totals.iter().map(|&t| t as f64).collect::<Vec<_>>(),
    )?;

    let genres = tags::tag_counts(df, "genres")?;
    bar_chart(
        &out_dir.join("genre_counts.png"),
        "The most filmed genres",
        "Genre",
        "Number of movies",
        &genres.iter().map(|(g, _)| g.clone()).collect::<Vec<_>>(),
        &genres.iter().map(|&(_, n)| n as f64).collect::<Vec<_>>(),
    )?;

    let grossing = top::top_n(df, "revenue_usd", top::TOP_N)?;
    bar_chart(
        &out_dir.join("top_grossing.png"),
        "Top 20 highest grossing movies",
        "Movie",
        "Revenue (USD)",
        &grossing.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>(),
        &grossing.iter().map(|&(_, v)| v).collect::<Vec<_>>(),
    )?;

    let expensive = top::top_n(df, "budget_usd", top::TOP_N)?;
    bar_chart(
        &out_dir.join("top_expensive.png"),
        "Top 20 most expensive movies",
        "Movie",
        "Budget (USD)",
        &expensive.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>(),
        &expensive.iter().map(|&(_, v)| v).collect::<Vec<_>>(),
    )?;

    let money: Vec<(f64, f64)> = df
        .column("budget_usd")?
        .i64()?
        .into_iter()
        .zip(df.column("revenue_usd")?.i64()?)
        .filter_map(|(b, r)| Some((b? as f64, r? as f64)))
        .collect();
    scatter_chart(
        &out_dir.join("budget_vs_revenue.png"),
        "Budget vs revenue",
        "Budget (USD)",
        "Revenue (USD)",
        &money,
    )?;

    let by_genre = genre_runtime::runtime_by_genre(df)?;
    bar_chart(
        &out_dir.join("runtime_by_genre.png"),
        "Average runtime for each genre",
        "Genre",
        "Runtime (minutes)",
        &by_genre.iter().map(|(g, _)| g.clone()).collect::<Vec<_>>(),
        &by_genre.iter().map(|&(_, m)| m).collect::<Vec<_>>(),
    )?;

    log::info!("charts written to {}", out_dir.display());
    Ok(())
}

/// Half-open runtime buckets of `width` minutes, starting at the lowest
/// observed value; empty input yields no bins.
pub fn runtime_bins(values: &[i64], width: i64) -> Vec<((i64, i64), u32)> {
    let Some(&lo) = values.iter().min() else {
        return Vec::new();
    };
    let hi = *values.iter().max().unwrap_or(&lo);
    let n_bins = ((hi - lo) / width + 1) as usize;

    let mut bins = vec![0u32; n_bins];
    for &v in values {
        bins[((v - lo) / width) as usize] += 1;
    }
    bins.into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = lo + i as i64 * width;
            ((start, start + width), count)
        })
        .collect()
}

fn bar_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    labels: &[String],
    values: &[f64],
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let hi = values.iter().cloned().fold(0.0f64, f64::max);
    let lo = values.iter().cloned().fold(0.0f64, f64::min);
    let pad = ((hi - lo) * 0.05).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(120)
        .y_label_area_size(90)
        .build_cartesian_2d(0i32..values.len() as i32, lo - pad..hi + pad)?;
    chart
        .configure_mesh()
        .x_labels(labels.len().min(30))
        .x_label_formatter(&|i| {
            labels
                .get(*i as usize)
                .cloned()
                .unwrap_or_default()
        })
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(values.iter().enumerate().map(|(i, &v)| {
        Rectangle::new([(i as i32, 0.0), (i as i32 + 1, v)], BLUE.mix(0.6).filled())
    }))?;

    root.present()?;
    Ok(())
}

fn line_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(i32, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_lo = points.iter().map(|p| p.0).min().unwrap_or(0);
    let x_hi = points.iter().map(|p| p.0).max().unwrap_or(1);
    let y_hi = points.iter().map(|p| p.1).fold(0.0f64, f64::max);
    let y_lo = points.iter().map(|p| p.1).fold(0.0f64, f64::min);
    let pad = ((y_hi - y_lo) * 0.05).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_lo..x_hi + 1, y_lo - pad..y_hi + pad)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), &BLUE))?;

    root.present()?;
    Ok(())
}

fn scatter_chart(
    path: &Path,
    caption: &str,
    x_desc: &str,
    y_desc: &str,
    points: &[(f64, f64)],
) -> Result<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_hi = points.iter().map(|p| p.0).fold(1.0f64, f64::max);
    let y_hi = points.iter().map(|p| p.1).fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0.0..x_hi * 1.05, 0.0..y_hi * 1.05)?;
    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.mix(0.4).filled())),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod test_plot {
    use super::*;

    #[test]
    fn bins_cover_the_observed_range() {
        let bins = runtime_bins(&[40, 45, 62, 100], 20);
        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0], ((40, 60), 2));
        assert_eq!(bins[1], ((60, 80), 1));
        assert_eq!(bins[2], ((80, 100), 0));
        assert_eq!(bins[3], ((100, 120), 1));
    }

    #[test]
    fn no_values_means_no_bins() {
        assert!(runtime_bins(&[], 20).is_empty());
    }
}
