use polars::prelude::*;
use std::time::Instant;

use crate::{averages, corr, extremes, genre_runtime, monthly, tags, top, yearly};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A movie counts as a clear success above this profit.
pub const PROFIT_THRESHOLD: i64 = 50_000_000;

/// Shape, schema and first rows of the table, printed before and after
/// cleaning.
pub fn summary(df: &DataFrame, label: &str) {
    println!(
        "== movie table {label}: {} rows x {} columns",
        df.height(),
        df.width()
    );
    println!("{:?}", df.schema());
    println!("{}", df.head(Some(5)));
}

/// Extremes of the money and runtime columns, runtime average, and profit
/// totals per release year.
pub fn general_statistics(df: &DataFrame) -> PolarsResult<()> {
    let start = Instant::now();

    for (column, what) in [
        ("profit_usd", "profit"),
        ("runtime", "runtime"),
        ("budget_usd", "budget"),
        ("revenue_usd", "revenue"),
    ] {
        let ex = extremes::extremes(df, column)?;
        println!("== highest {what}");
        println!("{}", ex.max);
        println!("== lowest {what}");
        println!("{}", ex.min);
    }

    match averages::average(df, "runtime")? {
        Some(mean) => println!("average runtime across all movies: {mean:.1} minutes"),
        None => println!("average runtime across all movies: unknown"),
    }

    let per_year = yearly::profit_by_year(df)?;
    println!("== total profit per release year");
    for (year, total) in &per_year.totals {
        println!("{year}: {total}");
    }
    println!("most profitable year: {}", per_year.best_year);

    log::debug!(
        "general statistics finished in {:.3}s",
        start.elapsed().as_secs_f32()
    );
    Ok(())
}

/// Statistics over the clearly successful movies: subset averages plus
/// director, cast, and genre tallies, and the monthly groupings.
pub fn specific_statistics(df: &DataFrame) -> PolarsResult<()> {
    let start = Instant::now();

    let successful = profitable_subset(df, PROFIT_THRESHOLD)?;
    println!(
        "== movies with profit of at least ${PROFIT_THRESHOLD}: {}",
        successful.height()
    );

    for (column, what) in [
        ("runtime", "runtime"),
        ("budget_usd", "budget"),
        ("revenue_usd", "revenue"),
    ] {
        match averages::average(&successful, column)? {
            Some(mean) => println!("average {what} among successful movies: {mean:.1}"),
            None => println!("average {what} among successful movies: unknown"),
        }
    }

    for (column, what) in [
        ("director", "directors"),
        ("cast", "cast members"),
        ("genres", "genres"),
    ] {
        println!("== most frequent {what} among successful movies");
        for (name, count) in tags::tag_counts(&successful, column)?.iter().take(5) {
            println!("{name}: {count}");
        }
    }

    let counts = monthly::releases_by_month(df)?;
    println!("== releases per calendar month");
    for (name, count) in MONTH_NAMES.iter().zip(counts) {
        println!("{name}: {count}");
    }

    let totals = monthly::profit_by_month(df)?;
    println!("== total profit per calendar month");
    for (name, total) in MONTH_NAMES.iter().zip(totals) {
        println!("{name}: {total}");
    }

    log::debug!(
        "specific statistics finished in {:.3}s",
        start.elapsed().as_secs_f32()
    );
    Ok(())
}

/// Production trend, top-20 rankings, budget/revenue correlation, and the
/// runtime profile per genre.
pub fn general_analysis(df: &DataFrame) -> PolarsResult<()> {
    let start = Instant::now();

    let trend = yearly::production_trend(df)?;
    println!("== releases per year");
    for (year, count) in &trend.counts {
        println!("{year}: {count}");
    }
    println!(
        "busiest year: {}, quietest year: {}",
        trend.peak_year, trend.quietest_year
    );

    println!("== top {} highest grossing movies", top::TOP_N);
    for (title, revenue) in top::top_n(df, "revenue_usd", top::TOP_N)? {
        println!("{title}: {revenue:.0}");
    }

    println!("== top {} most expensive movies", top::TOP_N);
    for (title, budget) in top::top_n(df, "budget_usd", top::TOP_N)? {
        println!("{title}: {budget:.0}");
    }

    match corr::pearson(df, "budget_usd", "revenue_usd")? {
        Some(r) => println!("budget/revenue Pearson correlation: {r:.4}"),
        None => println!("budget/revenue Pearson correlation: undefined"),
    }

    println!("== average runtime per genre");
    for (genre, mean) in genre_runtime::runtime_by_genre(df)? {
        println!("{genre}: {mean:.1} minutes");
    }

    log::debug!(
        "general analysis finished in {:.3}s",
        start.elapsed().as_secs_f32()
    );
    Ok(())
}

/// Rows whose profit is at least `threshold`.
pub fn profitable_subset(df: &DataFrame, threshold: i64) -> PolarsResult<DataFrame> {
    let mask: BooleanChunked = df
        .column("profit_usd")?
        .i64()?
        .into_iter()
        .map(|p| p.is_some_and(|p| p >= threshold))
        .collect();
    df.filter(&mask)
}
