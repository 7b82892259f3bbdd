use std::path::Path;

use movie_eda::{clean, data, plot, report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tmdb-movies.csv".to_string());

    let movies = data::MovieData::load(&path)?;
    report::summary(&movies.raw, "before cleaning");

    let movies = clean::clean(&movies.raw)?;
    report::summary(&movies, "after cleaning");

    report::general_statistics(&movies)?;
    report::specific_statistics(&movies)?;
    report::general_analysis(&movies)?;

    plot::render_all(&movies, Path::new("charts"))?;
    Ok(())
}
