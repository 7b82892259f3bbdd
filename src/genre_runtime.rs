use polars::prelude::*;

use rustc_hash::FxHashMap as HashMap;

use crate::tags::TAG_DELIMITER;

/// Mean runtime per distinct genre, ascending by mean. A movie with several
/// genres contributes its runtime to each of them; rows with a missing
/// runtime or missing genres are excluded.
pub fn runtime_by_genre(df: &DataFrame) -> PolarsResult<Vec<(String, f64)>> {
    let mut acc: HashMap<&str, (i64, u32)> = HashMap::default();

    for (genres, runtime) in df
        .column("genres")?
        .str()?
        .into_iter()
        .zip(df.column("runtime")?.i64()?)
    {
        let (Some(genres), Some(runtime)) = (genres, runtime) else {
            continue;
        };
        for genre in genres.split(TAG_DELIMITER) {
            if genre.is_empty() {
                continue;
            }
            let entry = acc.entry(genre).or_insert((0, 0));
            entry.0 += runtime;
            entry.1 += 1;
        }
    }

    let mut out: Vec<(String, f64)> = acc
        .into_iter()
        .map(|(genre, (sum, n))| (genre.to_string(), sum as f64 / n as f64))
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(out)
}

#[cfg(test)]
mod test_genre_runtime {
    use super::*;

    #[test]
    fn means_ascend_and_multi_genres_count_per_genre() -> PolarsResult<()> {
        let df = df!(
            "genres" => ["Short|Drama", "Drama", "Epic"],
            "runtime" => [40i64, 120, 200],
        )?;
        let means = runtime_by_genre(&df)?;
        assert_eq!(
            means,
            vec![
                ("Short".to_string(), 40.0),
                ("Drama".to_string(), 80.0),
                ("Epic".to_string(), 200.0),
            ]
        );
        Ok(())
    }

    #[test]
    fn missing_runtime_rows_are_excluded() -> PolarsResult<()> {
        let df = df!(
            "genres" => [Some("Drama"), Some("Drama"), None],
            "runtime" => [Some(100i64), None, Some(50)],
        )?;
        let means = runtime_by_genre(&df)?;
        assert_eq!(means, vec![("Drama".to_string(), 100.0)]);
        Ok(())
    }
}
