use polars::prelude::*;
use std::path::Path;

/// Columns the rest of the crate relies on. A file missing any of these is
/// rejected at load time, before cleaning starts.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "original_title",
    "budget",
    "revenue",
    "runtime",
    "genres",
    "director",
    "cast",
    "release_date",
    "release_year",
];

/// The raw movie table as read from disk, prior to cleaning.
#[derive(Debug)]
pub struct MovieData {
    pub raw: DataFrame,
}

impl MovieData {
    pub fn load(path: impl AsRef<Path>) -> PolarsResult<Self> {
        let path = path.as_ref();
        let raw = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(1000))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        for name in REQUIRED_COLUMNS {
            if raw.column(name).is_err() {
                return Err(PolarsError::ColumnNotFound(
                    format!("{} is missing required column {name:?}", path.display()).into(),
                ));
            }
        }

        log::info!(
            "loaded {} rows x {} columns from {}",
            raw.height(),
            raw.width(),
            path.display()
        );
        Ok(MovieData { raw })
    }
}

#[cfg(test)]
mod test_data {
    use super::*;

    const FULL_HEADER: &str =
        "id,original_title,budget,revenue,runtime,genres,director,cast,release_date,release_year";

    #[test]
    fn load_reads_all_rows() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join("movie_eda_load_ok.csv");
        std::fs::write(
            &path,
            format!(
                "{FULL_HEADER}\n\
                 1,Interstellar,165000000,675000000,169,Adventure|Drama,Christopher Nolan,Matthew McConaughey,2014-11-05,2014\n\
                 2,Moonlight,1500000,65000000,111,Drama,Barry Jenkins,Mahershala Ali,2016-10-21,2016\n"
            ),
        )?;

        let movies = MovieData::load(&path)?;
        assert_eq!(movies.raw.height(), 2);
        assert!(movies.raw.column("original_title").is_ok());
        Ok(())
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let path = std::env::temp_dir().join("movie_eda_load_missing.csv");
        std::fs::write(&path, "original_title,budget\nInterstellar,165000000\n").unwrap();

        let err = MovieData::load(&path).unwrap_err();
        assert!(matches!(err, PolarsError::ColumnNotFound(_)));
        assert!(err.to_string().contains("revenue"));
    }
}
