use chrono::{Datelike, NaiveDate};
use cinex_core::{Error, Movie, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A CSV row as it appears on disk. Every column is optional; conversion
/// into [`Movie`] fills in the empty-string / zero defaults.
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: Option<String>,
    release_date: Option<String>,
    release_year: Option<i32>,
    popularity: Option<f64>,
    vote_count: Option<u64>,
    vote_average: Option<f64>,
    genre_names: Option<String>,
    overview: Option<String>,
    tagline: Option<String>,
    actor_names: Option<String>,
    director: Option<String>,
    budget: Option<f64>,
    revenue: Option<f64>,
    #[serde(rename = "return")]
    return_ratio: Option<f64>,
}

impl RawRecord {
    /// Rows without a usable title carry nothing any lookup can reach.
    fn into_movie(self) -> Option<Movie> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return None;
        }

        let release_date = self.release_date.as_deref().and_then(parse_release_date);
        let release_year = self.release_year.or_else(|| release_date.map(|d| d.year()));

        Some(Movie {
            title,
            release_date,
            release_year,
            popularity: self.popularity.unwrap_or_default(),
            vote_count: self.vote_count.unwrap_or_default(),
            vote_average: self.vote_average.unwrap_or_default(),
            genre_names: self.genre_names.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            tagline: self.tagline.unwrap_or_default(),
            actor_names: self.actor_names.unwrap_or_default(),
            director: self.director.unwrap_or_default(),
            budget: self.budget.unwrap_or_default(),
            revenue: self.revenue.unwrap_or_default(),
            return_ratio: self.return_ratio.unwrap_or_default(),
        })
    }
}

/// Dates outside the `YYYY-MM-DD` shape coerce to `None` rather than
/// failing the row.
fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Load the movie dataset from a CSV file, preserving file order.
///
/// Returns an [`Error::Dataset`] when the file cannot be opened or read;
/// individual malformed rows are logged and skipped instead.
pub fn load_movies<P: AsRef<Path>>(path: P) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| Error::Dataset(format!("cannot open {}: {}", path.display(), e)))?;

    let mut movies = Vec::new();
    let mut skipped = 0usize;
    for (row, record) in reader.deserialize::<RawRecord>().enumerate() {
        // header is line 1, the first record line 2
        let line = row + 2;
        match record {
            Ok(raw) => match raw.into_movie() {
                Some(movie) => movies.push(movie),
                None => {
                    skipped += 1;
                    warn!(line, "skipping row without a title");
                }
            },
            Err(e) => {
                skipped += 1;
                warn!(line, error = %e, "skipping malformed row");
            }
        }
    }

    info!(
        loaded = movies.len(),
        skipped,
        "dataset read from {}",
        path.display()
    );
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_typed_rows() {
        let file = write_fixture(
            "title,release_date,release_year,popularity,vote_count,vote_average,genre_names,overview,tagline,actor_names,director,budget,revenue,return\n\
             Toy Story,1995-10-30,1995,21.9,5415,7.7,\"Animation, Comedy, Family\",A story about toys coming to life.,,\"Tom Hanks, Tim Allen\",John Lasseter,30000000,373554033,12.45\n\
             Jumanji,1995-12-15,1995,17.0,2413,6.9,\"Adventure, Fantasy, Family\",A magical board game unleashes adventure.,Roll the dice,\"Robin Williams\",Joe Johnston,65000000,262797249,4.04\n",
        );

        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Toy Story");
        assert_eq!(movies[0].release_year, Some(1995));
        assert_eq!(movies[0].vote_count, 5415);
        assert_eq!(movies[0].tagline, "");
        assert_eq!(movies[1].tagline, "Roll the dice");
        assert_eq!(
            movies[1].release_date,
            NaiveDate::from_ymd_opt(1995, 12, 15)
        );
    }

    #[test]
    fn test_missing_columns_become_defaults() {
        let file = write_fixture("title,genre_names\nSolo,Drama\n");
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].genre_names, "Drama");
        assert_eq!(movies[0].overview, "");
        assert_eq!(movies[0].popularity, 0.0);
        assert_eq!(movies[0].release_date, None);
    }

    #[test]
    fn test_bad_date_coerces_to_none() {
        let file = write_fixture(
            "title,release_date,release_year\nOld Film,sometime in 1950,1950\n",
        );
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies[0].release_date, None);
        assert_eq!(movies[0].release_year, Some(1950));
    }

    #[test]
    fn test_year_derived_from_date_when_column_missing() {
        let file = write_fixture("title,release_date\nDated,2001-07-04\n");
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies[0].release_year, Some(2001));
    }

    #[test]
    fn test_untitled_and_malformed_rows_are_skipped() {
        let file = write_fixture(
            "title,release_date,vote_count\nNamed,2000-01-01,10\n,2001-01-01,4\nBad Votes,2002-01-01,not-a-number\n",
        );
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Named");
    }

    #[test]
    fn test_missing_file_is_a_dataset_error() {
        let result = load_movies("/definitely/not/here.csv");
        assert!(matches!(result, Err(Error::Dataset(_))));
    }
}
