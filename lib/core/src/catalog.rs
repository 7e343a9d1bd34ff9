use crate::{Error, Movie, Result};
use ahash::AHashMap;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Minimum number of votes a movie needs before its average is considered
/// representative.
pub const VOTE_COUNT_THRESHOLD: u64 = 2000;

// The dataset and its consumers are Spanish-speaking; date queries arrive
// as Spanish month and weekday names.
const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Parse a Spanish month name into its 1-based month number.
#[must_use]
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|&m| m == name)
        .map(|i| i as u32 + 1)
}

/// Parse a Spanish weekday name.
#[must_use]
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let name = name.trim().to_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|&d| d == name)
        .map(|i| WEEKDAYS[i])
}

/// Popularity lookup for a single title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub title: String,
    pub release_year: Option<i32>,
    pub popularity: f64,
}

/// Vote lookup for a single title. `meets_threshold` is false when the
/// movie has fewer than [`VOTE_COUNT_THRESHOLD`] votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VotesReport {
    pub title: String,
    pub release_year: Option<i32>,
    pub vote_count: u64,
    pub vote_average: f64,
    pub meets_threshold: bool,
}

/// Aggregate over every movie an actor appears in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorReport {
    pub actor: String,
    pub film_count: usize,
    pub total_return: f64,
    pub average_return: f64,
}

/// Aggregate over a director's filmography, with a per-film breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorReport {
    pub director: String,
    pub total_return: f64,
    pub films: Vec<FilmReturn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmReturn {
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub individual_return: f64,
    pub budget: f64,
    /// Revenue minus budget; a missing revenue leaves the full budget as
    /// a loss.
    pub profit: f64,
}

/// Immutable corpus snapshot with precomputed tabular aggregates.
///
/// Owns the movies in load order; that order is the position space shared
/// with the similarity matrix, so a catalog is only ever constructed
/// together with its recommender from the same snapshot. Release counters
/// are folded once at construction instead of rescanned per query.
pub struct Catalog {
    movies: Vec<Movie>,
    by_title: AHashMap<String, usize>,
    month_counts: [u64; 12],
    weekday_counts: [u64; 7],
}

impl Catalog {
    /// Take ownership of a corpus snapshot and fold its aggregates.
    /// Fails with [`Error::EmptyCorpus`] when no movies are left after
    /// loading.
    pub fn new(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let mut by_title = AHashMap::with_capacity(movies.len());
        let mut month_counts = [0u64; 12];
        let mut weekday_counts = [0u64; 7];

        for (position, movie) in movies.iter().enumerate() {
            by_title
                .entry(movie.title.to_lowercase())
                .or_insert(position);
            if let Some(date) = movie.release_date {
                month_counts[date.month0() as usize] += 1;
                weekday_counts[date.weekday().num_days_from_monday() as usize] += 1;
            }
        }

        Ok(Self {
            movies,
            by_title,
            month_counts,
            weekday_counts,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// The corpus snapshot in load order.
    #[inline]
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Movie> {
        self.movies.get(position)
    }

    /// Movies released in the given 1-based month, over all years.
    /// `None` for a month outside 1..=12.
    #[must_use]
    pub fn releases_in_month(&self, month: u32) -> Option<u64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(self.month_counts[month as usize - 1])
    }

    /// Movies released on the given weekday, over all years.
    #[must_use]
    pub fn releases_on_weekday(&self, weekday: Weekday) -> u64 {
        self.weekday_counts[weekday.num_days_from_monday() as usize]
    }

    fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.by_title
            .get(&title.to_lowercase())
            .map(|&position| &self.movies[position])
    }

    /// Popularity of a title, matched case-insensitively against the
    /// first occurrence in corpus order.
    #[must_use]
    pub fn score_report(&self, title: &str) -> Option<ScoreReport> {
        self.find_by_title(title).map(|movie| ScoreReport {
            title: movie.title.clone(),
            release_year: movie.release_year,
            popularity: movie.popularity,
        })
    }

    /// Vote count and average of a title.
    #[must_use]
    pub fn votes_report(&self, title: &str) -> Option<VotesReport> {
        self.find_by_title(title).map(|movie| VotesReport {
            title: movie.title.clone(),
            release_year: movie.release_year,
            vote_count: movie.vote_count,
            vote_average: movie.vote_average,
            meets_threshold: movie.vote_count >= VOTE_COUNT_THRESHOLD,
        })
    }

    /// Films and return totals for an actor, matched as a
    /// case-insensitive substring of the cast list.
    #[must_use]
    pub fn actor_report(&self, name: &str) -> Option<ActorReport> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let mut film_count = 0usize;
        let mut total_return = 0.0f64;
        for movie in &self.movies {
            if movie.actor_names.to_lowercase().contains(&needle) {
                film_count += 1;
                total_return += movie.return_ratio;
            }
        }

        if film_count == 0 {
            return None;
        }
        Some(ActorReport {
            actor: name.trim().to_string(),
            film_count,
            total_return,
            average_return: total_return / film_count as f64,
        })
    }

    /// Return totals and per-film breakdown for a director, matched as a
    /// case-insensitive substring.
    #[must_use]
    pub fn director_report(&self, name: &str) -> Option<DirectorReport> {
        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let mut total_return = 0.0f64;
        let mut films = Vec::new();
        for movie in &self.movies {
            if movie.director.to_lowercase().contains(&needle) {
                total_return += movie.return_ratio;
                films.push(FilmReturn {
                    title: movie.title.clone(),
                    release_date: movie.release_date,
                    individual_return: movie.return_ratio,
                    budget: movie.budget,
                    profit: movie.revenue - movie.budget,
                });
            }
        }

        if films.is_empty() {
            return None;
        }
        Some(DirectorReport {
            director: name.trim().to_string(),
            total_return,
            films,
        })
    }
}
