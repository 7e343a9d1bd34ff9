use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single record of the movie dataset.
///
/// Movies are identified by their **position** in the corpus: a stable,
/// 0-based index assigned at load time. Titles are not unique, so every
/// structure that references a movie by position must be built from the
/// same corpus ordering.
///
/// Absent optional text fields are represented as empty strings and absent
/// numeric fields as zero, so callers never branch on sentinels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre_names: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub actor_names: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub revenue: f64,
    /// Revenue-to-budget ratio, under the dataset's `return` column name.
    #[serde(rename = "return", default)]
    pub return_ratio: f64,
}

impl Movie {
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_genres(mut self, genre_names: impl Into<String>) -> Self {
        self.genre_names = genre_names.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        use chrono::Datelike;
        self.release_year = Some(date.year());
        self.release_date = Some(date);
        self
    }
}
