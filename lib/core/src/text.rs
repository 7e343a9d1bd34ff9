// Text normalization shared by the feature builder and the benchmarks
use crate::{Error, Movie, Result};

/// Fixed English stop-word list applied during tokenization.
///
/// The dataset carries Spanish titles here and there, but the descriptive
/// text (genres, overviews, taglines) is English, so the list stays
/// English-only.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "can", "could", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "may", "me", "might", "more", "most", "my", "no",
    "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
    "our", "ours", "out", "over", "own", "same", "shall", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with",
    "would", "you", "your", "yours",
];

/// Which textual fields feed the combined text used for similarity.
///
/// Genres, overview and tagline are on by default; the title is opt-in.
#[derive(Debug, Clone)]
pub struct FeatureConfig {
    pub include_title: bool,
    pub include_genres: bool,
    pub include_overview: bool,
    pub include_tagline: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            include_title: false,
            include_genres: true,
            include_overview: true,
            include_tagline: true,
        }
    }
}

impl FeatureConfig {
    /// At least one field must be selected or every vector would be zero.
    pub fn validate(&self) -> Result<()> {
        if !self.include_title
            && !self.include_genres
            && !self.include_overview
            && !self.include_tagline
        {
            return Err(Error::InvalidConfig(
                "feature configuration selects no text fields".to_string(),
            ));
        }
        Ok(())
    }

    /// Concatenate the configured fields of a movie into one document.
    /// Missing fields are empty strings and contribute nothing.
    #[must_use]
    pub fn combined_text(&self, movie: &Movie) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(4);
        if self.include_title {
            parts.push(&movie.title);
        }
        if self.include_genres {
            parts.push(&movie.genre_names);
        }
        if self.include_overview {
            parts.push(&movie.overview);
        }
        if self.include_tagline {
            parts.push(&movie.tagline);
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

/// Tokenize text: lowercase, split on non-alphanumeric boundaries, drop
/// stop words. Length-1 tokens are kept so rebuilt vocabularies stay
/// reproducible across corpora.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .filter(|t| !STOP_WORDS.contains(t))
        .map(|t| t.to_string())
        .collect()
}
