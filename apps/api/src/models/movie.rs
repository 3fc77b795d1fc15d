use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

/// TMDb sends `""` for unknown release dates, and occasionally malformed ones.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;

    Ok(raw
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()))
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One candidate record as returned by the provider's list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub original_language: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
}

impl Movie {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }

    pub fn has_display_text(&self) -> bool {
        !self.title.trim().is_empty() && !self.overview.trim().is_empty()
    }
}

/// Paginated envelope shared by the search and popular endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// Full record from the provider's details endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub original_language: String,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// A movie paired with the relevance score computed for a single search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMovie {
    #[serde(flatten)]
    pub movie: Movie,
    pub relevance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 597,
            "title": "Titanic",
            "overview": "A ship hits an iceberg.",
            "poster_path": "/poster.jpg",
            "backdrop_path": null,
            "release_date": "1997-11-18",
            "vote_average": 7.9,
            "vote_count": 25000,
            "popularity": 120.5,
            "original_language": "en",
            "original_title": "Titanic",
            "genre_ids": [18, 10749],
            "adult": false,
            "video": false
        }))
        .unwrap();

        assert_eq!(movie.id, 597);
        assert_eq!(movie.release_year(), Some(1997));
        assert_eq!(movie.genre_ids, vec![18, 10749]);
        assert!(movie.backdrop_path.is_none());
        assert!(movie.has_display_text());
    }

    #[test]
    fn test_empty_release_date_is_absent() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Untitled",
            "overview": "",
            "release_date": ""
        }))
        .unwrap();

        assert!(movie.release_date.is_none());
        assert!(!movie.has_display_text());
    }

    #[test]
    fn test_malformed_release_date_is_absent() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 2,
            "title": null,
            "release_date": "sometime in 1999"
        }))
        .unwrap();

        assert!(movie.release_date.is_none());
        assert_eq!(movie.title, "");
    }

    #[test]
    fn test_scored_movie_serializes_flat() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "id": 3,
            "title": "Heat",
            "overview": "A heist.",
            "release_date": "1995-12-15"
        }))
        .unwrap();
        let scored = ScoredMovie {
            movie,
            relevance_score: 42.5,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["title"], "Heat");
        assert_eq!(value["release_date"], "1995-12-15");
        assert_eq!(value["relevance_score"], 42.5);
    }
}
