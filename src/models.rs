use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::movie;

/// Body of a create or full update on a named resource.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePayload {
    pub name: String,
}

/// Body of a partial update. An absent `name` leaves the row as is; an
/// explicit `null` is rejected since the column is not nullable.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePatch {
    #[serde(default, deserialize_with = "present_string")]
    pub name: Option<String>,
}

fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

/// Raw movie listing query. Values are kept as strings so that anything which
/// does not parse as an integer falls back to its default instead of failing
/// the request.
#[derive(Debug, Default)]
pub struct MovieListQuery {
    page: Option<String>,
    director_id: Option<String>,
    genre_id: Option<String>,
}

impl MovieListQuery {
    /// Builds the query from raw key/value pairs. When a key repeats, the
    /// first value wins; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "director_id" => &mut query.director_id,
                "genre_id" => &mut query.genre_id,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn page(&self) -> i64 {
        parse_int(self.page.as_deref()).unwrap_or(1)
    }

    pub fn filter(&self) -> Option<MovieFilter> {
        MovieFilter::resolve(
            parse_int(self.director_id.as_deref()),
            parse_int(self.genre_id.as_deref()),
        )
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MovieFilter {
    Director(i32),
    Genre(i32),
}

impl MovieFilter {
    /// A genre filter wins over a director filter; the two are never combined.
    /// Zero and out-of-range ids count as absent.
    pub fn resolve(director_id: Option<i64>, genre_id: Option<i64>) -> Option<Self> {
        let id = |raw: Option<i64>| raw.filter(|v| *v != 0).and_then(|v| i32::try_from(v).ok());

        if let Some(genre_id) = id(genre_id) {
            return Some(MovieFilter::Genre(genre_id));
        }
        id(director_id).map(MovieFilter::Director)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieView {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub genre_id: Option<i32>,
    pub genre: Option<String>,
    pub director_id: Option<i32>,
    pub director: Option<String>,
}

impl MovieView {
    pub fn new(movie: movie::Model, genre: Option<String>, director: Option<String>) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            trailer: movie.trailer,
            year: movie.year,
            rating: movie.rating,
            genre_id: movie.genre_id,
            genre,
            director_id: movie.director_id,
            director,
        }
    }
}
