use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::{director, genre, movie};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i32,
    pub rating: f64,
    pub genre_id: Option<i32>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            genre_id: m.genre_id,
            director_id: m.director_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Director {
    pub id: i32,
    pub name: String,
}

impl From<director::Model> for Director {
    fn from(m: director::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl From<genre::Model> for Genre {
    fn from(m: genre::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}

/// Body of `POST /movies/` and `PUT /movies/{id}`. Every key must be present;
/// the two references may be `null`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieFields {
    pub title: String,
    pub description: String,
    pub trailer: String,
    pub year: i32,
    pub rating: f64,
    #[serde(deserialize_with = "present_or_null")]
    pub genre_id: Option<i32>,
    #[serde(deserialize_with = "present_or_null")]
    pub director_id: Option<i32>,
}

/// Body for directors and genres.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameFields {
    pub name: String,
}

/// Raw `?director_id=&genre_id=` query string values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MovieQuery {
    pub director_id: Option<String>,
    pub genre_id: Option<String>,
}

impl MovieQuery {
    /// Empty values count as absent. `None` when a value is not an id at all,
    /// since such a filter cannot match any row.
    pub fn filter(&self) -> Option<MovieFilter> {
        Some(MovieFilter {
            director_id: parse_id(self.director_id.as_deref())?,
            genre_id: parse_id(self.genre_id.as_deref())?,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovieFilter {
    pub director_id: Option<i32>,
    pub genre_id: Option<i32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Created {
    pub id: i32,
}

// With `deserialize_with` and no `default`, serde reports an absent key as a
// missing field instead of silently filling in `None`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer)
}

fn parse_id(raw: Option<&str>) -> Option<Option<i32>> {
    match raw.map(str::trim) {
        None | Some("") => Some(None),
        Some(s) => s.parse().ok().map(Some),
    }
}
