use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::genre::Genre;
use crate::ids::MovieId;
use crate::record::Record;

/// Year before which a movie counts as a classic.
pub const CLASSIC_CUTOFF_YEAR: i32 = 2000;

/// A movie record.
///
/// `id` is assigned once by the factory and never reassigned. `director`
/// is optional so that a removed director is distinguishable from an
/// empty one. `genre` is free text here; only the genre update path
/// enforces the allowed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    id: MovieId,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub genre: String,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub cast: Vec<String>,
}

/// Partial input for the movie factory.
///
/// Has no `id` field: the factory always generates one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovieOptions {
    pub title: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub cast: Option<Vec<String>>,
}

/// Build a movie from `options`, filling every unset field with its empty
/// default and assigning a fresh id.
#[must_use]
pub fn create_movie(options: MovieOptions) -> Movie {
    Movie::from_options(options)
}

impl Movie {
    #[must_use]
    pub fn from_options(options: MovieOptions) -> Self {
        Self {
            id: MovieId::new(),
            title: options.title.unwrap_or_default(),
            director: Some(options.director.unwrap_or_default()),
            year: options.year.unwrap_or_default(),
            genre: options.genre.unwrap_or_default(),
            rating: options.rating.unwrap_or_default(),
            cast: options.cast.unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> MovieId {
        self.id
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    #[must_use]
    pub fn with_cast<I, S>(mut self, cast: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cast = cast.into_iter().map(Into::into).collect();
        self
    }

    pub fn set_rating(&mut self, rating: f64) {
        self.rating = rating;
    }

    /// Replace the genre with a member of the allowed set.
    ///
    /// On rejection the movie is left untouched.
    pub fn set_genre(&mut self, genre: &str) -> Result<Genre> {
        let genre: Genre = genre.parse()?;
        self.genre = genre.as_str().to_string();
        Ok(genre)
    }

    /// Remove the director entirely. Returns the previous value, if any.
    pub fn remove_director(&mut self) -> Option<String> {
        self.director.take()
    }

    pub fn add_cast_member(&mut self, member: impl Into<String>) {
        self.cast.push(member.into());
    }

    #[must_use]
    pub fn is_classic(&self) -> bool {
        self.year < CLASSIC_CUTOFF_YEAR
    }

    /// Loosely-typed view of this movie, keys in declaration order.
    #[must_use]
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id", self.id.to_string());
        record.insert("title", self.title.as_str());
        if let Some(director) = &self.director {
            record.insert("director", director.as_str());
        }
        record.insert("year", self.year);
        record.insert("genre", self.genre.as_str());
        record.insert("rating", self.rating);
        record.insert("cast", self.cast.clone());
        record
    }
}

impl TryFrom<Record> for Movie {
    type Error = Error;

    /// Strict conversion: `id` must be a UUID string and every present
    /// field must have its declared type. Missing fields take the factory
    /// defaults, except `director`, which stays absent.
    fn try_from(record: Record) -> Result<Self> {
        serde_json::from_value(Value::from(record)).map_err(|e| Error::InvalidRecord(e.to_string()))
    }
}
