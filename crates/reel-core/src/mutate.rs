//! Conditional updates over loosely-typed movie records.
//!
//! Every mutator takes the record by value and hands back the updated
//! record. An absent record (`None`) passes straight through, and an
//! update value of the wrong type or outside its allowed set leaves the
//! record unchanged. Mutators never log and never fail.

use serde_json::Value;

use crate::genre::Genre;
use crate::record::Record;

/// Replace `rating` when the new value is a number.
pub fn set_rating(movie: Option<Record>, rating: &Value) -> Option<Record> {
    let mut movie = movie?;
    if rating.is_number() {
        movie.insert("rating", rating.clone());
    }
    Some(movie)
}

/// Replace `genre` when the new value is a string naming an allowed genre.
pub fn set_genre(movie: Option<Record>, genre: &Value) -> Option<Record> {
    let mut movie = movie?;
    if let Some(name) = genre.as_str().filter(|name| Genre::is_allowed(name)) {
        movie.insert("genre", name);
    }
    Some(movie)
}

/// Same as [`set_genre`].
pub fn add_movie_genre(movie: Option<Record>, genre: &Value) -> Option<Record> {
    set_genre(movie, genre)
}

/// Drop the `director` key if present.
pub fn remove_director(movie: Option<Record>) -> Option<Record> {
    let mut movie = movie?;
    movie.remove("director");
    Some(movie)
}

/// Append a string member to an existing `cast` array.
///
/// A missing or non-array `cast` is left as it is; it is never created.
pub fn add_cast_member(movie: Option<Record>, new_member: &Value) -> Option<Record> {
    let mut movie = movie?;
    if let (Some(Value::Array(cast)), Value::String(_)) = (movie.get_mut("cast"), new_member) {
        cast.push(new_member.clone());
    }
    Some(movie)
}

/// A fresh copy of the allowed genre names.
#[must_use]
pub fn allowed_genres() -> Vec<&'static str> {
    Genre::ALL.iter().map(|g| g.as_str()).collect()
}
