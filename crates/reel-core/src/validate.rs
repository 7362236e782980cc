//! Read-only accessors over loosely-typed movie values.
//!
//! Accessors fall back to an empty value when the input or the wanted
//! field is unusable, and report a fixed diagnostic message through the
//! supplied [`Diagnostics`] sink.

use serde_json::Value;

use crate::diagnostics::Diagnostics;
use crate::movie::CLASSIC_CUTOFF_YEAR;

pub const MISSING_TITLE: &str = "getMovieTitle: Invalid movie object or title missing.";
pub const MISSING_YEAR: &str = "getMovieYear: Invalid movie object or year missing.";
pub const CLASSIC_MISSING_YEAR: &str = "isMovieClassic: Movie object invalid or missing year.";
pub const KEYS_NOT_OBJECT: &str = "getMovieKeys: Provided input is not a valid object.";
pub const COUNT_NOT_OBJECT: &str = "getMoviePropertiesCount: Provided input is not a valid object.";

/// Runtime type name of a JSON value.
///
/// Objects, arrays and `null` all report `"object"`.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}

/// Own enumerable keys of an object or array, in order.
///
/// Arrays are objects keyed by index (`"0"`, `"1"`, ...). `null` and
/// scalars have no own keys.
fn own_keys(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Object(map) => Some(map.keys().cloned().collect()),
        Value::Array(items) => Some((0..items.len()).map(|i| i.to_string()).collect()),
        _ => None,
    }
}

/// The value owned under `key`. An array also owns its `length`.
fn own_property(value: &Value, key: &str) -> Option<Value> {
    match value {
        Value::Object(map) => map.get(key).cloned(),
        Value::Array(items) if key == "length" => Some(Value::from(items.len())),
        Value::Array(items) => key
            .parse::<usize>()
            .ok()
            .filter(|index| index.to_string() == key)
            .and_then(|index| items.get(index).cloned()),
        _ => None,
    }
}

/// True when `obj` is an object (arrays included) owning `key` whose
/// value has type `expected`.
#[must_use]
pub fn has_property_of_type(obj: &Value, key: &str, expected: &str) -> bool {
    own_property(obj, key).is_some_and(|value| type_name(&value) == expected)
}

#[must_use]
pub fn get_movie_title(movie: &Value, diagnostics: &dyn Diagnostics) -> String {
    match movie.get("title").and_then(Value::as_str) {
        Some(title) => title.to_string(),
        None => {
            diagnostics.report(MISSING_TITLE);
            String::new()
        }
    }
}

/// The movie's year, truncated toward zero when it is not integral.
///
/// Lossy for fractional years such as `1995.7`; `is_movie_classic`
/// compares the untruncated number.
#[must_use]
pub fn get_movie_year(movie: &Value, diagnostics: &dyn Diagnostics) -> i64 {
    match movie.get("year").and_then(year_of) {
        Some(year) => year,
        None => {
            diagnostics.report(MISSING_YEAR);
            0
        }
    }
}

fn year_of(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
}

/// Released strictly before 2000.
///
/// A year of 2000 or later is simply not classic; only a missing or
/// non-numeric year is reported.
#[must_use]
pub fn is_movie_classic(movie: &Value, diagnostics: &dyn Diagnostics) -> bool {
    match movie.get("year").and_then(Value::as_f64) {
        Some(year) => year < f64::from(CLASSIC_CUTOFF_YEAR),
        None => {
            diagnostics.report(CLASSIC_MISSING_YEAR);
            false
        }
    }
}

#[must_use]
pub fn get_movie_keys(movie: &Value, diagnostics: &dyn Diagnostics) -> Vec<String> {
    match own_keys(movie) {
        Some(keys) => keys,
        None => {
            diagnostics.report(KEYS_NOT_OBJECT);
            Vec::new()
        }
    }
}

#[must_use]
pub fn get_movie_properties_count(movie: &Value, diagnostics: &dyn Diagnostics) -> usize {
    match own_keys(movie) {
        Some(keys) => keys.len(),
        None => {
            diagnostics.report(COUNT_NOT_OBJECT);
            0
        }
    }
}
