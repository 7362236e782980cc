//! Fixed-layout text rendering of movie records.

use serde_json::Value;
use std::fmt;

use crate::movie::Movie;
use crate::record::Record;

const SEPARATOR: &str = "----------------------------------------";
const PLACEHOLDER: &str = "N/A";

/// Render `movie` as a fixed multi-line block.
///
/// Any value may be passed; fields that are missing or falsy (empty
/// string, zero, `false`, `null`) print as `N/A`, as does a cast that is
/// not a non-empty array. A non-object input prints every field as `N/A`.
#[must_use]
pub fn pretty_print(movie: &Value) -> String {
    render(|key| movie.get(key))
}

#[must_use]
pub fn pretty_print_record(record: &Record) -> String {
    render(|key| record.get(key))
}

fn render<'a>(field: impl Fn(&str) -> Option<&'a Value>) -> String {
    let line = |label: &str, key: &str| format!("{label}: {}", scalar(field(key)));
    [
        SEPARATOR.to_string(),
        line("Title   ", "title"),
        line("Year    ", "year"),
        line("Director", "director"),
        line("Genre   ", "genre"),
        line("Rating  ", "rating"),
        format!("Cast    : {}", cast(field("cast"))),
        SEPARATOR.to_string(),
    ]
    .join("\n")
}

fn scalar(value: Option<&Value>) -> String {
    match value {
        Some(v) if is_truthy(v) => display(v),
        _ => PLACEHOLDER.to_string(),
    }
}

fn cast(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(members)) if !members.is_empty() => members
            .iter()
            .map(display)
            .collect::<Vec<_>>()
            .join(", "),
        _ => PLACEHOLDER.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display(value: &Value) -> String {
    match value {
        // Only reachable for list members.
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn display_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display drops a zero fraction: 9.0 prints as "9".
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&pretty_print_record(&self.to_record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movie::{create_movie, MovieOptions};
    use serde_json::json;

    fn inception() -> Value {
        json!({
            "id": "0f0e0d0c-0b0a-4908-8706-050403020100",
            "title": "Inception",
            "director": "Christopher Nolan",
            "year": 2010,
            "genre": "Sci-Fi",
            "rating": 8.8,
            "cast": ["Leonardo DiCaprio", "Joseph Gordon-Levitt", "Elliot Page"]
        })
    }

    #[test]
    fn test_pretty_print_full_record() {
        let output = pretty_print(&inception());
        assert!(output.contains("Title   : Inception"));
        assert!(output.contains("Year    : 2010"));
        assert!(output.contains("Director: Christopher Nolan"));
        assert!(output.contains("Genre   : Sci-Fi"));
        assert!(output.contains("Rating  : 8.8"));
        assert!(output.contains("Cast    : Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page"));
    }

    #[test]
    fn test_pretty_print_exact_layout() {
        let output = pretty_print(&json!({
            "title": "A",
            "year": 1999,
            "director": "B",
            "genre": "Drama",
            "rating": 7,
            "cast": ["C"]
        }));
        let expected = "----------------------------------------\n\
                        Title   : A\n\
                        Year    : 1999\n\
                        Director: B\n\
                        Genre   : Drama\n\
                        Rating  : 7\n\
                        Cast    : C\n\
                        ----------------------------------------";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_pretty_print_defaults_use_placeholder() {
        let movie = create_movie(MovieOptions::default());
        let output = movie.to_string();
        assert!(output.contains("Title   : N/A"));
        assert!(output.contains("Year    : N/A"));
        assert!(output.contains("Director: N/A"));
        assert!(output.contains("Genre   : N/A"));
        assert!(output.contains("Rating  : N/A"));
        assert!(output.contains("Cast    : N/A"));
    }

    #[test]
    fn test_pretty_print_missing_fields_and_non_objects() {
        for value in [json!({}), Value::Null, json!("not an object")] {
            let output = pretty_print(&value);
            assert_eq!(output.matches(": N/A").count(), 6);
        }
    }

    #[test]
    fn test_pretty_print_non_array_cast() {
        let output = pretty_print(&json!({"cast": "Tom Hanks"}));
        assert!(output.contains("Cast    : N/A"));
    }

    #[test]
    fn test_pretty_print_whole_number_rating() {
        let output = pretty_print(&json!({"rating": 9.0}));
        assert!(output.contains("Rating  : 9\n"));
    }

    #[test]
    fn test_pretty_print_does_not_mutate_input() {
        let movie = inception();
        let before = movie.clone();
        let rendered = pretty_print(&movie);
        assert!(!rendered.is_empty());
        assert_eq!(movie, before);
    }
}
