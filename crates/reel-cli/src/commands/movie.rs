use anyhow::Result;
use reel_core::mutate;
use reel_core::validate;
use reel_core::{
    create_movie, pretty_print, Diagnostics, LogDiagnostics, MemoryDiagnostics, MovieOptions,
    Record,
};
use serde_json::{json, Value};
use std::path::Path;

use super::read_json;
use crate::config::OutputFormat;

/// Updates requested by `reel edit`, applied in field order.
#[derive(Debug, Default)]
pub struct Edits {
    pub rating: Option<Value>,
    pub genre: Option<Value>,
    pub remove_director: bool,
    pub add_cast: Vec<Value>,
}

impl Edits {
    /// Run every requested mutator over `movie`.
    pub fn apply(&self, movie: Option<Record>) -> Option<Record> {
        let mut movie = movie;
        if let Some(rating) = &self.rating {
            movie = mutate::set_rating(movie, rating);
        }
        if let Some(genre) = &self.genre {
            movie = mutate::set_genre(movie, genre);
        }
        if self.remove_director {
            movie = mutate::remove_director(movie);
        }
        for member in &self.add_cast {
            movie = mutate::add_cast_member(movie, member);
        }
        movie
    }
}

pub fn new_movie(options: MovieOptions, output: OutputFormat) -> Result<()> {
    let movie = create_movie(options);
    log::debug!("Created movie {}", movie.id());

    match output {
        OutputFormat::Text => println!("{}", movie),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&movie)?),
    }

    Ok(())
}

pub fn show_movie(input: &Path, output: OutputFormat) -> Result<()> {
    let value = read_json(input)?;

    match output {
        OutputFormat::Text => println!("{}", pretty_print(&value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&value)?),
    }

    Ok(())
}

/// Apply `edits` and print the resulting record as JSON.
///
/// The output is always JSON so that the id and an absent director
/// survive for the next command in a pipeline.
pub fn edit_movie(input: &Path, edits: &Edits) -> Result<()> {
    let value = read_json(input)?;
    println!("{}", edited_json(value, edits, input)?);
    Ok(())
}

fn edited_json(value: Value, edits: &Edits, input: &Path) -> Result<String> {
    let before = value.clone();
    let updated = edits.apply(Record::from_value(value));

    match &updated {
        Some(record) if record.to_value() == before => {
            log::info!("No changes applied to {}", input.display());
        }
        Some(_) => {}
        None => log::info!("{} does not hold a movie object", input.display()),
    }

    let updated = updated.map_or(Value::Null, Record::into_value);
    Ok(serde_json::to_string_pretty(&updated)?)
}

/// Results of the accessor group over one value.
fn inspect(value: &Value, diagnostics: &dyn Diagnostics) -> Value {
    json!({
        "title": validate::get_movie_title(value, diagnostics),
        "year": validate::get_movie_year(value, diagnostics),
        "classic": validate::is_movie_classic(value, diagnostics),
        "keys": validate::get_movie_keys(value, diagnostics),
        "properties": validate::get_movie_properties_count(value, diagnostics),
    })
}

pub fn inspect_movie(input: &Path, output: OutputFormat) -> Result<()> {
    let value = read_json(input)?;

    match output {
        OutputFormat::Text => {
            let report = inspect(&value, &LogDiagnostics);
            println!("Title     : {}", report["title"].as_str().unwrap_or_default());
            println!("Year      : {}", report["year"]);
            println!("Classic   : {}", report["classic"]);
            println!("Keys      : {}", join_keys(&report["keys"]));
            println!("Properties: {}", report["properties"]);
        }
        OutputFormat::Json => {
            let sink = MemoryDiagnostics::new();
            let mut report = inspect(&value, &sink);
            report["diagnostics"] = json!(sink.messages());
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn join_keys(keys: &Value) -> String {
    keys.as_array()
        .map(|keys| {
            keys.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
