use reel_core::mutate::{
    add_cast_member, add_movie_genre, allowed_genres, remove_director, set_rating,
};
use reel_core::{create_movie, pretty_print, MovieOptions, Record};
use serde_json::{json, Value};

fn show(label: &str, movie: Option<&Record>) {
    let value = movie.map_or(Value::Null, Record::to_value);
    println!("{}:\n{}\n", label, value);
}

/// Walk through the factory, the printer and each mutator.
pub fn run_demo() {
    let default_movie = create_movie(MovieOptions::default());
    println!("Default Movie:\n{}\n", default_movie);

    let custom_movie = create_movie(MovieOptions {
        title: Some("Inception".to_string()),
        director: Some("Christopher Nolan".to_string()),
        year: Some(2010),
        genre: Some("Sci-Fi".to_string()),
        rating: Some(8.8),
        cast: Some(vec![
            "Leonardo DiCaprio".to_string(),
            "Joseph Gordon-Levitt".to_string(),
            "Elliot Page".to_string(),
        ]),
    });
    println!("Custom Movie:\n{}\n", custom_movie);

    let movie = Record::from_value(json!({
        "id": 1,
        "title": "Toy Story",
        "director": "John Lasseter",
        "year": 1995,
        "genre": "Animation",
        "rating": 8.3,
        "cast": ["Tom Hanks", "Tim Allen", "Don Rickles"]
    }));
    show("Original Movie Object", movie.as_ref());

    let movie = set_rating(movie, &json!(9.1));
    show("After Updating Rating", movie.as_ref());

    let movie = add_movie_genre(movie, &json!("Family"));
    show("After Adding/Updating Genre", movie.as_ref());

    let movie = remove_director(movie);
    show("After Removing Director Property", movie.as_ref());

    let movie = add_cast_member(movie, &json!("Joan Cusack"));
    show("After Adding a New Cast Member", movie.as_ref());

    if let Some(movie) = &movie {
        println!("{}\n", pretty_print(&movie.to_value()));
    }

    println!("Allowed Genres: {}\n", allowed_genres().join(", "));

    let invalid = set_rating(None, &json!(8.5));
    show("Rating Update on a Missing Movie", invalid.as_ref());

    let unchanged = add_movie_genre(Some(Record::new()), &json!(123));
    show("Genre Update with a Non-String", unchanged.as_ref());
}
