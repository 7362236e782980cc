//! Core domain model for reel.
//!
//! This crate defines the movie record (typed [`Movie`] and the
//! loosely-typed [`Record`]), the movie factory, the pretty-printer,
//! the mutators, and the validator/accessor helpers.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod diagnostics;
pub mod error;
pub mod genre;
pub mod ids;
pub mod movie;
pub mod mutate;
pub mod print;
pub mod record;
pub mod validate;

pub use diagnostics::{Diagnostics, LogDiagnostics, MemoryDiagnostics};
pub use error::{Error, Result};
pub use genre::Genre;
pub use ids::MovieId;
pub use movie::{create_movie, Movie, MovieOptions};
pub use print::pretty_print;
pub use record::Record;
