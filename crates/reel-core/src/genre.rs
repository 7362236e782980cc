use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A genre from the allowed set.
///
/// The set is fixed; genre updates through [`crate::mutate::set_genre`] and
/// [`crate::Movie::set_genre`] only accept these names. Direct construction
/// of a movie may still carry any genre text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Animation,
    Family,
    Action,
    Comedy,
    Drama,
    #[serde(rename = "Sci-Fi")]
    SciFi,
}

impl Genre {
    /// Every allowed genre, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Animation,
        Self::Family,
        Self::Action,
        Self::Comedy,
        Self::Drama,
        Self::SciFi,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Animation => "Animation",
            Self::Family => "Family",
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::SciFi => "Sci-Fi",
        }
    }

    /// Look up a genre by its exact display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == name)
    }

    /// Whether `name` is a member of the allowed set (case-sensitive).
    #[must_use]
    pub fn is_allowed(name: &str) -> bool {
        Self::from_name(name).is_some()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::GenreNotAllowed(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_parse() {
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("Family".parse::<Genre>().unwrap(), Genre::Family);
    }

    #[test]
    fn test_genre_parse_is_case_sensitive() {
        assert!("family".parse::<Genre>().is_err());
        assert!(matches!(
            "Horror".parse::<Genre>(),
            Err(Error::GenreNotAllowed(name)) if name == "Horror"
        ));
    }

    #[test]
    fn test_genre_serde_uses_display_names() {
        let json = serde_json::to_string(&Genre::SciFi).unwrap();
        assert_eq!(json, "\"Sci-Fi\"");
        let genre: Genre = serde_json::from_str("\"Drama\"").unwrap();
        assert_eq!(genre, Genre::Drama);
    }

    #[test]
    fn test_all_genres_round_trip_names() {
        for genre in Genre::ALL {
            assert_eq!(Genre::from_name(genre.as_str()), Some(genre));
            assert_eq!(genre.to_string(), genre.as_str());
        }
    }
}
