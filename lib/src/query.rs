use std::fmt::{self, Display, Formatter};

/// A free-text lyric search, as typed into the search box.
///
/// The text may name an artist after a `|`, e.g. `Imagine | John Lennon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    /// The whole input, trimmed. This is what gets sent to the server.
    pub text: &'a str,

    /// The part before the first `|`.
    pub title: &'a str,

    /// The part between the first and second `|`, if it isn't blank.
    pub artist: Option<&'a str>,
}

impl<'a> SearchQuery<'a> {
    /// Parse the search box contents. Returns `None` for blank input.
    pub fn parse(s: &'a str) -> Option<Self> {
        let text = s.trim();
        if text.is_empty() {
            return None;
        }

        let mut parts = text.split('|').map(str::trim);
        let title = parts.next().unwrap_or_default();
        let artist = parts.next().filter(|artist| !artist.is_empty());

        Some(SearchQuery {
            text,
            title,
            artist,
        })
    }
}

/// Displays the heading of the lyrics panel.
impl Display for SearchQuery<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_heading(f, self.title, self.artist)
    }
}

/// Write `title - artist`, or just `title`.
pub(crate) fn write_heading(f: &mut Formatter<'_>, title: &str, artist: Option<&str>) -> fmt::Result {
    match artist {
        Some(artist) if !artist.is_empty() => write!(f, "{title} - {artist}"),
        _ => write!(f, "{title}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_and_artist() {
        let query = SearchQuery::parse("  Imagine | John Lennon ").unwrap();
        assert_eq!(query.text, "Imagine | John Lennon");
        assert_eq!(query.title, "Imagine");
        assert_eq!(query.artist, Some("John Lennon"));
        assert_eq!(query.to_string(), "Imagine - John Lennon");
    }

    #[test]
    fn title_only() {
        let query = SearchQuery::parse("Imagine").unwrap();
        assert_eq!(query.artist, None);
        assert_eq!(query.to_string(), "Imagine");
    }

    #[test]
    fn blank_artist_is_dropped() {
        assert_eq!(SearchQuery::parse("Imagine |  ").unwrap().to_string(), "Imagine");
    }

    #[test]
    fn extra_separators_are_ignored() {
        let query = SearchQuery::parse("Imagine | John Lennon | 1971").unwrap();
        assert_eq!(query.to_string(), "Imagine - John Lennon");
        assert_eq!(query.text, "Imagine | John Lennon | 1971");
    }

    #[test]
    fn blank_input() {
        assert_eq!(SearchQuery::parse(""), None);
        assert_eq!(SearchQuery::parse(" \t\n "), None);
    }
}
