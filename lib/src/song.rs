use crate::api::SongRequest;
use crate::query::write_heading;
use std::fmt::{self, Display, Formatter};

/// A song as rendered into the page by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongEntry {
    pub title: String,
    pub artist: Option<String>,
}

impl SongEntry {
    /// Build an entry from the text of its title and artist elements.
    ///
    /// The artist is often rendered as `- Artist`, so leading dashes are stripped.
    pub fn from_rendered(title: &str, artist: Option<&str>) -> Self {
        let artist = artist
            .map(strip_artist_prefix)
            .filter(|artist| !artist.is_empty())
            .map(str::to_string);

        SongEntry {
            title: title.trim().to_string(),
            artist,
        }
    }

    pub fn request(&self) -> SongRequest<'_> {
        SongRequest {
            title: &self.title,
            artist: self.artist.as_deref().unwrap_or_default(),
        }
    }
}

/// Displays the heading of the lyrics panel.
impl Display for SongEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_heading(f, &self.title, self.artist.as_deref())
    }
}

fn strip_artist_prefix(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .trim()
}

/// What a delete control says to delete. Read from its `data-title` and `data-artist`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteTarget {
    pub title: String,
    pub artist: String,
}

impl DeleteTarget {
    /// Returns `None` if the control has no title to delete by.
    pub fn from_attributes(title: Option<&str>, artist: Option<&str>) -> Option<Self> {
        let title = title.map(str::trim).filter(|t| !t.is_empty())?;
        let artist = artist.map(str::trim).unwrap_or_default();

        Some(DeleteTarget {
            title: title.to_string(),
            artist: artist.to_string(),
        })
    }

    /// The question put to the user before deleting.
    pub fn confirmation(&self) -> String {
        if self.artist.is_empty() {
            format!("Are you sure you want to delete \"{}\"?", self.title)
        } else {
            format!(
                "Are you sure you want to delete \"{} by {}\"?",
                self.title, self.artist
            )
        }
    }

    pub fn request(&self) -> SongRequest<'_> {
        SongRequest {
            title: &self.title,
            artist: &self.artist,
        }
    }
}

/// The raw `data-title` and `data-artist` of a rendered delete control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteControl {
    pub title: Option<String>,
    pub artist: Option<String>,
}

impl DeleteControl {
    pub fn new(title: Option<String>, artist: Option<String>) -> Self {
        DeleteControl { title, artist }
    }

    pub fn target(&self) -> Option<DeleteTarget> {
        DeleteTarget::from_attributes(self.title.as_deref(), self.artist.as_deref())
    }
}

/// One row of the song list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongItem {
    pub entry: SongEntry,

    /// `None` if the server rendered the song without a delete control.
    pub delete: Option<DeleteControl>,
}

impl SongItem {
    pub fn new(entry: SongEntry, delete: Option<DeleteControl>) -> Self {
        SongItem { entry, delete }
    }
}

/// Case-insensitive substring filter over titles and artists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    needle: String,
}

impl SongFilter {
    pub fn new(input: &str) -> Self {
        SongFilter {
            needle: input.to_lowercase(),
        }
    }

    pub fn matches(&self, song: &SongEntry) -> bool {
        let contains = |s: &str| s.to_lowercase().contains(&self.needle);
        contains(&song.title) || song.artist.as_deref().is_some_and(contains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str, artist: Option<&str>) -> SongEntry {
        SongEntry::from_rendered(title, artist)
    }

    #[test]
    fn rendered_artist_prefix() {
        let entry = song(" Imagine ", Some(" - John Lennon"));
        assert_eq!(entry.title, "Imagine");
        assert_eq!(entry.artist.as_deref(), Some("John Lennon"));
        assert_eq!(entry.to_string(), "Imagine - John Lennon");

        let entry = song("Imagine", Some("--  "));
        assert_eq!(entry.artist, None);
        assert_eq!(entry.to_string(), "Imagine");
        assert_eq!(entry.request().artist, "");
    }

    #[test]
    fn artist_keeps_inner_dashes() {
        let entry = song("Stay", Some("- Jay-Z"));
        assert_eq!(entry.artist.as_deref(), Some("Jay-Z"));
    }

    #[test]
    fn filter_matches_title_or_artist() {
        let songs = [
            song("Imagine", Some("John Lennon")),
            song("Yesterday", Some("The Beatles")),
            song("Hallelujah", None),
        ];

        let visible = |input: &str| -> Vec<&str> {
            let filter = SongFilter::new(input);
            songs
                .iter()
                .filter(|s| filter.matches(s))
                .map(|s| s.title.as_str())
                .collect()
        };

        assert_eq!(visible(""), ["Imagine", "Yesterday", "Hallelujah"]);
        assert_eq!(visible("BEATLES"), ["Yesterday"]);
        assert_eq!(visible("ll"), ["Hallelujah"]);
        assert_eq!(visible("e"), ["Imagine", "Yesterday", "Hallelujah"]);
        assert_eq!(visible("lennon"), ["Imagine"]);
        assert!(visible("zzz").is_empty());
    }

    #[test]
    fn filter_does_not_trim() {
        let filter = SongFilter::new(" imagine");
        assert!(!filter.matches(&song("Imagine", None)));
    }

    #[test]
    fn filter_sees_the_stripped_artist() {
        let entry = song("Imagine", Some(" - John Lennon"));
        assert!(!SongFilter::new("-").matches(&entry));
        assert!(!SongFilter::new(" - john").matches(&entry));
        assert!(SongFilter::new("john").matches(&entry));
    }

    #[test]
    fn delete_target_attributes() {
        assert_eq!(DeleteTarget::from_attributes(None, Some("x")), None);
        assert_eq!(DeleteTarget::from_attributes(Some("  "), None), None);

        let target = DeleteTarget::from_attributes(Some(" Imagine "), None).unwrap();
        assert_eq!(target.artist, "");
        assert_eq!(
            target.confirmation(),
            "Are you sure you want to delete \"Imagine\"?"
        );

        let target =
            DeleteTarget::from_attributes(Some("Imagine"), Some(" John Lennon ")).unwrap();
        assert_eq!(
            target.confirmation(),
            "Are you sure you want to delete \"Imagine by John Lennon\"?"
        );
    }

    #[test]
    fn delete_control_target() {
        let control = DeleteControl::new(Some(" Stay ".into()), Some("Jay-Z".into()));
        let target = control.target().unwrap();
        assert_eq!(target.title, "Stay");
        assert_eq!(target.artist, "Jay-Z");

        assert_eq!(DeleteControl::new(Some(String::new()), None).target(), None);
        assert_eq!(DeleteControl::default().target(), None);
    }
}
