use crate::api::{Action, ApiError};
use crate::query::SearchQuery;
use crate::song::{DeleteControl, DeleteTarget, SongFilter, SongItem};
use crate::theme::Theme;

/// Which panel is currently being shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// The list of songs.
    #[default]
    Songs,

    /// The lyrics of one song.
    Lyrics,
}

/// Contents of the lyrics panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsPanel {
    pub heading: String,
    pub body: String,
}

/// What to do after a delete request finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Reload the page so the server renders the new song list.
    Reload,

    /// Tell the user what went wrong.
    Alert(String),
}

impl From<Result<(), ApiError>> for DeleteOutcome {
    fn from(result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => DeleteOutcome::Reload,
            Err(e) => DeleteOutcome::Alert(e.alert_message(Action::Delete)),
        }
    }
}

/// Why a delete click didn't lead to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAbort {
    /// There is no song at that index.
    NoSong,

    /// The delete control carried no title.
    NoTitle,

    /// The user answered "no".
    Declined,
}

/// Everything the page shows. Rendered as a whole, so the panels can't disagree.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: View,
    pub theme: Theme,

    /// Contents of the search box.
    pub query: String,

    /// Filter derived from `query`.
    filter: SongFilter,

    pub songs: Vec<SongItem>,
    pub lyrics: LyricsPanel,

    /// Inline status text after a failed search.
    pub notice: Option<&'static str>,
}

impl UiState {
    pub fn new(songs: Vec<SongItem>, theme: Theme) -> Self {
        UiState {
            songs,
            theme,
            ..Default::default()
        }
    }

    /// The user typed into the search box.
    pub fn set_query(&mut self, query: String) {
        self.filter = SongFilter::new(&query);
        self.query = query;
    }

    pub fn is_visible(&self, song: &SongItem) -> bool {
        self.filter.matches(&song.entry)
    }

    pub fn visible_songs(&self) -> impl Iterator<Item = &SongItem> {
        self.songs.iter().filter(|song| self.is_visible(song))
    }

    /// The search to issue for the current query, or `None` if it's blank.
    pub fn search_query(&self) -> Option<SearchQuery<'_>> {
        SearchQuery::parse(&self.query)
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn show_lyrics(&mut self, heading: String, body: String) {
        self.lyrics = LyricsPanel { heading, body };
        self.view = View::Lyrics;
    }

    pub fn show_songs(&mut self) {
        self.view = View::Songs;
    }

    /// A search was started.
    pub fn begin_search(&mut self) {
        self.notice = None;
    }

    pub fn finish_search(&mut self, heading: String, result: Result<String, ApiError>) {
        match result {
            Ok(lyrics) => {
                self.notice = None;
                self.show_lyrics(heading, lyrics);
            }
            Err(e) => self.notice = Some(e.notice()),
        }
    }

    /// Decide whether the delete control of song `index` should send a request.
    ///
    /// `confirm` is only asked when there is something to delete.
    pub fn delete_target(
        &self,
        index: usize,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteTarget, DeleteAbort> {
        let song = self.songs.get(index).ok_or(DeleteAbort::NoSong)?;
        let target = song
            .delete
            .as_ref()
            .and_then(DeleteControl::target)
            .ok_or(DeleteAbort::NoTitle)?;

        if !confirm(&target.confirmation()) {
            return Err(DeleteAbort::Declined);
        }

        Ok(target)
    }

    /// Returns the message to alert the user with if the lookup failed.
    pub fn finish_lookup(
        &mut self,
        heading: String,
        result: Result<String, ApiError>,
    ) -> Option<String> {
        match result {
            Ok(lyrics) => {
                self.show_lyrics(heading, lyrics);
                None
            }
            Err(e) => Some(e.alert_message(Action::Lookup)),
        }
    }
}
