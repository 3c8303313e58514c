use crate::dom::{self, DATA_ARTIST, DATA_TITLE, DELETE_BUTTON_CLASS, SONG_ARTIST_CLASS};
use crate::dom::{SONG_ITEM_CLASS, SONG_TITLE_CLASS};
use crate::fetch::post_json;
use gloo_console::{error, log};
use seed::prelude::*;
use seed::{attrs, button, div, h2, input, pre, style, C, IF};
use songbook_lib::api::{ApiError, Endpoint, SearchRequest};
use songbook_lib::song::{DeleteControl, DeleteTarget, SongEntry, SongItem};
use songbook_lib::state::{DeleteAbort, DeleteOutcome, UiState, View};

pub struct Model {
    state: UiState,

    /// The search in flight, if any. Replacing it aborts the old one.
    search_request: Option<CmdHandle>,

    /// The lyrics lookup in flight, if any.
    lookup_request: Option<CmdHandle>,

    /// The delete in flight, if any.
    delete_request: Option<CmdHandle>,
}

pub enum Msg {
    /// The user entered something into the search field
    QueryChanged(String),

    /// The user pressed the Search button, or Enter in the search field
    Search,

    /// The search request finished.
    SearchFinished {
        heading: String,
        result: Result<String, ApiError>,
    },

    /// The user clicked a song in the list
    SelectSong(usize),

    /// The lyrics lookup finished.
    LookupFinished {
        heading: String,
        result: Result<String, ApiError>,
    },

    /// The user pressed the delete button of a song
    DeleteSong(usize),

    /// The delete request finished.
    DeleteFinished(Result<(), ApiError>),

    /// The user pressed the theme toggle
    ToggleTheme,

    /// The user pressed the back button
    Back,
}

pub fn init(_url: Url, _orders: &mut impl Orders<Msg>, songs: Vec<SongItem>) -> Model {
    let theme = dom::load_theme();
    dom::apply_theme(theme);

    Model {
        state: UiState::new(songs, theme),
        search_request: None,
        lookup_request: None,
        delete_request: None,
    }
}

pub fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::QueryChanged(query) => model.state.set_query(query),
        Msg::Search => {
            let Some(query) = model.state.search_query() else {
                return;
            };

            let text = query.text.to_string();
            let heading = query.to_string();

            model.state.begin_search();
            model.search_request = Some(orders.perform_cmd_with_handle(search(text, heading)));
        }
        Msg::SearchFinished { heading, result } => {
            model.search_request = None;
            model.state.finish_search(heading, result);
        }
        Msg::SelectSong(index) => {
            let Some(song) = model.state.songs.get(index) else {
                error!("No song at index", index as u32);
                return;
            };

            let entry = song.entry.clone();
            log!("Fetching lyrics for:", &entry.title, entry.request().artist);
            model.lookup_request = Some(orders.perform_cmd_with_handle(lookup(entry)));
        }
        Msg::LookupFinished { heading, result } => {
            model.lookup_request = None;
            if let Some(message) = model.state.finish_lookup(heading, result) {
                dom::alert(&message);
            }
        }
        Msg::DeleteSong(index) => match model.state.delete_target(index, dom::confirm) {
            Ok(target) => {
                log!("Deleting song:", &target.title, &target.artist);
                model.delete_request = Some(orders.perform_cmd_with_handle(delete(target)));
            }
            Err(DeleteAbort::Declined) => {}
            Err(DeleteAbort::NoTitle) => error!("No title found for delete button"),
            Err(DeleteAbort::NoSong) => error!("No song at index", index as u32),
        },
        Msg::DeleteFinished(result) => {
            model.delete_request = None;
            match DeleteOutcome::from(result) {
                DeleteOutcome::Reload => dom::reload(),
                DeleteOutcome::Alert(message) => dom::alert(&message),
            }
        }
        Msg::ToggleTheme => {
            let theme = model.state.toggle_theme();
            dom::store_theme(theme);
            dom::apply_theme(theme);
        }
        Msg::Back => model.state.show_songs(),
    }
}

fn display(shown: bool) -> &'static str {
    if shown {
        "block"
    } else {
        "none"
    }
}

pub fn view_header(state: &UiState) -> Node<Msg> {
    div![
        C!["search-bar"],
        input![
            C!["search-field"],
            attrs! {
                At::Id => "searchInput",
                At::Placeholder => "Search songs, or Title | Artist",
                At::Value => state.query,
            },
            input_ev(Ev::Input, Msg::QueryChanged),
            keyboard_ev(Ev::KeyPress, |event| {
                IF!(event.key() == "Enter" => Msg::Search)
            }),
        ],
        button![
            attrs! {At::Id => "searchButton"},
            "Search",
            ev(Ev::Click, |_| Msg::Search),
        ],
        button![
            attrs! {At::Id => "themeToggle"},
            if state.theme.is_dark() {
                "Light mode"
            } else {
                "Dark mode"
            },
            ev(Ev::Click, |_| Msg::ToggleTheme),
        ],
        state
            .notice
            .map(|notice| div![C!["search-status"], attrs! {At::Id => "searchStatus"}, notice]),
    ]
}

pub fn view_songs(state: &UiState) -> Node<Msg> {
    let song_card = |(index, song): (usize, &SongItem)| -> Node<Msg> {
        let SongEntry { title, artist } = &song.entry;

        div![
            C![SONG_ITEM_CLASS],
            IF![!state.is_visible(song) => style! {St::Display => "none"}],
            ev(Ev::Click, move |_| Msg::SelectSong(index)),
            div![C![SONG_TITLE_CLASS], title],
            artist
                .as_ref()
                .map(|artist| div![C![SONG_ARTIST_CLASS], artist]),
            delete_button(index, song.delete.as_ref()),
        ]
    };

    div![
        attrs! {At::Id => "songsListView"},
        style! {St::Display => display(state.view == View::Songs)},
        div![
            C!["songs-list"],
            attrs! {At::Id => "songsList"},
            state.songs.iter().enumerate().map(song_card),
        ],
    ]
}

/// Only songs the server rendered with a delete control get one.
fn delete_button(index: usize, control: Option<&DeleteControl>) -> Option<Node<Msg>> {
    let control = control?;

    Some(button![
        C![DELETE_BUTTON_CLASS],
        attrs! {
            At::from(DATA_TITLE) => control.title.as_deref().unwrap_or_default(),
            At::from(DATA_ARTIST) => control.artist.as_deref().unwrap_or_default(),
        },
        "Delete",
        ev(Ev::Click, move |event| {
            event.prevent_default();
            // don't let the song item open the lyrics
            event.stop_propagation();
            Msg::DeleteSong(index)
        }),
    ])
}

pub fn view_lyrics(state: &UiState) -> Node<Msg> {
    let shown = state.view == View::Lyrics;

    div![
        attrs! {At::Id => "lyricsView"},
        IF![!shown => C!["d-none"]],
        style! {St::Display => display(shown)},
        button![
            attrs! {At::Id => "backButton"},
            style! {St::Display => display(shown)},
            "Back",
            ev(Ev::Click, |event| {
                event.prevent_default();
                Msg::Back
            }),
        ],
        h2![attrs! {At::Id => "lyricsTitle"}, &state.lyrics.heading],
        pre![attrs! {At::Id => "lyricsContent"}, &state.lyrics.body],
    ]
}

pub fn view(model: &Model) -> Node<Msg> {
    let state = &model.state;

    div![
        C!["container"],
        IF![state.view == View::Lyrics => C!["lyrics-mode"]],
        view_header(state),
        view_songs(state),
        view_lyrics(state),
    ]
}

async fn search(text: String, heading: String) -> Msg {
    let result = match post_json(Endpoint::Search, &SearchRequest::new(&text)).await {
        Ok(reply) => reply.into_search(),
        Err(e) => {
            let err = ApiError::from(&e);
            error!("Error searching lyrics:", e);
            Err(err)
        }
    };

    Msg::SearchFinished { heading, result }
}

async fn lookup(entry: SongEntry) -> Msg {
    let result = match post_json(Endpoint::Lyrics, &entry.request()).await {
        Ok(reply) => {
            log!("Lyrics response:", reply.status);
            reply.into_lyrics()
        }
        Err(e) => {
            let err = ApiError::from(&e);
            error!("Error fetching lyrics:", e);
            Err(err)
        }
    };

    if let Err(e) = &result {
        error!("Lyrics error:", e.to_string());
    }

    Msg::LookupFinished {
        heading: entry.to_string(),
        result,
    }
}

async fn delete(target: DeleteTarget) -> Msg {
    let result = match post_json(Endpoint::Delete, &target.request()).await {
        Ok(reply) => {
            log!("Delete response:", reply.status);
            reply.into_deleted()
        }
        Err(e) => {
            let err = ApiError::from(&e);
            error!("Error deleting song:", e);
            Err(err)
        }
    };

    if let Err(e) = &result {
        error!("Delete error:", e.to_string());
    }

    Msg::DeleteFinished(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_button_only_for_rendered_controls() {
        assert!(delete_button(0, None).is_none());

        let control = DeleteControl::new(Some("Imagine".into()), None);
        assert!(delete_button(0, Some(&control)).is_some());

        // a control without a title is still shown, clicking it is a logged no-op
        let control = DeleteControl::new(None, None);
        assert!(delete_button(0, Some(&control)).is_some());
    }
}
