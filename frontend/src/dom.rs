//! Everything that talks to the browser outside of seed's virtual dom.

use gloo_console::error;
use seed::browser::util::{document, window};
use seed::browser::web_storage::{LocalStorage, WebStorage};
use seed::prelude::web_sys::Element;
use songbook_lib::song::{DeleteControl, SongEntry, SongItem};
use songbook_lib::theme::{Theme, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use wasm_bindgen::JsCast;

pub const SONG_ITEM_CLASS: &str = "song-item";
pub const SONG_TITLE_CLASS: &str = "song-title";
pub const SONG_ARTIST_CLASS: &str = "song-artist";
pub const DELETE_BUTTON_CLASS: &str = "delete-btn";
pub const DATA_TITLE: &str = "data-title";
pub const DATA_ARTIST: &str = "data-artist";

/// Read the song list the server rendered into the page.
///
/// Must run before the app is mounted, since mounting replaces the markup.
pub fn read_song_items() -> Vec<SongItem> {
    let nodes = match document().query_selector_all(&format!(".{SONG_ITEM_CLASS}")) {
        Ok(nodes) => nodes,
        Err(e) => {
            error!("Failed to query rendered songs:", e);
            return vec![];
        }
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| read_song_item(&element))
        .collect()
}

fn read_song_item(element: &Element) -> Option<SongItem> {
    let Some(title) = child_text(element, SONG_TITLE_CLASS) else {
        error!("Song item without a title:", element.outer_html());
        return None;
    };
    let artist = child_text(element, SONG_ARTIST_CLASS);

    let delete = child(element, DELETE_BUTTON_CLASS).map(|button| {
        DeleteControl::new(
            button.get_attribute(DATA_TITLE),
            button.get_attribute(DATA_ARTIST),
        )
    });

    let entry = SongEntry::from_rendered(&title, artist.as_deref());
    Some(SongItem::new(entry, delete))
}

fn child(element: &Element, class: &str) -> Option<Element> {
    element.query_selector(&format!(".{class}")).ok().flatten()
}

fn child_text(element: &Element, class: &str) -> Option<String> {
    child(element, class)?.text_content()
}

/// Read the persisted theme. Anything unreadable counts as light.
pub fn load_theme() -> Theme {
    let dark: Result<bool, _> = LocalStorage::get(THEME_STORAGE_KEY);
    dark.map(Theme::from_dark_flag).unwrap_or_default()
}

pub fn store_theme(theme: Theme) {
    if let Err(e) = LocalStorage::insert(THEME_STORAGE_KEY, &theme.is_dark()) {
        error!("Failed to store theme:", format!("{e:?}"));
    }
}

/// Set the theme attribute on `<body>`.
pub fn apply_theme(theme: Theme) {
    let Some(body) = document().body() else {
        error!("Document has no body");
        return;
    };

    if let Err(e) = body.set_attribute(THEME_ATTRIBUTE, theme.attribute()) {
        error!("Failed to set theme:", e);
    }
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        error!("Failed to show alert:", e);
    }
}

/// Ask the user a yes/no question. Counts as "no" if the dialog can't be shown.
pub fn confirm(message: &str) -> bool {
    match window().confirm_with_message(message) {
        Ok(answer) => answer,
        Err(e) => {
            error!("Failed to show confirmation:", e);
            false
        }
    }
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        error!("Failed to reload page:", e);
    }
}
