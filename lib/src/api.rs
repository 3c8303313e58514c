use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A backend endpoint consumed by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Free-text lyric search.
    Search,

    /// Lyrics for a known title and artist.
    Lyrics,

    /// Remove a song from the catalog.
    Delete,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Search => "/search",
            Endpoint::Lyrics => "/get_lyrics",
            Endpoint::Delete => "/delete",
        }
    }

    /// Join the endpoint path onto a base URL. An empty base means the page's own origin.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest<'a> {
    pub text: &'a str,
    pub is_search: bool,
}

impl<'a> SearchRequest<'a> {
    pub fn new(text: &'a str) -> Self {
        SearchRequest {
            text,
            is_search: true,
        }
    }
}

/// Body of both the lyrics lookup and the delete request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SongRequest<'a> {
    pub title: &'a str,
    pub artist: &'a str,
}

/// Any JSON body decodes. Fields are read the way the page's script reads them: by
/// truthiness, so `"success": null` is a failure and `"error": true` is an error.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct LyricsPayload {
    pub success: bool,
    pub lyrics: Option<String>,
    pub error: Option<String>,
}

impl From<Value> for LyricsPayload {
    fn from(body: Value) -> Self {
        LyricsPayload {
            success: body.get("success").is_some_and(is_truthy),
            lyrics: body.get("lyrics").and_then(as_text),
            error: body
                .get("error")
                .filter(|error| is_truthy(error))
                .and_then(as_text),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl LyricsPayload {
    /// The server's error message, if it sent a non-empty one.
    fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// A decoded response: the HTTP status and whatever JSON body came with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub payload: LyricsPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with an `error` field or `success: false`.
    #[error("request rejected: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),

    /// The request returned a non-2XX status code.
    #[error("server responded with {code}")]
    Status { code: u16, message: Option<String> },

    /// The request never completed, or the body was not json.
    #[error("{0}")]
    Transport(String),
}

/// The user action a request was made for. Decides the fallback wording of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Lookup,
    Delete,
}

impl Action {
    /// Shown when the server refused the request without saying why.
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Search => "Lyrics not found",
            Action::Lookup => "Failed to fetch lyrics",
            Action::Delete => "Failed to delete song",
        }
    }

    /// Shown when the request itself failed.
    pub fn error_message(self) -> &'static str {
        match self {
            Action::Search | Action::Lookup => "Error fetching lyrics",
            Action::Delete => "Error deleting song",
        }
    }
}

impl ApiError {
    /// The text of the alert raised for a failed lookup or delete.
    pub fn alert_message(&self, action: Action) -> String {
        let message = match self {
            ApiError::Rejected(message) | ApiError::Status { message, .. } => {
                message.as_deref().unwrap_or(action.failure_message())
            }
            ApiError::Transport(message) if !message.is_empty() => message.as_str(),
            ApiError::Transport(_) => action.error_message(),
        };
        message.to_string()
    }

    /// The fixed inline text shown for a failed search.
    pub fn notice(&self) -> &'static str {
        match self {
            ApiError::Rejected(_) | ApiError::Status { .. } => Action::Search.failure_message(),
            ApiError::Transport(_) => Action::Search.error_message(),
        }
    }
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Search results only look at the body: any `error` means nothing was found.
    pub fn into_search(self) -> Result<String, ApiError> {
        if let Some(error) = self.payload.error_message() {
            return Err(ApiError::Rejected(Some(error.to_string())));
        }

        Ok(self.payload.lyrics.unwrap_or_default())
    }

    pub fn into_lyrics(self) -> Result<String, ApiError> {
        self.check()?;
        Ok(self.payload.lyrics.unwrap_or_default())
    }

    pub fn into_deleted(self) -> Result<(), ApiError> {
        self.check()
    }

    fn check(&self) -> Result<(), ApiError> {
        let message = self.payload.error_message().map(str::to_string);

        if !self.is_ok() {
            return Err(ApiError::Status {
                code: self.status,
                message,
            });
        }

        if !self.payload.success {
            return Err(ApiError::Rejected(message));
        }

        Ok(())
    }
}
