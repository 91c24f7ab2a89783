//! The display snapshot handed to views.

use serde::{Deserialize, Serialize};

/// How many characters of the document the preview shows.
pub const PREVIEW_CHARS: usize = 300;

/// Where the tracked document stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackerStatus {
    /// No document has been tracked yet.
    NoFileTracked,
    /// The tracked document is open in some editor pane.
    FileOpenInEditor,
    /// The tracked document was closed; only its path is known.
    FileClosedButTracked,
    /// The tracked document is open but could not be read.
    ErrorReadingFile,
}

impl TrackerStatus {
    /// Status line shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            TrackerStatus::FileOpenInEditor => "Open in editor",
            TrackerStatus::FileClosedButTracked => "Not open in editor",
            TrackerStatus::NoFileTracked | TrackerStatus::ErrorReadingFile => "",
        }
    }
}

/// Everything a view needs to draw the word panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub state: TrackerStatus,
    pub file_name: String,
    pub file_path: String,
    /// Label for `state`.
    pub status: String,
    pub word_count: usize,
    pub preview_content: String,
    /// Empty unless the document could not be read.
    pub error: String,
    /// The most recent distinct selected words, oldest first.
    pub selected_words: Vec<String>,
    pub vocabulary_words: Vec<String>,
    /// Subscription level label, empty when signed out.
    pub user_level: String,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            state: TrackerStatus::NoFileTracked,
            file_name: String::new(),
            file_path: String::new(),
            status: String::new(),
            word_count: 0,
            preview_content: String::new(),
            error: String::new(),
            selected_words: Vec::new(),
            vocabulary_words: Vec::new(),
            user_level: String::new(),
        }
    }
}

/// Number of whitespace-separated words in `content`.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// First [`PREVIEW_CHARS`] characters of `content`, with `...` appended when
/// anything was cut off.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Last path segment of `path`, or the whole path if it has none.
pub fn file_name_of(path: &str) -> String {
    path.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(path)
        .to_string()
}
