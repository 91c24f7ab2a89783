//! Vocabulary and selection tracking for the word panel.
//!
//! The tracker follows one document (the last markdown file that was active)
//! and accumulates two word sets:
//!
//! - **selected words**: every distinct word the user has selected in any
//!   editor, in first-seen order. Only the last [`RECENT_LIMIT`] are shown.
//! - **vocabulary words**: words explicitly added with "add to vocabulary".
//!   This set is local only and is never synced to the service's article
//!   word lists.
//!
//! The host feeds editor events in through [`VocabularyTracker::handle_event`]
//! and gets a [`Snapshot`] back. Registered [`SnapshotView`]s are notified
//! with the event and then the new snapshot. Document access goes through a
//! [`DocumentSource`] so the tracker never touches the file system itself.

pub mod selection;
pub mod snapshot;

pub use selection::{tokenize, WordSet, RECENT_LIMIT};
pub use snapshot::{Snapshot, TrackerStatus};

use crate::models::user::SubscriptionLevel;
use std::io;

/// Read access to the documents the host has open.
pub trait DocumentSource {
    /// Path of the markdown document in the active pane, if any.
    fn active_file(&self) -> Option<String>;

    /// Whether `path` is open in any editor pane.
    fn is_open(&self, path: &str) -> bool;

    /// Reads the full content of the document at `path`.
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Something that displays tracker snapshots.
pub trait SnapshotView {
    /// Draws `snapshot`. Called after every event that changed it.
    fn render(&mut self, snapshot: &Snapshot);

    /// Observes the raw event before the snapshot is rendered.
    fn on_event(&mut self, _event: &TrackerEvent) {}
}

/// Editor events the tracker reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    /// The active pane changed. `active_file` is the markdown document now
    /// active, or `None` when the pane holds something else.
    ActiveLeafChanged { active_file: Option<String> },

    /// The editor content or selection changed.
    EditorChanged { selection: String },

    /// The user chose "add to vocabulary" on a selection.
    AddToVocabulary { word: String },
}

/// Word panel state for the tracked document.
pub struct VocabularyTracker {
    tracked_path: Option<String>,
    selected: WordSet,
    vocabulary: WordSet,
    level: Option<SubscriptionLevel>,
    snapshot: Snapshot,
    views: Vec<Box<dyn SnapshotView>>,
}

impl Default for VocabularyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyTracker {
    pub fn new() -> Self {
        Self {
            tracked_path: None,
            selected: WordSet::new(),
            vocabulary: WordSet::new(),
            level: None,
            snapshot: Snapshot::default(),
            views: Vec::new(),
        }
    }

    /// Registers a view; it immediately receives the current snapshot.
    pub fn attach_view(&mut self, mut view: Box<dyn SnapshotView>) {
        view.render(&self.snapshot);
        self.views.push(view);
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Path of the tracked document.
    pub fn tracked_path(&self) -> Option<&str> {
        self.tracked_path.as_deref()
    }

    /// Every selected word, including those no longer surfaced.
    pub fn selected_words(&self) -> &WordSet {
        &self.selected
    }

    /// The local vocabulary.
    pub fn vocabulary(&self) -> &WordSet {
        &self.vocabulary
    }

    /// Updates the subscription level shown in the snapshot.
    pub fn set_level(&mut self, level: Option<SubscriptionLevel>) {
        self.level = level;
        self.refresh_words();
        self.render_views();
    }

    /// Applies one editor event and returns the resulting snapshot.
    pub fn handle_event(&mut self, event: TrackerEvent, source: &dyn DocumentSource) -> &Snapshot {
        let changed = match &event {
            TrackerEvent::ActiveLeafChanged { active_file } => {
                if let Some(path) = active_file {
                    self.tracked_path = Some(path.clone());
                }
                self.refresh_file(source);
                true
            }
            TrackerEvent::EditorChanged { selection } => {
                if selection.trim().is_empty() {
                    false
                } else {
                    let added = self.selected.extend_from_selection(selection);
                    log::debug!("selection added {} new word(s)", added);
                    self.refresh_words();
                    true
                }
            }
            TrackerEvent::AddToVocabulary { word } => {
                let word = word.trim();
                if word.is_empty() {
                    false
                } else {
                    if self.vocabulary.insert(word) {
                        log::info!("added \"{}\" to vocabulary", word);
                    }
                    self.refresh_words();
                    true
                }
            }
        };

        if changed {
            for view in &mut self.views {
                view.on_event(&event);
            }
            self.render_views();
        }

        &self.snapshot
    }

    /// Recomputes the whole snapshot from the document source.
    ///
    /// Used when the panel first opens; afterwards events drive updates.
    pub fn refresh(&mut self, source: &dyn DocumentSource) -> &Snapshot {
        self.refresh_file(source);
        self.render_views();
        &self.snapshot
    }

    fn refresh_file(&mut self, source: &dyn DocumentSource) {
        if self.tracked_path.is_none() {
            self.tracked_path = source.active_file();
        }

        let mut snapshot = Snapshot::default();
        if let Some(path) = self.tracked_path.as_deref() {
            if source.is_open(path) {
                match source.read(path) {
                    Ok(content) => {
                        snapshot.state = TrackerStatus::FileOpenInEditor;
                        snapshot.file_name = snapshot::file_name_of(path);
                        snapshot.file_path = path.to_string();
                        snapshot.word_count = snapshot::word_count(&content);
                        snapshot.preview_content = snapshot::preview(&content);
                    }
                    Err(e) => {
                        log::warn!("failed to read {}: {}", path, e);
                        snapshot.state = TrackerStatus::ErrorReadingFile;
                        snapshot.error = format!("Error reading file: {}", path);
                    }
                }
            } else {
                snapshot.state = TrackerStatus::FileClosedButTracked;
                snapshot.file_name = snapshot::file_name_of(path);
                snapshot.file_path = path.to_string();
            }
        }
        snapshot.status = snapshot.state.label().to_string();

        self.snapshot = snapshot;
        self.refresh_words();
    }

    fn refresh_words(&mut self) {
        self.snapshot.selected_words = self.selected.recent(RECENT_LIMIT);
        self.snapshot.vocabulary_words = self.vocabulary.to_vec();
        self.snapshot.user_level = SubscriptionLevel::label_for(self.level).to_string();
    }

    fn render_views(&mut self) {
        for view in &mut self.views {
            view.render(&self.snapshot);
        }
    }
}
