//! Word panel workflow tests
//!
//! Drives a tracker through a reading session the way the host would:
//! opening documents, selecting text, adding vocabulary and switching files.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::rc::Rc;
use word_gpt_core::models::SubscriptionLevel;
use word_gpt_core::tracker::{
    DocumentSource, Snapshot, SnapshotView, TrackerEvent, TrackerStatus, VocabularyTracker,
};

/// Workspace whose open documents can change between events.
#[derive(Clone, Default)]
struct Workspace {
    docs: Rc<RefCell<HashMap<String, String>>>,
}

impl Workspace {
    fn open(&self, path: &str, content: &str) {
        self.docs
            .borrow_mut()
            .insert(path.to_string(), content.to_string());
    }

    fn close(&self, path: &str) {
        self.docs.borrow_mut().remove(path);
    }
}

impl DocumentSource for Workspace {
    fn active_file(&self) -> Option<String> {
        None
    }

    fn is_open(&self, path: &str) -> bool {
        self.docs.borrow().contains_key(path)
    }

    fn read(&self, path: &str) -> io::Result<String> {
        self.docs
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.to_string()))
    }
}

/// View that keeps only the last snapshot it was asked to draw.
struct LastSnapshot(Rc<RefCell<Option<Snapshot>>>);

impl SnapshotView for LastSnapshot {
    fn render(&mut self, snapshot: &Snapshot) {
        *self.0.borrow_mut() = Some(snapshot.clone());
    }
}

fn activate(path: &str) -> TrackerEvent {
    TrackerEvent::ActiveLeafChanged {
        active_file: Some(path.to_string()),
    }
}

#[test]
fn test_reading_session() {
    let workspace = Workspace::default();
    let rendered = Rc::new(RefCell::new(None));
    let mut tracker = VocabularyTracker::new();
    tracker.attach_view(Box::new(LastSnapshot(rendered.clone())));
    tracker.set_level(Some(SubscriptionLevel::Free));

    let article = "The quick brown fox jumps over the lazy dog. ".repeat(10);
    workspace.open("reading/fox.md", &article);
    tracker.handle_event(activate("reading/fox.md"), &workspace);

    tracker.handle_event(
        TrackerEvent::EditorChanged {
            selection: "the quick brown fox".to_string(),
        },
        &workspace,
    );
    tracker.handle_event(
        TrackerEvent::EditorChanged {
            selection: "the lazy dog".to_string(),
        },
        &workspace,
    );
    tracker.handle_event(
        TrackerEvent::AddToVocabulary {
            word: "lazy".to_string(),
        },
        &workspace,
    );

    let snapshot = rendered.borrow().clone().unwrap();
    assert_eq!(snapshot.state, TrackerStatus::FileOpenInEditor);
    assert_eq!(snapshot.file_name, "fox.md");
    assert_eq!(snapshot.word_count, 90);
    assert!(snapshot.preview_content.ends_with("..."));
    assert_eq!(snapshot.preview_content.chars().count(), 303);
    assert_eq!(
        snapshot.selected_words,
        vec!["the", "quick", "brown", "fox", "lazy", "dog"]
    );
    assert_eq!(snapshot.vocabulary_words, vec!["lazy"]);
    assert_eq!(snapshot.user_level, "免费版");

    workspace.close("reading/fox.md");
    tracker.handle_event(TrackerEvent::ActiveLeafChanged { active_file: None }, &workspace);

    let snapshot = rendered.borrow().clone().unwrap();
    assert_eq!(snapshot.state, TrackerStatus::FileClosedButTracked);
    assert_eq!(snapshot.file_path, "reading/fox.md");
    assert_eq!(snapshot.selected_words.len(), 6);
    assert_eq!(snapshot.vocabulary_words, vec!["lazy"]);
}

#[test]
fn test_switching_documents_keeps_word_sets() {
    let workspace = Workspace::default();
    workspace.open("a.md", "alpha");
    workspace.open("b.md", "beta gamma");

    let mut tracker = VocabularyTracker::new();
    tracker.handle_event(activate("a.md"), &workspace);
    tracker.handle_event(
        TrackerEvent::EditorChanged {
            selection: "alpha".to_string(),
        },
        &workspace,
    );

    let snapshot = tracker.handle_event(activate("b.md"), &workspace);
    assert_eq!(snapshot.file_name, "b.md");
    assert_eq!(snapshot.word_count, 2);
    assert_eq!(snapshot.selected_words, vec!["alpha"]);
}
