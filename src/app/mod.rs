use crate::audio::{Notifier, default_notifier};
use crate::data::{read_exercises_embedded, read_quiz_embedded};
use crate::model::{AnswerRecord, ExerciseItem, QuizItem, Section};
use crate::storage::{KeyValueStore, default_store, load_answers};
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;

pub struct LessonApp {
    pub quiz: Vec<QuizItem>,
    pub exercises: Vec<ExerciseItem>,
    /// Owned exclusively here; views only read it.
    pub answers: AnswerRecord,

    // Presentation-only state.
    pub active_section: Section,
    pub scroll_target: Option<Section>,
    pub demo_input: String,
    pub confirm_reset: bool,
    /// Cards that have entered the viewport at least once (entrance
    /// animation bookkeeping).
    pub revealed: HashSet<egui::Id>,

    store: Box<dyn KeyValueStore>,
    notifier: Box<dyn Notifier>,
}

impl LessonApp {
    pub fn new() -> Self {
        Self::with_parts(default_store(), default_notifier())
    }

    /// Entrypoint with injected capabilities; the answer record is seeded
    /// from whatever the store holds.
    pub fn with_parts(store: Box<dyn KeyValueStore>, notifier: Box<dyn Notifier>) -> Self {
        let answers = load_answers(store.as_ref());
        Self {
            quiz: read_quiz_embedded(),
            exercises: read_exercises_embedded(),
            answers,
            active_section: Section::Theory,
            scroll_target: None,
            demo_input: String::new(),
            confirm_reset: false,
            revealed: HashSet::new(),
            store,
            notifier,
        }
    }
}

impl Default for LessonApp {
    fn default() -> Self {
        Self::new()
    }
}
