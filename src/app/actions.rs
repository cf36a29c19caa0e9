use super::*;
use crate::storage::save_answers;

impl LessonApp {
    /// Records an answer for a question. The first answer wins: once a
    /// question is answered, later calls are silently ignored so the choice
    /// cannot be changed. A successful first answer fires the matching cue
    /// and writes the full record through the store.
    pub fn submit_answer(&mut self, question_id: u32, option_idx: usize) {
        let Some(item) = self.quiz.iter().find(|q| q.id == question_id) else {
            log::debug!("submit_answer: unknown question id {question_id}");
            return;
        };
        if option_idx >= item.options.len() {
            log::debug!("submit_answer: option {option_idx} out of range for question {question_id}");
            return;
        }

        let correct = option_idx == item.correct;
        if !self.answers.record(question_id, option_idx) {
            return;
        }

        if correct {
            self.notifier.success();
        } else {
            self.notifier.failure();
        }
        save_answers(self.store.as_mut(), &self.answers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, RecordingNotifier};
    use crate::storage::{ANSWERS_KEY, SharedStore, load_answers};

    fn app_with_probes() -> (
        LessonApp,
        SharedStore,
        std::rc::Rc<std::cell::RefCell<Vec<Cue>>>,
    ) {
        let store = SharedStore::default();
        let (notifier, cues) = RecordingNotifier::new();
        let app = LessonApp::with_parts(Box::new(store.clone()), Box::new(notifier));
        (app, store, cues)
    }

    #[test]
    fn first_answer_is_final() {
        let (mut app, _store, _cues) = app_with_probes();

        app.submit_answer(1, 1);
        assert_eq!(app.answers.selected(1), Some(1));
        assert_eq!(app.score(), 1);

        // Later submissions for the same question are ignored.
        app.submit_answer(1, 0);
        assert_eq!(app.answers.selected(1), Some(1));
        assert_eq!(app.score(), 1);
    }

    #[test]
    fn cues_classify_correct_and_wrong_answers() {
        let (mut app, _store, cues) = app_with_probes();

        app.submit_answer(1, 1); // correct
        app.submit_answer(2, 0); // wrong
        app.submit_answer(2, 1); // ignored, no cue
        assert_eq!(*cues.borrow(), vec![Cue::Success, Cue::Failure]);
    }

    #[test]
    fn every_submission_is_persisted() {
        let (mut app, store, _cues) = app_with_probes();

        app.submit_answer(1, 1);
        app.submit_answer(2, 3);

        let stored = load_answers(&store);
        assert_eq!(stored, app.answers);
    }

    #[test]
    fn repeated_submission_does_not_rewrite_the_store() {
        let (mut app, store, _cues) = app_with_probes();

        app.submit_answer(1, 1);
        let before = store.get(ANSWERS_KEY);
        app.submit_answer(1, 2);
        assert_eq!(store.get(ANSWERS_KEY), before);
    }

    #[test]
    fn invalid_ids_and_options_are_ignored() {
        let (mut app, store, cues) = app_with_probes();

        app.submit_answer(999, 0);
        app.submit_answer(1, 4);
        assert!(app.answers.is_empty());
        assert!(cues.borrow().is_empty());
        assert_eq!(store.get(ANSWERS_KEY), None);
    }

    #[test]
    fn all_correct_scores_full_marks() {
        let (mut app, _store, _cues) = app_with_probes();

        let answers: Vec<(u32, usize)> = app.quiz.iter().map(|q| (q.id, q.correct)).collect();
        for (id, correct) in answers {
            app.submit_answer(id, correct);
        }
        assert_eq!(app.score(), 10);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let (mut app, _store, _cues) = app_with_probes();

        let answers: Vec<(u32, usize)> = app
            .quiz
            .iter()
            .map(|q| (q.id, (q.correct + 1) % 4))
            .collect();
        for (id, wrong) in answers {
            app.submit_answer(id, wrong);
        }
        assert_eq!(app.score(), 0);
        assert_eq!(app.answered_count(), 10);
    }

    #[test]
    fn answers_survive_a_restart() {
        let store = SharedStore::default();
        {
            let (notifier, _cues) = RecordingNotifier::new();
            let mut app = LessonApp::with_parts(Box::new(store.clone()), Box::new(notifier));
            app.submit_answer(1, 1);
            app.submit_answer(6, 0);
        }

        let (notifier, _cues) = RecordingNotifier::new();
        let app = LessonApp::with_parts(Box::new(store), Box::new(notifier));
        assert_eq!(app.answers.selected(1), Some(1));
        assert_eq!(app.answers.selected(6), Some(0));
        assert_eq!(app.score(), 1);
    }
}
