use super::*;
use crate::storage::save_answers;

impl LessonApp {
    /// Opens the confirmation gate. The interaction cue fires here, before
    /// the gate, so it plays even when the user then cancels.
    pub fn request_reset(&mut self) {
        self.notifier.interaction();
        self.confirm_reset = true;
    }

    /// Clears every answer and persists the empty record immediately.
    pub fn reset_answers(&mut self) {
        self.answers.clear();
        save_answers(self.store.as_mut(), &self.answers);
        self.confirm_reset = false;
    }

    pub fn decline_reset(&mut self) {
        self.confirm_reset = false;
    }

    pub fn confirm_reset_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("Bắt đầu lại bài kiểm tra?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Toàn bộ câu trả lời sẽ bị xóa. Tiếp tục?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Có, làm lại").clicked() {
                        self.reset_answers();
                    }
                    if ui.button("Không").clicked() {
                        self.decline_reset();
                    }
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, RecordingNotifier};
    use crate::storage::{SharedStore, load_answers};

    fn answered_app() -> (
        LessonApp,
        SharedStore,
        std::rc::Rc<std::cell::RefCell<Vec<Cue>>>,
    ) {
        let store = SharedStore::default();
        let (notifier, cues) = RecordingNotifier::new();
        let mut app = LessonApp::with_parts(Box::new(store.clone()), Box::new(notifier));
        app.submit_answer(1, 1);
        app.submit_answer(2, 0);
        cues.borrow_mut().clear();
        (app, store, cues)
    }

    #[test]
    fn confirmed_reset_clears_and_persists() {
        let (mut app, store, _cues) = answered_app();

        app.request_reset();
        assert!(app.confirm_reset);
        app.reset_answers();

        assert!(app.answers.is_empty());
        assert_eq!(app.score(), 0);
        assert!(!app.confirm_reset);
        assert!(load_answers(&store).is_empty());
    }

    #[test]
    fn declined_reset_changes_nothing() {
        let (mut app, store, _cues) = answered_app();
        let before = app.answers.clone();

        app.request_reset();
        app.decline_reset();

        assert_eq!(app.answers, before);
        assert!(!app.confirm_reset);
        assert_eq!(load_answers(&store), before);
    }

    #[test]
    fn interaction_cue_fires_before_the_gate() {
        let (mut app, _store, cues) = answered_app();

        app.request_reset();
        // Cue already played, even though nothing is confirmed yet.
        assert_eq!(*cues.borrow(), vec![Cue::Interaction]);

        app.decline_reset();
        assert_eq!(*cues.borrow(), vec![Cue::Interaction]);
    }
}
