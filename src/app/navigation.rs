use super::*;

impl LessonApp {
    /// Dock click: play the click cue and ask the page to scroll the
    /// section into view on the next frame.
    pub fn go_to(&mut self, section: Section) {
        self.notifier.interaction();
        self.scroll_target = Some(section);
        self.active_section = section;
    }

    /// Scroll-spy: the section whose centre sits closest to the viewport
    /// centre becomes active. Only eventually consistent with the actual
    /// scroll position, which is all the dock highlight needs.
    pub fn update_active_section(&mut self, centers: &[(Section, f32)], viewport_center: f32) {
        // A dock click set both the highlight and the scroll request this
        // frame; consume the request and let the scroll land before the
        // spy takes over again.
        if self.scroll_target.take().is_some() {
            return;
        }
        if let Some((section, _)) = centers.iter().min_by(|a, b| {
            (a.1 - viewport_center)
                .abs()
                .total_cmp(&(b.1 - viewport_center).abs())
        }) {
            self.active_section = *section;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, RecordingNotifier};
    use crate::storage::MemoryStore;

    fn app() -> (LessonApp, std::rc::Rc<std::cell::RefCell<Vec<Cue>>>) {
        let (notifier, cues) = RecordingNotifier::new();
        let app = LessonApp::with_parts(Box::new(MemoryStore::new()), Box::new(notifier));
        (app, cues)
    }

    #[test]
    fn go_to_plays_a_click_and_queues_the_scroll() {
        let (mut app, cues) = app();
        app.go_to(Section::Quiz);
        assert_eq!(app.scroll_target, Some(Section::Quiz));
        assert_eq!(app.active_section, Section::Quiz);
        assert_eq!(*cues.borrow(), vec![Cue::Interaction]);
    }

    #[test]
    fn nearest_section_wins_the_highlight() {
        let (mut app, _cues) = app();
        let centers = [
            (Section::Theory, 100.0),
            (Section::Types, 420.0),
            (Section::Quiz, 900.0),
        ];
        app.update_active_section(&centers, 450.0);
        assert_eq!(app.active_section, Section::Types);
    }

    #[test]
    fn pending_scroll_keeps_the_clicked_highlight() {
        let (mut app, _cues) = app();
        app.go_to(Section::Practice);

        // The frame of the click: the spy consumes the scroll request and
        // leaves the clicked highlight alone.
        app.update_active_section(&[(Section::Theory, 0.0)], 0.0);
        assert_eq!(app.active_section, Section::Practice);
        assert_eq!(app.scroll_target, None);

        // Later frames track the scroll position again.
        app.update_active_section(&[(Section::Theory, 0.0)], 0.0);
        assert_eq!(app.active_section, Section::Theory);
    }
}
