//! Fire-and-forget audio cues. Playback failures (missing asset, autoplay
//! restrictions) never reach the caller and never block a state change.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Interaction,
    Success,
    Failure,
}

pub trait Notifier {
    /// Generic click/interaction cue.
    fn interaction(&self);
    /// Correct answer.
    fn success(&self);
    /// Wrong answer.
    fn failure(&self);
}

#[cfg(target_arch = "wasm32")]
pub struct BrowserAudio;

#[cfg(target_arch = "wasm32")]
impl BrowserAudio {
    fn play(path: &str) {
        use wasm_bindgen_futures::{JsFuture, spawn_local};

        let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(path) else {
            return;
        };
        audio.set_volume(0.5);
        // Detach the play() promise so an autoplay rejection is consumed
        // instead of ending up as an unhandled rejection.
        if let Ok(promise) = audio.play() {
            spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Notifier for BrowserAudio {
    fn interaction(&self) {
        Self::play("/click.mp3");
    }

    fn success(&self) {
        Self::play("/success.mp3");
    }

    fn failure(&self) {
        Self::play("/error.mp3");
    }
}

/// Native builds have no audio backend; the cues only show up in the log.
#[cfg(not(target_arch = "wasm32"))]
pub struct QuietCues;

#[cfg(not(target_arch = "wasm32"))]
impl Notifier for QuietCues {
    fn interaction(&self) {
        log::debug!("cue: interaction");
    }

    fn success(&self) {
        log::debug!("cue: success");
    }

    fn failure(&self) {
        log::debug!("cue: failure");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_notifier() -> Box<dyn Notifier> {
    Box::new(BrowserAudio)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_notifier() -> Box<dyn Notifier> {
    Box::new(QuietCues)
}

/// Records every cue instead of playing it.
#[cfg(test)]
pub struct RecordingNotifier {
    cues: std::rc::Rc<std::cell::RefCell<Vec<Cue>>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Vec<Cue>>>) {
        let cues = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (Self { cues: cues.clone() }, cues)
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn interaction(&self) {
        self.cues.borrow_mut().push(Cue::Interaction);
    }

    fn success(&self) {
        self.cues.borrow_mut().push(Cue::Success);
    }

    fn failure(&self) {
        self.cues.borrow_mut().push(Cue::Failure);
    }
}
