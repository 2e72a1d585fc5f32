use super::*;
use crate::speech::{TEST_SENTENCE, compose_utterance};

impl QuestApp {
    pub fn toggle_hint(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.disclosure = session.disclosure.toggled_hint(index);
        }
    }

    pub fn toggle_code(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.disclosure = session.disclosure.toggled_code();
        }
    }

    /// Lee en voz alta el enunciado y, si existe, el enfoque de la solución.
    pub fn read_aloud(&mut self) {
        let Some(question) = self.current_question() else {
            return;
        };
        let text = compose_utterance(question, self.current_solution());
        log::debug!("reading question {} aloud", question.id);
        self.speech.speak(&text, &self.config.speech);
        self.message = "🔊 Reading aloud…".into();
    }

    pub fn speak_test_sentence(&mut self) {
        self.speech.speak(TEST_SENTENCE, &self.config.speech);
        self.message = "🔊 Speaking test sentence…".into();
    }

    /// Alimenta el reconocedor con el delta de zoom de este frame.
    pub fn handle_zoom_delta(&mut self, zoom_delta: Option<f32>) -> f32 {
        let Some(session) = self.session.as_mut() else {
            return 1.0;
        };
        for event in session.pinch.observe(zoom_delta) {
            session.zoom.apply(event);
        }
        session.zoom.displayed()
    }

    pub fn reset_zoom(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.zoom.reset();
            session.pinch = PinchRecognizer::default();
        }
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.prefs.dark_mode = dark;
    }
}
